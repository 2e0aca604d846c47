use crate::action::*;
use crate::extract;
use crate::hygiene::Hygiene;
use crate::oracle::Oracle;
use crate::prompts::Registry;
use crate::role::Role;
use anyhow::Context;
use futures::FutureExt;
use futures::future::BoxFuture;

/// Depth-bounded, role-alternating enumeration of candidate futures.
///
/// Every visited node costs exactly one blocking oracle call, and every
/// surviving proposal is expanded. There is no mid-tree scoring: the only
/// pruning is the hygiene top-K cut, which follows prompt order. Visited
/// nodes therefore grow as (K^(d+1) - 1) / (K - 1), and `branching` and
/// `depth` are the two knobs that bound oracle spend.
///
/// Siblings are expanded one after another, depth first.
pub struct Lookahead<'a> {
    oracle: &'a dyn Oracle,
    registry: &'a Registry,
    game: &'a str,
    state: &'a str,
    depth: usize,
    branching: usize,
}

impl<'a> Lookahead<'a> {
    pub fn new(oracle: &'a dyn Oracle, registry: &'a Registry, game: &'a str, state: &'a str) -> Self {
        Self {
            oracle,
            registry,
            game,
            state,
            depth: crate::MAX_DEPTH,
            branching: crate::BRANCHING,
        }
    }
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
    pub fn branching(mut self, branching: usize) -> Self {
        self.branching = branching;
        self
    }

    /// Enumerate every future from an empty history with `root` to move.
    pub async fn search(&self, root: Role) -> anyhow::Result<Frontier> {
        let frontier = self.expand(Trajectory::default(), root, 0).await?;
        log::info!(
            "lookahead for {} closed {} leaves (depth {}, branching {})",
            root,
            frontier.len(),
            self.depth,
            self.branching
        );
        log::debug!("leaf trajectories:\n{}", frontier);
        Ok(frontier)
    }

    /// Expand the subtree below `prior` with `role` to move at `depth`.
    ///
    /// At the depth limit the accumulated history closes as a leaf, or as
    /// nothing at all when it is empty.
    pub fn expand(&self, prior: Trajectory, role: Role, depth: usize) -> BoxFuture<'_, anyhow::Result<Frontier>> {
        async move {
            if depth >= self.depth {
                log::debug!("closed leaf at depth {}: {}", depth, prior);
                return Ok(match prior.is_empty() {
                    true => Frontier::default(),
                    false => Frontier::single(prior),
                });
            }
            let mut frontier = Frontier::default();
            for action in self.propose(&prior, role, depth).await? {
                let path = prior.then(action);
                let below = self.expand(path.clone(), role.flip(), depth + 1).await?;
                match below.is_empty() {
                    true => frontier.extend(Frontier::single(path)),
                    false => frontier.extend(below),
                }
            }
            Ok(frontier)
        }
        .boxed()
    }

    /// One oracle call, parsed and cleaned into at least one move.
    async fn propose(&self, prior: &Trajectory, role: Role, depth: usize) -> anyhow::Result<Vec<Action>> {
        let history = prior.history();
        let last = prior
            .last()
            .map(Action::tagged)
            .unwrap_or_else(|| crate::NONE.to_string());
        let prompt = self.registry.proposal(self.game, role).render(&[
            ("game_state", self.state),
            ("prior_actions", history.as_str()),
            ("last_move", last.as_str()),
        ]);
        let response = self
            .oracle
            .ask(crate::PLAYER_DIRECTIVE, prompt)
            .await
            .with_context(|| format!("propose {} moves at depth {}", role, depth))?;
        let raw = extract::proposals(&response, role);
        let kept = Hygiene::new(role, self.branching).apply(raw.clone());
        log::debug!(
            "depth {} {} proposed {} moves, kept {}: {}",
            depth,
            role,
            raw.len(),
            kept.len(),
            kept.iter()
                .map(|k| crate::truncate(k, crate::LOG_STEP_CHARS))
                .collect::<Vec<_>>()
                .join(" | ")
        );
        Ok(kept.iter().map(|k| Action::proposal(role, k)).collect())
    }
}
