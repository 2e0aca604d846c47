use crate::action::*;
use crate::config::*;
use crate::evaluate::*;
use crate::oracle::Oracle;
use crate::prompts::Registry;
use crate::search::Lookahead;
use std::sync::Arc;

/// The frontier that was searched and the move picked from it.
#[derive(Debug, Clone)]
pub struct Decision {
    pub frontier: Frontier,
    pub choice: Choice,
}

/// Plays one side of a game: search the futures of a position, then pick
/// the first move of the preferred one.
///
/// Judged pairs are remembered for the lifetime of the agent, so repeated
/// or overlapping positions over a game do not pay for the same judgment
/// twice. Decisions should not overlap in time when sharing that memory.
pub struct Agent {
    oracle: Arc<dyn Oracle>,
    registry: Registry,
    config: Config,
    cache: PairCache,
}

impl Agent {
    pub fn new(oracle: Arc<dyn Oracle>, registry: Registry, config: Config) -> Self {
        Self {
            oracle,
            registry,
            config,
            cache: PairCache::default(),
        }
    }
    pub fn pairs(&self) -> &PairCache {
        &self.cache
    }

    fn evaluator(&self) -> Box<dyn Evaluator> {
        match self.config.strategy {
            Strategy::Tournament => Box::new(
                Tournament::new(self.registry.pairwise().clone())
                    .rounds(self.config.rounds)
                    .workers(self.config.workers)
                    .cache(self.cache.clone()),
            ),
            Strategy::Multiway => Box::new(Multiway::new(self.registry.multiway().clone())),
        }
    }

    pub async fn decide(&self, state: &str) -> anyhow::Result<Decision> {
        log::info!(
            "deciding for {} in {} (depth {}, branching {}, {:?})",
            self.config.root,
            self.config.game,
            self.config.depth,
            self.config.branching,
            self.config.strategy
        );
        match self.config.proposal_budget() {
            Some(calls) => log::debug!("search will make at most {} proposal calls", calls),
            None => log::debug!("search has no proposal call bound"),
        }
        let frontier = Lookahead::new(
            self.oracle.as_ref(),
            &self.registry,
            &self.config.game,
            state,
        )
        .depth(self.config.depth)
        .branching(self.config.branching)
        .search(self.config.root)
        .await?;
        let choice = self
            .evaluator()
            .choose(self.oracle.as_ref(), state, frontier.trajectories())
            .await?;
        Ok(Decision { frontier, choice })
    }
}
