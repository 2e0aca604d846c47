use super::*;
use crate::action::Trajectory;
use crate::extract::Preference;
use crate::oracle::Oracle;
use crate::prompts::Template;
use anyhow::Context;
use futures::StreamExt;

/// Round-robin pairwise preference voting over candidate futures.
///
/// Each unordered pair is judged `rounds` times. A round asks the oracle
/// twice, once with each trajectory in the first slot, and only counts as a
/// win when both answers agree; position bias therefore cancels into a tie.
/// Pairs are judged concurrently, at most `workers` at a time, while the two
/// calls of a round run back to back. Results are folded into the ballot and
/// the cache by the single loop that drains the pair stream.
///
/// Overlapping tournaments may share a cache safely, but a pair that is in
/// flight in both will be judged twice.
pub struct Tournament {
    template: Template,
    rounds: usize,
    workers: usize,
    cache: PairCache,
}

impl Tournament {
    pub fn new(template: Template) -> Self {
        Self {
            template,
            rounds: crate::ROUNDS_PER_PAIR,
            workers: crate::TOURNAMENT_WORKERS,
            cache: PairCache::default(),
        }
    }
    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }
    /// Judge against an existing cache, typically one kept across the moves
    /// of a game.
    pub fn cache(mut self, cache: PairCache) -> Self {
        self.cache = cache;
        self
    }
    pub fn pairs(&self) -> &PairCache {
        &self.cache
    }

    /// Match points for every candidate. Candidates are taken as given.
    pub async fn ballot(
        &self,
        oracle: &dyn Oracle,
        base: &str,
        candidates: &[Trajectory],
    ) -> anyhow::Result<Ballot> {
        let n = candidates.len();
        let mut ballot = Ballot::new(n);
        let mut judged = futures::stream::iter((0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j))))
            .map(|(i, j)| async move {
                self.judge(oracle, base, &candidates[i], &candidates[j])
                    .await
                    .map(|(score, fresh)| (i, j, score, fresh))
            })
            .buffer_unordered(self.workers);
        while let Some(result) = judged.next().await {
            let (i, j, score, fresh) = result?;
            if fresh {
                self.cache.put(&candidates[i], &candidates[j], score);
            }
            ballot.award(i, j, &score);
        }
        log::debug!("tournament points: {:?}", ballot.points());
        Ok(ballot)
    }

    /// Score one pair, from the cache when it has been judged before.
    /// The flag reports whether the oracle was consulted.
    async fn judge(
        &self,
        oracle: &dyn Oracle,
        base: &str,
        a: &Trajectory,
        b: &Trajectory,
    ) -> anyhow::Result<(PairScore, bool)> {
        if let Some(score) = self.cache.get(a, b) {
            log::debug!("reusing judged pair {} vs {}", a, b);
            return Ok((score, false));
        }
        let first = a.render();
        let second = b.disguised();
        let forward = self.template.render(&[
            ("base_state", base),
            ("future_1", first.as_str()),
            ("future_2", second.as_str()),
        ]);
        let mirrored = self.template.render(&[
            ("base_state", base),
            ("future_1", second.as_str()),
            ("future_2", first.as_str()),
        ]);
        let mut score = PairScore::default();
        for round in 0..self.rounds {
            let ahead = oracle
                .ask(crate::JUDGE_DIRECTIVE, forward.clone())
                .await
                .context("judge forward orientation")?;
            let behind = oracle
                .ask(crate::JUDGE_DIRECTIVE, mirrored.clone())
                .await
                .context("judge mirrored orientation")?;
            let leading = Preference::parse(&ahead);
            let trailing = Preference::parse(&behind);
            if leading.is_none() || trailing.is_none() {
                log::warn!("round {} has no usable preference, scoring a tie", round);
            }
            let verdict = Verdict::from((leading, trailing));
            if verdict == Verdict::Tie {
                log::debug!(
                    "round {} tied: forward {:?}, mirrored {:?}",
                    round,
                    crate::truncate(&ahead, crate::LOG_STEP_CHARS),
                    crate::truncate(&behind, crate::LOG_STEP_CHARS)
                );
            }
            score.record(verdict);
        }
        Ok((score, true))
    }
}

#[async_trait::async_trait]
impl Evaluator for Tournament {
    async fn choose(
        &self,
        oracle: &dyn Oracle,
        base: &str,
        candidates: &[Trajectory],
    ) -> anyhow::Result<Choice> {
        let candidates = playable(candidates);
        if candidates.is_empty() {
            log::warn!("no candidate futures to judge, passing");
            return Ok(Choice::pass());
        }
        let ballot = self.ballot(oracle, base, &candidates).await?;
        let winner = ballot.select(&mut rand::rng()).unwrap_or_default();
        let choice = Choice::of(&candidates[winner]);
        log::info!(
            "tournament of {} picked #{} with {:.1} points: {}",
            candidates.len(),
            winner + 1,
            ballot.points()[winner],
            choice.action
        );
        Ok(choice)
    }
}
