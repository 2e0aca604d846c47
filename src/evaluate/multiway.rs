use super::*;
use crate::action::Trajectory;
use crate::extract;
use crate::oracle::Oracle;
use crate::prompts::Template;
use anyhow::Context;

/// Single-call selection: every candidate is shown at once and the oracle
/// names one by its 1-based index.
///
/// Far cheaper than a tournament, and more exposed to position bias. A
/// missing or out-of-range index falls back to the first candidate.
pub struct Multiway {
    template: Template,
}

impl Multiway {
    pub fn new(template: Template) -> Self {
        Self { template }
    }
    fn blocks(candidates: &[Trajectory]) -> String {
        candidates
            .iter()
            .enumerate()
            .map(|(i, t)| {
                format!(
                    "<future_game_state index={}>\n{}\n</future_game_state>",
                    i + 1,
                    t.render()
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[async_trait::async_trait]
impl Evaluator for Multiway {
    async fn choose(
        &self,
        oracle: &dyn Oracle,
        base: &str,
        candidates: &[Trajectory],
    ) -> anyhow::Result<Choice> {
        let candidates = playable(candidates);
        if candidates.is_empty() {
            log::warn!("no candidate futures to rank, passing");
            return Ok(Choice::pass());
        }
        let blocks = Self::blocks(&candidates);
        let prompt = self
            .template
            .render(&[("base_state", base), ("futures_blocks", blocks.as_str())]);
        let response = oracle
            .ask(crate::JUDGE_DIRECTIVE, prompt)
            .await
            .context("rank candidate futures")?;
        let winner = match extract::index(&response) {
            Some(i) if (1..=candidates.len()).contains(&i) => i - 1,
            other => {
                log::warn!(
                    "no usable index ({:?}) among {} futures, taking the first",
                    other,
                    candidates.len()
                );
                0
            }
        };
        let choice = Choice::of(&candidates[winner]);
        log::info!(
            "ranking of {} picked #{}: {}",
            candidates.len(),
            winner + 1,
            choice.action
        );
        Ok(choice)
    }
}
