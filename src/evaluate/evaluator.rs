use crate::action::Trajectory;
use crate::oracle::Oracle;

/// The move an evaluator settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// First move of the winning trajectory, without role tags.
    pub action: String,
    /// The winning trajectory, absent when there was nothing to choose from.
    pub winner: Option<Trajectory>,
}

impl Choice {
    pub fn pass() -> Self {
        Self {
            action: crate::PASS.to_string(),
            winner: None,
        }
    }
    pub fn of(winner: &Trajectory) -> Self {
        Self {
            action: winner
                .first()
                .map(|a| a.text().to_string())
                .unwrap_or_else(|| crate::PASS.to_string()),
            winner: Some(winner.clone()),
        }
    }
}

/// Picks one immediate move from a set of simulated futures.
///
/// Empty trajectories are ignored, and an empty candidate set yields a pass
/// without consulting the oracle. Caller collections are never reordered.
#[async_trait::async_trait]
pub trait Evaluator: Send + Sync {
    async fn choose(
        &self,
        oracle: &dyn Oracle,
        base: &str,
        candidates: &[Trajectory],
    ) -> anyhow::Result<Choice>;
}

/// Non-empty candidates, in their original order.
pub(crate) fn playable(candidates: &[Trajectory]) -> Vec<Trajectory> {
    candidates
        .iter()
        .filter(|t| !t.is_empty())
        .cloned()
        .collect()
}
