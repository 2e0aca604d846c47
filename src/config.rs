use crate::role::Role;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;

/// How the final move is picked from the frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Round-robin pairwise voting.
    #[default]
    Tournament,
    /// One ranking call over every candidate.
    Multiway,
}

/// Per-run knobs. Missing fields take the crate defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Game identifier used to pick proposal templates.
    pub game: String,
    /// Role to move at the root of the search.
    pub root: Role,
    /// Plies to look ahead.
    pub depth: usize,
    /// Proposals kept per node; zero keeps all of them.
    pub branching: usize,
    /// Judgment rounds per tournament pair.
    pub rounds: usize,
    /// Tournament pairs judged concurrently.
    pub workers: usize,
    pub strategy: Strategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: String::from("generic"),
            root: Role::Agent,
            depth: crate::MAX_DEPTH,
            branching: crate::BRANCHING,
            rounds: crate::ROUNDS_PER_PAIR,
            workers: crate::TOURNAMENT_WORKERS,
            strategy: Strategy::default(),
        }
    }
}

impl Config {
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config from {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parse config in {}", path.display()))
    }
    /// Upper bound on proposal calls for one decision.
    pub fn proposal_budget(&self) -> Option<usize> {
        match self.branching {
            0 => None,
            k => (0..self.depth).try_fold(0usize, |sum, d| {
                k.checked_pow(d as u32).and_then(|n| sum.checked_add(n))
            }),
        }
    }
}
