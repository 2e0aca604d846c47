//! Oracle-driven lookahead search for adversarial and multi-agent games.
//!
//! A [`Lookahead`] enumerates alternating agent/opponent move sequences by
//! querying an external [`Oracle`] once per visited node. The resulting
//! [`Frontier`] of trajectories is handed to an [`Evaluator`], either a
//! round-robin [`Tournament`] of bias-cancelling pairwise judgments or a
//! single-call [`Multiway`] ranking, which picks the move to play.
pub mod action;
pub mod agent;
pub mod config;
pub mod evaluate;
pub mod extract;
pub mod hygiene;
pub mod oracle;
pub mod prompts;
pub mod role;
pub mod search;

pub use action::*;
pub use agent::*;
pub use config::*;
pub use evaluate::*;
pub use extract::*;
pub use hygiene::*;
pub use oracle::*;
pub use prompts::*;
pub use role::*;
pub use search::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Vote totals and match points accumulated in a tournament.
pub type Score = f32;
/// Selection weights over candidate trajectories.
pub type Probability = f32;

// ============================================================================
// TREE SEARCH PARAMETERS
// Visited nodes grow as (K^(d+1) - 1) / (K - 1). These are the only cost knobs.
// ============================================================================
/// Default lookahead depth in plies.
pub const MAX_DEPTH: usize = 2;
/// Default number of proposals kept per node (prompt order, not score order).
pub const BRANCHING: usize = 5;

// ============================================================================
// TOURNAMENT PARAMETERS
// ============================================================================
/// Forward + mirrored judgment rounds per unordered pair.
pub const ROUNDS_PER_PAIR: usize = 1;
/// Maximum number of pair judgments in flight at once.
pub const TOURNAMENT_WORKERS: usize = 50;

// ============================================================================
// WIRE VOCABULARY
// ============================================================================
/// Move emitted when nothing better is available.
pub const PASS: &str = "pass";
/// Placeholder rendered for empty histories and missing fields.
pub const NONE: &str = "None";
/// System directive sent with every move proposal.
pub const PLAYER_DIRECTIVE: &str = "You are a clever player here to win the game.";
/// System directive sent with every evaluation.
pub const JUDGE_DIRECTIVE: &str = "You are a game evaluator.";

// ============================================================================
// DIAGNOSTICS
// ============================================================================
/// Characters kept per step when a trajectory is written to the log.
pub const LOG_STEP_CHARS: usize = 160;
/// Steps shown before a trajectory summary is elided.
pub const LOG_STEP_COUNT: usize = 4;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}

/// Shorten a line of oracle text for log output.
pub fn truncate(s: &str, max: usize) -> String {
    let s = s.trim();
    match s.chars().count() <= max {
        true => s.to_string(),
        false => s
            .chars()
            .take(max.saturating_sub(3))
            .chain("...".chars())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_lines() {
        assert_eq!(truncate("  [A6 B7 C7] ", 160), "[A6 B7 C7]");
    }

    #[test]
    fn truncate_elides_long_lines() {
        let line = "x".repeat(200);
        let short = truncate(&line, 10);
        assert_eq!(short.chars().count(), 10);
        assert!(short.ends_with("..."));
    }
}
