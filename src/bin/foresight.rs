//! Foresight Binary
//!
//! Decides one move for a game position. The completion service is either a
//! scripted reply file or a human at the terminal.

use clap::Parser;
use colored::Colorize;
use foresight::*;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Pick a move by simulating and comparing futures", long_about = None)]
struct Args {
    #[arg(long, help = "JSON file with run settings; flags below override it")]
    config: Option<PathBuf>,
    #[arg(long, help = "Game identifier: blotto, prisoners, codenames, or any other")]
    game: Option<String>,
    #[arg(long, value_parser = parse_role, help = "Side to move at the root: agent or opponent")]
    root: Option<Role>,
    #[arg(long, help = "Plies to look ahead")]
    depth: Option<usize>,
    #[arg(long, help = "Proposals kept per node, 0 for all")]
    branching: Option<usize>,
    #[arg(long, help = "Judgment rounds per tournament pair")]
    rounds: Option<usize>,
    #[arg(long, help = "Tournament pairs judged concurrently")]
    workers: Option<usize>,
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,
    #[arg(long, help = "File holding the game state; stdin when absent")]
    state: Option<PathBuf>,
    #[arg(long, help = "JSON array of canned completions, consumed in order")]
    script: Option<PathBuf>,
    #[arg(long, help = "JSON file of prompt template overrides")]
    templates: Option<PathBuf>,
    #[arg(long, help = "Seconds to wait for each completion")]
    timeout: Option<u64>,
    #[arg(long, default_value_t = 0, help = "Extra attempts after a failed completion")]
    retries: usize,
}

fn parse_role(s: &str) -> anyhow::Result<Role> {
    Role::try_from(s)
}

impl Args {
    fn settings(&self) -> anyhow::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(ref game) = self.game {
            config.game = game.clone();
        }
        config.root = self.root.unwrap_or(config.root);
        config.depth = self.depth.unwrap_or(config.depth);
        config.branching = self.branching.unwrap_or(config.branching);
        config.rounds = self.rounds.unwrap_or(config.rounds);
        config.workers = self.workers.unwrap_or(config.workers);
        config.strategy = self.strategy.unwrap_or(config.strategy);
        Ok(config)
    }
    fn state(&self) -> anyhow::Result<String> {
        match self.state {
            Some(ref path) => Ok(std::fs::read_to_string(path)?),
            None => {
                let mut input = String::new();
                std::io::stdin().read_to_string(&mut input)?;
                Ok(input)
            }
        }
    }
    fn registry(&self) -> anyhow::Result<Registry> {
        match self.templates {
            Some(ref path) => Registry::load(path),
            None => Ok(Registry::default()),
        }
    }
    /// The oracle to query, plus the script behind it when there is one.
    fn oracle(&self, config: &mut Config) -> anyhow::Result<(Arc<dyn Oracle>, Option<Arc<Scripted>>)> {
        let script = match self.script {
            Some(ref path) => Some(Arc::new(Scripted::load(path)?)),
            None => None,
        };
        let oracle: Arc<dyn Oracle> = match script {
            Some(ref script) => script.clone(),
            None => {
                config.workers = 1;
                Arc::new(Console)
            }
        };
        let oracle: Arc<dyn Oracle> = match self.timeout {
            Some(secs) => Arc::new(Patient::new(oracle, Duration::from_secs(secs), self.retries)),
            None => oracle,
        };
        Ok((oracle, script))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    let args = Args::parse();
    let mut config = args.settings()?;
    let registry = args.registry()?;
    let state = args.state()?;
    let (oracle, script) = args.oracle(&mut config)?;
    let agent = Agent::new(oracle, registry, config);
    let decision = agent.decide(state.trim()).await?;
    println!("{}", "futures".bold());
    for (i, future) in decision.frontier.iter().enumerate() {
        println!(
            "{:>2}. {}",
            i + 1,
            future.summary(LOG_STEP_COUNT, LOG_STEP_CHARS).dimmed()
        );
    }
    if let Some(left) = script.map(|s| s.remaining()).filter(|&n| n > 0) {
        log::warn!("{} scripted completions were never used", left);
    }
    let passed = decision
        .choice
        .winner
        .as_ref()
        .and_then(|w| w.first())
        .is_none_or(Action::is_pass);
    match passed {
        false => println!("{} {}", "move".green().bold(), decision.choice.action),
        true => println!("{} {}", "move".yellow().bold(), decision.choice.action),
    }
    Ok(())
}
