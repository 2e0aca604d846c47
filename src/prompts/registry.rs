use super::builtin::*;
use super::template::Template;
use crate::role::Role;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

/// Move-proposal templates for one game, one per role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Templates {
    pub agent: Template,
    pub opponent: Template,
}

impl Templates {
    pub fn new(agent: impl Into<Template>, opponent: impl Into<Template>) -> Self {
        Self {
            agent: agent.into(),
            opponent: opponent.into(),
        }
    }
    pub fn get(&self, role: Role) -> &Template {
        match role {
            Role::Agent => &self.agent,
            Role::Opponent => &self.opponent,
        }
    }
}

/// Overrides read from a JSON file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Overrides {
    pub games: HashMap<String, Templates>,
    pub fallback: Option<Templates>,
    pub pairwise: Option<Template>,
    pub multiway: Option<Template>,
}

/// Game identifier → proposal templates, plus the evaluator templates.
///
/// Identifiers are matched case-insensitively after trimming. Unknown games
/// use the generic fallback pair.
#[derive(Debug, Clone)]
pub struct Registry {
    games: HashMap<String, Templates>,
    fallback: Templates,
    pairwise: Template,
    multiway: Template,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            games: HashMap::from([
                (
                    Self::key("colonel blotto"),
                    Templates::new(BLOTTO_AGENT, BLOTTO_OPPONENT),
                ),
                (
                    Self::key("blotto"),
                    Templates::new(BLOTTO_AGENT, BLOTTO_OPPONENT),
                ),
                (
                    Self::key("3-player iterated prisoner's dilemma"),
                    Templates::new(PRISONERS_AGENT, PRISONERS_OPPONENT),
                ),
                (
                    Self::key("prisoners"),
                    Templates::new(PRISONERS_AGENT, PRISONERS_OPPONENT),
                ),
                (
                    Self::key("codenames"),
                    Templates::new(CODENAMES_AGENT, CODENAMES_OPPONENT),
                ),
            ]),
            fallback: Templates::new(GENERIC_AGENT, GENERIC_OPPONENT),
            pairwise: Template::from(PAIRWISE),
            multiway: Template::from(MULTIWAY),
        }
    }
}

impl Registry {
    fn key(game: &str) -> String {
        game.trim().to_lowercase()
    }
    pub fn insert(&mut self, game: &str, templates: Templates) {
        self.games.insert(Self::key(game), templates);
    }
    pub fn knows(&self, game: &str) -> bool {
        self.games.contains_key(&Self::key(game))
    }
    pub fn templates(&self, game: &str) -> &Templates {
        self.games.get(&Self::key(game)).unwrap_or(&self.fallback)
    }
    /// The move-proposal template for a game and role.
    pub fn proposal(&self, game: &str, role: Role) -> &Template {
        self.templates(game).get(role)
    }
    pub fn pairwise(&self) -> &Template {
        &self.pairwise
    }
    pub fn multiway(&self) -> &Template {
        &self.multiway
    }
    pub fn merge(&mut self, overrides: Overrides) {
        overrides
            .games
            .into_iter()
            .for_each(|(game, templates)| self.insert(&game, templates));
        if let Some(fallback) = overrides.fallback {
            self.fallback = fallback;
        }
        if let Some(pairwise) = overrides.pairwise {
            self.pairwise = pairwise;
        }
        if let Some(multiway) = overrides.multiway {
            self.multiway = multiway;
        }
    }
    /// Built-in registry with overrides from a JSON file applied on top.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read templates from {}", path.display()))?;
        let overrides = serde_json::from_str::<Overrides>(&text)
            .with_context(|| format!("parse templates in {}", path.display()))?;
        let mut registry = Self::default();
        registry.merge(overrides);
        Ok(registry)
    }
}
