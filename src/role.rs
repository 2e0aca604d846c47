use serde::Deserialize;
use serde::Serialize;

/// Which side authored a move.
///
/// The tree alternates roles ply by ply, starting from whichever role the
/// root is searched for. Each role owns one tag vocabulary on the wire.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Agent,
    Opponent,
}

impl Role {
    /// The role that moves next.
    pub fn flip(self) -> Self {
        match self {
            Self::Agent => Self::Opponent,
            Self::Opponent => Self::Agent,
        }
    }
    /// Tag name used to delimit this role's moves.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Agent => "action",
            Self::Opponent => "opponent_action",
        }
    }
    pub fn open(self) -> &'static str {
        match self {
            Self::Agent => "<action>",
            Self::Opponent => "<opponent_action>",
        }
    }
    pub fn close(self) -> &'static str {
        match self {
            Self::Agent => "</action>",
            Self::Opponent => "</opponent_action>",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Agent => write!(f, "agent"),
            Self::Opponent => write!(f, "opponent"),
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "agent" => Ok(Self::Agent),
            "opponent" => Ok(Self::Opponent),
            other => Err(anyhow::anyhow!("unknown role: {}", other)),
        }
    }
}
