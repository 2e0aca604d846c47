use serde::Deserialize;
use serde::Serialize;

/// Placeholders a template may reference.
pub const PLACEHOLDERS: [&str; 7] = [
    "game_state",
    "prior_actions",
    "last_move",
    "base_state",
    "future_1",
    "future_2",
    "futures_blocks",
];

/// A prompt with `{name}` placeholders.
///
/// Rendering is a single left-to-right pass, so values that happen to
/// contain braces are never substituted again. Known placeholders without a
/// value render as `None`; unknown ones are left as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template(String);

impl Template {
    pub fn render(&self, fields: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];
            match tail[1..].find('}').map(|end| &tail[1..end + 1]) {
                Some(key) if PLACEHOLDERS.contains(&key) => {
                    let value = fields
                        .iter()
                        .find(|(name, _)| *name == key)
                        .map(|(_, value)| *value)
                        .unwrap_or(crate::NONE);
                    out.push_str(value);
                    rest = &tail[key.len() + 2..];
                }
                _ => {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
