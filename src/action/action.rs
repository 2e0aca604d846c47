use crate::role::Role;

/// One move, attributed to the role that made it.
///
/// Text is held bare; the `<action>` / `<opponent_action>` delimiters only
/// exist in the wire form produced by [`Action::tagged`].
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Action {
    role: Role,
    text: String,
}

impl Action {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
    pub fn pass(role: Role) -> Self {
        Self::new(role, crate::PASS)
    }
    /// Build an action from an oracle proposal, which may or may not already
    /// carry the role's delimiters.
    pub fn proposal(role: Role, raw: &str) -> Self {
        let raw = raw.trim();
        match raw.strip_prefix(role.open()) {
            Some(inner) => Self::new(
                role,
                inner.strip_suffix(role.close()).unwrap_or(inner).trim(),
            ),
            None => Self::new(role, raw),
        }
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn is_pass(&self) -> bool {
        self.text.trim().eq_ignore_ascii_case(crate::PASS)
    }
    /// Wire form in this action's own tag vocabulary.
    pub fn tagged(&self) -> String {
        self.tagged_as(self.role)
    }
    /// Wire form in another role's tag vocabulary.
    pub fn tagged_as(&self, role: Role) -> String {
        format!("{}{}{}", role.open(), self.text, role.close())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tagged())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_bare_proposal() {
        let action = Action::proposal(Role::Agent, "  [A6 B7 C7]\n");
        assert_eq!(action.text(), "[A6 B7 C7]");
        assert_eq!(action.tagged(), "<action>[A6 B7 C7]</action>");
    }

    #[test]
    fn unwraps_tagged_proposal() {
        let action = Action::proposal(Role::Opponent, "<opponent_action>[fire 2]</opponent_action>");
        assert_eq!(action.text(), "[fire 2]");
        assert_eq!(action.tagged(), "<opponent_action>[fire 2]</opponent_action>");
    }

    #[test]
    fn foreign_tags_are_content() {
        let action = Action::proposal(Role::Opponent, "<action>x</action>");
        assert_eq!(action.text(), "<action>x</action>");
    }

    #[test]
    fn retags_into_other_vocabulary() {
        let action = Action::new(Role::Agent, "defect");
        assert_eq!(
            action.tagged_as(Role::Opponent),
            "<opponent_action>defect</opponent_action>"
        );
    }

    #[test]
    fn recognizes_pass() {
        assert!(Action::pass(Role::Agent).is_pass());
        assert!(Action::new(Role::Opponent, " PASS ").is_pass());
        assert!(!Action::new(Role::Agent, "passive").is_pass());
    }
}
