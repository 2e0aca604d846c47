use super::action::Action;
use crate::role::Role;

/// An ordered, role-alternating sequence of moves from the search root.
///
/// Equality, ordering and hashing are by content, so identical sequences
/// produced by different subtrees share one entry in the pair cache.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Trajectory(Vec<Action>);

impl Trajectory {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn first(&self) -> Option<&Action> {
        self.0.first()
    }
    pub fn last(&self) -> Option<&Action> {
        self.0.last()
    }
    pub fn actions(&self) -> &[Action] {
        &self.0
    }
    /// A new trajectory extended by one move. The receiver is left untouched.
    pub fn then(&self, action: Action) -> Self {
        self.0
            .iter()
            .cloned()
            .chain(std::iter::once(action))
            .collect()
    }
    /// Roles strictly alternate, beginning with `root`.
    pub fn alternates_from(&self, root: Role) -> bool {
        self.0
            .iter()
            .scan(root, |expected, action| {
                let ok = action.role() == *expected;
                *expected = expected.flip();
                Some(ok)
            })
            .all(|ok| ok)
    }
    /// Newline-joined wire form.
    pub fn render(&self) -> String {
        self.0
            .iter()
            .map(Action::tagged)
            .collect::<Vec<_>>()
            .join("\n")
    }
    /// Wire form for prompt history slots, with a placeholder when empty.
    pub fn history(&self) -> String {
        match self.is_empty() {
            true => crate::NONE.to_string(),
            false => self.render(),
        }
    }
    /// Wire form with agent moves written in the opponent vocabulary.
    /// Used for the second future of a pairwise comparison so the judge can
    /// tell the two futures apart.
    pub fn disguised(&self) -> String {
        self.0
            .iter()
            .map(|a| a.tagged_as(Role::Opponent))
            .collect::<Vec<_>>()
            .join("\n")
    }
    /// One-line digest for logs.
    pub fn summary(&self, steps: usize, chars: usize) -> String {
        let head = self
            .0
            .iter()
            .take(steps)
            .map(|a| crate::truncate(&a.tagged(), chars))
            .collect::<Vec<_>>()
            .join(" | ");
        match self.len() > steps {
            true => format!("{} ...(+{} steps)", head, self.len() - steps),
            false => head,
        }
    }
}

impl From<Vec<Action>> for Trajectory {
    fn from(actions: Vec<Action>) -> Self {
        Self(actions)
    }
}

impl From<Trajectory> for Vec<Action> {
    fn from(trajectory: Trajectory) -> Self {
        trajectory.0
    }
}

impl FromIterator<Action> for Trajectory {
    fn from_iter<T: IntoIterator<Item = Action>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Trajectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary(crate::LOG_STEP_COUNT, crate::LOG_STEP_CHARS))
    }
}
