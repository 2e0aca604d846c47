//! Clean-up applied to raw proposals before the tree expands them.
use crate::role::Role;

/// Strip each entry and keep the first occurrence of every distinct value.
pub fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Literal passes, bare or wrapped in the role's own tags.
pub fn is_pass(item: &str, role: Role) -> bool {
    let clean = item.trim().to_lowercase();
    clean == crate::PASS || clean == format!("{}{}{}", role.open(), crate::PASS, role.close())
}

/// Stable partition: non-pass entries first, then pass-like entries.
pub fn demote_passes(items: Vec<String>, role: Role) -> Vec<String> {
    let (pass, rest) = items
        .into_iter()
        .partition::<Vec<_>, _>(|item| is_pass(item, role));
    rest.into_iter().chain(pass).collect()
}

/// The full pipeline run at every tree node.
///
/// Truncation keeps the first `k` entries of the reordered list, so a pass
/// only survives when `k` exceeds the number of real proposals. A `k` of
/// zero disables truncation. The output is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hygiene {
    role: Role,
    k: usize,
}

impl Hygiene {
    pub fn new(role: Role, k: usize) -> Self {
        Self { role, k }
    }
    pub fn apply(&self, items: Vec<String>) -> Vec<String> {
        let items = demote_passes(dedup(items), self.role);
        let limit = match self.k {
            0 => items.len(),
            k => k,
        };
        let items = items.into_iter().take(limit).collect::<Vec<_>>();
        match items.is_empty() {
            true => vec![crate::PASS.to_string()],
            false => items,
        }
    }
}
