use super::pair::*;
use crate::action::Trajectory;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

/// Judged pairs, shared across tournaments so identical pairs are never
/// judged twice.
///
/// Clones share storage. Reads happen from concurrent pair tasks; writes
/// happen once per pair from the tournament's single collecting loop.
#[derive(Debug, Clone, Default)]
pub struct PairCache(Arc<RwLock<HashMap<PairKey, PairScore>>>);

impl PairCache {
    /// Stored score, oriented so that `left` belongs to `a`.
    pub fn get(&self, a: &Trajectory, b: &Trajectory) -> Option<PairScore> {
        let (key, flipped) = PairKey::new(a, b);
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .copied()
            .map(|score| match flipped {
                true => score.flipped(),
                false => score,
            })
    }
    /// Store a score whose `left` belongs to `a`.
    pub fn put(&self, a: &Trajectory, b: &Trajectory, score: PairScore) {
        let (key, flipped) = PairKey::new(a, b);
        let score = match flipped {
            true => score.flipped(),
            false => score,
        };
        self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, score);
    }
    pub fn len(&self) -> usize {
        self.0.read().unwrap_or_else(PoisonError::into_inner).len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn clear(&self) {
        self.0.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::role::Role;

    fn line(text: &str) -> Trajectory {
        Trajectory::from(vec![Action::new(Role::Agent, text)])
    }

    #[test]
    fn reads_back_in_either_orientation() {
        let cache = PairCache::default();
        let (a, b) = (line("zeta"), line("alpha"));
        cache.put(&a, &b, PairScore { left: 2.0, right: -2.0 });
        assert_eq!(cache.get(&a, &b), Some(PairScore { left: 2.0, right: -2.0 }));
        assert_eq!(cache.get(&b, &a), Some(PairScore { left: -2.0, right: 2.0 }));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clones_share_storage() {
        let cache = PairCache::default();
        let shared = cache.clone();
        shared.put(&line("a"), &line("b"), PairScore::default());
        assert!(!cache.is_empty());
        cache.clear();
        assert!(shared.is_empty());
    }
}
