use crate::Score;
use crate::action::Trajectory;
use crate::extract::Preference;

/// Outcome of one forward + mirrored judgment round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Both orientations preferred the first trajectory of the pair.
    Left,
    /// Both orientations preferred the second trajectory of the pair.
    Right,
    Tie,
}

impl From<(Option<Preference>, Option<Preference>)> for Verdict {
    /// `forward` shows left as future 1; `mirrored` shows it as future 2.
    fn from((forward, mirrored): (Option<Preference>, Option<Preference>)) -> Self {
        match (forward, mirrored) {
            (Some(Preference::First), Some(Preference::Second)) => Self::Left,
            (Some(Preference::Second), Some(Preference::First)) => Self::Right,
            _ => Self::Tie,
        }
    }
}

/// Accumulated votes for an ordered pair.
///
/// A clean win moves the sides by +1 and -1; a tie credits both with 0.5.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PairScore {
    pub left: Score,
    pub right: Score,
}

impl PairScore {
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Left => {
                self.left += 1.0;
                self.right -= 1.0;
            }
            Verdict::Right => {
                self.left -= 1.0;
                self.right += 1.0;
            }
            Verdict::Tie => {
                self.left += 0.5;
                self.right += 0.5;
            }
        }
    }
    /// The same score seen from the other side.
    pub fn flipped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }
    /// Match points: one to the strictly larger side, a half each otherwise.
    pub fn points(&self) -> (Score, Score) {
        match self.left.partial_cmp(&self.right) {
            Some(std::cmp::Ordering::Greater) => (1.0, 0.0),
            Some(std::cmp::Ordering::Less) => (0.0, 1.0),
            _ => (0.5, 0.5),
        }
    }
}

/// Unordered, content-based identity of two trajectories.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct PairKey(Trajectory, Trajectory);

impl PairKey {
    /// The key plus whether `(a, b)` is stored in reverse orientation.
    pub fn new(a: &Trajectory, b: &Trajectory) -> (Self, bool) {
        match a <= b {
            true => (Self(a.clone(), b.clone()), false),
            false => (Self(b.clone(), a.clone()), true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::role::Role;

    #[test]
    fn verdict_requires_agreement() {
        use Preference::*;
        assert_eq!(Verdict::from((Some(First), Some(Second))), Verdict::Left);
        assert_eq!(Verdict::from((Some(Second), Some(First))), Verdict::Right);
        assert_eq!(Verdict::from((Some(First), Some(First))), Verdict::Tie);
        assert_eq!(Verdict::from((Some(Second), Some(Second))), Verdict::Tie);
        assert_eq!(Verdict::from((None, Some(Second))), Verdict::Tie);
        assert_eq!(Verdict::from((None, None)), Verdict::Tie);
    }

    #[test]
    fn score_moves_are_bounded() {
        let mut score = PairScore::default();
        let rounds = [Verdict::Left, Verdict::Tie, Verdict::Left, Verdict::Right];
        for verdict in rounds {
            let before = score;
            score.record(verdict);
            match verdict {
                Verdict::Tie => {
                    assert_eq!(score.left - before.left, 0.5);
                    assert_eq!(score.right - before.right, 0.5);
                }
                _ => assert_eq!(score.left + score.right, before.left + before.right),
            }
        }
        assert!((score.left - score.right).abs() <= 2.0 * rounds.len() as Score);
        assert_eq!(score, PairScore { left: 1.5, right: -0.5 });
    }

    #[test]
    fn points_follow_strict_order() {
        assert_eq!(PairScore { left: 1.0, right: -1.0 }.points(), (1.0, 0.0));
        assert_eq!(PairScore { left: -1.0, right: 1.0 }.points(), (0.0, 1.0));
        assert_eq!(PairScore { left: 0.5, right: 0.5 }.points(), (0.5, 0.5));
    }

    #[test]
    fn key_is_unordered() {
        let a = Trajectory::from(vec![Action::new(Role::Agent, "a")]);
        let b = Trajectory::from(vec![Action::new(Role::Agent, "b")]);
        let (ab, flip_ab) = PairKey::new(&a, &b);
        let (ba, flip_ba) = PairKey::new(&b, &a);
        assert_eq!(ab, ba);
        assert_ne!(flip_ab, flip_ba);
    }
}
