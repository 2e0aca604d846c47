use super::pair::PairScore;
use crate::Probability;
use crate::Score;
use rand::distr::weighted::WeightedIndex;
use rand::prelude::*;

/// Match points per candidate after a round robin.
#[derive(Debug, Clone, PartialEq)]
pub struct Ballot {
    points: Vec<Score>,
    sweeps: Vec<usize>,
}

impl Ballot {
    pub fn new(n: usize) -> Self {
        Self {
            points: vec![0.0; n],
            sweeps: vec![0; n],
        }
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn points(&self) -> &[Score] {
        &self.points
    }
    /// Credit the resolved pair `(i, j)`, where `score.left` belongs to `i`.
    pub fn award(&mut self, i: usize, j: usize, score: &PairScore) {
        let (pi, pj) = score.points();
        self.points[i] += pi;
        self.points[j] += pj;
        if pi > pj {
            self.sweeps[i] += 1;
        }
        if pj > pi {
            self.sweeps[j] += 1;
        }
    }
    /// The candidate that won every one of its pairs outright, if any.
    pub fn dominant(&self) -> Option<usize> {
        let rivals = self.len().saturating_sub(1);
        match self.sweeps.iter().position(|&wins| wins == rivals) {
            Some(i) if rivals > 0 => Some(i),
            _ => None,
        }
    }
    /// Points normalized to sum to one. Uniform when there is no mass.
    pub fn distribution(&self) -> Vec<Probability> {
        let total = self.points.iter().sum::<Score>();
        match total > 0.0 && total.is_finite() {
            true => self.points.iter().map(|p| p / total).collect(),
            false => vec![1.0 / self.len().max(1) as Probability; self.len()],
        }
    }
    /// The winner: a clean sweeper with certainty, otherwise a weighted draw
    /// over the distribution. Sampling rather than argmax keeps repeated
    /// decisions on the same position from collapsing to one line.
    pub fn select<R>(&self, rng: &mut R) -> Option<usize>
    where
        R: Rng + ?Sized,
    {
        if self.is_empty() {
            return None;
        }
        if let Some(i) = self.dominant() {
            return Some(i);
        }
        WeightedIndex::new(&self.distribution())
            .ok()
            .map(|dist| dist.sample(rng))
            .or(Some(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;

    fn clean(left: bool) -> PairScore {
        match left {
            true => PairScore { left: 1.0, right: -1.0 },
            false => PairScore { left: -1.0, right: 1.0 },
        }
    }

    #[test]
    fn zero_mass_is_uniform() {
        let ballot = Ballot::new(4);
        assert_eq!(ballot.distribution(), vec![0.25; 4]);
        assert!(Ballot::new(0).distribution().is_empty());
        assert_eq!(Ballot::new(0).select(&mut SmallRng::seed_from_u64(0)), None);
    }

    #[test]
    fn lone_candidate_is_selected() {
        let ballot = Ballot::new(1);
        assert_eq!(ballot.distribution(), vec![1.0]);
        assert_eq!(ballot.select(&mut SmallRng::seed_from_u64(0)), Some(0));
    }

    #[test]
    fn tie_splits_evenly() {
        let mut ballot = Ballot::new(2);
        ballot.award(0, 1, &PairScore { left: 0.5, right: 0.5 });
        assert_eq!(ballot.points(), &[0.5, 0.5]);
        assert_eq!(ballot.distribution(), vec![0.5, 0.5]);
        assert_eq!(ballot.dominant(), None);
        let ref mut rng = SmallRng::seed_from_u64(7);
        let draws = (0..400).map(|_| ballot.select(rng).unwrap()).collect::<Vec<_>>();
        let zeros = draws.iter().filter(|&&i| i == 0).count();
        assert!(zeros > 120 && zeros < 280);
    }

    #[test]
    fn sweeper_is_certain() {
        let mut ballot = Ballot::new(3);
        ballot.award(0, 1, &clean(true));
        ballot.award(0, 2, &clean(true));
        ballot.award(1, 2, &PairScore { left: 0.5, right: 0.5 });
        assert_eq!(ballot.points(), &[2.0, 0.5, 0.5]);
        assert_eq!(ballot.dominant(), Some(0));
        let ref mut rng = SmallRng::seed_from_u64(1);
        assert!((0..200).all(|_| ballot.select(rng) == Some(0)));
    }

    #[test]
    fn cycles_are_sampled_proportionally() {
        let mut ballot = Ballot::new(3);
        ballot.award(0, 1, &clean(true));
        ballot.award(1, 2, &clean(true));
        ballot.award(0, 2, &clean(false));
        assert_eq!(ballot.dominant(), None);
        assert_eq!(ballot.distribution(), vec![1.0 / 3.0; 3]);
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut seen = [false; 3];
        (0..300).for_each(|_| seen[ballot.select(rng).unwrap()] = true);
        assert_eq!(seen, [true; 3]);
    }
}
