use super::trajectory::Trajectory;

/// The leaf trajectories returned by a (sub)search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier(Vec<Trajectory>);

impl Frontier {
    pub fn single(trajectory: Trajectory) -> Self {
        Self(vec![trajectory])
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Trajectory> {
        self.0.iter()
    }
    pub fn trajectories(&self) -> &[Trajectory] {
        &self.0
    }
    pub fn extend(&mut self, other: Frontier) {
        self.0.extend(other.0);
    }
}

impl From<Vec<Trajectory>> for Frontier {
    fn from(trajectories: Vec<Trajectory>) -> Self {
        Self(trajectories)
    }
}

impl From<Frontier> for Vec<Trajectory> {
    fn from(frontier: Frontier) -> Self {
        frontier.0
    }
}

impl FromIterator<Trajectory> for Frontier {
    fn from_iter<T: IntoIterator<Item = Trajectory>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Frontier {
    type Item = Trajectory;
    type IntoIter = std::vec::IntoIter<Trajectory>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl std::fmt::Display for Frontier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0
            .iter()
            .enumerate()
            .try_for_each(|(i, t)| writeln!(f, "  [{:02}] {}", i + 1, t))
    }
}
