mod ballot;
mod cache;
mod evaluator;
mod multiway;
mod pair;
mod tournament;

pub use ballot::*;
pub use cache::*;
pub use evaluator::*;
pub use multiway::*;
pub use pair::*;
pub use tournament::*;
