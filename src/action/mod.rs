mod action;
mod frontier;
mod trajectory;

pub use action::*;
pub use frontier::*;
pub use trajectory::*;
