mod lookahead;

pub use lookahead::*;
