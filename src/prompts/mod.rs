mod builtin;
mod registry;
mod template;

pub use builtin::*;
pub use registry::*;
pub use template::*;
