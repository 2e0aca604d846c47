#[cfg(feature = "cli")]
mod console;
mod message;
mod oracle;
mod patient;
mod scripted;
mod stub;

#[cfg(feature = "cli")]
pub use console::*;
pub use message::*;
pub use oracle::*;
pub use patient::*;
pub use scripted::*;
pub use stub::*;
