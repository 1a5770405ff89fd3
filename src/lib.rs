pub mod backend;
pub mod commands;
pub mod config;
pub mod error;
pub mod html;
pub mod logging;
pub mod snapshot;
pub mod tui;

#[cfg(test)]
mod test_guards;

pub use backend::{Action, ActionSink, FileFeed, JsonLinesSink, RecordingSink, SlotRole};
pub use config::Config;
pub use error::{ErtError, Result};
pub use snapshot::{ErtType, RemoteSnapshot, RequestMessage};
