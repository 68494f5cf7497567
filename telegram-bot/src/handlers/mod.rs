//! Handlers: commands first, then per-message metadata generation.

mod command_handler;
mod metadata_handler;

pub use command_handler::{Command, CommandHandler};
pub use metadata_handler::MetadataHandler;
