//! ped: a pipeline text editor
//!
//! Text is threaded through an ordered list of single-letter commands
//! (substitute, filter, extract, case-fold, line and character range edits).
//! The binary at src/main.rs is a thin I/O wrapper around [`Pipeline`].

pub mod address;
pub mod backup_manager;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod error_helpers;
pub mod executor;
pub mod file_processor;
pub mod logger;
pub mod options;
pub mod parser;
pub mod pattern;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use command::{Command, Scope};
pub use error::{ErrorKind, PedError};
pub use executor::Text;
pub use options::{MatchOptions, SubLimit};
pub use parser::Parser;
pub use pipeline::{Output, Pipeline, RenderMode, RenderOptions, transform};
