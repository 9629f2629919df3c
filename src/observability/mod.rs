//! Structured logging with file-based JSON output.
//!
//! Every `tracing` span and event emitted by the plugin is serialized as one
//! JSON object per line and appended to a size-rotated log file in the plugin
//! data directory.
//!
//! # Features
//!
//! - **File Output**: `~/.local/share/zellij/catalist/catalist.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Level Filtering**: `trace_level` config option, default `"info"`
//!
//! # Usage
//!
//! ```rust,no_run
//! use catalist::observability::init_tracing;
//! use catalist::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::{FileWriter, FileWriterHandle};
pub use init::{init_tracing, LOG_FILE_NAME};
