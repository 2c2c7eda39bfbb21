//! Centralized configuration (environment variables + defaults).
//!
//! Only the binaries read configuration; the library takes explicit paths.

use std::path::PathBuf;

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Directory holding `teachers.json` and `classrooms.json`.
///
/// `SCHOOL_DATA_DIR`, with `~` expanded; defaults to [`DEFAULT_DATA_DIR`].
pub fn data_dir() -> PathBuf {
    let raw = std::env::var("SCHOOL_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

/// Default `tracing` filter when `RUST_LOG` is not set.
pub fn log_filter() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| "school_registry=info".to_string())
}
