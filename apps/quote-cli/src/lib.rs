//! # Box Office Quote CLI
//!
//! Thin orchestration layer around `boxoffice-core`.
//!
//! ## Startup Sequence
//! 1. Parse arguments (clap)
//! 2. Load configuration (defaults → boxoffice.toml → `BOXOFFICE_*`)
//! 3. Initialize tracing (logging to stderr)
//! 4. Execute the command, print JSON to stdout
//!
//! The setup lives here rather than in `main.rs` so it can be tested.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use cli::{Cli, Command};
pub use config::{ConfigError, LogFormat, QuoteConfig};
