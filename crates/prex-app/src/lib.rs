//! Prex Application
//!
//! The `prex` command-line shell around the core editing session.

mod app;
pub mod cli;

pub use app::App;
pub use cli::{Cli, Command};
