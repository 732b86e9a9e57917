// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for running gesture tracking.
//!
//! This module contains the command-line interface logic, including argument parsing,
//! logging macros and the `track` command implementation.

/// CLI arguments.
pub mod args;

/// Colored console output.
pub mod logging;

/// Tracking logic.
pub mod track;
