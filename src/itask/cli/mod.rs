//! # CLI Layer
//!
//! This module is **one possible UI client** for itask, not the application itself.
//! It plays the presentation role: render the list, forward user intents.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Uses `std::process::exit` (via `main.rs`)
//! - Handles argument parsing
//! - Installs the tracing subscriber
//!
//! ## Structure
//!
//! - [`setup`]: clap definitions and version string
//! - [`commands`]: `run()`, context setup, and per-command handlers
//! - [`render`]: `CmdResult` to terminal text

mod commands;
mod render;
mod setup;

pub use commands::run;
