//! # Itask Architecture
//!
//! Itask is a **UI-agnostic todo-list library**. The `itask` binary is one client of it;
//! the same core could back a TUI, a web view, or anything else that can render a list
//! and forward user intents.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Resolves display indexes (1, 2, 3) to todo ids           │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TodoStore (todo_store.rs)                                  │
//! │  - Authoritative list + pending input                       │
//! │  - One full-list write per mutation (write-through)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence (persistence.rs) over a StorageBackend (store/)│
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular Rust types,
//! and never writes to stdout/stderr or calls `std::process::exit`. Diagnostics go
//! through `tracing`; the binary decides where (if anywhere) they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for UI clients
//! - [`commands`]: Structured results and messages returned by the API
//! - [`todo_store`]: The list/pending-input state machine
//! - [`persistence`]: Load/save of the serialized list under one key
//! - [`store`]: Key-value storage abstraction and implementations
//! - [`model`]: Core data types (`TodoItem`, `TodoId`)
//! - [`index`]: Display indexing (1-based positions in the rendered list)
//! - [`config`]: Configuration management
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod store;
pub mod todo_store;

#[cfg(test)]
pub mod test_utils;
