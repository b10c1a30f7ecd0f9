//! # Storage Layer
//!
//! The host storage itask persists into is a plain **key-value store**: one string
//! value per key, read whole and replaced whole. Nothing here knows what a todo is;
//! [`crate::persistence::Persistence`] owns the serialization of the list and the
//! choice of key.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production backend. Each key is a JSON file in the data
//!   directory, replaced atomically on write.
//! - [`mem_backend::MemBackend`]: For testing logic without filesystem I/O. Counts
//!   writes and can simulate write failures.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── config.json     # ItaskConfig
//! └── todos.json      # The persisted list (key "todos")
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
