//! # Storage Layer
//!
//! Recipes persist as a single JSON blob under one key of a key-value store. The
//! [`KeyValueStore`] trait is the only thing the rest of the crate knows about
//! persistence, so the same logic runs against the filesystem or plain memory.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - One file per key inside the data directory: `{key}.json`
//!   - Writes go to a temporary file first and are renamed into place
//!
//! - [`memory::InMemoryStore`]: storage for tests
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! ~/.local/share/recipes/
//! ├── recipes.json        # The whole collection (JSON array)
//! └── config.json         # User configuration
//! ```
//!
//! There is no versioning and no partial update: every save overwrites the blob and the
//! last writer wins.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for a string key-value store.
pub trait KeyValueStore {
    /// Read the raw value stored at `key`.
    /// Returns `Ok(None)` when nothing has been stored there yet.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value at `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
