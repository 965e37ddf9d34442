//! # Storage Layer
//!
//! This module defines the storage abstraction for miniwiki. The
//! [`EntryStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing
//!   command logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One file per entry, named `{title}{ext}` in the data directory
//!   - The file body is the entry's raw Markdown, nothing else
//!   - Supports configurable file extensions (default `.md`)
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Preserves insertion order in `list_entries`, so tests of the
//!     "first enumerated wins" tie-break are deterministic
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── config.json       # WikiConfig (not an entry)
//! ├── Python.md         # entry "Python"
//! └── CSS.md            # entry "CSS"
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for entry storage.
///
/// The store does not enforce case-insensitive title uniqueness; the create
/// command pre-checks before saving. Enumeration order is not part of the
/// contract, though `FileStore` returns lexicographic order for stable
/// pages.
pub trait EntryStore {
    /// All currently stored entry titles
    fn list_entries(&self) -> Result<Vec<String>>;

    /// Exact-match lookup (case-sensitive). Absence is `Ok(None)`, never an
    /// error; `Err` is reserved for I/O failures.
    fn get_entry(&self, title: &str) -> Result<Option<String>>;

    /// Write content for a title, creating or fully overwriting
    fn save_entry(&mut self, title: &str, content: &str) -> Result<()>;
}
