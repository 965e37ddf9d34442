//! # Miniwiki Architecture
//!
//! Miniwiki is a small file-backed wiki: every entry is one Markdown file on
//! disk, and a thin HTTP layer turns requests into rendered pages or
//! redirects. The web server is a client of the library, not the other way
//! around.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Web Layer (web/, wired by main.rs)                         │
//! │  - Routes, form decoding, HTML templates, status codes      │
//! │  - The ONLY place that knows about HTTP                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: matching, searching, duplicate      │
//! │    checks, random selection                                 │
//! │  - Generic over any EntryStore, no I/O assumptions          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract EntryStore trait                                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No HTTP Assumptions in Core
//!
//! From `commands/` inward, code takes regular Rust arguments and returns
//! regular Rust types (`Result<SearchOutcome>` and friends). A command never
//! builds a response, never picks a status code, never touches a template.
//! This is what lets every command be unit-tested against `InMemoryStore`
//! without spinning up a server.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`.
//!    This is where the lion's share of testing lives.
//! 2. **Storage** (`store/fs.rs`): round-trip tests against a temp dir.
//! 3. **Web** (`web/` + `tests/`): router tests via `tower::ServiceExt`,
//!    asserting on status codes, redirects, and rendered HTML.
//!
//! ## Module Overview
//!
//! - [`commands`]: Business logic for each wiki operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data type (`Entry`)
//! - [`markup`]: Markdown to HTML translation
//! - [`config`]: Configuration management
//! - [`web`]: Router, handlers, and page templates
//! - [`error`]: Error types

pub mod commands;
pub mod config;
pub mod error;
pub mod markup;
pub mod model;
pub mod store;
pub mod web;
