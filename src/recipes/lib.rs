//! # Recipes Architecture
//!
//! Recipes is a **UI-agnostic recipe box**: a library that keeps a small collection of
//! recipes in a local key-value store, with a CLI client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders cards/details/forms, prompts   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) and Session (session.rs + view_state.rs)      │
//! │  - One-shot facade returning CmdResult                      │
//! │  - Interactive browsing: selection, modal mode, theme       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository (repository.rs) over Commands (commands/*.rs)   │
//! │  - Commands: pure transitions over the collection           │
//! │  - Repository: applies them and writes through to storage   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence (persistence.rs) over Storage (store/)         │
//! │  - One JSON blob under the "recipes" key, demo seed         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! Everything from `api.rs` inward takes Rust values and returns `Result`s. It never
//! writes to stdout, never prompts and never exits the process. Confirming a delete is
//! the client's job.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade for one-shot operations
//! - [`session`]: Interactive browsing over a [`view_state::ViewState`]
//! - [`commands`]: Add, update, delete, get, search and config logic
//! - [`repository`]: In-memory collection with write-through persistence
//! - [`persistence`]: Load/save of the collection blob, demo seeding
//! - [`store`]: Key-value storage abstraction and implementations
//! - [`form`]: Text form and its validation
//! - [`model`]: `Recipe` and `RecipeDraft`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod persistence;
pub mod repository;
pub mod session;
pub mod store;
pub mod view_state;
