//! # Solid
//!
//! Three small demonstrations of object-oriented design principles, written
//! as a UI-agnostic library with a thin CLI on top.
//!
//! | Principle | Module | What it shows |
//! |-----------|--------|---------------|
//! | Single responsibility | [`journal`], [`persistence`] | The journal keeps entries; saving them is someone else's job |
//! | Open/closed | [`specification`] | New filter criteria without touching the filter engine |
//! | Liskov substitution | [`shapes`] | A square that cannot stand in for a rectangle |
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, owns stdout/stderr     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns Result<CmdResult>     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic on Rust types, no terminal assumptions    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain + Storage (model, specification, journal, store/)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`; the binary decides whether
//! anyone sees them.
//!
//! ## Module Overview
//!
//! - [`specification`]: Composable product specifications and the filter engine
//! - [`model`]: Products and their color/size attributes
//! - [`journal`]: Numbered text entries
//! - [`persistence`]: Plain-text journal export
//! - [`shapes`]: Rectangle/square substitution check
//! - [`store`]: Journal storage abstraction and implementations
//! - [`commands`]: Business logic for each command
//! - [`api`]: The API facade
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod journal;
pub mod model;
pub mod persistence;
pub mod shapes;
pub mod specification;
pub mod store;
