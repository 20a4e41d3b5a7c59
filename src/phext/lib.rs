//! # Phext
//!
//! Phext is plain hypertext: a single string carved into a nine-level
//! hierarchy by ASCII control characters. From coarsest to finest the levels
//! are library, shelf, series, collection, volume, book, chapter, section
//! and scroll. A scroll is the leaf that holds ordinary text, and every
//! scroll has a nine-part [`coordinate::Coordinate`] written as `Z/Y/X`,
//! for example `1.1.1/1.1.1/1.1.3`.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade, resolves labels and coordinates             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - select, insert, update, delete, list, goto, ...          │
//! └─────────────────────────────────────────────────────────────┘
//!               │                                  │
//!               ▼                                  ▼
//! ┌───────────────────────────────┐  ┌───────────────────────────┐
//! │  Document core                │  │  Storage (store/)         │
//! │  coordinate, delimiter,       │  │  DataStore trait,         │
//! │  partition, serialize,        │  │  FileStore, InMemoryStore │
//! │  document                     │  │                           │
//! └───────────────────────────────┘  └───────────────────────────┘
//! ```
//!
//! The document core is pure: it borrows the raw string, never copies scroll
//! text while partitioning, and never touches the filesystem. Only the CLI
//! writes to stdout or stderr.
//!
//! ## Module Overview
//!
//! - [`coordinate`]: `Axis` and the nine-part `Coordinate`
//! - [`delimiter`]: the control characters that separate each level
//! - [`partition`]: splits raw text into addressed scrolls
//! - [`serialize`]: turns addressed scrolls back into raw text
//! - [`document`]: immutable document with select and edit operations
//! - [`api`]: the facade every UI goes through
//! - [`commands`]: one module per operation
//! - [`store`]: persistence of labelled documents
//! - [`model`]: stored document and its metadata
//! - [`config`]: user settings
//! - [`editor`]: external editor integration
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod coordinate;
pub mod delimiter;
pub mod document;
pub mod editor;
pub mod error;
pub mod model;
pub mod partition;
pub mod serialize;
pub mod store;

pub use coordinate::{Axis, Coordinate};
pub use delimiter::DelimiterSet;
pub use document::Document;
pub use partition::{locate, partition, Partition, Scroll};
pub use serialize::serialize;
