// src/models/mod.rs

//! Domain models for the showcase pipeline.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod query;
mod record;
mod settings;

// Re-export all public types
pub use query::{CollectionQuery, MemberRow, NamespaceKind, SortDirection, SortField};
pub use record::{FieldDefaults, Record};
pub use settings::{ListKind, ListSettings};
