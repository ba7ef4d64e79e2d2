// src/host/mod.rs

//! Standalone host implementations of the collaborator traits.
//!
//! These back the CLI and integration tests; a wiki host would provide its
//! own index, store and cache instead.

mod dir;
mod file_cache;

pub use dir::DirHost;
pub use file_cache::FileCache;
