// src/lib.rs

//! Showcase Grid Library

pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod host;
pub mod locale;
pub mod models;
pub mod render;
pub mod rotation;
pub mod sort;
pub mod store;
