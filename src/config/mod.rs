//! Configuration module for spritefx
//!
//! Provides types, discovery and parsing for `spritefx.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
