//! Backend implementations.
//!
//! Each backend lives behind its own feature flag and implements the traits
//! in [`crate::core`].

#[cfg(feature = "sqlite")]
pub mod sqlite;
