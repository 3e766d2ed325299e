//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod file_store;
pub mod ports;
pub mod settings;
