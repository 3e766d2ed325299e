//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Document storage (the JSON file could become a browser key or a database)

mod error;
mod repos;

pub use error::StoreError;
pub use repos::*;
