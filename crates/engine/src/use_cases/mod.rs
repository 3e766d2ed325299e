//! Use cases - User story orchestration.
//!
//! Each module owns one editor area and drives the domain through the
//! [`DocumentStore`](crate::infrastructure::ports::DocumentStore) port.

pub mod catalog;
pub mod character_sheet;

pub use catalog::{CatalogError, CatalogUseCases};
pub use character_sheet::{CharacterSheetUseCases, SheetError, SheetUpdate};
