//! Talewright Engine library.
//!
//! Persistence and orchestration around the Talewright domain.
//!
//! ## Structure
//!
//! - `use_cases/` - Editor operations (character sheet, catalog maintenance)
//! - `infrastructure/` - External dependency implementations (ports + adapters)

pub mod infrastructure;
pub mod use_cases;

pub use use_cases::{CatalogUseCases, CharacterSheetUseCases};
