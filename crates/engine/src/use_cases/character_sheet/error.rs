//! Character sheet operation errors.

use crate::infrastructure::ports::StoreError;
use talewright_domain::{CharacterId, DomainError};

/// Errors that can occur during character sheet operations.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl SheetError {
    /// Whether the user should see this inline (a slot the race lacks or
    /// gear dropped on the wrong slot) rather than as a failure.
    pub fn is_capability_violation(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_capability_violation())
    }
}
