//! Catalog operation errors.

use crate::infrastructure::ports::StoreError;
use talewright_domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
