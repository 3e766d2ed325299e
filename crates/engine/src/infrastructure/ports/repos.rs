//! Storage port traits.

use async_trait::async_trait;
use talewright_domain::CampaignDocument;

use super::error::StoreError;

// =============================================================================
// Campaign Document Storage
// =============================================================================

/// Whole-document persistence. The editor keeps everything under one key,
/// so there is no per-entity repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load the stored document. `None` when nothing has been saved yet.
    async fn load(&self) -> Result<Option<CampaignDocument>, StoreError>;
    async fn save(&self, document: &CampaignDocument) -> Result<(), StoreError>;
}
