//! JSON file adapter for [`DocumentStore`].

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use talewright_domain::CampaignDocument;

use crate::infrastructure::ports::{DocumentStore, StoreError};
use crate::infrastructure::settings::EditorSettings;

/// Stores the campaign document as a single JSON file.
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    path: PathBuf,
    pretty: bool,
}

impl FileDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    pub fn from_settings(settings: &EditorSettings) -> Self {
        Self {
            path: settings.document_path.clone(),
            pretty: settings.pretty_json,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("document"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn load(&self) -> Result<Option<CampaignDocument>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No campaign document yet");
                return Ok(None);
            }
            Err(e) => return Err(StoreError::io("load", e)),
        };

        match serde_json::from_str(&raw) {
            Ok(document) => Ok(Some(document)),
            Err(e) => {
                // Same recovery as the editor: start over with an empty document.
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to parse campaign document, starting from an empty one"
                );
                Ok(Some(CampaignDocument::default()))
            }
        }
    }

    async fn save(&self, document: &CampaignDocument) -> Result<(), StoreError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(document)
        } else {
            serde_json::to_string(document)
        }
        .map_err(StoreError::serialization)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io("save", e))?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, json)
            .await
            .map_err(|e| StoreError::io("save", e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| StoreError::io("save", e))?;

        tracing::debug!(
            path = %self.path.display(),
            characters = document.characters().len(),
            "Saved campaign document"
        );
        Ok(())
    }
}
