// src/application/ports/document_store.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

/// An uploaded file as received from the multipart request.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl DocumentUpload {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Strategy seam over a single CDN provider. Implementations return the
/// stable public URL of the stored document.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn put(&self, document: &DocumentUpload) -> ApplicationResult<String>;
}

#[derive(Debug, Clone)]
pub struct StoredAgreement {
    pub primary_url: String,
    pub backup_url: Option<String>,
}

/// Dual-provider redundancy for the signed agreement: upload to both, and
/// when the primary provider fails, promote the backup URL to primary.
/// Only a failure of both providers aborts the submission.
#[derive(Clone)]
pub struct DualDocumentStore {
    primary: Arc<dyn DocumentStore>,
    backup: Arc<dyn DocumentStore>,
}

impl DualDocumentStore {
    pub fn new(primary: Arc<dyn DocumentStore>, backup: Arc<dyn DocumentStore>) -> Self {
        Self { primary, backup }
    }

    pub async fn put(&self, document: &DocumentUpload) -> ApplicationResult<StoredAgreement> {
        let primary = self.primary.put(document).await;
        let backup = self.backup.put(document).await;

        match (primary, backup) {
            (Ok(primary_url), Ok(backup_url)) => Ok(StoredAgreement {
                primary_url,
                backup_url: Some(backup_url),
            }),
            (Ok(primary_url), Err(err)) => {
                tracing::warn!(error = %err, "backup agreement upload failed");
                Ok(StoredAgreement {
                    primary_url,
                    backup_url: None,
                })
            }
            (Err(err), Ok(backup_url)) => {
                tracing::warn!(error = %err, "primary agreement upload failed, promoting backup");
                Ok(StoredAgreement {
                    primary_url: backup_url,
                    backup_url: None,
                })
            }
            (Err(primary_err), Err(backup_err)) => Err(ApplicationError::infrastructure(format!(
                "agreement upload failed on both providers: {primary_err}; {backup_err}"
            ))),
        }
    }
}
