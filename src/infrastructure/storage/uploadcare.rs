// src/infrastructure/storage/uploadcare.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::document_store::{DocumentStore, DocumentUpload};
use async_trait::async_trait;
use serde::Deserialize;

const BASE_UPLOAD_URL: &str = "https://upload.uploadcare.com/base/";
const BASE_CDN_URL: &str = "https://ucarecdn.com";

/// Uploadcare is the primary provider for signed agreements; its CDN gives
/// reliable direct PDF downloads.
pub struct UploadcareStore {
    client: reqwest::Client,
    public_key: String,
    upload_url: String,
    cdn_base: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    file: String,
}

impl UploadcareStore {
    pub fn new(client: reqwest::Client, public_key: impl Into<String>) -> Self {
        Self {
            client,
            public_key: public_key.into(),
            upload_url: BASE_UPLOAD_URL.into(),
            cdn_base: BASE_CDN_URL.into(),
        }
    }

    /// Point the store at a different endpoint (tests, regional gateways).
    pub fn with_endpoints(
        mut self,
        upload_url: impl Into<String>,
        cdn_base: impl Into<String>,
    ) -> Self {
        self.upload_url = upload_url.into();
        self.cdn_base = cdn_base.into();
        self
    }
}

#[async_trait]
impl DocumentStore for UploadcareStore {
    async fn put(&self, document: &DocumentUpload) -> ApplicationResult<String> {
        let part = reqwest::multipart::Part::bytes(document.bytes.to_vec())
            .file_name(document.filename.clone())
            .mime_str(&document.content_type)
            .map_err(|err| ApplicationError::infrastructure(format!("invalid mime type: {err}")))?;

        let form = reqwest::multipart::Form::new()
            .text("UPLOADCARE_PUB_KEY", self.public_key.clone())
            .text("UPLOADCARE_STORE", "1")
            .part("file", part);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                ApplicationError::infrastructure(format!("uploadcare request failed: {err}"))
            })?;

        if !response.status().is_success() {
            return Err(ApplicationError::infrastructure(format!(
                "uploadcare upload failed with status {}",
                response.status()
            )));
        }

        let body: UploadResponse = response.json().await.map_err(|err| {
            ApplicationError::infrastructure(format!("uploadcare response malformed: {err}"))
        })?;

        Ok(format!(
            "{}/{}/{}",
            self.cdn_base, body.file, document.filename
        ))
    }
}
