// src/infrastructure/storage/cloudinary.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::document_store::{DocumentStore, DocumentUpload};
use async_trait::async_trait;
use serde::Deserialize;

/// Cloudinary holds the KYC images and the backup copy of signed
/// agreements. Uploads use an unsigned preset scoped to a folder.
pub struct CloudinaryStore {
    client: reqwest::Client,
    upload_url: String,
    upload_preset: String,
    folder: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl CloudinaryStore {
    pub fn new(
        client: reqwest::Client,
        cloud_name: &str,
        upload_preset: impl Into<String>,
        folder: impl Into<String>,
    ) -> Self {
        Self {
            client,
            upload_url: format!("https://api.cloudinary.com/v1_1/{cloud_name}/auto/upload"),
            upload_preset: upload_preset.into(),
            folder: folder.into(),
        }
    }

    pub fn with_upload_url(mut self, upload_url: impl Into<String>) -> Self {
        self.upload_url = upload_url.into();
        self
    }
}

#[async_trait]
impl DocumentStore for CloudinaryStore {
    async fn put(&self, document: &DocumentUpload) -> ApplicationResult<String> {
        let part = reqwest::multipart::Part::bytes(document.bytes.to_vec())
            .file_name(document.filename.clone())
            .mime_str(&document.content_type)
            .map_err(|err| ApplicationError::infrastructure(format!("invalid mime type: {err}")))?;

        let form = reqwest::multipart::Form::new()
            .text("upload_preset", self.upload_preset.clone())
            .text("folder", self.folder.clone())
            .part("file", part);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                ApplicationError::infrastructure(format!("cloudinary request failed: {err}"))
            })?;

        if !response.status().is_success() {
            return Err(ApplicationError::infrastructure(format!(
                "cloudinary upload failed with status {}",
                response.status()
            )));
        }

        let body: UploadResponse = response.json().await.map_err(|err| {
            ApplicationError::infrastructure(format!("cloudinary response malformed: {err}"))
        })?;

        Ok(body.secure_url)
    }
}
