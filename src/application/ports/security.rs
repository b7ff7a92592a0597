// src/application/ports/security.rs
use crate::application::dto::AuthenticatedUser;
use crate::application::error::ApplicationResult;
use async_trait::async_trait;

/// Boundary to the external authentication service: tokens are issued
/// elsewhere, this crate only verifies them into an identity.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
