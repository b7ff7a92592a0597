// src/domain/tenancy/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::property::Property;
use crate::domain::tenancy::entity::TenantApplication;
use crate::domain::tenancy::status::ApplicationStatus;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Read-only projections over submitted applications. Writes go through the
/// workflow transaction.
#[async_trait]
pub trait TenantApplicationRepository: Send + Sync {
    /// Caller's own applications, newest first.
    async fn list_by_user(&self, user_id: UserId) -> DomainResult<Vec<TenantApplication>>;

    /// Admin listing, newest first, optionally filtered by status. Each
    /// item carries the target property so the approval UI can offer
    /// vacancy-aware unit assignment.
    async fn list_with_property(
        &self,
        status: Option<ApplicationStatus>,
    ) -> DomainResult<Vec<(TenantApplication, Option<Property>)>>;
}
