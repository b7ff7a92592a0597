// src/application/ports/store.rs
use crate::domain::audit::AuditLog;
use crate::domain::errors::DomainResult;
use crate::domain::property::{Property, PropertyId, PropertyStatus, UnitInventory};
use crate::domain::tenancy::{
    ApplicationId, NewTenantApplication, ReviewUpdate, TenantApplication,
};
use async_trait::async_trait;

/// Entry point for the request-scoped workflow transaction.
#[async_trait]
pub trait WorkflowStore: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn WorkflowTx>>;
}

/// Unit of work for one state-machine operation. Every write in a submit or
/// review call goes through one `WorkflowTx`, so the application row, the
/// vacancy ledger and the audit entry commit together or not at all.
/// Dropping the transaction without calling [`WorkflowTx::commit`] rolls
/// everything back.
#[async_trait]
pub trait WorkflowTx: Send {
    /// Insert and return the application with its assigned id, so the audit
    /// entry written in the same transaction can reference it.
    async fn insert_application(
        &mut self,
        application: NewTenantApplication,
    ) -> DomainResult<TenantApplication>;

    /// Load an application with its row locked for the review decision.
    async fn lock_application(
        &mut self,
        id: ApplicationId,
    ) -> DomainResult<Option<TenantApplication>>;

    /// Load a property with its row locked, so concurrent approvals against
    /// the same vacancy serialize instead of both observing the same count.
    async fn lock_property(&mut self, id: PropertyId) -> DomainResult<Option<Property>>;

    async fn apply_review(&mut self, update: ReviewUpdate) -> DomainResult<TenantApplication>;

    async fn store_property_units(
        &mut self,
        id: PropertyId,
        units: &UnitInventory,
        status: PropertyStatus,
    ) -> DomainResult<()>;

    async fn append_audit(&mut self, entry: AuditLog) -> DomainResult<()>;

    async fn commit(self: Box<Self>) -> DomainResult<()>;
}
