// src/domain/property/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::property::entity::{Property, PropertyId};
use async_trait::async_trait;

/// Read side only. Mutation of the vacancy ledger goes through the
/// review transaction, never through this trait.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn find_by_id(&self, id: PropertyId) -> DomainResult<Option<Property>>;
}
