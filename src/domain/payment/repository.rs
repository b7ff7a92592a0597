// src/domain/payment/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::payment::entity::{Payment, PaymentId};
use async_trait::async_trait;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn find_by_id(&self, id: PaymentId) -> DomainResult<Option<Payment>>;
}
