// src/infrastructure/repositories/postgres_payment.rs
use super::error::map_sqlx;
use super::rows::PaymentRow;
use crate::domain::errors::DomainResult;
use crate::domain::payment::{Payment, PaymentId, PaymentRepository};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresPaymentRepository {
    pool: PgPool,
}

impl PostgresPaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepository {
    async fn find_by_id(&self, id: PaymentId) -> DomainResult<Option<Payment>> {
        let row = sqlx::query_as::<_, PaymentRow>(
            "SELECT id, user_id, property_id, amount, status, phone_number, receipt_number,
                    created_at, completed_at
             FROM payments WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Payment::try_from).transpose()
    }
}
