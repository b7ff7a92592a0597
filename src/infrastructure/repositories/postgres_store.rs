// src/infrastructure/repositories/postgres_store.rs
use super::error::map_sqlx;
use super::rows::{APPLICATION_COLUMNS, ApplicationRow, PROPERTY_COLUMNS, PropertyRow};
use crate::application::ports::store::{WorkflowStore, WorkflowTx};
use crate::domain::audit::AuditLog;
use crate::domain::errors::DomainResult;
use crate::domain::property::{Property, PropertyId, PropertyStatus, UnitInventory};
use crate::domain::tenancy::{
    ApplicationId, NewTenantApplication, ReviewUpdate, TenantApplication,
};
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};

/// Postgres-backed unit of work. Row locks are taken with
/// `SELECT ... FOR UPDATE`, so concurrent reviews against the same
/// application or property serialize on the database.
#[derive(Clone)]
pub struct PostgresWorkflowStore {
    pool: PgPool,
}

impl PostgresWorkflowStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkflowStore for PostgresWorkflowStore {
    async fn begin(&self) -> DomainResult<Box<dyn WorkflowTx>> {
        let tx = self.pool.begin().await.map_err(map_sqlx)?;
        Ok(Box::new(PostgresWorkflowTx { tx }))
    }
}

pub struct PostgresWorkflowTx {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl WorkflowTx for PostgresWorkflowTx {
    async fn insert_application(
        &mut self,
        application: NewTenantApplication,
    ) -> DomainResult<TenantApplication> {
        let row = sqlx::query_as::<_, ApplicationRow>(&format!(
            "INSERT INTO tenant_applications
                 (user_id, property_id, first_name, last_name, phone, id_number,
                  id_document_front, id_document_back, signed_agreement_url,
                  signed_agreement_backup_url, digital_consent, digital_consent_ip,
                  payment_id, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                     'pending_approval', $14, $14)
             RETURNING {APPLICATION_COLUMNS}"
        ))
        .bind(i64::from(application.user_id))
        .bind(i64::from(application.property_id))
        .bind(&application.personal.first_name)
        .bind(&application.personal.last_name)
        .bind(&application.personal.phone)
        .bind(&application.personal.id_number)
        .bind(&application.documents.id_document_front)
        .bind(&application.documents.id_document_back)
        .bind(&application.documents.signed_agreement_url)
        .bind(&application.documents.signed_agreement_backup_url)
        .bind(application.digital_consent)
        .bind(&application.digital_consent_ip)
        .bind(application.payment_id.map(i64::from))
        .bind(application.created_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        TenantApplication::try_from(row)
    }

    async fn lock_application(
        &mut self,
        id: ApplicationId,
    ) -> DomainResult<Option<TenantApplication>> {
        let row = sqlx::query_as::<_, ApplicationRow>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM tenant_applications WHERE id = $1 FOR UPDATE"
        ))
        .bind(i64::from(id))
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        row.map(TenantApplication::try_from).transpose()
    }

    async fn lock_property(&mut self, id: PropertyId) -> DomainResult<Option<Property>> {
        let row = sqlx::query_as::<_, PropertyRow>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE id = $1 FOR UPDATE"
        ))
        .bind(i64::from(id))
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        row.map(Property::try_from).transpose()
    }

    async fn apply_review(&mut self, update: ReviewUpdate) -> DomainResult<TenantApplication> {
        let row = sqlx::query_as::<_, ApplicationRow>(&format!(
            "UPDATE tenant_applications
             SET status = $2, assigned_unit = $3, rejection_reason = $4,
                 reviewed_by = $5, reviewed_at = $6, updated_at = $6
             WHERE id = $1
             RETURNING {APPLICATION_COLUMNS}"
        ))
        .bind(i64::from(update.id))
        .bind(update.status.as_str())
        .bind(&update.assigned_unit)
        .bind(&update.rejection_reason)
        .bind(i64::from(update.reviewed_by))
        .bind(update.reviewed_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        TenantApplication::try_from(row)
    }

    async fn store_property_units(
        &mut self,
        id: PropertyId,
        units: &UnitInventory,
        status: PropertyStatus,
    ) -> DomainResult<()> {
        sqlx::query(
            "UPDATE properties SET units = $2, status = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(i64::from(id))
        .bind(Json(units.descriptors()))
        .bind(status.as_str())
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn append_audit(&mut self, entry: AuditLog) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO audit_logs
                 (user_id, action, resource_type, resource_id, details, ip_address,
                  user_agent, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(entry.user_id.map(i64::from))
        .bind(&entry.action)
        .bind(&entry.resource_type)
        .bind(entry.resource_id)
        .bind(Json(&entry.details))
        .bind(&entry.ip_address)
        .bind(&entry.user_agent)
        .bind(entry.created_at)
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        self.tx.commit().await.map_err(map_sqlx)
    }
}
