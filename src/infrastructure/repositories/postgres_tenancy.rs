// src/infrastructure/repositories/postgres_tenancy.rs
use super::error::map_sqlx;
use super::rows::{APPLICATION_COLUMNS, ApplicationRow, PROPERTY_COLUMNS, PropertyRow};
use crate::domain::errors::DomainResult;
use crate::domain::property::Property;
use crate::domain::tenancy::{
    ApplicationStatus, TenantApplication, TenantApplicationRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;

#[derive(Clone)]
pub struct PostgresTenantApplicationRepository {
    pool: PgPool,
}

impl PostgresTenantApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TenantApplicationRepository for PostgresTenantApplicationRepository {
    async fn list_by_user(&self, user_id: UserId) -> DomainResult<Vec<TenantApplication>> {
        let rows = sqlx::query_as::<_, ApplicationRow>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM tenant_applications
             WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(i64::from(user_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(TenantApplication::try_from).collect()
    }

    async fn list_with_property(
        &self,
        status: Option<ApplicationStatus>,
    ) -> DomainResult<Vec<(TenantApplication, Option<Property>)>> {
        let rows = match status {
            Some(status) => sqlx::query_as::<_, ApplicationRow>(&format!(
                "SELECT {APPLICATION_COLUMNS} FROM tenant_applications
                 WHERE status = $1 ORDER BY created_at DESC"
            ))
            .bind(status.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?,
            None => sqlx::query_as::<_, ApplicationRow>(&format!(
                "SELECT {APPLICATION_COLUMNS} FROM tenant_applications
                 ORDER BY created_at DESC"
            ))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?,
        };

        let applications = rows
            .into_iter()
            .map(TenantApplication::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        let property_ids: Vec<i64> = applications
            .iter()
            .map(|application| i64::from(application.property_id))
            .collect();

        let property_rows = sqlx::query_as::<_, PropertyRow>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE id = ANY($1)"
        ))
        .bind(&property_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut properties: HashMap<i64, Property> = HashMap::new();
        for row in property_rows {
            let property = Property::try_from(row)?;
            properties.insert(property.id.into(), property);
        }

        Ok(applications
            .into_iter()
            .map(|application| {
                let property = properties.get(&i64::from(application.property_id)).cloned();
                (application, property)
            })
            .collect())
    }
}
