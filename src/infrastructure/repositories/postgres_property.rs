// src/infrastructure/repositories/postgres_property.rs
use super::error::map_sqlx;
use super::rows::{PROPERTY_COLUMNS, PropertyRow};
use crate::domain::errors::DomainResult;
use crate::domain::property::{Property, PropertyId, PropertyRepository};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresPropertyRepository {
    pool: PgPool,
}

impl PostgresPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyRepository for PostgresPropertyRepository {
    async fn find_by_id(&self, id: PropertyId) -> DomainResult<Option<Property>> {
        let row = sqlx::query_as::<_, PropertyRow>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Property::try_from).transpose()
    }
}
