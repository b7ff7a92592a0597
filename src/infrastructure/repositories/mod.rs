// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_payment;
mod postgres_property;
mod postgres_store;
mod postgres_tenancy;
mod rows;

pub use error::map_sqlx;
pub use postgres_payment::PostgresPaymentRepository;
pub use postgres_property::PostgresPropertyRepository;
pub use postgres_store::PostgresWorkflowStore;
pub use postgres_tenancy::PostgresTenantApplicationRepository;
