// src/domain/audit/mod.rs
pub mod actions;
pub mod entity;

pub use entity::AuditLog;
