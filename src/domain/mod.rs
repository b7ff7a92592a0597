// src/domain/mod.rs
pub mod audit;
pub mod errors;
pub mod payment;
pub mod property;
pub mod tenancy;
pub mod user;
