// src/domain/tenancy/mod.rs
pub mod entity;
pub mod repository;
pub mod status;

pub use entity::{
    ApplicationDocuments, ApplicationId, NewTenantApplication, PersonalInfo, ReviewUpdate,
    TenantApplication,
};
pub use repository::TenantApplicationRepository;
pub use status::ApplicationStatus;
