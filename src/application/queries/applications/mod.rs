// src/application/queries/applications/mod.rs
mod list;
mod service;

pub use list::AdminListQuery;
pub use service::ApplicationQueryService;
