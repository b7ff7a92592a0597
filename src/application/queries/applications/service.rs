// src/application/queries/applications/service.rs
use std::sync::Arc;

use crate::domain::tenancy::TenantApplicationRepository;

pub struct ApplicationQueryService {
    pub(super) applications: Arc<dyn TenantApplicationRepository>,
}

impl ApplicationQueryService {
    pub fn new(applications: Arc<dyn TenantApplicationRepository>) -> Self {
        Self { applications }
    }
}
