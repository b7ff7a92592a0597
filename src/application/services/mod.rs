// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    commands::applications::ApplicationCommandService,
    ports::{
        document_store::{DocumentStore, DualDocumentStore},
        security::TokenVerifier,
        store::WorkflowStore,
        time::Clock,
    },
    queries::applications::ApplicationQueryService,
};
use crate::domain::{
    payment::PaymentRepository, property::PropertyRepository, tenancy::TenantApplicationRepository,
};

pub struct ApplicationServices {
    pub application_commands: Arc<ApplicationCommandService>,
    pub application_queries: Arc<ApplicationQueryService>,
    token_verifier: Arc<dyn TokenVerifier>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        store: Arc<dyn WorkflowStore>,
        application_repo: Arc<dyn TenantApplicationRepository>,
        property_repo: Arc<dyn PropertyRepository>,
        payment_repo: Arc<dyn PaymentRepository>,
        kyc_store: Arc<dyn DocumentStore>,
        agreement_store: DualDocumentStore,
        token_verifier: Arc<dyn TokenVerifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let application_commands = Arc::new(ApplicationCommandService::new(
            store,
            Arc::clone(&property_repo),
            payment_repo,
            kyc_store,
            agreement_store,
            clock,
        ));
        let application_queries = Arc::new(ApplicationQueryService::new(application_repo));

        Self {
            application_commands,
            application_queries,
            token_verifier,
        }
    }

    pub fn token_verifier(&self) -> Arc<dyn TokenVerifier> {
        Arc::clone(&self.token_verifier)
    }
}
