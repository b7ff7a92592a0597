// src/application/commands/applications/service.rs
use std::sync::Arc;

use crate::application::ports::{
    document_store::{DocumentStore, DualDocumentStore},
    store::WorkflowStore,
    time::Clock,
};
use crate::domain::{payment::PaymentRepository, property::PropertyRepository};

/// Drives the tenant-application state machine: submission, approval and
/// rejection, including the vacancy-ledger and audit-ledger side effects.
pub struct ApplicationCommandService {
    pub(super) store: Arc<dyn WorkflowStore>,
    pub(super) properties: Arc<dyn PropertyRepository>,
    pub(super) payments: Arc<dyn PaymentRepository>,
    pub(super) kyc_store: Arc<dyn DocumentStore>,
    pub(super) agreement_store: DualDocumentStore,
    pub(super) clock: Arc<dyn Clock>,
}

impl ApplicationCommandService {
    pub fn new(
        store: Arc<dyn WorkflowStore>,
        properties: Arc<dyn PropertyRepository>,
        payments: Arc<dyn PaymentRepository>,
        kyc_store: Arc<dyn DocumentStore>,
        agreement_store: DualDocumentStore,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            properties,
            payments,
            kyc_store,
            agreement_store,
            clock,
        }
    }
}
