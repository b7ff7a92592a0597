// tests/support/mocks.rs
//
// In-memory doubles for the workflow ports. `InMemoryWorld` holds the
// shared state; the transaction double buffers writes until commit and
// emulates `SELECT ... FOR UPDATE` with per-row async mutexes, so the
// concurrency tests exercise the same serialization the Postgres store
// relies on.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex as RowMutex, OwnedMutexGuard};

use kejani_core::application::error::{ApplicationError, ApplicationResult};
use kejani_core::application::ports::document_store::{DocumentStore, DocumentUpload};
use kejani_core::application::ports::store::{WorkflowStore, WorkflowTx};
use kejani_core::application::ports::time::Clock;
use kejani_core::domain::audit::AuditLog;
use kejani_core::domain::errors::{DomainError, DomainResult};
use kejani_core::domain::payment::{Payment, PaymentId, PaymentRepository};
use kejani_core::domain::property::{
    Property, PropertyId, PropertyRepository, PropertyStatus, UnitInventory,
};
use kejani_core::domain::tenancy::{
    ApplicationId, ApplicationStatus, NewTenantApplication, ReviewUpdate, TenantApplication,
    TenantApplicationRepository,
};
use kejani_core::domain::user::UserId;

#[derive(Default)]
struct WorldState {
    applications: HashMap<i64, TenantApplication>,
    properties: HashMap<i64, Property>,
    payments: HashMap<i64, Payment>,
    audit: Vec<AuditLog>,
    next_application_id: i64,
}

/// Shared backing store for every in-memory port double in one test.
pub struct InMemoryWorld {
    state: Mutex<WorldState>,
    row_locks: Mutex<HashMap<(&'static str, i64), Arc<RowMutex<()>>>>,
    fail_audit: AtomicBool,
}

impl InMemoryWorld {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(WorldState {
                next_application_id: 1,
                ..WorldState::default()
            }),
            row_locks: Mutex::new(HashMap::new()),
            fail_audit: AtomicBool::new(false),
        })
    }

    /// Make the next `append_audit` calls fail, to verify that the whole
    /// transaction rolls back with them.
    pub fn fail_audit_writes(&self) {
        self.fail_audit.store(true, Ordering::SeqCst);
    }

    pub fn insert_property(&self, property: Property) {
        let mut state = self.state.lock().unwrap();
        state.properties.insert(property.id.into(), property);
    }

    pub fn insert_payment(&self, payment: Payment) {
        let mut state = self.state.lock().unwrap();
        state.payments.insert(payment.id.into(), payment);
    }

    pub fn insert_application(&self, application: TenantApplication) {
        let mut state = self.state.lock().unwrap();
        let id = i64::from(application.id);
        state.next_application_id = state.next_application_id.max(id + 1);
        state.applications.insert(id, application);
    }

    pub fn application(&self, id: i64) -> Option<TenantApplication> {
        self.state.lock().unwrap().applications.get(&id).cloned()
    }

    pub fn application_count(&self) -> usize {
        self.state.lock().unwrap().applications.len()
    }

    pub fn property(&self, id: i64) -> Option<Property> {
        self.state.lock().unwrap().properties.get(&id).cloned()
    }

    pub fn audit_entries(&self) -> Vec<AuditLog> {
        self.state.lock().unwrap().audit.clone()
    }

    fn row_lock(&self, table: &'static str, id: i64) -> Arc<RowMutex<()>> {
        let mut locks = self.row_locks.lock().unwrap();
        Arc::clone(locks.entry((table, id)).or_default())
    }
}

enum Mutation {
    InsertApplication(TenantApplication),
    UpdateApplication(TenantApplication),
    UpdateProperty {
        id: i64,
        units: UnitInventory,
        status: PropertyStatus,
    },
    AppendAudit(AuditLog),
}

pub struct InMemoryWorkflowStore {
    world: Arc<InMemoryWorld>,
}

impl InMemoryWorkflowStore {
    pub fn new(world: Arc<InMemoryWorld>) -> Self {
        Self { world }
    }
}

#[async_trait]
impl WorkflowStore for InMemoryWorkflowStore {
    async fn begin(&self) -> DomainResult<Box<dyn WorkflowTx>> {
        Ok(Box::new(InMemoryTx {
            world: Arc::clone(&self.world),
            pending: Vec::new(),
            row_guards: Vec::new(),
        }))
    }
}

/// Buffers every write until `commit`; dropping the value discards them,
/// matching the rollback-on-drop contract of the real store. Row guards
/// are released only when the transaction value is dropped, i.e. after
/// the buffered writes have been applied.
struct InMemoryTx {
    world: Arc<InMemoryWorld>,
    pending: Vec<Mutation>,
    row_guards: Vec<OwnedMutexGuard<()>>,
}

#[async_trait]
impl WorkflowTx for InMemoryTx {
    async fn insert_application(
        &mut self,
        application: NewTenantApplication,
    ) -> DomainResult<TenantApplication> {
        let id = {
            let mut state = self.world.state.lock().unwrap();
            let id = state.next_application_id;
            state.next_application_id += 1;
            id
        };
        let created = TenantApplication {
            id: ApplicationId::new(id)?,
            user_id: application.user_id,
            property_id: application.property_id,
            personal: application.personal,
            documents: application.documents,
            digital_consent: application.digital_consent,
            digital_consent_ip: application.digital_consent_ip,
            payment_id: application.payment_id,
            status: ApplicationStatus::PendingApproval,
            assigned_unit: None,
            reviewed_by: None,
            reviewed_at: None,
            rejection_reason: None,
            created_at: application.created_at,
            updated_at: application.created_at,
        };
        self.pending
            .push(Mutation::InsertApplication(created.clone()));
        Ok(created)
    }

    async fn lock_application(
        &mut self,
        id: ApplicationId,
    ) -> DomainResult<Option<TenantApplication>> {
        let lock = self.world.row_lock("tenant_applications", id.into());
        let guard = lock.lock_owned().await;
        self.row_guards.push(guard);
        Ok(self.world.application(id.into()))
    }

    async fn lock_property(&mut self, id: PropertyId) -> DomainResult<Option<Property>> {
        let lock = self.world.row_lock("properties", id.into());
        let guard = lock.lock_owned().await;
        self.row_guards.push(guard);
        Ok(self.world.property(id.into()))
    }

    async fn apply_review(&mut self, update: ReviewUpdate) -> DomainResult<TenantApplication> {
        let mut application = self
            .world
            .application(update.id.into())
            .ok_or_else(|| DomainError::NotFound("application not found".into()))?;
        application.status = update.status;
        application.assigned_unit = update.assigned_unit;
        application.rejection_reason = update.rejection_reason;
        application.reviewed_by = Some(update.reviewed_by);
        application.reviewed_at = Some(update.reviewed_at);
        application.updated_at = update.reviewed_at;
        self.pending
            .push(Mutation::UpdateApplication(application.clone()));
        Ok(application)
    }

    async fn store_property_units(
        &mut self,
        id: PropertyId,
        units: &UnitInventory,
        status: PropertyStatus,
    ) -> DomainResult<()> {
        self.pending.push(Mutation::UpdateProperty {
            id: id.into(),
            units: units.clone(),
            status,
        });
        Ok(())
    }

    async fn append_audit(&mut self, entry: AuditLog) -> DomainResult<()> {
        if self.world.fail_audit.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("audit insert failed".into()));
        }
        self.pending.push(Mutation::AppendAudit(entry));
        Ok(())
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let mut state = self.world.state.lock().unwrap();
        for mutation in &self.pending {
            match mutation {
                Mutation::InsertApplication(application)
                | Mutation::UpdateApplication(application) => {
                    state
                        .applications
                        .insert(application.id.into(), application.clone());
                }
                Mutation::UpdateProperty { id, units, status } => {
                    if let Some(property) = state.properties.get_mut(id) {
                        property.units = units.clone();
                        property.status = *status;
                    }
                }
                Mutation::AppendAudit(entry) => state.audit.push(entry.clone()),
            }
        }
        Ok(())
    }
}

pub struct InMemoryPropertyRepository {
    world: Arc<InMemoryWorld>,
}

impl InMemoryPropertyRepository {
    pub fn new(world: Arc<InMemoryWorld>) -> Self {
        Self { world }
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn find_by_id(&self, id: PropertyId) -> DomainResult<Option<Property>> {
        Ok(self.world.property(id.into()))
    }
}

pub struct InMemoryPaymentRepository {
    world: Arc<InMemoryWorld>,
}

impl InMemoryPaymentRepository {
    pub fn new(world: Arc<InMemoryWorld>) -> Self {
        Self { world }
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn find_by_id(&self, id: PaymentId) -> DomainResult<Option<Payment>> {
        let state = self.world.state.lock().unwrap();
        Ok(state.payments.get(&i64::from(id)).cloned())
    }
}

pub struct InMemoryTenantApplicationRepository {
    world: Arc<InMemoryWorld>,
}

impl InMemoryTenantApplicationRepository {
    pub fn new(world: Arc<InMemoryWorld>) -> Self {
        Self { world }
    }
}

#[async_trait]
impl TenantApplicationRepository for InMemoryTenantApplicationRepository {
    async fn list_by_user(&self, user_id: UserId) -> DomainResult<Vec<TenantApplication>> {
        let state = self.world.state.lock().unwrap();
        let mut applications: Vec<_> = state
            .applications
            .values()
            .filter(|application| application.user_id == user_id)
            .cloned()
            .collect();
        applications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(applications)
    }

    async fn list_with_property(
        &self,
        status: Option<ApplicationStatus>,
    ) -> DomainResult<Vec<(TenantApplication, Option<Property>)>> {
        let state = self.world.state.lock().unwrap();
        let mut applications: Vec<_> = state
            .applications
            .values()
            .filter(|application| status.is_none_or(|wanted| application.status == wanted))
            .cloned()
            .collect();
        applications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(applications
            .into_iter()
            .map(|application| {
                let property = state
                    .properties
                    .get(&i64::from(application.property_id))
                    .cloned();
                (application, property)
            })
            .collect())
    }
}

/// Document-store double. Records every upload and can be flipped into a
/// failing state to drive the dual-provider fallback paths.
pub struct MockDocumentStore {
    base_url: String,
    fail: AtomicBool,
    uploads: Mutex<Vec<String>>,
}

impl MockDocumentStore {
    pub fn new(base_url: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            base_url: base_url.into(),
            fail: AtomicBool::new(false),
            uploads: Mutex::new(Vec::new()),
        })
    }

    pub fn fail_uploads(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn uploaded_filenames(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn put(&self, document: &DocumentUpload) -> ApplicationResult<String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure("provider unavailable"));
        }
        self.uploads.lock().unwrap().push(document.filename.clone());
        Ok(format!("{}/{}", self.base_url, document.filename))
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
