// tests/support/builders.rs
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use kejani_core::application::commands::applications::{
    ApplicationCommandService, SubmitApplicationCommand,
};
use kejani_core::application::dto::{ActorContext, AuthenticatedUser};
use kejani_core::application::ports::document_store::{DocumentUpload, DualDocumentStore};
use kejani_core::application::queries::applications::ApplicationQueryService;
use kejani_core::domain::payment::{Payment, PaymentId, PaymentStatus};
use kejani_core::domain::property::{
    Property, PropertyId, PropertyStatus, UnitDescriptor, UnitInventory,
};
use kejani_core::domain::tenancy::{
    ApplicationDocuments, ApplicationId, ApplicationStatus, PersonalInfo, TenantApplication,
};
use kejani_core::domain::user::{Role, UserId};

use super::mocks::{
    FixedClock, InMemoryPaymentRepository, InMemoryPropertyRepository,
    InMemoryTenantApplicationRepository, InMemoryWorkflowStore, InMemoryWorld, MockDocumentStore,
};

static BASE_TIME: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());

pub fn base_time() -> DateTime<Utc> {
    *BASE_TIME
}

/// Full command/query stack over one [`InMemoryWorld`].
pub struct TestHarness {
    pub world: Arc<InMemoryWorld>,
    pub commands: Arc<ApplicationCommandService>,
    pub queries: ApplicationQueryService,
    pub kyc_store: Arc<MockDocumentStore>,
    pub agreement_primary: Arc<MockDocumentStore>,
    pub agreement_backup: Arc<MockDocumentStore>,
}

pub fn harness() -> TestHarness {
    let world = InMemoryWorld::new();
    let kyc_store = MockDocumentStore::new("https://kyc.cdn.test");
    let agreement_primary = MockDocumentStore::new("https://primary.cdn.test");
    let agreement_backup = MockDocumentStore::new("https://backup.cdn.test");

    let commands = Arc::new(ApplicationCommandService::new(
        Arc::new(InMemoryWorkflowStore::new(Arc::clone(&world))),
        Arc::new(InMemoryPropertyRepository::new(Arc::clone(&world))),
        Arc::new(InMemoryPaymentRepository::new(Arc::clone(&world))),
        Arc::clone(&kyc_store) as _,
        DualDocumentStore::new(
            Arc::clone(&agreement_primary) as _,
            Arc::clone(&agreement_backup) as _,
        ),
        Arc::new(FixedClock(base_time())),
    ));
    let queries = ApplicationQueryService::new(Arc::new(InMemoryTenantApplicationRepository::new(
        Arc::clone(&world),
    )));

    TestHarness {
        world,
        commands,
        queries,
        kyc_store,
        agreement_primary,
        agreement_backup,
    }
}

pub fn unit(unit_type: &str, vacant: i32) -> UnitDescriptor {
    UnitDescriptor {
        unit_type: unit_type.into(),
        price: Some(Decimal::from(15_000)),
        vacant_count: vacant,
        total_count: None,
    }
}

pub fn active_property(id: i64, units: Vec<UnitDescriptor>) -> Property {
    Property {
        id: PropertyId::new(id).unwrap(),
        landlord_id: UserId::new(900).unwrap(),
        title: format!("Makao Court {id}"),
        city: "Nairobi".into(),
        address: "12 Riverside Drive".into(),
        price: Some(Decimal::from(15_000)),
        deposit: Some(Decimal::from(15_000)),
        tenant_agreement_fee: None,
        units: UnitInventory::new(units).unwrap(),
        status: PropertyStatus::Active,
        created_at: base_time() - Duration::days(30),
        updated_at: base_time() - Duration::days(30),
    }
}

pub fn fee_property(id: i64, fee: i64, units: Vec<UnitDescriptor>) -> Property {
    Property {
        tenant_agreement_fee: Some(Decimal::from(fee)),
        ..active_property(id, units)
    }
}

pub fn completed_payment(id: i64, user_id: i64, property_id: i64) -> Payment {
    payment_with_status(id, user_id, Some(property_id), PaymentStatus::Completed)
}

pub fn payment_with_status(
    id: i64,
    user_id: i64,
    property_id: Option<i64>,
    status: PaymentStatus,
) -> Payment {
    Payment {
        id: PaymentId::new(id).unwrap(),
        user_id: UserId::new(user_id).unwrap(),
        property_id: property_id.map(|id| PropertyId::new(id).unwrap()),
        amount: Decimal::from(500),
        status,
        phone_number: Some("+254700000001".into()),
        receipt_number: Some(format!("RCP{id:06}")),
        created_at: base_time() - Duration::hours(1),
        completed_at: matches!(status, PaymentStatus::Completed)
            .then(|| base_time() - Duration::minutes(30)),
    }
}

pub fn tenant(id: i64) -> ActorContext {
    ActorContext::new(
        AuthenticatedUser {
            id: UserId::new(id).unwrap(),
            name: "Grace Wanjiru".into(),
            role: Role::Tenant,
        },
        Some("203.0.113.7".into()),
        Some("integration-tests/1.0".into()),
    )
}

pub fn admin(id: i64) -> ActorContext {
    ActorContext::new(
        AuthenticatedUser {
            id: UserId::new(id).unwrap(),
            name: "Amos Otieno".into(),
            role: Role::Admin,
        },
        Some("198.51.100.4".into()),
        Some("integration-tests/1.0".into()),
    )
}

pub fn document(filename: &str) -> DocumentUpload {
    DocumentUpload {
        filename: filename.into(),
        content_type: "application/pdf".into(),
        bytes: bytes::Bytes::from_static(b"%PDF-1.4 test document"),
    }
}

pub fn empty_document(filename: &str) -> DocumentUpload {
    DocumentUpload {
        filename: filename.into(),
        content_type: "application/pdf".into(),
        bytes: bytes::Bytes::new(),
    }
}

pub fn submit_command(property_id: i64, payment_id: Option<i64>) -> SubmitApplicationCommand {
    SubmitApplicationCommand {
        property_id,
        payment_id,
        digital_consent: true,
        first_name: "Grace".into(),
        last_name: "Wanjiru".into(),
        phone: "+254700000001".into(),
        id_number: "30123456".into(),
        id_document_front: document("id_front.jpg"),
        id_document_back: document("id_back.jpg"),
        signed_agreement: document("agreement.pdf"),
    }
}

/// A submitted application awaiting review, inserted directly into the
/// world. `created_at` is offset by the id so listing order is stable.
pub fn pending_application(id: i64, user_id: i64, property_id: i64) -> TenantApplication {
    TenantApplication {
        id: ApplicationId::new(id).unwrap(),
        user_id: UserId::new(user_id).unwrap(),
        property_id: PropertyId::new(property_id).unwrap(),
        personal: PersonalInfo::new("Grace", "Wanjiru", "+254700000001", "30123456").unwrap(),
        documents: ApplicationDocuments {
            id_document_front: "https://kyc.cdn.test/id_front.jpg".into(),
            id_document_back: "https://kyc.cdn.test/id_back.jpg".into(),
            signed_agreement_url: "https://primary.cdn.test/agreement.pdf".into(),
            signed_agreement_backup_url: Some("https://backup.cdn.test/agreement.pdf".into()),
        },
        digital_consent: true,
        digital_consent_ip: Some("203.0.113.7".into()),
        payment_id: None,
        status: ApplicationStatus::PendingApproval,
        assigned_unit: None,
        reviewed_by: None,
        reviewed_at: None,
        rejection_reason: None,
        created_at: base_time() - Duration::days(1) + Duration::minutes(id),
        updated_at: base_time() - Duration::days(1) + Duration::minutes(id),
    }
}
