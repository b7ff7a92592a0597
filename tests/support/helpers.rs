// tests/support/helpers.rs
//
// Router-level test rig: the real router and error mapping over the
// in-memory port doubles, driven with `tower::util::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;

use kejani_core::application::ports::document_store::{DocumentStore, DualDocumentStore};
use kejani_core::application::ports::security::TokenVerifier;
use kejani_core::application::ports::store::WorkflowStore;
use kejani_core::application::ports::time::Clock;
use kejani_core::application::services::ApplicationServices;
use kejani_core::domain::{
    payment::PaymentRepository, property::PropertyRepository, tenancy::TenantApplicationRepository,
};
use kejani_core::infrastructure::security::JwtTokenVerifier;
use kejani_core::presentation::http::{routes::build_router, state::HttpState};

use super::builders::base_time;
use super::mocks::{
    FixedClock, InMemoryPaymentRepository, InMemoryPropertyRepository,
    InMemoryTenantApplicationRepository, InMemoryWorkflowStore, InMemoryWorld, MockDocumentStore,
};

pub const TEST_JWT_SECRET: &str = "kejani-e2e-secret";
const MULTIPART_BOUNDARY: &str = "kejani-e2e-boundary";

pub struct TestApp {
    pub world: Arc<InMemoryWorld>,
    pub router: Router,
    pub kyc_store: Arc<MockDocumentStore>,
    pub agreement_primary: Arc<MockDocumentStore>,
    pub agreement_backup: Arc<MockDocumentStore>,
}

pub fn test_app() -> TestApp {
    let world = InMemoryWorld::new();
    let kyc_store = MockDocumentStore::new("https://kyc.cdn.test");
    let agreement_primary = MockDocumentStore::new("https://primary.cdn.test");
    let agreement_backup = MockDocumentStore::new("https://backup.cdn.test");

    let store: Arc<dyn WorkflowStore> = Arc::new(InMemoryWorkflowStore::new(Arc::clone(&world)));
    let application_repo: Arc<dyn TenantApplicationRepository> =
        Arc::new(InMemoryTenantApplicationRepository::new(Arc::clone(&world)));
    let property_repo: Arc<dyn PropertyRepository> =
        Arc::new(InMemoryPropertyRepository::new(Arc::clone(&world)));
    let payment_repo: Arc<dyn PaymentRepository> =
        Arc::new(InMemoryPaymentRepository::new(Arc::clone(&world)));
    let token_verifier: Arc<dyn TokenVerifier> = Arc::new(JwtTokenVerifier::new(TEST_JWT_SECRET));
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(base_time()));

    let services = Arc::new(ApplicationServices::new(
        store,
        application_repo,
        property_repo,
        payment_repo,
        Arc::clone(&kyc_store) as Arc<dyn DocumentStore>,
        DualDocumentStore::new(
            Arc::clone(&agreement_primary) as _,
            Arc::clone(&agreement_backup) as _,
        ),
        token_verifier,
        clock,
    ));
    let router = build_router(HttpState { services });

    TestApp {
        world,
        router,
        kyc_store,
        agreement_primary,
        agreement_backup,
    }
}

fn bearer(user_id: i64, name: &str, role: &str) -> String {
    let claims = serde_json::json!({
        "sub": user_id.to_string(),
        "name": name,
        "role": role,
        "exp": 4_102_444_800_u64,
    });
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("sign test token");
    format!("Bearer {token}")
}

pub fn tenant_bearer(user_id: i64) -> String {
    bearer(user_id, "Grace Wanjiru", "tenant")
}

pub fn admin_bearer(user_id: i64) -> String {
    bearer(user_id, "Amos Otieno", "admin")
}

pub fn get_request(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).expect("build request")
}

pub fn put_json_request(uri: &str, auth: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(header::AUTHORIZATION, auth)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build request")
}

/// Multipart POST to the submission endpoint with the standard three
/// documents attached. `fields` replaces the text fields wholesale.
pub fn submit_request(auth: &str, fields: &[(&str, String)]) -> Request<Body> {
    let mut out = String::new();
    for (name, value) in fields {
        out.push_str(&format!(
            "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; \
             name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    for (name, filename) in [
        ("id_document_front", "id_front.jpg"),
        ("id_document_back", "id_back.jpg"),
        ("signed_agreement", "agreement.pdf"),
    ] {
        out.push_str(&format!(
            "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; \
             name=\"{name}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/pdf\r\n\r\n%PDF-1.4 test document\r\n"
        ));
    }
    out.push_str(&format!("--{MULTIPART_BOUNDARY}--\r\n"));

    Request::builder()
        .method(Method::POST)
        .uri("/api/applications/")
        .header(header::AUTHORIZATION, auth)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(out))
        .expect("build request")
}

pub fn default_submit_fields(property_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("digital_consent", "true".to_string()),
        ("property_id", property_id.to_string()),
        ("first_name", "Grace".to_string()),
        ("last_name", "Wanjiru".to_string()),
        ("phone", "+254700000001".to_string()),
        ("id_number", "30123456".to_string()),
    ]
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Error bodies carry a human-readable `message`; assert on status and a
/// fragment of it.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    message_fragment: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let message = json["message"].as_str().unwrap_or("");
    assert!(
        message.contains(message_fragment),
        "expected message containing {message_fragment:?}, got {message:?}"
    );
}
