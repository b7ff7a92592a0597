// src/application/dto/applications.rs
use crate::domain::property::{PropertyStatus, UnitInventory};
use crate::domain::tenancy::{ApplicationStatus, TenantApplication};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TenantApplicationDto {
    pub id: i64,
    pub user_id: i64,
    pub property_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub id_number: String,
    pub id_document_front: String,
    pub id_document_back: String,
    pub signed_agreement_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_agreement_backup_url: Option<String>,
    pub digital_consent: bool,
    pub status: ApplicationStatus,
    pub payment_id: Option<i64>,
    pub assigned_unit: Option<String>,
    pub rejection_reason: Option<String>,
    pub reviewed_by: Option<i64>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TenantApplication> for TenantApplicationDto {
    fn from(app: TenantApplication) -> Self {
        Self {
            id: app.id.into(),
            user_id: app.user_id.into(),
            property_id: app.property_id.into(),
            first_name: app.personal.first_name,
            last_name: app.personal.last_name,
            phone: app.personal.phone,
            id_number: app.personal.id_number,
            id_document_front: app.documents.id_document_front,
            id_document_back: app.documents.id_document_back,
            signed_agreement_url: app.documents.signed_agreement_url,
            signed_agreement_backup_url: app.documents.signed_agreement_backup_url,
            digital_consent: app.digital_consent,
            status: app.status,
            payment_id: app.payment_id.map(Into::into),
            assigned_unit: app.assigned_unit,
            rejection_reason: app.rejection_reason,
            reviewed_by: app.reviewed_by.map(Into::into),
            reviewed_at: app.reviewed_at,
            created_at: app.created_at,
            updated_at: app.updated_at,
        }
    }
}

/// Admin listing item: the application plus the vacancy data the approval
/// modal needs for unit assignment.
#[derive(Debug, Clone, Serialize)]
pub struct AdminApplicationDto {
    #[serde(flatten)]
    pub application: TenantApplicationDto,
    pub property_units: UnitInventory,
    pub property_city: Option<String>,
}

/// Result of an approve/reject decision. Vacancy fields are present only
/// when the property record changed.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewOutcomeDto {
    pub application: TenantApplicationDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_units: Option<UnitInventory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_status: Option<PropertyStatus>,
}
