// src/domain/tenancy/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::payment::PaymentId;
use crate::domain::property::PropertyId;
use crate::domain::tenancy::status::ApplicationStatus;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApplicationId(pub i64);

impl ApplicationId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "application id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ApplicationId> for i64 {
    fn from(value: ApplicationId) -> Self {
        value.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Personal details captured at submission. Immutable afterwards; they are
/// part of the legal evidence trail.
#[derive(Debug, Clone)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub id_number: String,
}

impl PersonalInfo {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        id_number: impl Into<String>,
    ) -> DomainResult<Self> {
        let info = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            id_number: id_number.into(),
        };
        for (field, value) in [
            ("first_name", &info.first_name),
            ("last_name", &info.last_name),
            ("phone", &info.phone),
            ("id_number", &info.id_number),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::Validation(format!("{field} is required")));
            }
        }
        Ok(info)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Stored CDN locations for the three required documents. The agreement may
/// carry a backup URL from the secondary provider.
#[derive(Debug, Clone)]
pub struct ApplicationDocuments {
    pub id_document_front: String,
    pub id_document_back: String,
    pub signed_agreement_url: String,
    pub signed_agreement_backup_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TenantApplication {
    pub id: ApplicationId,
    pub user_id: UserId,
    pub property_id: PropertyId,
    pub personal: PersonalInfo,
    pub documents: ApplicationDocuments,
    pub digital_consent: bool,
    pub digital_consent_ip: Option<String>,
    pub payment_id: Option<PaymentId>,
    pub status: ApplicationStatus,
    pub assigned_unit: Option<String>,
    pub reviewed_by: Option<UserId>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload; the id is assigned by the store inside the submission
/// transaction so the audit entry can reference it before commit.
#[derive(Debug, Clone)]
pub struct NewTenantApplication {
    pub user_id: UserId,
    pub property_id: PropertyId,
    pub personal: PersonalInfo,
    pub documents: ApplicationDocuments,
    pub digital_consent: bool,
    pub digital_consent_ip: Option<String>,
    pub payment_id: Option<PaymentId>,
    pub created_at: DateTime<Utc>,
}

/// The single terminal review action applied to a pending application.
#[derive(Debug, Clone)]
pub struct ReviewUpdate {
    pub id: ApplicationId,
    pub status: ApplicationStatus,
    pub assigned_unit: Option<String>,
    pub rejection_reason: Option<String>,
    pub reviewed_by: UserId,
    pub reviewed_at: DateTime<Utc>,
}
