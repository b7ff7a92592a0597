// src/infrastructure/repositories/rows.rs
//! Row types shared between the read repositories and the workflow
//! transaction, with their mappings into domain entities.

use crate::domain::errors::DomainError;
use crate::domain::payment::{Payment, PaymentId, PaymentStatus};
use crate::domain::property::{Property, PropertyId, PropertyStatus, UnitInventory};
use crate::domain::tenancy::{
    ApplicationDocuments, ApplicationId, ApplicationStatus, PersonalInfo, TenantApplication,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use sqlx::types::Json;

pub const APPLICATION_COLUMNS: &str = "id, user_id, property_id, first_name, last_name, phone, \
     id_number, id_document_front, id_document_back, signed_agreement_url, \
     signed_agreement_backup_url, digital_consent, digital_consent_ip, payment_id, status, \
     assigned_unit, reviewed_by, reviewed_at, rejection_reason, created_at, updated_at";

pub const PROPERTY_COLUMNS: &str = "id, landlord_id, title, city, address, price, deposit, \
     tenant_agreement_fee, units, status, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ApplicationRow {
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
    pub signed_agreement_backup_url: Option<String>,
    pub digital_consent: bool,
    pub digital_consent_ip: Option<String>,
    pub payment_id: Option<i64>,
    pub status: String,
    pub assigned_unit: Option<String>,
    pub reviewed_by: Option<i64>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ApplicationRow> for TenantApplication {
    type Error = DomainError;

    fn try_from(row: ApplicationRow) -> Result<Self, Self::Error> {
        Ok(TenantApplication {
            id: ApplicationId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            property_id: PropertyId::new(row.property_id)?,
            personal: PersonalInfo::new(row.first_name, row.last_name, row.phone, row.id_number)?,
            documents: ApplicationDocuments {
                id_document_front: row.id_document_front,
                id_document_back: row.id_document_back,
                signed_agreement_url: row.signed_agreement_url,
                signed_agreement_backup_url: row.signed_agreement_backup_url,
            },
            digital_consent: row.digital_consent,
            digital_consent_ip: row.digital_consent_ip,
            payment_id: row.payment_id.map(PaymentId::new).transpose()?,
            status: row.status.parse::<ApplicationStatus>()?,
            assigned_unit: row.assigned_unit,
            reviewed_by: row.reviewed_by.map(UserId::new).transpose()?,
            reviewed_at: row.reviewed_at,
            rejection_reason: row.rejection_reason,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct PropertyRow {
    pub id: i64,
    pub landlord_id: i64,
    pub title: String,
    pub city: String,
    pub address: String,
    pub price: Option<Decimal>,
    pub deposit: Option<Decimal>,
    pub tenant_agreement_fee: Option<Decimal>,
    pub units: Json<Vec<crate::domain::property::UnitDescriptor>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PropertyRow> for Property {
    type Error = DomainError;

    fn try_from(row: PropertyRow) -> Result<Self, Self::Error> {
        Ok(Property {
            id: PropertyId::new(row.id)?,
            landlord_id: UserId::new(row.landlord_id)?,
            title: row.title,
            city: row.city,
            address: row.address,
            price: row.price,
            deposit: row.deposit,
            tenant_agreement_fee: row.tenant_agreement_fee,
            units: UnitInventory::new(row.units.0)?,
            status: row.status.parse::<PropertyStatus>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct PaymentRow {
    pub id: i64,
    pub user_id: i64,
    pub property_id: Option<i64>,
    pub amount: Decimal,
    pub status: String,
    pub phone_number: Option<String>,
    pub receipt_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = DomainError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        Ok(Payment {
            id: PaymentId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            property_id: row.property_id.map(PropertyId::new).transpose()?,
            amount: row.amount,
            status: row.status.parse()?,
            phone_number: row.phone_number,
            receipt_number: row.receipt_number,
            created_at: row.created_at,
            completed_at: row.completed_at,
        })
    }
}
