// src/domain/property/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::property::units::UnitInventory;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyId(pub i64);

impl PropertyId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "property id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PropertyId> for i64 {
    fn from(value: PropertyId) -> Self {
        value.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Listing lifecycle: pending_review -> fee_pending -> active -> rented ->
/// inactive. This core only ever writes the `rented` transition; the rest
/// belong to the listing-review flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    PendingReview,
    FeePending,
    Active,
    Rented,
    Inactive,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::PendingReview => "pending_review",
            PropertyStatus::FeePending => "fee_pending",
            PropertyStatus::Active => "active",
            PropertyStatus::Rented => "rented",
            PropertyStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_review" => Ok(PropertyStatus::PendingReview),
            "fee_pending" => Ok(PropertyStatus::FeePending),
            "active" => Ok(PropertyStatus::Active),
            "rented" => Ok(PropertyStatus::Rented),
            "inactive" => Ok(PropertyStatus::Inactive),
            other => Err(DomainError::Validation(format!(
                "unknown property status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Property {
    pub id: PropertyId,
    pub landlord_id: UserId,
    pub title: String,
    pub city: String,
    pub address: String,
    pub price: Option<Decimal>,
    pub deposit: Option<Decimal>,
    pub tenant_agreement_fee: Option<Decimal>,
    pub units: UnitInventory,
    pub status: PropertyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// True when submission against this property is fee-gated.
    pub fn requires_agreement_fee(&self) -> bool {
        self.tenant_agreement_fee
            .map(|fee| fee > Decimal::ZERO)
            .unwrap_or(false)
    }
}
