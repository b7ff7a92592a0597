// src/application/commands/applications/payment_gate.rs
use crate::application::error::ApplicationResult;
use crate::domain::errors::DomainError;
use crate::domain::payment::{PaymentId, PaymentRepository, PaymentStatus};
use crate::domain::property::Property;
use crate::domain::user::UserId;

/// Payment Gate: a fee-gated property requires a completed payment made by
/// the applicant for that property. Fee-free properties ignore any payment
/// reference.
pub(super) async fn verify_agreement_fee(
    payments: &dyn PaymentRepository,
    property: &Property,
    applicant: UserId,
    payment_ref: Option<i64>,
) -> ApplicationResult<Option<PaymentId>> {
    if !property.requires_agreement_fee() {
        return Ok(None);
    }

    let payment_id = match payment_ref {
        Some(id) => PaymentId::new(id).map_err(|_| DomainError::InvalidPayment(
            "payment reference is not a valid id".into(),
        ))?,
        None => return Err(DomainError::PaymentRequired.into()),
    };

    let payment = payments
        .find_by_id(payment_id)
        .await?
        .ok_or_else(|| DomainError::InvalidPayment("payment not found".into()))?;

    if payment.status != PaymentStatus::Completed {
        return Err(DomainError::InvalidPayment(format!(
            "payment is {}, expected completed",
            payment.status
        ))
        .into());
    }
    if payment.property_id != Some(property.id) {
        return Err(
            DomainError::InvalidPayment("payment does not reference this property".into()).into(),
        );
    }
    if payment.user_id != applicant {
        return Err(
            DomainError::InvalidPayment("payment belongs to a different user".into()).into(),
        );
    }

    Ok(Some(payment.id))
}
