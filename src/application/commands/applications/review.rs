// src/application/commands/applications/review.rs
use super::ApplicationCommandService;
use crate::application::dto::{ActorContext, ReviewOutcomeDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::audit::{AuditLog, actions};
use crate::domain::property::PropertyStatus;
use crate::domain::tenancy::{ApplicationId, ApplicationStatus, ReviewUpdate};
use serde_json::json;

pub struct ApproveApplicationCommand {
    pub application_id: i64,
    pub assigned_unit: String,
}

pub struct RejectApplicationCommand {
    pub application_id: i64,
    pub reason: Option<String>,
}

impl ApplicationCommandService {
    /// Approve a pending application against a unit type. Within one
    /// transaction, with both the application and the property row locked:
    /// the vacancy is checked and decremented, the property flips to
    /// `rented` when every unit type hits zero, the review fields are set
    /// and the `application_approved` audit entry is appended.
    pub async fn approve_application(
        &self,
        actor: &ActorContext,
        command: ApproveApplicationCommand,
    ) -> ApplicationResult<ReviewOutcomeDto> {
        actor.user.ensure_admin()?;

        let assigned_unit = command.assigned_unit.trim().to_string();
        if assigned_unit.is_empty() {
            return Err(ApplicationError::validation(
                "Assigned unit type is required for approval",
            ));
        }
        let application_id = ApplicationId::new(command.application_id)?;

        let mut tx = self.store.begin().await?;
        let application = tx
            .lock_application(application_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("application not found"))?;
        application.status.ensure_reviewable()?;

        let property = tx
            .lock_property(application.property_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("property not found"))?;

        let decrement = property.units.decrement(&assigned_unit)?;
        let property_status = if decrement.all_occupied {
            PropertyStatus::Rented
        } else {
            property.status
        };
        tx.store_property_units(property.id, &decrement.units, property_status)
            .await?;

        let now = self.clock.now();
        let updated = tx
            .apply_review(ReviewUpdate {
                id: application.id,
                status: ApplicationStatus::Approved,
                assigned_unit: Some(assigned_unit.clone()),
                rejection_reason: None,
                reviewed_by: actor.user.id,
                reviewed_at: now,
            })
            .await?;

        let details = json!({
            "admin_name": actor.user.name,
            "admin_id": i64::from(actor.user.id),
            "tenant_name": updated.personal.full_name(),
            "tenant_phone": updated.personal.phone,
            "tenant_id_number": updated.personal.id_number,
            "property_id": i64::from(property.id),
            "property_title": property.title,
            "assigned_unit": assigned_unit,
            "rejection_reason": null,
            "decision_timestamp": now,
            "property_auto_rented": decrement.all_occupied,
        });
        tx.append_audit(AuditLog {
            user_id: Some(actor.user.id),
            action: actions::APPLICATION_APPROVED.into(),
            resource_type: actions::RESOURCE_APPLICATION.into(),
            resource_id: Some(updated.id.into()),
            details,
            ip_address: actor.ip_address.clone(),
            user_agent: actor.user_agent.clone(),
            created_at: now,
        })
        .await?;
        tx.commit().await?;

        tracing::info!(
            application_id = %updated.id,
            property_id = %property.id,
            auto_rented = decrement.all_occupied,
            "tenant application approved"
        );
        Ok(ReviewOutcomeDto {
            application: updated.into(),
            updated_units: Some(decrement.units),
            property_status: Some(property_status),
        })
    }

    /// Reject a pending application with a reason. No vacancy side effect;
    /// the decision and its reason are still audited in the same
    /// transaction.
    pub async fn reject_application(
        &self,
        actor: &ActorContext,
        command: RejectApplicationCommand,
    ) -> ApplicationResult<ReviewOutcomeDto> {
        actor.user.ensure_admin()?;

        let application_id = ApplicationId::new(command.application_id)?;
        let reason = command.reason.unwrap_or_default();

        let mut tx = self.store.begin().await?;
        let application = tx
            .lock_application(application_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("application not found"))?;
        application.status.ensure_reviewable()?;

        let property_title = self
            .properties
            .find_by_id(application.property_id)
            .await?
            .map(|property| property.title);

        let now = self.clock.now();
        let updated = tx
            .apply_review(ReviewUpdate {
                id: application.id,
                status: ApplicationStatus::Rejected,
                assigned_unit: None,
                rejection_reason: Some(reason.clone()),
                reviewed_by: actor.user.id,
                reviewed_at: now,
            })
            .await?;

        let details = json!({
            "admin_name": actor.user.name,
            "admin_id": i64::from(actor.user.id),
            "tenant_name": updated.personal.full_name(),
            "tenant_phone": updated.personal.phone,
            "tenant_id_number": updated.personal.id_number,
            "property_id": i64::from(updated.property_id),
            "property_title": property_title,
            "assigned_unit": null,
            "rejection_reason": reason,
            "decision_timestamp": now,
            "property_auto_rented": false,
        });
        tx.append_audit(AuditLog {
            user_id: Some(actor.user.id),
            action: actions::APPLICATION_REJECTED.into(),
            resource_type: actions::RESOURCE_APPLICATION.into(),
            resource_id: Some(updated.id.into()),
            details,
            ip_address: actor.ip_address.clone(),
            user_agent: actor.user_agent.clone(),
            created_at: now,
        })
        .await?;
        tx.commit().await?;

        tracing::info!(application_id = %updated.id, "tenant application rejected");
        Ok(ReviewOutcomeDto {
            application: updated.into(),
            updated_units: None,
            property_status: None,
        })
    }
}
