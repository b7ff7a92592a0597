// src/application/commands/applications/submit.rs
use super::{ApplicationCommandService, payment_gate};
use crate::application::dto::{ActorContext, TenantApplicationDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::document_store::DocumentUpload;
use crate::domain::audit::{AuditLog, actions};
use crate::domain::property::PropertyId;
use crate::domain::tenancy::{ApplicationDocuments, NewTenantApplication, PersonalInfo};
use rust_decimal::Decimal;
use serde_json::json;

pub struct SubmitApplicationCommand {
    pub property_id: i64,
    pub payment_id: Option<i64>,
    pub digital_consent: bool,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub id_number: String,
    pub id_document_front: DocumentUpload,
    pub id_document_back: DocumentUpload,
    pub signed_agreement: DocumentUpload,
}

impl ApplicationCommandService {
    /// Submit a tenant application. Documents are uploaded before the
    /// transaction opens; the application row and its
    /// `application_submitted` audit entry commit together. A successful
    /// upload followed by a failed commit leaves an orphaned CDN file,
    /// which is accepted and not garbage-collected here.
    pub async fn submit_application(
        &self,
        actor: &ActorContext,
        command: SubmitApplicationCommand,
    ) -> ApplicationResult<TenantApplicationDto> {
        if !command.digital_consent {
            return Err(ApplicationError::validation(
                "Legal digital consent is required",
            ));
        }

        let personal = PersonalInfo::new(
            command.first_name,
            command.last_name,
            command.phone,
            command.id_number,
        )?;

        let property_id = PropertyId::new(command.property_id)?;
        let property = self
            .properties
            .find_by_id(property_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("property not found"))?;

        let payment_id = payment_gate::verify_agreement_fee(
            self.payments.as_ref(),
            &property,
            actor.user.id,
            command.payment_id,
        )
        .await?;

        for (name, document) in [
            ("id_document_front", &command.id_document_front),
            ("id_document_back", &command.id_document_back),
            ("signed_agreement", &command.signed_agreement),
        ] {
            if document.is_empty() {
                return Err(ApplicationError::validation(format!("{name} is required")));
            }
        }

        let front_url = self.kyc_store.put(&command.id_document_front).await?;
        let back_url = self.kyc_store.put(&command.id_document_back).await?;
        let agreement = self.agreement_store.put(&command.signed_agreement).await?;

        let now = self.clock.now();
        let new_application = NewTenantApplication {
            user_id: actor.user.id,
            property_id: property.id,
            personal,
            documents: ApplicationDocuments {
                id_document_front: front_url,
                id_document_back: back_url,
                signed_agreement_url: agreement.primary_url,
                signed_agreement_backup_url: agreement.backup_url,
            },
            digital_consent: true,
            digital_consent_ip: actor.ip_address.clone(),
            payment_id,
            created_at: now,
        };

        let mut tx = self.store.begin().await?;
        let created = tx.insert_application(new_application).await?;

        // Court-ready evidence: the full submission context travels with
        // the audit entry, in the same transaction as the insert.
        let details = json!({
            "tenant_name": created.personal.full_name(),
            "tenant_phone": created.personal.phone,
            "tenant_id_number": created.personal.id_number,
            "property_id": i64::from(property.id),
            "property_title": property.title,
            "property_address": format!("{}, {}", property.address, property.city),
            "agreement_fee": property.tenant_agreement_fee.unwrap_or(Decimal::ZERO),
            "payment_id": payment_id.map(i64::from),
            "digital_consent": true,
            "digital_consent_ip": actor.ip_address,
            "id_front_url": created.documents.id_document_front,
            "id_back_url": created.documents.id_document_back,
            "signed_agreement_url": created.documents.signed_agreement_url,
            "signed_agreement_backup_url": created.documents.signed_agreement_backup_url,
            "submission_timestamp": now,
        });
        tx.append_audit(AuditLog {
            user_id: Some(actor.user.id),
            action: actions::APPLICATION_SUBMITTED.into(),
            resource_type: actions::RESOURCE_APPLICATION.into(),
            resource_id: Some(created.id.into()),
            details,
            ip_address: actor.ip_address.clone(),
            user_agent: actor.user_agent.clone(),
            created_at: now,
        })
        .await?;
        tx.commit().await?;

        tracing::info!(
            application_id = %created.id,
            property_id = %property.id,
            "tenant application submitted"
        );
        Ok(created.into())
    }
}
