// src/domain/audit/actions.rs
//! Controlled vocabulary for audit actions emitted by the application
//! workflow.

pub const APPLICATION_SUBMITTED: &str = "application_submitted";
pub const APPLICATION_APPROVED: &str = "application_approved";
pub const APPLICATION_REJECTED: &str = "application_rejected";

pub const RESOURCE_APPLICATION: &str = "application";
