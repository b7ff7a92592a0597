// src/presentation/http/controllers/applications.rs
use crate::application::{
    commands::applications::{
        ApproveApplicationCommand, RejectApplicationCommand, SubmitApplicationCommand,
    },
    dto::{AdminApplicationDto, TenantApplicationDto},
    ports::document_store::DocumentUpload,
    queries::applications::AdminListQuery,
};
use crate::domain::property::{PropertyStatus, UnitInventory};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Actor;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query, multipart::Field},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: String,
    pub application: TenantApplicationDto,
}

#[derive(Debug, Serialize)]
pub struct MyApplicationsResponse {
    pub applications: Vec<TenantApplicationDto>,
}

#[derive(Debug, Serialize)]
pub struct AdminApplicationsResponse {
    pub applications: Vec<AdminApplicationDto>,
}

#[derive(Debug, Deserialize)]
pub struct AdminListParams {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
    #[serde(default)]
    pub assigned_unit: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateStatusResponse {
    pub message: String,
    pub application: TenantApplicationDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_units: Option<UnitInventory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_status: Option<PropertyStatus>,
}

#[derive(Default)]
struct SubmitForm {
    digital_consent: bool,
    property_id: Option<i64>,
    payment_id: Option<i64>,
    first_name: String,
    last_name: String,
    phone: String,
    id_number: String,
    id_document_front: Option<DocumentUpload>,
    id_document_back: Option<DocumentUpload>,
    signed_agreement: Option<DocumentUpload>,
}

async fn read_document(field: Field<'_>) -> Result<DocumentUpload, HttpError> {
    let filename = field
        .file_name()
        .map(str::to_string)
        .unwrap_or_else(|| "document".to_string());
    let content_type = field
        .content_type()
        .map(str::to_string)
        .unwrap_or_else(|| "application/octet-stream".to_string());
    let bytes = field
        .bytes()
        .await
        .map_err(|err| HttpError::bad_request(format!("failed to read uploaded file: {err}")))?;

    Ok(DocumentUpload {
        filename,
        content_type,
        bytes,
    })
}

// An empty field is treated as absent; anything else must parse.
fn parse_id(value: &str, field_name: &str) -> Result<Option<i64>, HttpError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<i64>()
        .map(Some)
        .map_err(|_| HttpError::bad_request(format!("{field_name} must be a valid integer")))
}

async fn read_text(field: Field<'_>) -> Result<String, HttpError> {
    field
        .text()
        .await
        .map_err(|err| HttpError::bad_request(format!("malformed multipart field: {err}")))
}

async fn parse_submit_form(mut multipart: Multipart) -> Result<SubmitForm, HttpError> {
    let mut form = SubmitForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::bad_request(format!("malformed multipart body: {err}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "digital_consent" => form.digital_consent = read_text(field).await? == "true",
            "property_id" => {
                form.property_id = parse_id(&read_text(field).await?, "property_id")?;
            }
            "payment_id" => {
                form.payment_id = parse_id(&read_text(field).await?, "payment_id")?;
            }
            "first_name" => form.first_name = read_text(field).await?,
            "last_name" => form.last_name = read_text(field).await?,
            "phone" => form.phone = read_text(field).await?,
            "id_number" => form.id_number = read_text(field).await?,
            "id_document_front" => form.id_document_front = Some(read_document(field).await?),
            "id_document_back" => form.id_document_back = Some(read_document(field).await?),
            "signed_agreement" => form.signed_agreement = Some(read_document(field).await?),
            _ => {}
        }
    }

    Ok(form)
}

pub async fn submit_application(
    Extension(state): Extension<HttpState>,
    Actor(actor): Actor,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<SubmitResponse>)> {
    let form = parse_submit_form(multipart).await?;

    let property_id = form
        .property_id
        .ok_or_else(|| HttpError::bad_request("property_id is required"))?;

    let (Some(id_document_front), Some(id_document_back), Some(signed_agreement)) = (
        form.id_document_front,
        form.id_document_back,
        form.signed_agreement,
    ) else {
        return Err(HttpError::bad_request(
            "ID (front and back) and Signed Agreement are required",
        ));
    };

    let command = SubmitApplicationCommand {
        property_id,
        payment_id: form.payment_id,
        digital_consent: form.digital_consent,
        first_name: form.first_name,
        last_name: form.last_name,
        phone: form.phone,
        id_number: form.id_number,
        id_document_front,
        id_document_back,
        signed_agreement,
    };

    let application = state
        .services
        .application_commands
        .submit_application(&actor, command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "Application submitted successfully".into(),
            application,
        }),
    ))
}

pub async fn my_applications(
    Extension(state): Extension<HttpState>,
    Actor(actor): Actor,
) -> HttpResult<Json<MyApplicationsResponse>> {
    let applications = state
        .services
        .application_queries
        .list_mine(&actor)
        .await
        .into_http()?;

    Ok(Json(MyApplicationsResponse { applications }))
}

pub async fn admin_applications(
    Extension(state): Extension<HttpState>,
    Actor(actor): Actor,
    Query(params): Query<AdminListParams>,
) -> HttpResult<Json<AdminApplicationsResponse>> {
    let applications = state
        .services
        .application_queries
        .list_for_admin(
            &actor,
            AdminListQuery {
                status: params.status,
            },
        )
        .await
        .into_http()?;

    Ok(Json(AdminApplicationsResponse { applications }))
}

pub async fn update_application_status(
    Extension(state): Extension<HttpState>,
    Actor(actor): Actor,
    Path(application_id): Path<i64>,
    Json(payload): Json<UpdateStatusRequest>,
) -> HttpResult<Json<UpdateStatusResponse>> {
    let outcome = match payload.status.as_str() {
        "approved" => {
            state
                .services
                .application_commands
                .approve_application(
                    &actor,
                    ApproveApplicationCommand {
                        application_id,
                        assigned_unit: payload.assigned_unit.unwrap_or_default(),
                    },
                )
                .await
        }
        "rejected" => {
            state
                .services
                .application_commands
                .reject_application(
                    &actor,
                    RejectApplicationCommand {
                        application_id,
                        reason: payload.reason,
                    },
                )
                .await
        }
        _ => return Err(HttpError::bad_request("Invalid status")),
    }
    .into_http()?;

    Ok(Json(UpdateStatusResponse {
        message: format!("Application has been {}", payload.status),
        application: outcome.application,
        updated_units: outcome.updated_units,
        property_status: outcome.property_status,
    }))
}
