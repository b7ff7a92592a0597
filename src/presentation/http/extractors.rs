// src/presentation/http/extractors.rs
use crate::{
    application::{dto::ActorContext, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Authenticated caller plus the request context (IP, user agent) every
/// state-changing operation carries into the audit trail.
#[derive(Debug, Clone)]
pub struct Actor(pub ActorContext);

impl FromRequestParts<()> for Actor {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::Unauthorized(
                    "missing Authorization header".into(),
                ))
            })?;

        let verifier = app_state.services.token_verifier();
        let user = verifier
            .authenticate(header.token())
            .await
            .map_err(HttpError::from_error)?;

        let ip_address = client_ip(parts);
        let user_agent = parts
            .headers
            .get(axum::http::header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        Ok(Self(ActorContext::new(user, ip_address, user_agent)))
    }
}

fn client_ip(parts: &Parts) -> Option<String> {
    let forwarded = parts
        .headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        // first hop is the client
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string());

    forwarded.or_else(|| {
        parts
            .headers
            .get("x-real-ip")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string())
    })
}
