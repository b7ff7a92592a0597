// src/infrastructure/security/token.rs
use crate::application::dto::AuthenticatedUser;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::security::TokenVerifier;
use crate::domain::user::{Role, UserId};
use async_trait::async_trait;
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;

/// Claims minted by the external auth service. Only verification happens
/// here; issuance is out of scope.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    name: String,
    role: Role,
    #[allow(dead_code)]
    exp: usize,
}

pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| ApplicationError::unauthorized(format!("invalid token: {err}")))?;

        let user_id = data
            .claims
            .sub
            .parse::<i64>()
            .ok()
            .and_then(|id| UserId::new(id).ok())
            .ok_or_else(|| ApplicationError::unauthorized("invalid token subject"))?;

        Ok(AuthenticatedUser {
            id: user_id,
            name: data.claims.name,
            role: data.claims.role,
        })
    }
}
