// src/application/dto/context.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::user::{Role, UserId};

/// Identity established by the (external) authentication layer.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub name: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn ensure_admin(&self) -> ApplicationResult<()> {
        if self.role.is_admin() {
            Ok(())
        } else {
            Err(ApplicationError::forbidden("Admin access required"))
        }
    }
}

/// Explicit request context threaded through every state-changing
/// operation; replaces ambient request globals so the audit trail always
/// knows who acted and from where.
#[derive(Debug, Clone)]
pub struct ActorContext {
    pub user: AuthenticatedUser,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl ActorContext {
    pub fn new(
        user: AuthenticatedUser,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            user,
            ip_address,
            user_agent,
        }
    }
}
