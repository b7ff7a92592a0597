// src/application/dto/mod.rs
mod applications;
mod context;

pub use applications::{AdminApplicationDto, ReviewOutcomeDto, TenantApplicationDto};
pub use context::{ActorContext, AuthenticatedUser};
