// src/application/commands/applications/mod.rs
mod payment_gate;
mod review;
mod service;
mod submit;

pub use review::{ApproveApplicationCommand, RejectApplicationCommand};
pub use service::ApplicationCommandService;
pub use submit::SubmitApplicationCommand;
