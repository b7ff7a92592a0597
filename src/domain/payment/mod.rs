// src/domain/payment/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Payment, PaymentId, PaymentStatus};
pub use repository::PaymentRepository;
