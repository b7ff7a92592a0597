// src/application/ports/mod.rs
pub mod document_store;
pub mod security;
pub mod store;
pub mod time;
