// src/domain/property/mod.rs
pub mod entity;
pub mod repository;
pub mod units;

pub use entity::{Property, PropertyId, PropertyStatus};
pub use repository::PropertyRepository;
pub use units::{UnitDescriptor, UnitInventory, VacancyDecrement};
