// src/domain/property/units.rs
use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One unit type offered by a property. Serialized camelCase because the
/// stored JSON shape is shared with the web frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDescriptor {
    #[serde(rename = "type")]
    pub unit_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(rename = "vacantCount", default)]
    pub vacant_count: i32,
    #[serde(rename = "totalCount", default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
}

/// Outcome of a successful vacancy decrement.
#[derive(Debug, Clone)]
pub struct VacancyDecrement {
    pub units: UnitInventory,
    /// True when, after the decrement, every unit type has zero vacancies.
    /// The property then auto-transitions to `rented`.
    pub all_occupied: bool,
}

/// The per-unit-type vacancy ledger embedded in a property. Counts are
/// validated non-negative at the boundary; mutation happens only through
/// [`UnitInventory::decrement`] on the approval path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitInventory(Vec<UnitDescriptor>);

impl UnitInventory {
    pub fn new(units: Vec<UnitDescriptor>) -> DomainResult<Self> {
        for unit in &units {
            if unit.unit_type.trim().is_empty() {
                return Err(DomainError::Validation(
                    "unit type name cannot be empty".into(),
                ));
            }
            if unit.vacant_count < 0 {
                return Err(DomainError::Validation(format!(
                    "vacant count for unit type \"{}\" cannot be negative",
                    unit.unit_type
                )));
            }
        }
        Ok(Self(units))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn descriptors(&self) -> &[UnitDescriptor] {
        &self.0
    }

    pub fn all_occupied(&self) -> bool {
        self.0.iter().all(|unit| unit.vacant_count <= 0)
    }

    /// Take one vacancy from the named unit type and report whether the
    /// property is now fully occupied. The check-and-decrement is a single
    /// step; callers hold the property row lock for its whole duration.
    pub fn decrement(&self, unit_type: &str) -> DomainResult<VacancyDecrement> {
        let mut units = self.0.clone();
        let unit = units
            .iter_mut()
            .find(|unit| unit.unit_type == unit_type)
            .ok_or_else(|| DomainError::UnitTypeNotFound(unit_type.to_string()))?;

        if unit.vacant_count <= 0 {
            return Err(DomainError::NoVacancy(unit_type.to_string()));
        }
        unit.vacant_count -= 1;

        let updated = Self(units);
        let all_occupied = updated.all_occupied();
        Ok(VacancyDecrement {
            units: updated,
            all_occupied,
        })
    }
}
