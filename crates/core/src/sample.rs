//! Comparable sample entity and save-time validation.
//!
//! A [`ComparableSample`] is a previously observed market transaction. Its
//! `unit_price` is derived once, when the record is created or replaced,
//! from the price and the reference area (built area when positive, total
//! area otherwise). The store owns the collection; matcher and estimator
//! only read copies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::property::{is_valid_uf, PropertyCategory};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored comparable transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparableSample {
    pub id: Uuid,
    pub category: PropertyCategory,
    /// Short display name, e.g. "Apartamento 3 dorm. Centro".
    pub title: String,
    #[serde(default)]
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub neighborhood: Option<String>,
    /// Transaction or offer price in BRL.
    pub price: f64,
    pub total_area: f64,
    #[serde(default)]
    pub built_area: Option<f64>,
    /// Derived: `price / (built_area > 0 ? built_area : total_area)`.
    pub unit_price: f64,
    /// Observation date of the transaction/offer.
    pub date: NaiveDate,
    /// Where the observation came from (listing portal, broker, ...).
    #[serde(default)]
    pub source: String,
    /// Urban sub-type or rural activity display label, when known.
    /// Absence means "not recorded", which the matcher treats as a pass.
    #[serde(default)]
    pub sub_type_or_activity: Option<String>,
}

// ---------------------------------------------------------------------------
// Input DTO
// ---------------------------------------------------------------------------

/// Caller-supplied fields for creating or fully replacing a sample.
/// `id` and `unit_price` are always computed by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleInput {
    pub category: PropertyCategory,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub neighborhood: Option<String>,
    pub price: f64,
    pub total_area: f64,
    #[serde(default)]
    pub built_area: Option<f64>,
    pub date: NaiveDate,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub sub_type_or_activity: Option<String>,
}

impl SampleInput {
    /// Validate required fields, listing every missing or invalid one.
    ///
    /// Required for every sample: `city`, `state`, `price > 0`,
    /// `total_area > 0`. Urban samples additionally require `address`
    /// and `neighborhood`.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut invalid: Vec<&str> = Vec::new();

        if self.city.trim().is_empty() {
            invalid.push("city");
        }
        if !is_valid_uf(&self.state) {
            invalid.push("state");
        }
        if !(self.price > 0.0) {
            invalid.push("price");
        }
        if !(self.total_area > 0.0) {
            invalid.push("total_area");
        }
        if let Some(built) = self.built_area {
            if built < 0.0 {
                invalid.push("built_area");
            }
        }
        if self.category == PropertyCategory::Urban {
            if self.address.as_deref().unwrap_or("").trim().is_empty() {
                invalid.push("address");
            }
            if self.neighborhood.as_deref().unwrap_or("").trim().is_empty() {
                invalid.push("neighborhood");
            }
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "Missing or invalid fields: {}",
                invalid.join(", ")
            )))
        }
    }

    /// Validate and materialize a stored sample under the given id,
    /// computing `unit_price`.
    pub fn into_sample(self, id: Uuid) -> Result<ComparableSample, CoreError> {
        self.validate()?;
        let unit_price = unit_price(self.price, self.total_area, self.built_area);
        Ok(ComparableSample {
            id,
            category: self.category,
            title: self.title,
            address: self.address.unwrap_or_default(),
            city: self.city,
            state: self.state,
            neighborhood: self.neighborhood,
            price: self.price,
            total_area: self.total_area,
            built_area: self.built_area,
            unit_price,
            date: self.date,
            source: self.source,
            sub_type_or_activity: self.sub_type_or_activity,
        })
    }
}

// ---------------------------------------------------------------------------
// Unit price
// ---------------------------------------------------------------------------

/// Price per reference area unit.
///
/// The divisor is the built area when positive, the total area otherwise.
/// Validation rejects records where both areas are zero, so the final
/// fallback only exists to keep the arithmetic finite; it never silently
/// produces infinity.
pub fn unit_price(price: f64, total_area: f64, built_area: Option<f64>) -> f64 {
    let divisor = match built_area {
        Some(built) if built > 0.0 => built,
        _ => total_area,
    };
    if divisor > 0.0 {
        price / divisor
    } else {
        // Last-resort fallback: divide by 1 rather than produce infinity.
        price
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
