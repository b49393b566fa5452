//! Built-in seed set used when the backing store is missing or corrupt.

use chrono::NaiveDate;
use uuid::Uuid;

use laudo_core::property::PropertyCategory;
use laudo_core::sample::ComparableSample;

/// Fixed id of the urban seed sample, stable across reseeds.
pub const URBAN_SEED_ID: Uuid = Uuid::from_u128(0x5eed_0001);

/// Fixed id of the rural seed sample, stable across reseeds.
pub const RURAL_SEED_ID: Uuid = Uuid::from_u128(0x5eed_0002);

/// One urban and one rural example so a fresh install can produce a
/// conclusive valuation out of the box.
pub fn seed_samples() -> Vec<ComparableSample> {
    vec![
        ComparableSample {
            id: URBAN_SEED_ID,
            category: PropertyCategory::Urban,
            title: "Amostra Base Urbana".to_string(),
            address: "Rua Exemplo, 100".to_string(),
            city: "Ribeirão Preto".to_string(),
            state: "SP".to_string(),
            neighborhood: Some("Centro".to_string()),
            price: 500_000.0,
            total_area: 100.0,
            built_area: Some(100.0),
            unit_price: 5000.0,
            date: NaiveDate::from_ymd_opt(2023, 10, 1).expect("valid seed date"),
            source: "Imobiliária Local".to_string(),
            sub_type_or_activity: Some("Apartamento".to_string()),
        },
        ComparableSample {
            id: RURAL_SEED_ID,
            category: PropertyCategory::Rural,
            title: "Amostra Base Rural".to_string(),
            address: "Estrada Rural km 10".to_string(),
            city: "Ribeirão Preto".to_string(),
            state: "SP".to_string(),
            neighborhood: None,
            price: 2_000_000.0,
            total_area: 50.0,
            built_area: None,
            unit_price: 40_000.0,
            date: NaiveDate::from_ymd_opt(2023, 10, 5).expect("valid seed date"),
            source: "Portal Rural".to_string(),
            sub_type_or_activity: Some("Lavoura".to_string()),
        },
    ]
}
