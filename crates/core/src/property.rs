//! Subject property model: category, closed attribute vocabularies, and
//! request-time validation.
//!
//! A [`SubjectProperty`] is created transiently per valuation request and is
//! never persisted. The category-specific attributes live in an exclusive
//! payload per category ([`CategoryDetails`]) rather than a flat bag of
//! optionals, so an urban subject cannot carry rural gradings and vice versa.
//!
//! Display labels are pt-BR because reports are rendered in that locale;
//! serialized names are `snake_case` English.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The two supported property natures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCategory {
    Urban,
    Rural,
}

impl PropertyCategory {
    /// Report heading label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Urban => "URBANO",
            Self::Rural => "RURAL",
        }
    }

    /// Area unit for this category: square metres for urban, hectares
    /// for rural.
    pub fn area_unit(self) -> &'static str {
        match self {
            Self::Urban => "m²",
            Self::Rural => "ha",
        }
    }
}

// ---------------------------------------------------------------------------
// Brazilian state codes
// ---------------------------------------------------------------------------

/// The 27 Brazilian federative unit (UF) codes.
pub const BRAZIL_STATES: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// Whether `uf` is a valid Brazilian state code (exact, upper-case match).
pub fn is_valid_uf(uf: &str) -> bool {
    BRAZIL_STATES.contains(&uf)
}

// ---------------------------------------------------------------------------
// Urban vocabularies
// ---------------------------------------------------------------------------

/// Urban property sub-types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrbanSubType {
    Apartment,
    House,
    TwoStoryHouse,
    CommercialBuilding,
}

impl UrbanSubType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartamento",
            Self::House => "Casa",
            Self::TwoStoryHouse => "Sobrado",
            Self::CommercialBuilding => "Prédio Comercial",
        }
    }
}

/// Conservation state of an urban building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConservationGrade {
    New,
    Good,
    Fair,
    NeedsRepairs,
    Bad,
}

impl ConservationGrade {
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "Novo",
            Self::Good => "Bom",
            Self::Fair => "Regular",
            Self::NeedsRepairs => "Precisa de Reparos",
            Self::Bad => "Ruim",
        }
    }
}

// ---------------------------------------------------------------------------
// Rural vocabularies
// ---------------------------------------------------------------------------

/// Predominant economic activity of a rural property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuralActivity {
    Cropland,
    Pasture,
    Forest,
    PreservationArea,
}

impl RuralActivity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Cropland => "Lavoura",
            Self::Pasture => "Pasto",
            Self::Forest => "Floresta",
            Self::PreservationArea => "Área de Preservação",
        }
    }
}

/// Surface/drainage classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceGrade {
    Dry,
    FloodProne,
    Marshy,
    PermanentlyFlooded,
}

impl SurfaceGrade {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dry => "Seca",
            Self::FloodProne => "Alagadiça",
            Self::Marshy => "Brejosa ou Pantanosa",
            Self::PermanentlyFlooded => "Permanente Alagada",
        }
    }
}

/// Accessibility classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessGrade {
    Excellent,
    VeryGood,
    Good,
    Fair,
    Bad,
    VeryBad,
    Landlocked,
}

impl AccessGrade {
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Ótimo",
            Self::VeryGood => "Muito bom",
            Self::Good => "Bom",
            Self::Fair => "Regular",
            Self::Bad => "Mau",
            Self::VeryBad => "Péssimo",
            Self::Landlocked => "Encravada",
        }
    }
}

/// Topography classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopographyGrade {
    Flat,
    GentlyRolling,
    Rolling,
    Mountainous,
}

impl TopographyGrade {
    pub fn label(self) -> &'static str {
        match self {
            Self::Flat => "Plano",
            Self::GentlyRolling => "Leve Ondulado",
            Self::Rolling => "Ondulado",
            Self::Mountainous => "Montanhoso",
        }
    }
}

/// Occupancy band: share of the property that is open (cleared) field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyGrade {
    High,
    MediumHigh,
    Medium,
    MediumLow,
    Low,
    None,
}

impl OccupancyGrade {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "Alta: 80 a 100% aberto",
            Self::MediumHigh => "Média-Alta: 70 a 80% aberto",
            Self::Medium => "Média: 50 a 70% aberto",
            Self::MediumLow => "Média-Baixa: 40 a 50% aberto",
            Self::Low => "Baixa: 20 a 40% aberto",
            Self::None => "Nula: abaixo de 20%",
        }
    }
}

/// Improvements (built structures) classification relative to the locality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementsGrade {
    None,
    AboveLocal,
    TypicalOfLocal,
    BelowLocal,
}

impl ImprovementsGrade {
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "Sem Benfeitorias",
            Self::AboveLocal => "Benfeitorias de padrão Superior ao local",
            Self::TypicalOfLocal => "Benfeitorias de padrão Comum ao local",
            Self::BelowLocal => "Benfeitorias de padrão Inferior ao local",
        }
    }
}

// ---------------------------------------------------------------------------
// Subject property
// ---------------------------------------------------------------------------

/// Category-specific attribute payload. Exactly one shape applies per
/// category; the serialized form carries a `category` tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum CategoryDetails {
    Urban(UrbanDetails),
    Rural(RuralDetails),
}

/// Attributes that only make sense for urban properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrbanDetails {
    pub sub_type: UrbanSubType,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub parking: Option<u32>,
    #[serde(default)]
    pub conservation: Option<ConservationGrade>,
}

/// Attributes that only make sense for rural properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuralDetails {
    pub activity: RuralActivity,
    /// Rural environmental registry (CAR) number.
    #[serde(default)]
    pub car_number: Option<String>,
    #[serde(default)]
    pub surface: Option<SurfaceGrade>,
    #[serde(default)]
    pub access: Option<AccessGrade>,
    #[serde(default)]
    pub topography: Option<TopographyGrade>,
    #[serde(default)]
    pub occupancy: Option<OccupancyGrade>,
    #[serde(default)]
    pub improvements: Option<ImprovementsGrade>,
}

/// The property being appraised. Built from caller input per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectProperty {
    pub city: String,
    /// Brazilian UF code, e.g. `SP`.
    pub state: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    pub total_area: f64,
    #[serde(default)]
    pub built_area: Option<f64>,
    #[serde(default)]
    pub description: String,
    pub details: CategoryDetails,
}

impl SubjectProperty {
    pub fn category(&self) -> PropertyCategory {
        match self.details {
            CategoryDetails::Urban(_) => PropertyCategory::Urban,
            CategoryDetails::Rural(_) => PropertyCategory::Rural,
        }
    }

    /// Area unit for this subject's category.
    pub fn area_unit(&self) -> &'static str {
        self.category().area_unit()
    }

    /// The sub-type (urban) or predominant activity (rural) display label,
    /// used as the comparable-matching filter.
    pub fn sub_type_or_activity(&self) -> &'static str {
        match &self.details {
            CategoryDetails::Urban(u) => u.sub_type.label(),
            CategoryDetails::Rural(r) => r.activity.label(),
        }
    }

    /// Area used as the multiplication reference for the total value:
    /// built area when present and positive, total area otherwise.
    pub fn reference_area(&self) -> f64 {
        match self.built_area {
            Some(built) if built > 0.0 => built,
            _ => self.total_area,
        }
    }

    /// Validate the fields a valuation request requires.
    ///
    /// Collects every missing or invalid field into a single
    /// [`CoreError::Validation`] so the caller can correct them all at once.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut invalid: Vec<&str> = Vec::new();

        if self.city.trim().is_empty() {
            invalid.push("city");
        }
        if !is_valid_uf(&self.state) {
            invalid.push("state");
        }
        if !(self.total_area > 0.0) {
            invalid.push("total_area");
        }
        if let Some(built) = self.built_area {
            if built < 0.0 {
                invalid.push("built_area");
            }
        }
        // Street address is mandatory for urban subjects only.
        if self.category() == PropertyCategory::Urban
            && self.address.as_deref().unwrap_or("").trim().is_empty()
        {
            invalid.push("address");
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
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
