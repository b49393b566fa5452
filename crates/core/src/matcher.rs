//! Comparable matcher: two-tier relaxation over the stored sample set.
//!
//! Tier 1 filters on category + city + state + sub-type/activity; when it
//! yields fewer than [`MIN_STRICT_MATCHES`] records the sub-type constraint
//! is dropped and the broadened result replaces (never unions with) the
//! strict one. No geographic broadening beyond the city is performed; that
//! is a deliberate boundary, not an oversight.

use serde::Serialize;

use crate::property::{PropertyCategory, SubjectProperty};
use crate::sample::ComparableSample;

// ---------------------------------------------------------------------------
// Threshold
// ---------------------------------------------------------------------------

/// Minimum number of strict (Tier 1) matches required to skip the
/// broadened (Tier 2) pass.
pub const MIN_STRICT_MATCHES: usize = 3;

// ---------------------------------------------------------------------------
// Query & result
// ---------------------------------------------------------------------------

/// Matching criteria derived from the subject property.
#[derive(Debug, Clone)]
pub struct MatchQuery {
    pub category: PropertyCategory,
    pub city: String,
    pub state: String,
    /// Urban sub-type or rural activity label. `None` disables Tier 1's
    /// extra constraint entirely.
    pub sub_type_or_activity: Option<String>,
}

impl MatchQuery {
    /// Build the query a valuation request uses: category, location, and
    /// the subject's sub-type/activity label.
    pub fn for_subject(subject: &SubjectProperty) -> Self {
        Self {
            category: subject.category(),
            city: subject.city.clone(),
            state: subject.state.clone(),
            sub_type_or_activity: Some(subject.sub_type_or_activity().to_string()),
        }
    }
}

/// Which relaxation tier produced the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strict,
    Broadened,
}

/// The selected comparables and the tier that selected them.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub samples: Vec<ComparableSample>,
    pub tier: MatchTier,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Select comparables with the default [`MIN_STRICT_MATCHES`] threshold.
pub fn match_samples(samples: &[ComparableSample], query: &MatchQuery) -> MatchResult {
    match_samples_with_threshold(samples, query, MIN_STRICT_MATCHES)
}

/// Select comparables, broadening when the strict pass yields fewer than
/// `threshold` records.
///
/// An empty result is a valid "inconclusive" outcome, not an error.
pub fn match_samples_with_threshold(
    samples: &[ComparableSample],
    query: &MatchQuery,
    threshold: usize,
) -> MatchResult {
    let strict: Vec<ComparableSample> = samples
        .iter()
        .filter(|s| location_matches(s, query) && sub_type_matches(s, query))
        .cloned()
        .collect();

    if strict.len() >= threshold {
        return MatchResult {
            samples: strict,
            tier: MatchTier::Strict,
        };
    }

    // Tier 2: same filter without the sub-type/activity constraint.
    // The strict partial result is discarded, not merged.
    let broadened: Vec<ComparableSample> = samples
        .iter()
        .filter(|s| location_matches(s, query))
        .cloned()
        .collect();

    MatchResult {
        samples: broadened,
        tier: MatchTier::Broadened,
    }
}

/// Category exact, city case-insensitive with surrounding whitespace
/// trimmed, state exact.
fn location_matches(sample: &ComparableSample, query: &MatchQuery) -> bool {
    sample.category == query.category
        && sample.city.trim().to_lowercase() == query.city.trim().to_lowercase()
        && sample.state == query.state
}

/// Sub-type/activity constraint for the strict tier.
///
/// A sample that never recorded the field passes; a recorded field that
/// differs fails. Absence and mismatch are not equivalent.
fn sub_type_matches(sample: &ComparableSample, query: &MatchQuery) -> bool {
    match (&query.sub_type_or_activity, &sample.sub_type_or_activity) {
        (Some(wanted), Some(have)) => wanted == have,
        _ => true,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn sample(city: &str, state: &str, sub: Option<&str>) -> ComparableSample {
        ComparableSample {
            id: Uuid::new_v4(),
            category: PropertyCategory::Urban,
            title: String::new(),
            address: String::new(),
            city: city.to_string(),
            state: state.to_string(),
            neighborhood: None,
            price: 100_000.0,
            total_area: 100.0,
            built_area: None,
            unit_price: 1000.0,
            date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            source: String::new(),
            sub_type_or_activity: sub.map(str::to_string),
        }
    }

    fn query(sub: Option<&str>) -> MatchQuery {
        MatchQuery {
            category: PropertyCategory::Urban,
            city: "Ribeirão Preto".to_string(),
            state: "SP".to_string(),
            sub_type_or_activity: sub.map(str::to_string),
        }
    }

    #[test]
    fn city_match_is_case_insensitive_and_trimmed() {
        let samples = vec![
            sample("  ribeirão preto ", "SP", Some("Casa")),
            sample("RIBEIRÃO PRETO", "SP", Some("Casa")),
            sample("Ribeirao Preto", "SP", Some("Casa")), // missing accent: no match
        ];
        let result = match_samples(&samples, &query(Some("Casa")));
        assert_eq!(result.samples.len(), 2);
    }

    #[test]
    fn state_match_is_exact() {
        let samples = vec![sample("Ribeirão Preto", "MG", Some("Casa"))];
        let result = match_samples(&samples, &query(Some("Casa")));
        assert!(result.is_empty());
    }

    #[test]
    fn category_mismatch_never_matches() {
        let mut rural = sample("Ribeirão Preto", "SP", Some("Casa"));
        rural.category = PropertyCategory::Rural;
        let result = match_samples(&[rural], &query(Some("Casa")));
        assert!(result.is_empty());
    }

    #[test]
    fn missing_sub_type_passes_strict_tier() {
        // Absence is a non-mismatch: the sample still passes Tier 1.
        let samples = vec![
            sample("Ribeirão Preto", "SP", None),
            sample("Ribeirão Preto", "SP", Some("Casa")),
            sample("Ribeirão Preto", "SP", Some("Casa")),
        ];
        let result = match_samples(&samples, &query(Some("Casa")));
        assert_eq!(result.tier, MatchTier::Strict);
        assert_eq!(result.samples.len(), 3);
    }

    #[test]
    fn sub_type_mismatch_fails_strict_tier() {
        let samples = vec![
            sample("Ribeirão Preto", "SP", Some("Apartamento")),
            sample("Ribeirão Preto", "SP", Some("Casa")),
            sample("Ribeirão Preto", "SP", Some("Casa")),
            sample("Ribeirão Preto", "SP", Some("Casa")),
        ];
        let result = match_samples(&samples, &query(Some("Casa")));
        assert_eq!(result.tier, MatchTier::Strict);
        assert_eq!(result.samples.len(), 3);
    }

    #[test]
    fn fewer_than_threshold_broadens_and_discards_strict() {
        // 2 strict matches, 4 broadened matches in total: the broadened
        // set replaces the strict one, no union.
        let samples = vec![
            sample("Ribeirão Preto", "SP", Some("Casa")),
            sample("Ribeirão Preto", "SP", Some("Casa")),
            sample("Ribeirão Preto", "SP", Some("Apartamento")),
            sample("Ribeirão Preto", "SP", Some("Sobrado")),
        ];
        let result = match_samples(&samples, &query(Some("Casa")));
        assert_eq!(result.tier, MatchTier::Broadened);
        assert_eq!(result.samples.len(), 4);
    }

    #[test]
    fn exactly_threshold_strict_matches_stay_strict() {
        let samples = vec![
            sample("Ribeirão Preto", "SP", Some("Casa")),
            sample("Ribeirão Preto", "SP", Some("Casa")),
            sample("Ribeirão Preto", "SP", Some("Casa")),
            sample("Ribeirão Preto", "SP", Some("Apartamento")),
        ];
        let result = match_samples(&samples, &query(Some("Casa")));
        assert_eq!(result.tier, MatchTier::Strict);
        assert_eq!(result.samples.len(), 3);
    }

    #[test]
    fn zero_matches_is_a_valid_empty_outcome() {
        let samples = vec![sample("Barretos", "SP", Some("Casa"))];
        let result = match_samples(&samples, &query(Some("Casa")));
        assert_eq!(result.tier, MatchTier::Broadened);
        assert!(result.is_empty());
    }

    #[test]
    fn threshold_is_overridable() {
        let samples = vec![
            sample("Ribeirão Preto", "SP", Some("Casa")),
            sample("Ribeirão Preto", "SP", Some("Apartamento")),
        ];
        // With a threshold of 1 the single strict match is enough.
        let result = match_samples_with_threshold(&samples, &query(Some("Casa")), 1);
        assert_eq!(result.tier, MatchTier::Strict);
        assert_eq!(result.samples.len(), 1);
    }

    #[test]
    fn no_sub_type_filter_matches_on_location_only() {
        let samples = vec![
            sample("Ribeirão Preto", "SP", Some("Casa")),
            sample("Ribeirão Preto", "SP", Some("Apartamento")),
            sample("Ribeirão Preto", "SP", None),
        ];
        let result = match_samples(&samples, &query(None));
        assert_eq!(result.tier, MatchTier::Strict);
        assert_eq!(result.samples.len(), 3);
    }
}
