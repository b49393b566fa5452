//! Valuation engine: composes the sample store, the comparable matcher,
//! the estimator, and the report assembler into the caller-facing
//! `valuate` operation.
//!
//! Each valuation runs matcher → estimator → assembler as one
//! uninterrupted logical operation; the store read is the only suspending
//! boundary. Zero matched comparables is a successful, inconclusive
//! report — never an error.

use std::sync::Arc;

use chrono::NaiveDate;

use laudo_core::error::CoreError;
use laudo_core::matcher::{match_samples, MatchQuery};
use laudo_core::property::SubjectProperty;
use laudo_core::report::{assemble, ReportResult};
use laudo_core::valuation::estimate;
use laudo_store::SampleStore;

pub struct ValuationEngine {
    store: Arc<dyn SampleStore>,
}

impl ValuationEngine {
    pub fn new(store: Arc<dyn SampleStore>) -> Self {
        Self { store }
    }

    /// Appraise `subject` against the stored comparables, dated today.
    pub async fn valuate(&self, subject: &SubjectProperty) -> Result<ReportResult, CoreError> {
        self.valuate_at(subject, chrono::Local::now().date_naive())
            .await
    }

    /// Appraise `subject` with an explicit report date.
    ///
    /// The date only affects the report header; keeping it injectable
    /// keeps the output deterministic under test.
    pub async fn valuate_at(
        &self,
        subject: &SubjectProperty,
        report_date: NaiveDate,
    ) -> Result<ReportResult, CoreError> {
        subject.validate()?;

        let samples = self.store.list().await?;
        let query = MatchQuery::for_subject(subject);
        let matched = match_samples(&samples, &query);

        tracing::info!(
            city = %query.city,
            state = %query.state,
            tier = ?matched.tier,
            matches = matched.samples.len(),
            "Comparable matching completed",
        );

        let estimate = estimate(subject, matched.samples);
        Ok(assemble(subject, &estimate, report_date))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use laudo_core::property::{
        CategoryDetails, PropertyCategory, UrbanDetails, UrbanSubType,
    };
    use laudo_core::report::{ReportSource, INCONCLUSIVE_MARKER, NO_VALUE};
    use laudo_store::seed::seed_samples;
    use laudo_store::MemoryStore;

    fn report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn urban_subject(city: &str) -> SubjectProperty {
        SubjectProperty {
            city: city.to_string(),
            state: "SP".to_string(),
            address: Some("Rua das Flores, 123".to_string()),
            neighborhood: Some("Centro".to_string()),
            total_area: 120.0,
            built_area: Some(100.0),
            description: String::new(),
            details: CategoryDetails::Urban(UrbanDetails {
                sub_type: UrbanSubType::Apartment,
                bedrooms: Some(3),
                bathrooms: Some(2),
                parking: Some(1),
                conservation: None,
            }),
        }
    }

    fn engine_with_seed() -> ValuationEngine {
        ValuationEngine::new(Arc::new(MemoryStore::with_samples(seed_samples())))
    }

    #[tokio::test]
    async fn seeded_urban_valuation_end_to_end() {
        // One urban seed sample at unit price 5000; subject has 100 m²
        // built area -> estimated total 500 000.
        let engine = engine_with_seed();
        let report = engine
            .valuate_at(&urban_subject("Ribeirão Preto"), report_date())
            .await
            .unwrap();

        assert_eq!(report.estimated_value, "R$ 500.000,00");
        assert_eq!(report.sources.len(), 1);
        match &report.sources[0] {
            ReportSource::Sample(sample) => {
                assert_eq!(sample.category, PropertyCategory::Urban);
                assert!((sample.unit_price - 5000.0).abs() < f64::EPSILON);
            }
            other => panic!("expected a sample source, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn city_match_ignores_case() {
        let engine = engine_with_seed();
        let report = engine
            .valuate_at(&urban_subject("ribeirão preto"), report_date())
            .await
            .unwrap();
        assert_eq!(report.estimated_value, "R$ 500.000,00");
    }

    #[tokio::test]
    async fn unknown_city_is_inconclusive_not_an_error() {
        let engine = engine_with_seed();
        let report = engine
            .valuate_at(&urban_subject("Campinas"), report_date())
            .await
            .unwrap();

        assert_eq!(report.estimated_value, NO_VALUE);
        assert!(report.report_text.contains(INCONCLUSIVE_MARKER));
        assert!(report.sources.is_empty());
    }

    #[tokio::test]
    async fn invalid_subject_is_rejected_before_matching() {
        let engine = engine_with_seed();
        let mut subject = urban_subject("Ribeirão Preto");
        subject.total_area = 0.0;

        let err = engine.valuate_at(&subject, report_date()).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
