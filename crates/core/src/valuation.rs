//! Valuation estimator: aggregates matched comparables into a unit price
//! and a total value for the subject.
//!
//! The aggregation is a plain unweighted arithmetic mean with no outlier
//! trimming; a higher-fidelity statistical treatment would change the
//! observable output and is deliberately not applied here.

use serde::Serialize;

use crate::property::SubjectProperty;
use crate::sample::ComparableSample;

/// Numeric output of the estimator.
#[derive(Debug, Clone, Serialize)]
pub struct ValuationEstimate {
    /// Mean of `unit_price` across the matched samples; 0 when empty.
    pub average_unit_price: f64,
    /// `average_unit_price × reference_area`; 0 when no samples matched.
    pub estimated_total_value: f64,
    /// The sample set actually used.
    pub matched_samples: Vec<ComparableSample>,
    pub has_samples: bool,
}

/// Aggregate `matched_samples` into an estimate for `subject`.
///
/// An empty match set yields a zeroed estimate with `has_samples = false`;
/// the report layer is responsible for presenting that as inconclusive
/// rather than as a zero-value appraisal.
pub fn estimate(subject: &SubjectProperty, matched_samples: Vec<ComparableSample>) -> ValuationEstimate {
    if matched_samples.is_empty() {
        return ValuationEstimate {
            average_unit_price: 0.0,
            estimated_total_value: 0.0,
            matched_samples,
            has_samples: false,
        };
    }

    let sum: f64 = matched_samples.iter().map(|s| s.unit_price).sum();
    let average_unit_price = sum / matched_samples.len() as f64;
    let estimated_total_value = average_unit_price * subject.reference_area();

    ValuationEstimate {
        average_unit_price,
        estimated_total_value,
        matched_samples,
        has_samples: true,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
