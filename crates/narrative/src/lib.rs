//! Optional external narrative-report generator.
//!
//! Wraps a third-party generative-text-and-search service (the Gemini
//! REST API) behind the same [`ReportResult`] shape the local valuation
//! engine produces, so callers can swap between them. Requires an API
//! credential from the environment; the local engine remains fully
//! usable without one.
//!
//! [`ReportResult`]: laudo_core::report::ReportResult

mod client;
mod prompt;

pub use client::{
    extract_estimated_value, parse_generate_response, NarrativeClient, NarrativeError,
    GEMINI_MODEL,
};
pub use prompt::build_prompt;
