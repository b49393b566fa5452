//! REST client for the generative narrative service.
//!
//! Wraps the Gemini `generateContent` endpoint with the Google Search
//! tool enabled, using [`reqwest`]. Response parsing and value extraction
//! are pure functions so they can be tested without a network.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{json, Value};

use laudo_core::property::SubjectProperty;
use laudo_core::report::{GroundingReference, ReportResult, ReportSource};

use crate::prompt::{build_prompt, SYSTEM_INSTRUCTION};

/// Model identifier used for report generation.
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Env var holding the service credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Placeholder when no currency value could be extracted from the text.
const VALUE_ON_REQUEST: &str = "Sob Consulta";

/// Errors from the narrative service layer.
///
/// All of them surface to the caller as "valuation failed, retry"; retry
/// policy, if any, belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    /// No API credential configured.
    #[error("Narrative service credential not configured (set {API_KEY_ENV})")]
    MissingCredential,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Narrative service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The service answered but produced no report text.
    #[error("Narrative service returned no report text")]
    EmptyResponse,
}

/// HTTP client for the narrative generation service.
pub struct NarrativeClient {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl NarrativeClient {
    /// Create a client reading the credential from the environment.
    /// A missing credential is only an error once a report is requested.
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).ok())
    }

    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: DEFAULT_API_URL.to_string(),
            api_key,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] and a
    /// custom base URL (connection pooling, test doubles).
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: Option<String>) -> Self {
        Self {
            client,
            api_url,
            api_key,
        }
    }

    /// Whether a credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Generate a narrative appraisal report for `subject`.
    ///
    /// Sends the NBR-14653 prompt with the web-search tool enabled and
    /// maps the answer into the same [`ReportResult`] shape the local
    /// engine produces.
    pub async fn generate_report(
        &self,
        subject: &SubjectProperty,
    ) -> Result<ReportResult, NarrativeError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(NarrativeError::MissingCredential)?;

        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(subject) }] }],
            "tools": [{ "google_search": {} }],
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "generationConfig": { "temperature": 0.3 },
        });

        let url = format!("{}/models/{GEMINI_MODEL}:generateContent", self.api_url);

        tracing::debug!(city = %subject.city, state = %subject.state, "Requesting narrative report");

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Narrative service returned an error");
            return Err(NarrativeError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = response.json().await?;
        let maps_fallback = subject
            .address
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or(&subject.city);
        parse_generate_response(&value, maps_fallback)
    }
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Map a `generateContent` response body into a [`ReportResult`].
///
/// Takes the first candidate's text parts as the report body, collects
/// web and maps grounding chunks as external sources, and scrapes the
/// last `R$` value from the text as the concluded estimate.
/// `maps_fallback_query` (the subject's address or city) builds a maps
/// search link for maps chunks that carry no URI of their own.
pub fn parse_generate_response(
    value: &Value,
    maps_fallback_query: &str,
) -> Result<ReportResult, NarrativeError> {
    let candidate = &value["candidates"][0];

    let report_text = candidate["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p["text"].as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if report_text.trim().is_empty() {
        return Err(NarrativeError::EmptyResponse);
    }

    let sources = candidate["groundingMetadata"]["groundingChunks"]
        .as_array()
        .map(|chunks| {
            chunks
                .iter()
                .filter_map(|chunk| grounding_reference(chunk, maps_fallback_query))
                .map(ReportSource::External)
                .collect()
        })
        .unwrap_or_default();

    let estimated_value =
        extract_estimated_value(&report_text).unwrap_or_else(|| VALUE_ON_REQUEST.to_string());

    Ok(ReportResult {
        report_text,
        sources,
        estimated_value,
    })
}

/// Map a single grounding chunk to a reference.
///
/// Web chunks need a URI to count; maps chunks without one fall back to
/// a maps search link for `maps_fallback_query`.
fn grounding_reference(chunk: &Value, maps_fallback_query: &str) -> Option<GroundingReference> {
    if let Some(web) = chunk.get("web") {
        let uri = web["uri"].as_str()?;
        return Some(GroundingReference {
            title: web["title"].as_str().unwrap_or("Fonte Web").to_string(),
            uri: uri.to_string(),
        });
    }

    if let Some(maps) = chunk.get("maps") {
        let uri = maps["uri"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| maps_search_url(maps_fallback_query));
        return Some(GroundingReference {
            title: maps["title"]
                .as_str()
                .unwrap_or("Localização Google Maps")
                .to_string(),
            uri,
        });
    }

    None
}

/// Build a Google Maps search URL for `query`, percent-encoding it.
fn maps_search_url(query: &str) -> String {
    reqwest::Url::parse_with_params(
        "https://www.google.com/maps/search/",
        &[("api", "1"), ("query", query)],
    )
    .map(|url| url.to_string())
    .unwrap_or_else(|_| "https://www.google.com/maps".to_string())
}

/// Extract the last `R$ ...` occurrence from the report text.
///
/// The concluded market value is conventionally the final currency figure
/// in the document.
pub fn extract_estimated_value(text: &str) -> Option<String> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| {
        Regex::new(r"R\$\s?[\d.,]+").expect("currency pattern is valid")
    });
    re.find_iter(text).last().map(|m| m.as_str().to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
