//! Report assembler: renders a valuation estimate into the sectioned
//! appraisal report returned to the caller.
//!
//! The report body is deterministic pt-BR Markdown with a fixed section
//! structure (identification, methodology, calculation, conclusion). An
//! inconclusive valuation carries a literal marker and a call-to-action
//! instead of a currency value; a zero estimate is never presented as if
//! the property were worth nothing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::format_brl;
use crate::property::SubjectProperty;
use crate::valuation::ValuationEstimate;

// ---------------------------------------------------------------------------
// Markers
// ---------------------------------------------------------------------------

/// Conclusion-section marker used when no comparables were found.
pub const INCONCLUSIVE_MARKER: &str = "INCONCLUSIVO (Sem amostras)";

/// `estimated_value` placeholder for inconclusive reports.
pub const NO_VALUE: &str = "N/A";

/// Call-to-action appended to inconclusive reports.
pub const REGISTER_SAMPLES_NOTICE: &str =
    "> **AVISO:** Cadastre amostras nesta região no Painel Administrativo.";

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// A reference produced by the external narrative generator's web search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundingReference {
    pub title: String,
    pub uri: String,
}

/// Evidence behind a report: either a stored comparable or an external
/// search result. Callers dispatch on `kind`, never on field shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ReportSource {
    Sample(crate::sample::ComparableSample),
    External(GroundingReference),
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Final payload of a valuation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResult {
    /// Sectioned Markdown report body.
    pub report_text: String,
    /// The samples (or external references) the valuation relied on.
    pub sources: Vec<ReportSource>,
    /// Formatted estimated value, or [`NO_VALUE`] when inconclusive.
    pub estimated_value: String,
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Render the estimate into the final report.
///
/// `report_date` is injected rather than read from the clock so assembly
/// stays deterministic under test; `laudo-engine` passes the current date.
pub fn assemble(
    subject: &SubjectProperty,
    estimate: &ValuationEstimate,
    report_date: NaiveDate,
) -> ReportResult {
    let unit = subject.area_unit();
    let formatted_total = format_brl(estimate.estimated_total_value);

    let conclusion = if estimate.has_samples {
        formatted_total.clone()
    } else {
        INCONCLUSIVE_MARKER.to_string()
    };

    let notice = if estimate.has_samples {
        String::new()
    } else {
        format!("\n{REGISTER_SAMPLES_NOTICE}\n")
    };

    let report_text = format!(
        "# LAUDO DE AVALIAÇÃO\n\
         \n\
         **Data:** {date}\n\
         **Natureza:** {category}\n\
         \n\
         ---\n\
         \n\
         ## 1. DADOS DO IMÓVEL\n\
         * **Endereço:** {address}\n\
         * **Cidade/UF:** {city}/{state}\n\
         * **Área Total:** {total_area} {unit}\n\
         * **Descrição:** {description}\n\
         \n\
         ---\n\
         \n\
         ## 2. METODOLOGIA (MÉTODO COMPARATIVO)\n\
         Foi realizada pesquisa no Banco de Dados Interno de amostras na \
         região de **{city}/{state}**.\n\
         \n\
         * **Amostras Encontradas:** {sample_count}\n\
         \n\
         ---\n\
         \n\
         ## 3. CÁLCULOS\n\
         * **Média Unitária:** {avg_unit} / {unit}\n\
         \n\
         ---\n\
         \n\
         ## 4. CONCLUSÃO DE VALOR\n\
         \n\
         # **{conclusion}**\n\
         {notice}",
        date = report_date.format("%d/%m/%Y"),
        category = subject.category().label(),
        address = subject.address.as_deref().unwrap_or("N/A"),
        city = subject.city,
        state = subject.state,
        total_area = subject.total_area,
        description = if subject.description.is_empty() {
            "-"
        } else {
            &subject.description
        },
        sample_count = estimate.matched_samples.len(),
        avg_unit = format_brl(estimate.average_unit_price),
        conclusion = conclusion,
        notice = notice,
    );

    let sources = estimate
        .matched_samples
        .iter()
        .cloned()
        .map(ReportSource::Sample)
        .collect();

    let estimated_value = if estimate.has_samples {
        formatted_total
    } else {
        NO_VALUE.to_string()
    };

    ReportResult {
        report_text,
        sources,
        estimated_value,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
