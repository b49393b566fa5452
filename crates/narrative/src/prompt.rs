//! Prompt construction for the narrative generator.
//!
//! The prompt instructs the model to act as a senior appraisal engineer
//! under the applicable ABNT NBR 14653 part, search the web for real
//! comparable offers, homogenize them, and produce a full report in a
//! fixed Markdown section layout.

use laudo_core::property::{CategoryDetails, SubjectProperty};

/// System instruction sent alongside every generation request.
pub const SYSTEM_INSTRUCTION: &str = "Você é um avaliador de imóveis sênior. Seu objetivo é \
    fornecer avaliações precisas baseadas na NBR 14653. Você DEVE buscar dados reais na web e \
    fornecer as fontes.";

fn optional(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("Não informado")
}

fn optional_label(label: Option<&'static str>) -> &str {
    label.unwrap_or("Não informado")
}

fn optional_count(value: Option<u32>) -> String {
    value.map_or_else(|| "Não informado".to_string(), |v| v.to_string())
}

/// Build the full valuation prompt for `subject`.
pub fn build_prompt(subject: &SubjectProperty) -> String {
    let (nbr_standard, area_unit_name, specific_details, search_descriptors) =
        match &subject.details {
            CategoryDetails::Urban(u) => {
                let details = format!(
                    "- Subtipo: {}\n\
                     - Quartos: {}\n\
                     - Banheiros: {}\n\
                     - Vagas: {}\n\
                     - Estado de Conservação: {}",
                    u.sub_type.label(),
                    optional_count(u.bedrooms),
                    optional_count(u.bathrooms),
                    optional_count(u.parking),
                    optional_label(u.conservation.map(|c| c.label())),
                );

                // Prefer the neighborhood as the search anchor when known.
                let location_term = match &subject.neighborhood {
                    Some(n) if !n.is_empty() => format!("bairro {n} {}", subject.city),
                    _ => format!("{} {}", subject.city, subject.state),
                };
                let bedrooms_term = u
                    .bedrooms
                    .map_or_else(String::new, |b| format!("{b} quartos "));
                let descriptors =
                    format!("{} {bedrooms_term}{location_term}", u.sub_type.label());

                (
                    "ABNT NBR 14653-2 (Imóveis Urbanos)",
                    "metros quadrados",
                    details,
                    descriptors,
                )
            }
            CategoryDetails::Rural(r) => {
                let details = format!(
                    "- Atividade Predominante: {}\n\
                     - CAR: {}\n\
                     - Superfície: {}\n\
                     - Acessibilidade: {}\n\
                     - Topografia: {}\n\
                     - Ocupação: {}\n\
                     - Classificação Benfeitorias: {}",
                    r.activity.label(),
                    optional(&r.car_number),
                    optional_label(r.surface.map(|g| g.label())),
                    optional_label(r.access.map(|g| g.label())),
                    optional_label(r.topography.map(|g| g.label())),
                    optional_label(r.occupancy.map(|g| g.label())),
                    optional_label(r.improvements.map(|g| g.label())),
                );

                let descriptors = format!(
                    "fazenda sítio {} {} hectares {} {}",
                    r.activity.label(),
                    subject.total_area,
                    subject.city,
                    subject.state,
                );

                (
                    "ABNT NBR 14653-3 (Imóveis Rurais)",
                    "hectares",
                    details,
                    descriptors,
                )
            }
        };

    let search_term = format!("venda {search_descriptors} preço valor");

    let built_area_line = subject
        .built_area
        .filter(|a| *a > 0.0)
        .map_or_else(String::new, |a| format!("- Área Construída: {a} m²\n"));

    format!(
        "Atue como um Engenheiro de Avaliações Sênior expert na norma {nbr_standard}.\n\
         \n\
         Sua tarefa é avaliar um IMÓVEL {category} e gerar um Laudo de Avaliação Completo.\n\
         \n\
         DADOS DO IMÓVEL AVALIANDO:\n\
         - Endereço/Localização: {address}\n\
         - Bairro/Região: {neighborhood}\n\
         - Cidade/UF: {city} - {state}\n\
         - Área Total: {total_area} {area_unit_name}\n\
         {built_area_line}{specific_details}\n\
         - Detalhes Adicionais: {description}\n\
         \n\
         PROCEDIMENTO OBRIGATÓRIO:\n\
         1. PESQUISA DE AMOSTRAS (busca na web):\n\
            - Busque pelo menos 5 (CINCO) ofertas REAIS e ATUAIS de imóveis semelhantes na \
         mesma região ou bairro.\n\
            - Use o termo sugerido para ajudar: \"{search_term}\".\n\
            - Se não houver amostras no bairro exato, busque na região imediata.\n\
         2. CÁLCULOS:\n\
            - Liste as 5 amostras em uma tabela detalhada com o LINK/FONTE.\n\
            - Aplique o Método Comparativo Direto de Dados de Mercado conforme a \
         {nbr_standard}.\n\
            - Realize a HOMOGENEIZAÇÃO dos valores.\n\
            - Calcule o Valor de Mercado Total e Unitário.\n\
         \n\
         ESTRUTURA DO LAUDO (FORMATO MARKDOWN):\n\
         ### 1. Identificação\n\
         ### 2. Diagnóstico de Mercado e Localização\n\
         ### 3. Pesquisa de Mercado (Amostragem)\n\
         ### 4. Cálculos e Homogeneização\n\
         ### 5. Conclusão do Valor de Mercado\n\
         **VALOR DE MERCADO ESTIMADO: R$ X.XXX.XXX,XX**\n\
         ### 6. Encerramento\n",
        category = subject.category().label(),
        address = subject.address.as_deref().unwrap_or("Não informado"),
        neighborhood = subject.neighborhood.as_deref().unwrap_or(""),
        city = subject.city,
        state = subject.state,
        total_area = subject.total_area,
        description = subject.description,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use laudo_core::property::{
        CategoryDetails, RuralActivity, RuralDetails, UrbanDetails, UrbanSubType,
    };

    #[test]
    fn urban_prompt_uses_the_urban_standard_and_details() {
        let subject = SubjectProperty {
            city: "Ribeirão Preto".to_string(),
            state: "SP".to_string(),
            address: Some("Rua das Flores, 123".to_string()),
            neighborhood: Some("Centro".to_string()),
            total_area: 120.0,
            built_area: Some(100.0),
            description: "Reformado".to_string(),
            details: CategoryDetails::Urban(UrbanDetails {
                sub_type: UrbanSubType::Apartment,
                bedrooms: Some(3),
                bathrooms: Some(2),
                parking: None,
                conservation: None,
            }),
        };

        let prompt = build_prompt(&subject);
        assert!(prompt.contains("ABNT NBR 14653-2"));
        assert!(prompt.contains("IMÓVEL URBANO"));
        assert!(prompt.contains("- Subtipo: Apartamento"));
        assert!(prompt.contains("- Quartos: 3"));
        assert!(prompt.contains("- Vagas: Não informado"));
        assert!(prompt.contains("- Área Construída: 100 m²"));
        // Neighborhood anchors the suggested search term.
        assert!(prompt.contains("venda Apartamento 3 quartos bairro Centro Ribeirão Preto preço valor"));
    }

    #[test]
    fn rural_prompt_uses_the_rural_standard_and_details() {
        let subject = SubjectProperty {
            city: "Barretos".to_string(),
            state: "SP".to_string(),
            address: None,
            neighborhood: None,
            total_area: 50.0,
            built_area: None,
            description: String::new(),
            details: CategoryDetails::Rural(RuralDetails {
                activity: RuralActivity::Cropland,
                car_number: Some("SP-123".to_string()),
                surface: None,
                access: None,
                topography: None,
                occupancy: None,
                improvements: None,
            }),
        };

        let prompt = build_prompt(&subject);
        assert!(prompt.contains("ABNT NBR 14653-3"));
        assert!(prompt.contains("IMÓVEL RURAL"));
        assert!(prompt.contains("- Atividade Predominante: Lavoura"));
        assert!(prompt.contains("- CAR: SP-123"));
        assert!(prompt.contains("- Superfície: Não informado"));
        assert!(prompt.contains("50 hectares"));
        assert!(!prompt.contains("Área Construída"));
    }
}
