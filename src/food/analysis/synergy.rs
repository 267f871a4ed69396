//! Structured synergy analysis backed by the text-generation service.
//!
//! The response schema below is a versioned contract: the outbound schema
//! description and the inbound [`SynergyAnalysis`] type must change together.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, warn};
use validator::Validate;

use crate::error::{AnalysisError, ProviderError};
use crate::food::catalog::{Evidence, ImpactDomain, SynergyRecord, SynergyType};
use crate::providers::traits::GenerationProvider;

pub const SCHEMA_VERSION: u32 = 1;

/// Marker the chart uses to name the combined-effect bar.
pub const COMBINED_EFFECT_MARKER: &str = "Synergy";

pub const REQUIRED_FIELDS: &[&str] = &[
    "score",
    "magnitude",
    "amplification",
    "type",
    "synergyName",
    "summary",
    "pros",
    "cons",
    "scientificConsensus",
    "mechanism",
    "riskLevel",
    "impactDomain",
    "chartData",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScientificConsensus {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    None,
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub name: String,
    pub value: f64,
}

impl ChartEntry {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value }
    }

    /// True for the bar showing the combined effect of all ingredients.
    pub fn is_combined_effect(&self) -> bool {
        self.name.contains(COMBINED_EFFECT_MARKER)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SynergyAnalysis {
    #[validate(range(min = 0.0, max = 100.0))]
    pub score: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub magnitude: f64,
    pub amplification: String,
    #[serde(rename = "type")]
    pub synergy_type: SynergyType,
    pub synergy_name: String,
    pub summary: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub scientific_consensus: ScientificConsensus,
    pub mechanism: String,
    pub risk_level: RiskLevel,
    pub impact_domain: ImpactDomain,
    pub chart_data: Vec<ChartEntry>,
}

impl SynergyAnalysis {
    /// The combined-effect chart entry, if the chart follows the convention.
    pub fn combined_effect(&self) -> Option<&ChartEntry> {
        let mut combined = self.chart_data.iter().filter(|e| e.is_combined_effect());
        match (combined.next(), combined.next()) {
            (Some(entry), None) => Some(entry),
            _ => None,
        }
    }

    /// Exactly one combined-effect entry, strictly above every baseline entry.
    pub fn has_consistent_chart(&self) -> bool {
        match self.combined_effect() {
            Some(combined) => self
                .chart_data
                .iter()
                .filter(|e| !e.is_combined_effect())
                .all(|e| e.value < combined.value),
            None => false,
        }
    }

    /// What the detail view shows for a catalog record while its analysis
    /// is loading, or after the analysis failed.
    pub fn placeholder_for(record: &SynergyRecord) -> Self {
        let consensus = if record.evidence == Evidence::Clinical {
            ScientificConsensus::High
        } else {
            ScientificConsensus::Medium
        };

        Self {
            score: f64::from(record.magnitude),
            magnitude: f64::from(record.magnitude),
            amplification: record.amplification.clone(),
            synergy_type: record.synergy_type,
            synergy_name: record.name.clone(),
            summary: record.description.clone(),
            pros: record.tags.clone(),
            cons: Vec::new(),
            scientific_consensus: consensus,
            mechanism: "Analyzing biological pathway...".to_string(),
            risk_level: RiskLevel::Low,
            impact_domain: record.domain,
            chart_data: Vec::new(),
        }
    }

    /// The Turmeric + Black Pepper analysis the analyzer opens with.
    pub fn golden_boost_example() -> Self {
        Self {
            score: 94.0,
            magnitude: 94.0,
            amplification: "2000%".to_string(),
            synergy_type: SynergyType::Kinetic,
            synergy_name: "The Golden Boost".to_string(),
            summary: "Turmeric's powerful active ingredient, curcumin, is poorly absorbed by the body on its own. \
                      Adding black pepper, which contains piperine, acts like a supercharger. Piperine drastically \
                      increases how much curcumin your body can actually use, making turmeric's health benefits much \
                      more potent than if you took it alone."
                .to_string(),
            pros: vec![
                "Massively increases how much turmeric your body absorbs.".to_string(),
                "Makes turmeric's anti-inflammatory and antioxidant effects significantly stronger.".to_string(),
                "A simple and natural way to boost turmeric's benefits.".to_string(),
                "You get more bang for your buck from your turmeric supplements or spices.".to_string(),
            ],
            cons: vec![
                "Black pepper might affect how other medications are absorbed, so consult a doctor if on other drugs.".to_string(),
                "Some people might experience mild digestive discomfort from black pepper.".to_string(),
                "The exact absorption increase can vary from person to person.".to_string(),
            ],
            scientific_consensus: ScientificConsensus::High,
            mechanism: "Piperine in black pepper inhibits the liver enzyme that breaks down curcumin.".to_string(),
            risk_level: RiskLevel::Low,
            impact_domain: ImpactDomain::Physical,
            chart_data: vec![
                ChartEntry::new("Turmeric Alone", 3.0),
                ChartEntry::new("Pepper Alone", 3.0),
                ChartEntry::new("Synergy (All)", 10.0),
            ],
        }
    }
}

lazy_static! {
    static ref RESPONSE_SCHEMA: Value = json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "NUMBER", "description": "Overall Synergy score 0-100" },
            "magnitude": { "type": "NUMBER", "description": "Effect strength/intensity 0-100" },
            "amplification": { "type": "STRING", "description": "Multiplier string, e.g. '200%', '3x', 'Optimal'" },
            "type": { "type": "STRING", "enum": ["Kinetic", "Dynamic"], "description": "Kinetic = Absorption, Dynamic = Effect" },
            "synergyName": { "type": "STRING", "description": "Fun or simple name for the combo" },
            "summary": { "type": "STRING", "description": "Simple, easy to read analysis." },
            "pros": { "type": "ARRAY", "items": { "type": "STRING" } },
            "cons": { "type": "ARRAY", "items": { "type": "STRING" } },
            "scientificConsensus": { "type": "STRING", "enum": ["High", "Medium", "Low"] },
            "mechanism": { "type": "STRING", "description": "Biological mechanism" },
            "riskLevel": { "type": "STRING", "enum": ["None", "Low", "Moderate", "High"] },
            "impactDomain": {
                "type": "STRING",
                "enum": ["Cognitive", "Physical", "Metabolic", "Immune"],
                "description": "Primary area of benefit"
            },
            "chartData": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "value": { "type": "NUMBER" }
                    },
                    "required": ["name", "value"]
                }
            }
        },
        "required": REQUIRED_FIELDS
    });
}

/// Structured-output schema sent with every analysis request.
pub fn response_schema() -> &'static Value {
    &RESPONSE_SCHEMA
}

/// Drops blank entries and surrounding whitespace.
pub fn normalize_ingredients<S: AsRef<str>>(ingredients: &[S]) -> Vec<String> {
    ingredients
        .iter()
        .map(|i| i.as_ref().trim())
        .filter(|i| !i.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn build_prompt<S: AsRef<str>>(ingredients: &[S]) -> String {
    let ingredient_list = normalize_ingredients(ingredients).join(", ");

    format!(
        "Analyze the nutritional synergy between these ingredients: {ingredient_list}.\n\
         Focus on how much stronger the effect is together compared to apart.\n\
         If there are 3 or more ingredients, decide whether they form a specific \"stack\" or \"trio\" effect.\n\
         Decide whether the combination helps with ABSORPTION (Kinetic) or creates a better EFFECT (Dynamic).\n\n\
         Write the summary, pros and cons in simple, everyday language for a general audience. \
         Avoid scientific jargon unless it is necessary.\n\n\
         For \"chartData\", produce a Benefit Index (scale 1-10) for a bar chart:\n\
         - one item per ingredient named \"<Ingredient> Alone\" with a baseline score such as 3 or 4;\n\
         - one final item named \"Synergy (All)\" with a clearly higher score such as 9 or 10.\n\n\
         Example: [{{name: 'Turmeric Alone', value: 3}}, {{name: 'Pepper Alone', value: 3}}, {{name: 'Synergy (All)', value: 10}}]\n\n\
         Return a structured JSON analysis."
    )
}

/// Validates a raw service reply against the response contract.
///
/// Every required field must be present with the declared type, enum fields
/// must hold one of their declared values, and scores must lie in 0..=100.
pub fn parse_analysis(raw: &str) -> Result<SynergyAnalysis, ProviderError> {
    let analysis: SynergyAnalysis = serde_json::from_str(raw.trim())
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

    analysis
        .validate()
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

    if !analysis.has_consistent_chart() {
        warn!(
            synergy = %analysis.synergy_name,
            "chart data does not have exactly one '{}' entry above every baseline",
            COMBINED_EFFECT_MARKER
        );
    }

    Ok(analysis)
}

#[derive(Clone)]
pub struct SynergyAnalyzer {
    provider: Arc<dyn GenerationProvider>,
}

impl SynergyAnalyzer {
    pub fn new(provider: Arc<dyn GenerationProvider>) -> Self {
        Self { provider }
    }

    /// Requests a fresh analysis for `ingredients`.
    ///
    /// Callers are expected to pass at least two non-blank ingredients. Every
    /// call goes to the service; nothing is cached.
    pub async fn analyze_synergy<S: AsRef<str>>(
        &self,
        ingredients: &[S],
    ) -> Result<SynergyAnalysis, AnalysisError> {
        let prompt = build_prompt(ingredients);
        info!(
            model = %self.provider.get_model_info(),
            schema_version = SCHEMA_VERSION,
            ingredients = %normalize_ingredients(ingredients).join(", "),
            "requesting synergy analysis"
        );

        let result = match self.provider.generate_json(&prompt, response_schema()).await {
            Ok(raw) => parse_analysis(&raw),
            Err(e) => Err(e),
        };

        result.map_err(|e| {
            error!(kind = e.kind(), "synergy analysis failed: {}", e);
            AnalysisError(e)
        })
    }
}
