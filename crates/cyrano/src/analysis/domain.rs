use serde::{Deserialize, Serialize, Serializer};

/// Profile block of a diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSection {
    pub mbti: String,
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeSection {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "modalidad", default, skip_serializing_if = "Option::is_none")]
    pub modality: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureSection {
    #[serde(rename = "explicacion")]
    pub explanation: String,
    #[serde(rename = "momento_critico", default, skip_serializing_if = "Option::is_none")]
    pub critical_moment: Option<String>,
    #[serde(rename = "porque", default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Three rewrites of the problematic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corrections {
    #[serde(rename = "calibrada")]
    pub calibrated: String,
    pub edge: String,
    #[serde(rename = "suave")]
    pub soft: String,
}

/// The model found a communication failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    #[serde(rename = "perfil")]
    pub profile: ProfileSection,
    #[serde(rename = "arquetipo")]
    pub archetype: ArchetypeSection,
    #[serde(rename = "fallo")]
    pub failure: FailureSection,
    #[serde(rename = "correcciones")]
    pub corrections: Corrections,
    #[serde(rename = "patron_vigilar", default, skip_serializing_if = "Option::is_none")]
    pub watch_pattern: Option<String>,
}

/// The model judged the conversation to be fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthyConversation {
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "sugerencia_menor", default, skip_serializing_if = "Option::is_none")]
    pub minor_suggestion: Option<String>,
}

/// A parsed model reply. Valid JSON that matches neither documented shape is
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisReport {
    Diagnosis(Diagnosis),
    Healthy(HealthyConversation),
    Other(serde_json::Value),
}

/// Remove a surrounding markdown code fence, with or without a `json` tag.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest
        .strip_prefix("json")
        .or_else(|| rest.strip_prefix("JSON"))
        .unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

pub fn parse_report(text: &str) -> Result<AnalysisReport, serde_json::Error> {
    serde_json::from_str(strip_code_fence(text))
}

/// Remaining balance after an analysis: a count on metered plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditsRemaining {
    Count(i32),
    Unlimited,
}

impl Serialize for CreditsRemaining {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CreditsRemaining::Count(count) => serializer.serialize_i32(*count),
            CreditsRemaining::Unlimited => serializer.serialize_str("unlimited"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Structured {
        analysis: AnalysisReport,
        credits_remaining: CreditsRemaining,
    },
    /// The reply could not be parsed; nothing was charged.
    Raw { raw: String, error: String },
}
