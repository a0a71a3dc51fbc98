use serde::{Deserialize, Serialize};

/// Structured consultation suggestion, whether parsed from a model response
/// or served from the simulated fallback.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestion {
    pub summary: String,
    pub diagnoses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Fixed payload served when no upstream API key is configured.
///
/// Clients compare this body byte-for-byte; the copy never changes.
pub fn simulated_suggestion() -> AiSuggestion {
    AiSuggestion {
        summary: "Patient presents with symptoms that warrant further evaluation. The \
                  consultation notes suggest a need for additional diagnostic workup."
            .to_string(),
        diagnoses: vec![
            "Requires clinical correlation".to_string(),
            "Differential diagnosis pending examination".to_string(),
        ],
        recommendations: vec![
            "Complete physical examination".to_string(),
            "Review current medications".to_string(),
            "Follow up in 1-2 weeks".to_string(),
        ],
    }
}
