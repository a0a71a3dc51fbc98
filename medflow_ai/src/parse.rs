use crate::suggestion::AiSuggestion;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SUMMARY_RE: Regex =
        Regex::new(r"(?is)summary\s*:\s*(.*?)(?:diagnos[ei]s\s*:|recommendations?\s*:|$)")
            .expect("valid regex");
    static ref DIAGNOSES_RE: Regex =
        Regex::new(r"(?is)diagnos[ei]s\s*:\s*(.*?)(?:recommendations?\s*:|summary\s*:|$)")
            .expect("valid regex");
    static ref RECOMMENDATIONS_RE: Regex =
        Regex::new(r"(?is)recommendations?\s*:\s*(.*)").expect("valid regex");
}

/// Lift a model's free-text answer into an `AiSuggestion`.
///
/// Case-insensitive section extraction: `Summary:` runs to the next section
/// header or end of text, `Diagnoses:` likewise, `Recommendations:` to the
/// end. List sections split on newlines, commas, and dashes, then trim and
/// drop empty items; `-` bullets vanish in the split, and hyphenated words
/// split at the hyphen. A section the model omitted comes back empty; nothing
/// here panics on arbitrary input.
pub fn parse_suggestion(text: &str) -> AiSuggestion {
    AiSuggestion {
        summary: capture(&SUMMARY_RE, text)
            .map(|block| block.trim().to_string())
            .unwrap_or_default(),
        diagnoses: capture(&DIAGNOSES_RE, text)
            .map(split_items)
            .unwrap_or_default(),
        recommendations: capture(&RECOMMENDATIONS_RE, text)
            .map(split_items)
            .unwrap_or_default(),
    }
}

fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|captures| captures.get(1))
        .map(|group| group.as_str())
}

fn split_items(block: &str) -> Vec<String> {
    block
        .split(['\n', ',', '-'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
