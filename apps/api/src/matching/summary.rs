//! Suggestion text for the keyword analysis path.

/// Fixed response when the resume already covers every extracted requirement.
const GOOD_MATCH: &str = "Good match! Your resume covers the key job requirements.";

/// How many missing keywords the suggestion lists.
const SUGGESTION_LIMIT: usize = 5;

/// Builds a one-paragraph recommendation from the missing-keyword list.
pub fn compose_suggestion(missing_keywords: &[String]) -> String {
    if missing_keywords.is_empty() {
        return GOOD_MATCH.to_string();
    }

    let listed: Vec<&str> = missing_keywords
        .iter()
        .take(SUGGESTION_LIMIT)
        .map(String::as_str)
        .collect();
    format!(
        "Suggestion: Consider including skills like: {}",
        listed.join(", ")
    )
}
