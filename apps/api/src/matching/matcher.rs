//! Skill matching — exact phrase overlap between a resume and a job description.

use std::collections::HashSet;

use serde::Serialize;

use crate::matching::phrases::PhraseExtractor;

/// Outcome of matching a resume against a job description.
///
/// `matched_keywords` and `missing_keywords` partition the job-description
/// phrase set and preserve its iteration order.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub match_score: f64,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// Computes phrase overlap and a 0–100 match score.
///
/// A job-description phrase counts as matched only on exact membership in
/// the resume phrase set — no fuzzy matching, no stemming. An empty
/// job-description phrase set scores 0.0; that is policy, not an error.
pub fn match_skills(extractor: &PhraseExtractor, resume_text: &str, jd_text: &str) -> MatchResult {
    let resume_phrases: HashSet<String> = extractor.phrases(resume_text).into_iter().collect();
    let jd_phrases = extractor.phrases(jd_text);

    let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = jd_phrases
        .into_iter()
        .partition(|phrase| resume_phrases.contains(phrase));

    let jd_count = matched_keywords.len() + missing_keywords.len();
    let match_score = if jd_count == 0 {
        0.0
    } else {
        round2(matched_keywords.len() as f64 / jd_count as f64 * 100.0)
    };

    MatchResult {
        match_score,
        matched_keywords,
        missing_keywords,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> PhraseExtractor {
        PhraseExtractor::new()
    }

    #[test]
    fn empty_job_description_scores_zero() {
        let result = match_skills(&extractor(), "rust developer", "");
        assert_eq!(result.match_score, 0.0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn stopword_only_job_description_scores_zero() {
        let result = match_skills(&extractor(), "rust developer", "we are looking for the");
        assert_eq!(result.match_score, 0.0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn both_texts_may_be_empty() {
        let result = match_skills(&extractor(), "", "");
        assert_eq!(result.match_score, 0.0);
    }

    #[test]
    fn matched_and_missing_partition_the_jd_phrases() {
        let ex = extractor();
        let jd = "rust, kubernetes, terraform";
        let result = match_skills(&ex, "rust enthusiast", jd);

        let jd_phrases = ex.phrases(jd);
        assert_eq!(
            result.matched_keywords.len() + result.missing_keywords.len(),
            jd_phrases.len()
        );
        for phrase in &result.matched_keywords {
            assert!(!result.missing_keywords.contains(phrase));
            assert!(jd_phrases.contains(phrase));
        }
        for phrase in &result.missing_keywords {
            assert!(jd_phrases.contains(phrase));
        }
    }

    #[test]
    fn score_rounds_to_two_decimals() {
        // 1 of 3 phrases matched: 33.333... rounds to 33.33.
        let result = match_skills(&extractor(), "rust only", "rust, kubernetes, terraform");
        assert_eq!(result.matched_keywords, vec!["rust"]);
        assert_eq!(result.match_score, 33.33);
    }

    #[test]
    fn full_overlap_scores_one_hundred() {
        let result = match_skills(&extractor(), "python, django, postgres", "python, django");
        assert_eq!(result.match_score, 100.0);
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn score_stays_in_bounds() {
        for (resume, jd) in [
            ("", "rust, go, python"),
            ("rust", "rust"),
            ("go", "rust, go"),
            ("java kotlin", "scala, clojure"),
        ] {
            let result = match_skills(&extractor(), resume, jd);
            assert!((0.0..=100.0).contains(&result.match_score));
        }
    }

    #[test]
    fn good_match_scenario_covers_all_jd_phrases() {
        let result = match_skills(
            &extractor(),
            "Experienced Python developer with AWS skills",
            "Looking for a Python developer",
        );
        assert!(result
            .matched_keywords
            .contains(&"python developer".to_string()));
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.match_score, 100.0);
    }
}
