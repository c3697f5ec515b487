//! Phrase extraction — turns free text into normalized skill phrases.
//!
//! Stand-in for a full NLP noun-chunk pass: the text is cut into token runs
//! at punctuation and stopword boundaries, and every contiguous window of a
//! run becomes a candidate phrase. "experienced python developer" therefore
//! also yields "python developer", so exact-membership matching behaves like
//! chunk overlap. Construct once at startup; read-only afterwards.

use std::collections::HashSet;

use regex::Regex;

use crate::matching::stopwords::STOPWORDS;

/// Phrase length bounds, in characters.
const MIN_PHRASE_CHARS: usize = 2;
const MAX_PHRASE_CHARS: usize = 40;
/// Longest candidate window, in tokens.
const MAX_PHRASE_TOKENS: usize = 3;

pub struct PhraseExtractor {
    token_re: Regex,
    stopwords: HashSet<&'static str>,
}

impl PhraseExtractor {
    pub fn new() -> Self {
        Self {
            // `+` and `#` stay inside tokens so "c++" and "c#" survive.
            token_re: Regex::new(r"[a-z0-9+#]+").expect("token regex is valid"),
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Extracts candidate phrases: lowercased, trimmed, 2–40 chars each,
    /// deduplicated, in first-seen order.
    pub fn phrases(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        let mut runs: Vec<Vec<&str>> = Vec::new();
        for segment in lowered.split(is_phrase_boundary) {
            let mut current: Vec<&str> = Vec::new();
            for token in self.token_re.find_iter(segment).map(|m| m.as_str()) {
                if self.stopwords.contains(token) {
                    if !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                } else {
                    current.push(token);
                }
            }
            if !current.is_empty() {
                runs.push(current);
            }
        }

        let mut seen = HashSet::new();
        let mut phrases = Vec::new();
        for run in &runs {
            for width in 1..=MAX_PHRASE_TOKENS.min(run.len()) {
                for window in run.windows(width) {
                    let phrase = window.join(" ");
                    if phrase.len() < MIN_PHRASE_CHARS || phrase.len() > MAX_PHRASE_CHARS {
                        continue;
                    }
                    if seen.insert(phrase.clone()) {
                        phrases.push(phrase);
                    }
                }
            }
        }
        phrases
    }
}

impl Default for PhraseExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Punctuation and line breaks end a phrase even without a stopword.
fn is_phrase_boundary(c: char) -> bool {
    matches!(
        c,
        ',' | '.' | ';' | ':' | '!' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '/' | '\\' | '|'
            | '"' | '\'' | '\n' | '\r' | '\t' | '•' | '–' | '—'
    )
}
