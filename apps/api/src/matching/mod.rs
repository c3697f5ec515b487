// Keyword matching pipeline: phrase extraction, set overlap, suggestion text.
// The AI path bypasses all of this — see the summarizer module.

pub mod matcher;
pub mod phrases;
pub mod stopwords;
pub mod summary;
