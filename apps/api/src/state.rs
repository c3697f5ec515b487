use std::sync::Arc;

use crate::extract::TextExtractor;
use crate::matching::phrases::PhraseExtractor;
use crate::summarizer::Summarizer;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is constructed once at startup and read-only
/// for the life of the process.
#[derive(Clone)]
pub struct AppState {
    /// Document text extraction backend. Swappable for tests.
    pub extractor: Arc<dyn TextExtractor>,
    /// Phrase extractor with its compiled tokenizer and stopword table.
    pub phrases: Arc<PhraseExtractor>,
    /// Remote-model analysis used on the `use_ai` path.
    pub summarizer: Arc<dyn Summarizer>,
}
