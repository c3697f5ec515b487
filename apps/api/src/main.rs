mod config;
mod errors;
mod extract;
mod llm_client;
mod matching;
mod routes;
mod state;
mod summarizer;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extract::PdfTextExtractor;
use crate::llm_client::LlmClient;
use crate::matching::phrases::PhraseExtractor;
use crate::routes::build_router;
use crate::state::AppState;
use crate::summarizer::LlmSummarizer;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillSift API v{}", env!("CARGO_PKG_VERSION"));

    // Phrase extractor compiles its tokenizer once; shared read-only afterwards
    let phrases = Arc::new(PhraseExtractor::new());
    info!(
        "Phrase extractor initialized ({} stopwords)",
        phrases.stopword_count()
    );

    let extractor = Arc::new(PdfTextExtractor);

    // Initialize LLM client
    let llm = LlmClient::new(config.openrouter_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let summarizer = Arc::new(LlmSummarizer::new(llm));

    // Build app state
    let state = AppState {
        extractor,
        phrases,
        summarizer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
