mod config;
mod courses;
mod db;
mod errors;
mod llm_client;
mod matching;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::courses::{CourseAdvisor, DisabledCourseAdvisor, LlmCourseAdvisor};
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::matching::career_paths::CareerPathAnalyzer;
use crate::matching::weights::WeightCache;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillmatch API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url, config.db_max_connections).await?;

    let course_advisor = build_course_advisor(&config)?;

    // One cache per process; never invalidated while running.
    let analyzer = CareerPathAnalyzer::new(WeightCache::new());

    let state = AppState {
        db,
        config: config.clone(),
        analyzer,
        course_advisor,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_course_advisor(config: &Config) -> Result<Arc<dyn CourseAdvisor>> {
    match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!(
                "Course suggestions enabled (model: {}, max {})",
                llm_client::MODEL,
                config.max_course_suggestions
            );
            Ok(Arc::new(LlmCourseAdvisor::new(
                llm,
                config.max_course_suggestions,
            )))
        }
        None => {
            info!("ANTHROPIC_API_KEY not set; course suggestions disabled");
            Ok(Arc::new(DisabledCourseAdvisor))
        }
    }
}
