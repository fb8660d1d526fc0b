use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use name_match_engine::{
    ai::OpenAiMatcher,
    api::{handle_query, NameQuery},
    config::AppConfig,
    NameMatchEngine, Roster,
};

#[derive(Clone)]
struct AppState {
    engine: Arc<NameMatchEngine>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    roster_size: usize,
    ai_enabled: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "name_match_server=debug,name_match_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    let roster = match &config.roster_path {
        Some(path) => Roster::from_json_file(path)?,
        None => Roster::builtin(),
    };

    tracing::info!("🚀 Starting Name Match Server");
    tracing::info!("📇 Roster: {} records", roster.len());
    tracing::info!("🔌 Port: {}", config.port);

    // AI client is built once here and handed to the engine
    let mut engine = NameMatchEngine::new(roster.clone());
    if config.ai.is_enabled() {
        let matcher = OpenAiMatcher::new(&config.ai, &roster)?;
        tracing::info!("✅ AI matcher ready ({}, {})", config.ai.model, config.ai.timeouts);
        engine = engine.with_ai(Arc::new(matcher));
    } else {
        tracing::warn!("⚠️ OPEN_AI_KEY not set, AI mode disabled");
    }

    let state = AppState {
        engine: Arc::new(engine),
    };

    // Build router
    let app = Router::new()
        .route("/", get(match_handler))
        .route("/v1/match", get(match_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("🧭 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: name_match_engine::VERSION.to_string(),
        roster_size: state.engine.roster().len(),
        ai_enabled: state.engine.has_ai(),
    })
}

async fn match_handler(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Response {
    tracing::debug!("Match request: {:?}", query);

    let reply = handle_query(&state.engine, query).await;
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (status, Json(reply.body)).into_response()
}
