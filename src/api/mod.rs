use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use validator::Validate;

use crate::error::InputError;
use crate::food::analysis::session::validate_ingredients;
use crate::food::analysis::synergy::SynergyAnalyzer;
use crate::food::catalog::{catalog, find_by_rank, SynergyRecord, GOAL_CHIPS};
use crate::food::filter::{filter_dashboard, filter_database, CategoryFilter, GoalFilter};
use crate::llm::chat::ChatClient;
use crate::providers::traits::ChatTurn;

/// Upper bound on requests handled at once.
const MAX_CONCURRENT_REQUESTS: usize = 64;

#[derive(Clone)]
pub struct AppState {
    analyzer: SynergyAnalyzer,
    chat: ChatClient,
}

#[derive(Deserialize)]
pub struct DashboardQuery {
    goal: Option<String>,
    q: Option<String>,
}

#[derive(Deserialize)]
pub struct DatabaseQuery {
    filter: Option<String>,
    q: Option<String>,
}

/// Blank entries are dropped before the 2..=3 count is checked.
#[derive(Deserialize)]
pub struct AnalyzeRequest {
    ingredients: Vec<String>,
}

#[derive(Deserialize, Validate)]
pub struct ChatRequest {
    #[serde(default)]
    history: Vec<ChatTurn>,
    #[validate(length(min = 1, max = 1000))]
    message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    reply: String,
}

#[derive(Serialize)]
pub struct RecordList<'a> {
    count: usize,
    results: Vec<&'a SynergyRecord>,
}

#[derive(Serialize)]
struct ApiResponse {
    status: String,
}

fn status(code: StatusCode, message: impl Into<String>) -> Response {
    (code, Json(ApiResponse { status: message.into() })).into_response()
}

fn record_list(results: Vec<&SynergyRecord>) -> Response {
    Json(RecordList {
        count: results.len(),
        results,
    })
    .into_response()
}

/// Create and configure the API router
pub fn create_api(analyzer: SynergyAnalyzer, chat: ChatClient) -> Router {
    let state = AppState { analyzer, chat };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health_check))
        .route("/goals", get(goals_handler))
        .route("/synergies", get(dashboard_handler))
        .route("/synergies/:rank", get(rank_handler))
        .route("/database", get(database_handler))
        .route("/analyze", post(analyze_handler))
        .route("/chat", post(chat_handler))
        .layer(cors)
        .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
        .with_state(state)
}

async fn health_check() -> Response {
    Json(ApiResponse {
        status: "Server is running and healthy".to_string(),
    })
    .into_response()
}

async fn goals_handler() -> Response {
    Json(GOAL_CHIPS).into_response()
}

async fn dashboard_handler(Query(params): Query<DashboardQuery>) -> Response {
    let goal = GoalFilter::parse(params.goal.as_deref());
    record_list(filter_dashboard(catalog(), &goal, params.q.as_deref()))
}

async fn database_handler(Query(params): Query<DatabaseQuery>) -> Response {
    let category = match params.filter.as_deref().unwrap_or_default().parse::<CategoryFilter>() {
        Ok(category) => category,
        Err(e) => return status(StatusCode::BAD_REQUEST, e),
    };
    record_list(filter_database(catalog(), category, params.q.as_deref()))
}

async fn rank_handler(Path(rank): Path<u32>) -> Response {
    let records = find_by_rank(rank);
    if records.is_empty() {
        return status(StatusCode::NOT_FOUND, format!("No combination with rank {}", rank));
    }
    record_list(records)
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let ingredients = match validate_ingredients(request.ingredients.as_slice()) {
        Ok(ingredients) => ingredients,
        Err(e) => return status(StatusCode::BAD_REQUEST, e.to_string()),
    };

    info!(ingredients = %ingredients.join(", "), "analyze request");
    match state.analyzer.analyze_synergy(ingredients.as_slice()).await {
        Ok(analysis) => Json(analysis).into_response(),
        Err(e) => {
            warn!(kind = e.cause().kind(), "analysis request failed");
            status(StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}

async fn chat_handler(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Response {
    if let Err(e) = request.validate() {
        return status(StatusCode::BAD_REQUEST, e.to_string());
    }
    if request.message.trim().is_empty() {
        return status(StatusCode::BAD_REQUEST, InputError::EmptyMessage.to_string());
    }

    match state.chat.send_message(&request.history, &request.message).await {
        Ok(reply) => Json(ChatResponse { reply }).into_response(),
        Err(e) => {
            warn!(kind = e.cause().kind(), "chat request failed");
            status(StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}
