//! Web server for MathSheet.
//!
//! Serves printable worksheet pages and a small JSON API over the
//! worksheet core.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /` and `GET /worksheet` - HTML worksheet page (`?category&count&seed&show_solution`)
//! - `GET /api/categories` - List categories with their ranges
//! - `GET /api/categories/{category}/range` - Multiplier range of a category
//! - `GET /api/exercises` - Random exercises (`?category&count&seed`)
//! - `GET /api/decompose` - Partial products (`?first&second`)
//! - `GET /api/worksheet` - Full worksheet as JSON
//! - `GET /assets/{*path}` - Embedded stylesheet and assets

pub mod static_files;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::WorksheetError;
use crate::export;
use crate::models::{
    select_range, select_range_by_name, Category, Exercise, MultiplierRange, StepSolution,
};
use crate::services::{build_worksheet, decompose, generate, worksheet_rng, Worksheet};
use crate::services::generator::check_count;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web server.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration (immutable after load)
    config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Category list response.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    /// All categories in form order.
    pub categories: Vec<CategoryInfo>,
}

/// Category information for API response.
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    /// Kebab-case identifier.
    pub id: String,
    /// Worksheet short code.
    pub code: String,
    /// Human-readable label.
    pub label: String,
    /// Multiplier bounds.
    pub range: MultiplierRange,
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        Self {
            id: category.id().to_string(),
            code: category.code().to_string(),
            label: category.label().to_string(),
            range: select_range(category),
        }
    }
}

/// Query parameters for exercise generation.
#[derive(Debug, Default, Deserialize)]
pub struct ExerciseQuery {
    /// Category tag (id, code or variant name).
    pub category: Option<String>,
    /// Number of exercises.
    pub count: Option<usize>,
    /// Seed for reproducible output.
    pub seed: Option<u64>,
}

/// Generated exercises response.
#[derive(Debug, Serialize)]
pub struct ExerciseListResponse {
    /// Category the exercises were drawn from.
    pub category: Category,
    /// Exercises in draw order.
    pub exercises: Vec<Exercise>,
}

/// Query parameters for decomposition.
#[derive(Debug, Deserialize)]
pub struct DecomposeQuery {
    /// First multiplicand.
    pub first: u64,
    /// Second multiplicand.
    pub second: u64,
}

/// Decomposition response.
#[derive(Debug, Serialize)]
pub struct DecomposeResponse {
    /// First multiplicand.
    pub first: u64,
    /// Second multiplicand.
    pub second: u64,
    /// Product of both.
    pub product: u64,
    /// Partial products, ones digit of `second` first.
    pub steps: Vec<StepSolution>,
}

/// Query parameters for a worksheet.
#[derive(Debug, Default, Deserialize)]
pub struct WorksheetQuery {
    /// Category tag (id, code or variant name).
    pub category: Option<String>,
    /// Number of exercises.
    pub count: Option<usize>,
    /// Seed for reproducible output.
    pub seed: Option<u64>,
    /// Fill in the answer rows.
    pub show_solution: Option<bool>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

/// Maps a worksheet error to a 400 response.
fn bad_request(err: WorksheetError) -> (StatusCode, Json<ApiError>) {
    (StatusCode::BAD_REQUEST, Json(ApiError::new(err.to_string())))
}

/// Unwraps query parameters, turning a malformed query into a JSON 400.
fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> ApiResult<T> {
    query.map(|Query(params)| params).map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_details(
                "Invalid query parameters",
                rejection.body_text(),
            )),
        )
    })
}

/// Parses an optional category tag.
fn parse_category(tag: Option<&str>) -> ApiResult<Option<Category>> {
    tag.map(str::parse::<Category>)
        .transpose()
        .map_err(bad_request)
}

/// Resolves query parameters against the configured defaults and builds a worksheet.
fn worksheet_for(state: &AppState, query: &WorksheetQuery) -> ApiResult<Worksheet> {
    let category = parse_category(query.category.as_deref())?;
    let request =
        state
            .config
            .worksheet
            .request(category, query.count, query.seed, query.show_solution);

    build_worksheet(&request).map_err(bad_request)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/categories - List all categories.
async fn list_categories() -> Json<CategoryListResponse> {
    let categories = Category::all()
        .iter()
        .copied()
        .map(CategoryInfo::from)
        .collect();

    Json(CategoryListResponse { categories })
}

/// GET /api/categories/{category}/range - Range of one category.
async fn get_category_range(Path(category): Path<String>) -> ApiResult<Json<MultiplierRange>> {
    select_range_by_name(&category)
        .map(Json)
        .map_err(bad_request)
}

/// GET /api/exercises - Draw random exercises.
async fn list_exercises(
    State(state): State<AppState>,
    query: Result<Query<ExerciseQuery>, QueryRejection>,
) -> ApiResult<Json<ExerciseListResponse>> {
    let query = query_params(query)?;
    let defaults = &state.config.worksheet;
    let category = parse_category(query.category.as_deref())?.unwrap_or(defaults.category);
    let count = query.count.unwrap_or(defaults.count);

    check_count(count, defaults.max_count).map_err(bad_request)?;

    let mut rng = worksheet_rng(query.seed);
    let exercises = generate(count, &select_range(category), &mut rng).map_err(bad_request)?;

    Ok(Json(ExerciseListResponse {
        category,
        exercises,
    }))
}

/// GET /api/decompose - Partial products of one multiplication.
async fn decompose_exercise(
    query: Result<Query<DecomposeQuery>, QueryRejection>,
) -> ApiResult<Json<DecomposeResponse>> {
    let query = query_params(query)?;
    let overflow = WorksheetError::Overflow {
        first: query.first,
        second: query.second,
    };
    let product = Exercise::new(query.first, query.second)
        .checked_product()
        .ok_or_else(|| bad_request(overflow))?;
    let steps = decompose(query.first, query.second).map_err(bad_request)?;

    Ok(Json(DecomposeResponse {
        first: query.first,
        second: query.second,
        product,
        steps,
    }))
}

/// GET /api/worksheet - Full worksheet as JSON.
async fn get_worksheet(
    State(state): State<AppState>,
    query: Result<Query<WorksheetQuery>, QueryRejection>,
) -> ApiResult<Json<Worksheet>> {
    worksheet_for(&state, &query_params(query)?).map(Json)
}

/// GET /worksheet - Printable worksheet page.
async fn worksheet_page(
    State(state): State<AppState>,
    query: Result<Query<WorksheetQuery>, QueryRejection>,
) -> ApiResult<Html<String>> {
    let worksheet = worksheet_for(&state, &query_params(query)?)?;
    Ok(Html(export::render_page(&worksheet)))
}

/// Fallback for unknown routes.
async fn not_found() -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::with_details(
            "Not found",
            "See /api/categories or /worksheet",
        )),
    )
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Pages are served to local browsers and printed; the API is read-only.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Pages
        .route("/", get(worksheet_page))
        .route("/worksheet", get(worksheet_page))
        // API endpoints
        .route("/api/categories", get(list_categories))
        .route("/api/categories/{category}/range", get(get_category_range))
        .route("/api/exercises", get(list_exercises))
        .route("/api/decompose", get(decompose_exercise))
        .route("/api/worksheet", get(get_worksheet))
        // Embedded assets
        .route("/assets/{*path}", get(static_files::serve_asset))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config);
    let app = create_router(state);

    info!("Starting MathSheet web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
