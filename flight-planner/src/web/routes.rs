//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::domain::City;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/route", get(plan_route))
        .route("/api/cities", get(list_cities))
        .route("/api/timetable", get(list_timetable))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the route form.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let network = state.network();
    let template = IndexTemplate {
        cities: network.graph().cities().map(City::to_string).collect(),
        route_count: network.graph().route_count(),
        flight_count: network.timetable().len(),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html))
}

/// List every city in the network.
async fn list_cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    let cities = state
        .network()
        .graph()
        .cities()
        .map(City::to_string)
        .collect();
    Json(CitiesResponse { cities })
}

/// List the weekly timetable, optionally restricted by origin and/or destination.
async fn list_timetable(
    State(state): State<AppState>,
    Query(req): Query<TimetableRequest>,
) -> Result<Json<TimetableResponse>, AppError> {
    let origin = optional_city(&state, "origin", req.origin.as_deref())?;
    let destination = optional_city(&state, "destination", req.destination.as_deref())?;
    let timetable = state.network().timetable();

    let flights = match (&origin, &destination) {
        (Some(o), Some(d)) => timetable
            .flights_between(o, d)
            .iter()
            .map(TimetableRow::from_flight)
            .collect(),
        _ => timetable
            .flights()
            .iter()
            .filter(|f| origin.as_ref().is_none_or(|o| &f.origin == o))
            .filter(|f| destination.as_ref().is_none_or(|d| &f.destination == d))
            .map(TimetableRow::from_flight)
            .collect(),
    };

    Ok(Json(TimetableResponse { flights }))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Plan a route between two cities.
async fn plan_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RouteRequest>,
) -> Result<Response, AppError> {
    let from = known_city(&state, "origin", &req.from)?;
    let to = known_city(&state, "destination", &req.to)?;

    let result = state.planner.query(&from, &to).await;
    let response = RouteResponse::from_result(&from, &to, &result);

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = RouteResultsTemplate {
            route: RouteView::from_response(&response),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(response).into_response())
    }
}

/// Parse a city label and check the network knows it.
fn known_city(state: &AppState, role: &str, label: &str) -> Result<City, AppError> {
    let city = City::parse_trimmed(label).map_err(|e| AppError::BadRequest {
        message: format!("Invalid {} city {:?}: {}", role, label, e),
    })?;

    if !state.network().graph().contains(&city) {
        return Err(AppError::BadRequest {
            message: format!("Unknown {} city: {}", role, city),
        });
    }
    Ok(city)
}

/// Like [`known_city`], treating a missing or blank label as no filter.
fn optional_city(
    state: &AppState,
    role: &str,
    label: Option<&str>,
) -> Result<Option<City>, AppError> {
    label
        .filter(|l| !l.trim().is_empty())
        .map(|l| known_city(state, role, l))
        .transpose()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "bad request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
