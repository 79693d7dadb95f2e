//! HTTP routes: the form page and the plan-generation endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use super::{page, render};
use crate::error::Error;
use crate::orchestrator::Orchestrator;
use crate::profile::Profile;

/// Shared state for the plan routes.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
}

/// Build the application router.
pub fn plan_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/plan", post(generate_plan))
        .with_state(state)
}

/// GET /
///
/// Serves the embedded form page.
async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

#[derive(Debug, Serialize)]
struct PlanResponse {
    plan_markdown: String,
    plan_html: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// POST /api/plan
///
/// Validates the submitted profile, runs the three-agent sequence, and
/// returns the merged plan as markdown plus pre-rendered HTML. Validation
/// failures come back as 422 (shown as a sidebar warning); model failures
/// as 502. No retries either way.
async fn generate_plan(State(state): State<AppState>, Json(profile): Json<Profile>) -> Response {
    match state.orchestrator.generate(&profile).await {
        Ok(plan) => {
            let plan_html = render::markdown_to_html(&plan.summary);
            Json(PlanResponse {
                plan_markdown: plan.summary,
                plan_html,
            })
            .into_response()
        }
        Err(Error::Validation(e)) => {
            tracing::warn!(error = %e, "Rejected invalid profile");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Plan generation failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
