//! Axum route handlers for the Roadmaps API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::roadmaps::catalog::{lookup, ExperienceLevel, InterestArea};
use crate::roadmaps::generator::generate_roadmap;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CatalogRequest {
    #[serde(default)]
    pub experience: ExperienceLevel,
    #[serde(default)]
    pub interest: InterestArea,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub experience_years: String,
    pub background: String,
    pub goal: String,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub roadmap: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/roadmaps/catalog
///
/// Resolves the fixed roadmap for the current selection pair. Total: an
/// unmatched pair returns an empty roadmap, never an error.
pub async fn handle_catalog(Json(request): Json<CatalogRequest>) -> Json<RoadmapResponse> {
    let roadmap = lookup(request.experience, request.interest).to_string();
    Json(RoadmapResponse { roadmap })
}

/// POST /api/v1/roadmaps/generate
///
/// Validates the free-text inputs, then makes the single Gemini call.
/// An upstream failure comes back as a displayable "❌ Error: ..." string
/// in the roadmap field, not as an HTTP error — only missing input is
/// rejected here, before any outbound call is made.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    if request.background.trim().is_empty() || request.goal.trim().is_empty() {
        return Err(AppError::Validation(
            "Please fill in both Background and Dream Role.".to_string(),
        ));
    }

    let roadmap = generate_roadmap(
        &request.experience_years,
        &request.background,
        &request.goal,
        &state.llm,
    )
    .await;

    Ok(Json(RoadmapResponse { roadmap }))
}
