//! Axum route handlers for the recommendation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::laptop::Laptop;
use crate::recommendation::advisor::{recommend_laptops, RecommendationRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Laptop>,
}

/// POST /api/v1/recommendations
///
/// Runs the questionnaire answers through the recommendation flow.
/// An empty `recommendations` array means nothing in the catalog fit the
/// budget — distinct from the error responses.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    if !request.budget.is_finite() || request.budget <= 0.0 {
        return Err(AppError::Validation(
            "budget must be a positive number".to_string(),
        ));
    }

    let recommendations = recommend_laptops(
        state.model.as_ref(),
        &state.config.catalog_path,
        &request,
    )
    .await?;

    Ok(Json(RecommendationResponse { recommendations }))
}
