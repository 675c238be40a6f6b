//! Study plan endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::planning;
use crate::AppState;

/// POST /api/generate-study-plan
pub async fn generate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<StudyPlanRequest>, JsonRejection>,
) -> Result<Json<StudyPlanResponse>> {
    let Json(payload) = payload?;
    let response = planning::generate_and_store(&state.db, &payload)?;
    Ok(Json(response))
}

/// GET /api/study-plans/:student_id
pub async fn list(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<StudyPlansResponse>> {
    let plans = state.db.get_plans(&student_id);
    if plans.is_empty() && state.db.get_student(&student_id).is_none() {
        return Err(ApiError::NotFound(format!("Student {}", student_id)));
    }

    Ok(Json(StudyPlansResponse { plans }))
}
