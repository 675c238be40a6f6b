//! Past performance endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use planner_core::performance::PerformanceEstimator;

use crate::models::PastPerformanceResponse;
use crate::AppState;

/// GET /api/past-performance/:student_id/:subject/:topic/:exam_type
pub async fn past_performance(
    State(state): State<AppState>,
    Path((student_id, subject, topic, exam_type)): Path<(String, String, String, String)>,
) -> Json<PastPerformanceResponse> {
    let past_performance = PerformanceEstimator::default().lookup(
        &*state.db,
        &student_id,
        &subject,
        &topic,
        &exam_type,
    );

    Json(PastPerformanceResponse { past_performance })
}
