//! Day-wise schedule endpoint

use axum::{extract::rejection::JsonRejection, Json};

use crate::error::Result;
use crate::models::{ScheduleRequest, ScheduleResponse};
use crate::services::planning;

/// POST /api/schedule
pub async fn daywise(
    payload: std::result::Result<Json<ScheduleRequest>, JsonRejection>,
) -> Result<Json<ScheduleResponse>> {
    let Json(payload) = payload?;
    let response = planning::build_schedule(&payload)?;

    tracing::info!(
        days = response.schedule.len(),
        days_left = payload.days_left,
        "Built day-wise schedule"
    );
    Ok(Json(response))
}
