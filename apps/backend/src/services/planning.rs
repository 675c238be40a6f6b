//! Plan generation against the store.

use planner_core::planner::{persist, StudyPlanner};
use planner_core::schedule::DaywiseScheduler;

use crate::db::Database;
use crate::error::Result;
use crate::models::{ScheduleRequest, ScheduleResponse, StudyPlanRequest, StudyPlanResponse};

/// Generate plans for every subject in the request and store them.
pub fn generate_and_store(db: &Database, request: &StudyPlanRequest) -> Result<StudyPlanResponse> {
    let response = StudyPlanner::new(db, db).generate(request)?;
    persist(db, request, &response.all_subject_plans)?;

    tracing::info!(
        student_id = request.student.as_ref().map(|s| s.student_id.as_str()).unwrap_or_default(),
        subjects = response.all_subject_plans.len(),
        "Stored study plan"
    );
    Ok(response)
}

/// Pack allocated hours into a day-wise schedule.
pub fn build_schedule(request: &ScheduleRequest) -> Result<ScheduleResponse> {
    request.validate()?;
    let schedule = DaywiseScheduler::new(request.days_left, request.hours_per_day)
        .schedule(&request.all_subject_plans);
    Ok(ScheduleResponse { schedule })
}
