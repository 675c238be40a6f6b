//! Student endpoints

use axum::{extract::State, Json};

use crate::models::Student;
use crate::AppState;

/// GET /api/students
pub async fn list(State(state): State<AppState>) -> Json<Vec<Student>> {
    Json(state.db.get_students().to_vec())
}
