//! Exam syllabus and chapter metadata endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use super::parse_class_num;
use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/exams/:class_num
pub async fn exams(
    State(state): State<AppState>,
    Path(class_num): Path<String>,
) -> Result<Json<Vec<ExamSyllabus>>> {
    let class_num = parse_class_num(&class_num)?;
    Ok(Json(state.db.get_exams(class_num)))
}

/// GET /api/chapters/:class_num/:subject_code
/// Returns an empty object for unknown subjects
pub async fn chapters(
    State(state): State<AppState>,
    Path((class_num, subject_code)): Path<(String, String)>,
) -> Result<Json<ChapterInfoResponse>> {
    let class_num = parse_class_num(&class_num)?;

    let info: ChapterInfoResponse = state
        .db
        .get_subject_chapters(class_num, &subject_code)
        .map(|doc| {
            doc.chapters
                .iter()
                .map(|c| {
                    (
                        c.chapter_name.clone(),
                        ChapterInfo {
                            weightage: c.weightage,
                            difficulty: c.difficulty,
                        },
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(Json(info))
}
