//! Stored documents and API types

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export shared types from planner-core
pub use planner_core::types::{
    ChapterItem, ChapterMeta, DaySchedule, ExamRecord, ExamType, ScheduleRequest,
    ScheduleResponse, StudyPlanRequest, StudyPlanResponse, SubjectCatalog, SubjectPlan, TopicScore,
};
use planner_core::sources::PlanRecord;

// === Stored Documents ===

/// Student with their exam history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    pub name: String,
    pub roll_number: String,
    pub class: u32,
    #[serde(default)]
    pub exams: Vec<ExamRecord>,
}

/// Syllabus of one subject in one exam of a class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamSyllabus {
    pub class: u32,
    pub exam_type: ExamType,
    pub subject_code: String,
    #[serde(default)]
    pub syllabus: Vec<String>,
}

/// Chapter metadata published for a subject in a class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectChapters {
    pub class: u32,
    pub subject_code: String,
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub chapters: Vec<ChapterMeta>,
}

impl SubjectChapters {
    pub fn to_catalog(&self) -> SubjectCatalog {
        SubjectCatalog {
            subject_name: self.subject_name.clone(),
            chapters: self.chapters.clone(),
        }
    }
}

/// Initial store contents, as read from the seed file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub exams: Vec<ExamSyllabus>,
    #[serde(default)]
    pub chapters: Vec<SubjectChapters>,
}

/// Generated plan for one subject, as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPlan {
    pub student_id: String,
    pub name: String,
    pub class: u32,
    pub roll_number: String,
    pub subject: String,
    pub exam_type: String,
    pub plan: Vec<ChapterItem>,
    pub updated_at: DateTime<Utc>,
}

impl StoredPlan {
    /// Create from a planner-core PlanRecord
    pub fn from_record(record: PlanRecord, updated_at: DateTime<Utc>) -> Self {
        Self {
            student_id: record.key.student_id,
            name: record.name,
            class: record.key.class_num,
            roll_number: record.roll_number,
            subject: record.key.subject,
            exam_type: record.key.exam_type,
            plan: record.plan,
            updated_at,
        }
    }
}

// === API Types ===

/// Weightage and difficulty of a chapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterInfo {
    pub weightage: f64,
    pub difficulty: f64,
}

/// Chapter name to metadata, empty when the subject is unknown
pub type ChapterInfoResponse = BTreeMap<String, ChapterInfo>;

/// Past performance lookup result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastPerformanceResponse {
    pub past_performance: f64,
}

/// Stored plans of a student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlansResponse {
    pub plans: Vec<StoredPlan>,
}
