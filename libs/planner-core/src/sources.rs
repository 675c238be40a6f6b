//! Data sources and sinks supplied by the embedding application.

use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::types::{ChapterItem, ExamRecord, StudentRef, SubjectCatalog};

/// Read access to students' exam history.
pub trait HistorySource: Send + Sync {
    /// All exam records of a student, in any order.
    ///
    /// Returns `Ok(None)` when the student or their history is unknown.
    fn exam_history(&self, student_id: &str) -> Result<Option<Vec<ExamRecord>>, SourceError>;
}

/// Read access to published chapter metadata.
pub trait ChapterCatalog: Send + Sync {
    /// Catalog entry for a subject taught in a class, if one exists.
    fn subject_catalog(&self, class_num: u32, subject_code: &str) -> Option<SubjectCatalog>;
}

/// Identity of a stored plan. Writing a record with an existing key replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanKey {
    pub student_id: String,
    pub class_num: u32,
    pub subject: String,
    pub exam_type: String,
}

/// One subject's plan for one student and exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub key: PlanKey,
    pub name: String,
    pub roll_number: String,
    pub plan: Vec<ChapterItem>,
}

impl PlanRecord {
    pub fn new(student: &StudentRef, class_num: u32, exam_type: &str, subject: &str, plan: Vec<ChapterItem>) -> Self {
        Self {
            key: PlanKey {
                student_id: student.student_id.clone(),
                class_num,
                subject: subject.to_string(),
                exam_type: exam_type.to_string(),
            },
            name: student.name.clone(),
            roll_number: student.roll_number.clone(),
            plan,
        }
    }
}

/// Destination for generated plans.
pub trait PlanSink: Send + Sync {
    /// Insert or replace the plan stored under `record.key`.
    fn upsert_plan(&self, record: PlanRecord) -> Result<(), SourceError>;
}
