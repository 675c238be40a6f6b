//! In-memory document store
//!
//! Students, exam syllabi and chapter metadata are read-only after seeding.
//! Generated plans are upserted by (student, class, subject, exam) key.

pub mod error;

use std::collections::HashMap;
use std::path::Path;

use chrono::Utc;
use parking_lot::RwLock;
use planner_core::error::SourceError;
use planner_core::sources::{ChapterCatalog, HistorySource, PlanKey, PlanRecord, PlanSink};

use crate::models::*;
pub use error::DbError;

/// Database wrapper holding every collection in memory
#[derive(Debug, Default)]
pub struct Database {
    students: Vec<Student>,
    exams: Vec<ExamSyllabus>,
    chapters: Vec<SubjectChapters>,
    plans: RwLock<HashMap<PlanKey, StoredPlan>>,
}

impl Database {
    /// Create a database from seed documents
    pub fn from_seed(seed: Seed) -> Self {
        Self {
            students: seed.students,
            exams: seed.exams,
            chapters: seed.chapters,
            plans: RwLock::new(HashMap::new()),
        }
    }

    /// Load seed documents from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DbError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let seed: Seed = serde_json::from_str(&content).map_err(|source| DbError::InvalidSeed {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            students = seed.students.len(),
            exams = seed.exams.len(),
            subjects = seed.chapters.len(),
            "Loaded seed data from {}",
            path.display()
        );
        Ok(Self::from_seed(seed))
    }

    // === Student Repository ===

    /// Get all students
    pub fn get_students(&self) -> &[Student] {
        &self.students
    }

    /// Get student by ID
    pub fn get_student(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.student_id == student_id)
    }

    // === Exam Repository ===

    /// Get exam syllabi for a class
    pub fn get_exams(&self, class_num: u32) -> Vec<ExamSyllabus> {
        self.exams
            .iter()
            .filter(|e| e.class == class_num)
            .cloned()
            .collect()
    }

    // === Chapter Repository ===

    /// Get chapter metadata for a subject in a class
    pub fn get_subject_chapters(&self, class_num: u32, subject_code: &str) -> Option<&SubjectChapters> {
        self.chapters
            .iter()
            .find(|c| c.class == class_num && c.subject_code == subject_code)
    }

    // === Plan Repository ===

    /// Get all stored plans for a student, ordered by class, exam and subject
    pub fn get_plans(&self, student_id: &str) -> Vec<StoredPlan> {
        let mut plans: Vec<StoredPlan> = self
            .plans
            .read()
            .values()
            .filter(|p| p.student_id == student_id)
            .cloned()
            .collect();
        plans.sort_by(|a, b| {
            (a.class, exam_rank(&a.exam_type), &a.subject)
                .cmp(&(b.class, exam_rank(&b.exam_type), &b.subject))
        });
        plans
    }
}

/// Curriculum position of a stored exam type; unknown types sort last.
fn exam_rank(exam_type: &str) -> usize {
    ExamType::from_token(exam_type).map_or(usize::MAX, ExamType::rank)
}

impl HistorySource for Database {
    fn exam_history(&self, student_id: &str) -> Result<Option<Vec<ExamRecord>>, SourceError> {
        Ok(self
            .get_student(student_id)
            .filter(|s| !s.exams.is_empty())
            .map(|s| s.exams.clone()))
    }
}

impl ChapterCatalog for Database {
    fn subject_catalog(&self, class_num: u32, subject_code: &str) -> Option<SubjectCatalog> {
        self.get_subject_chapters(class_num, subject_code)
            .map(SubjectChapters::to_catalog)
    }
}

impl PlanSink for Database {
    fn upsert_plan(&self, record: PlanRecord) -> Result<(), SourceError> {
        let key = record.key.clone();
        let plan = StoredPlan::from_record(record, Utc::now());
        self.plans.write().insert(key, plan);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::types::{StudentRef, TopicScore};
    use pretty_assertions::assert_eq;

    fn seed() -> Seed {
        Seed {
            students: vec![
                Student {
                    student_id: "S1".to_string(),
                    name: "Asha".to_string(),
                    roll_number: "12".to_string(),
                    class: 6,
                    exams: vec![ExamRecord {
                        exam_type: ExamType::Term1,
                        subject: "Maths".to_string(),
                        topic_scores: vec![TopicScore {
                            topic: "Fractions".to_string(),
                            marks_obtained: 7.0,
                            max_marks: 10.0,
                        }],
                    }],
                },
                Student {
                    student_id: "S2".to_string(),
                    name: "Ravi".to_string(),
                    roll_number: "13".to_string(),
                    class: 6,
                    exams: vec![],
                },
            ],
            exams: vec![ExamSyllabus {
                class: 6,
                exam_type: ExamType::Term2,
                subject_code: "MATH".to_string(),
                syllabus: vec!["Fractions".to_string()],
            }],
            chapters: vec![SubjectChapters {
                class: 6,
                subject_code: "MATH".to_string(),
                subject_name: Some("Maths".to_string()),
                chapters: vec![ChapterMeta::with_defaults("Fractions")],
            }],
        }
    }

    fn record(subject: &str, hours: f64) -> PlanRecord {
        record_for_exam(subject, "term2", hours)
    }

    fn record_for_exam(subject: &str, exam_type: &str, hours: f64) -> PlanRecord {
        let student = StudentRef {
            student_id: "S1".to_string(),
            name: "Asha".to_string(),
            roll_number: "12".to_string(),
        };
        let item = ChapterItem {
            subject: subject.to_string(),
            subject_code: "MATH".to_string(),
            chapter: "Fractions".to_string(),
            weightage: 1.0,
            difficulty: 0.5,
            past_performance: 0.5,
            score: 0.75,
            learning_hours: hours,
            revision1_hours: 0.0,
            revision2_hours: 0.0,
        };
        PlanRecord::new(&student, 6, exam_type, subject, vec![item])
    }

    #[test]
    fn history_for_known_and_unknown_students() {
        let db = Database::from_seed(seed());
        assert_eq!(db.exam_history("S1").unwrap().unwrap().len(), 1);
        assert!(db.exam_history("S2").unwrap().is_none());
        assert!(db.exam_history("missing").unwrap().is_none());
    }

    #[test]
    fn catalog_lookup_by_class_and_code() {
        let db = Database::from_seed(seed());
        let catalog = db.subject_catalog(6, "MATH").unwrap();
        assert_eq!(catalog.subject_name.as_deref(), Some("Maths"));
        assert!(db.subject_catalog(7, "MATH").is_none());
    }

    #[test]
    fn exams_filtered_by_class() {
        let db = Database::from_seed(seed());
        assert_eq!(db.get_exams(6).len(), 1);
        assert!(db.get_exams(9).is_empty());
    }

    #[test]
    fn upsert_replaces_plan_with_same_key() {
        let db = Database::from_seed(seed());
        db.upsert_plan(record("Maths", 4.0)).unwrap();
        db.upsert_plan(record("Maths", 6.0)).unwrap();
        db.upsert_plan(record("Science", 2.0)).unwrap();

        let plans = db.get_plans("S1");
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].subject, "Maths");
        assert_eq!(plans[0].plan[0].learning_hours, 6.0);
        assert!(db.get_plans("S2").is_empty());
    }

    #[test]
    fn plans_listed_in_curriculum_order() {
        let db = Database::from_seed(seed());
        for exam_type in ["end_term", "term1", "mid_term", "term2"] {
            db.upsert_plan(record_for_exam("Maths", exam_type, 1.0)).unwrap();
        }
        db.upsert_plan(record_for_exam("Algebra", "term1", 1.0)).unwrap();

        let order: Vec<(String, String)> = db
            .get_plans("S1")
            .into_iter()
            .map(|p| (p.exam_type, p.subject))
            .collect();
        assert_eq!(
            order,
            vec![
                ("term1".to_string(), "Algebra".to_string()),
                ("term1".to_string(), "Maths".to_string()),
                ("mid_term".to_string(), "Maths".to_string()),
                ("term2".to_string(), "Maths".to_string()),
                ("end_term".to_string(), "Maths".to_string()),
            ]
        );
    }

    #[test]
    fn load_bundled_seed_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/seed.json");
        let db = Database::load(path).unwrap();
        assert!(!db.get_students().is_empty());
    }

    #[test]
    fn load_reports_missing_file() {
        let result = Database::load("/nonexistent/seed.json");
        assert!(matches!(result, Err(DbError::Io { .. })));
    }
}
