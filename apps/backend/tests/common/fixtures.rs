//! Test fixtures and factory functions for creating test data.

use serde_json::json;

use study_planner_backend::models::{
    ChapterMeta, ExamRecord, ExamSyllabus, ExamType, Seed, Student, SubjectChapters, TopicScore,
};

fn topic(topic: &str, marks_obtained: f64, max_marks: f64) -> TopicScore {
    TopicScore {
        topic: topic.to_string(),
        marks_obtained,
        max_marks,
    }
}

fn chapter(name: &str, weightage: f64, difficulty: f64) -> ChapterMeta {
    ChapterMeta {
        chapter_name: name.to_string(),
        weightage,
        difficulty,
    }
}

/// Seed with two class-6 students, two subjects and a term2 exam.
///
/// S1 scored 8/10 then 9/10 on Fractions before term2.
pub fn seed() -> Seed {
    Seed {
        students: vec![
            Student {
                student_id: "S1".to_string(),
                name: "Asha".to_string(),
                roll_number: "601".to_string(),
                class: 6,
                exams: vec![
                    ExamRecord {
                        exam_type: ExamType::Term1,
                        subject: "Maths".to_string(),
                        topic_scores: vec![topic("Fractions", 8.0, 10.0), topic("Decimals", 3.0, 10.0)],
                    },
                    ExamRecord {
                        exam_type: ExamType::MidTerm,
                        subject: "Maths".to_string(),
                        topic_scores: vec![topic("Fractions", 9.0, 10.0)],
                    },
                    ExamRecord {
                        exam_type: ExamType::EndTerm,
                        subject: "Maths".to_string(),
                        topic_scores: vec![topic("Fractions", 0.0, 10.0)],
                    },
                ],
            },
            Student {
                student_id: "S2".to_string(),
                name: "Kabir".to_string(),
                roll_number: "602".to_string(),
                class: 6,
                exams: vec![],
            },
        ],
        exams: vec![
            ExamSyllabus {
                class: 6,
                exam_type: ExamType::Term2,
                subject_code: "MATH".to_string(),
                syllabus: vec!["Fractions".to_string(), "Decimals".to_string()],
            },
            ExamSyllabus {
                class: 7,
                exam_type: ExamType::Term1,
                subject_code: "MATH".to_string(),
                syllabus: vec!["Integers".to_string()],
            },
        ],
        chapters: vec![SubjectChapters {
            class: 6,
            subject_code: "MATH".to_string(),
            subject_name: Some("Maths".to_string()),
            chapters: vec![chapter("Fractions", 2.0, 0.8), chapter("Decimals", 1.0, 0.4)],
        }],
    }
}

/// Create a study plan request body for S1's term2 exam.
pub fn study_plan_request(total_hours: f64) -> serde_json::Value {
    json!({
        "subjectsInExam": [
            { "subject_code": "MATH", "syllabus": ["Fractions", "Decimals"] },
            { "subject_code": "SCI", "syllabus": ["Cells"] }
        ],
        "student": { "student_id": "S1", "name": "Asha", "roll_number": "601" },
        "classNum": 6,
        "totalHours": total_hours,
        "selectedExamType": "term2"
    })
}

/// Create a schedule request body with one single-chapter subject.
pub fn schedule_request(
    learning: f64,
    revision1: f64,
    revision2: f64,
    days_left: u32,
    hours_per_day: f64,
) -> serde_json::Value {
    json!({
        "allSubjectPlans": [{
            "subject": "Maths",
            "plan": [{
                "subject": "Maths",
                "subject_code": "MATH",
                "chapter": "Fractions",
                "weightage": 1,
                "difficulty": 0.5,
                "past_performance": 0.5,
                "score": 0.75,
                "learning_hours": learning,
                "revision1_hours": revision1,
                "revision2_hours": revision2
            }]
        }],
        "daysLeft": days_left,
        "hoursPerDay": hours_per_day
    })
}
