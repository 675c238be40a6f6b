//! Core types for study plan generation.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PlanError, Result};
use crate::schedule::MIN_DAILY_HOURS;
use crate::scoring::{DEFAULT_DIFFICULTY, DEFAULT_WEIGHTAGE};

/// Exam in the academic calendar, in curriculum order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamType {
    Term1,
    MidTerm,
    Term2,
    EndTerm,
}

impl ExamType {
    /// All exam types, earliest first.
    pub const ORDER: [ExamType; 4] = [Self::Term1, Self::MidTerm, Self::Term2, Self::EndTerm];

    /// Position in the academic calendar (0 = earliest).
    pub fn rank(self) -> usize {
        match self {
            Self::Term1 => 0,
            Self::MidTerm => 1,
            Self::Term2 => 2,
            Self::EndTerm => 3,
        }
    }

    /// Get the wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Term1 => "term1",
            Self::MidTerm => "mid_term",
            Self::Term2 => "term2",
            Self::EndTerm => "end_term",
        }
    }

    /// Parse from a wire token. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "term1" => Some(Self::Term1),
            "mid_term" => Some(Self::MidTerm),
            "term2" => Some(Self::Term2),
            "end_term" => Some(Self::EndTerm),
            _ => None,
        }
    }
}

/// Marks for a single topic within an exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicScore {
    pub topic: String,
    pub marks_obtained: f64,
    pub max_marks: f64,
}

/// One exam sat by a student in one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamRecord {
    pub exam_type: ExamType,
    pub subject: String,
    #[serde(default)]
    pub topic_scores: Vec<TopicScore>,
}

/// Chapter metadata as published for a (class, subject) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterMeta {
    pub chapter_name: String,
    #[serde(default = "default_weightage", deserialize_with = "weightage_or_default")]
    pub weightage: f64,
    #[serde(default = "default_difficulty", deserialize_with = "difficulty_or_default")]
    pub difficulty: f64,
}

impl ChapterMeta {
    /// Metadata for a chapter the catalog knows nothing about.
    pub fn with_defaults(chapter_name: impl Into<String>) -> Self {
        Self {
            chapter_name: chapter_name.into(),
            weightage: DEFAULT_WEIGHTAGE,
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

fn default_weightage() -> f64 {
    DEFAULT_WEIGHTAGE
}

fn default_difficulty() -> f64 {
    DEFAULT_DIFFICULTY
}

fn weightage_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_WEIGHTAGE))
}

fn difficulty_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_DIFFICULTY))
}

/// What the metadata source knows about one subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectCatalog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub chapters: Vec<ChapterMeta>,
}

/// A scored syllabus chapter with its allocated study hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterItem {
    pub subject: String,
    pub subject_code: String,
    pub chapter: String,
    pub weightage: f64,
    pub difficulty: f64,
    pub past_performance: f64,
    pub score: f64,
    #[serde(default)]
    pub learning_hours: f64,
    #[serde(default)]
    pub revision1_hours: f64,
    #[serde(default)]
    pub revision2_hours: f64,
}

impl ChapterItem {
    /// Hours allocated to the given phase.
    pub fn hours_for(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Learning => self.learning_hours,
            Phase::Revision1 => self.revision1_hours,
            Phase::Revision2 => self.revision2_hours,
        }
    }

    /// Sum of all three phases.
    pub fn total_hours(&self) -> f64 {
        self.learning_hours + self.revision1_hours + self.revision2_hours
    }
}

/// All chapters of one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectPlan {
    pub subject: String,
    pub plan: Vec<ChapterItem>,
}

/// Study stage of a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "Learning")]
    Learning,
    #[serde(rename = "Revision 1")]
    Revision1,
    #[serde(rename = "Revision 2")]
    Revision2,
}

impl Phase {
    /// Phases in the order they are studied.
    pub const ALL: [Phase; 3] = [Self::Learning, Self::Revision1, Self::Revision2];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Learning => "Learning",
            Self::Revision1 => "Revision 1",
            Self::Revision2 => "Revision 2",
        }
    }
}

/// A block of study assigned to a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTask {
    pub phase: Phase,
    pub subject: String,
    pub chapter: String,
    pub hours: f64,
}

/// Tasks for a single day, numbered from 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: u32,
    pub tasks: Vec<ScheduleTask>,
}

impl DaySchedule {
    pub fn total_hours(&self) -> f64 {
        self.tasks.iter().map(|t| t.hours).sum()
    }
}

/// Student identity carried on a plan request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRef {
    pub student_id: String,
    pub name: String,
    pub roll_number: String,
}

/// A subject sitting in the selected exam, with its syllabus chapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectInExam {
    pub subject_code: String,
    #[serde(default)]
    pub syllabus: Vec<String>,
}

/// Plan generation request as received from a client.
///
/// Every field is optional on the wire so that a missing field is reported
/// as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlanRequest {
    pub subjects_in_exam: Option<Vec<SubjectInExam>>,
    pub student: Option<StudentRef>,
    pub class_num: Option<u32>,
    pub total_hours: Option<f64>,
    pub selected_exam_type: Option<String>,
}

/// A validated view of [`StudyPlanRequest`].
#[derive(Debug, Clone, Copy)]
pub struct PlanInput<'a> {
    pub subjects: &'a [SubjectInExam],
    pub student: &'a StudentRef,
    pub class_num: u32,
    pub total_hours: f64,
    pub exam_type: &'a str,
}

impl StudyPlanRequest {
    /// Check required fields and the hour budget.
    pub fn validate(&self) -> Result<PlanInput<'_>> {
        let subjects = self
            .subjects_in_exam
            .as_deref()
            .ok_or(PlanError::MissingField("subjectsInExam"))?;
        let student = self
            .student
            .as_ref()
            .ok_or(PlanError::MissingField("student"))?;
        let class_num = self
            .class_num
            .filter(|&c| c != 0)
            .ok_or(PlanError::MissingField("classNum"))?;
        let total_hours = self
            .total_hours
            .ok_or(PlanError::MissingField("totalHours"))?;
        let exam_type = self
            .selected_exam_type
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(PlanError::MissingField("selectedExamType"))?;

        if !total_hours.is_finite() || total_hours <= 0.0 {
            return Err(PlanError::NonPositiveTotalHours(total_hours));
        }

        Ok(PlanInput {
            subjects,
            student,
            class_num,
            total_hours,
            exam_type,
        })
    }
}

/// Generated allocation, one entry per subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlanResponse {
    pub all_subject_plans: Vec<SubjectPlan>,
}

/// Day-wise schedule request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub all_subject_plans: Vec<SubjectPlan>,
    pub days_left: u32,
    pub hours_per_day: f64,
}

impl ScheduleRequest {
    pub fn validate(&self) -> Result<()> {
        if !self.hours_per_day.is_finite() || self.hours_per_day < MIN_DAILY_HOURS {
            return Err(PlanError::NonPositiveDailyHours(self.hours_per_day));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub schedule: Vec<DaySchedule>,
}
