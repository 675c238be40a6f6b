//! Core study planning library.
//!
//! Provides:
//! - Past performance estimation from exam history
//! - Chapter priority scoring
//! - Hour allocation across learning and revision phases
//! - Day-wise round-robin scheduling
//! - Source traits for history, chapter metadata and plan storage

pub mod allocation;
pub mod error;
pub mod performance;
pub mod planner;
pub mod schedule;
pub mod scoring;
pub mod sources;
pub mod types;

pub use allocation::{group_by_subject, HourAllocator, PhaseSplit};
pub use error::{PlanError, Result, SourceError};
pub use performance::{PerformanceEstimator, DEFAULT_PAST_PERFORMANCE};
pub use planner::{persist, StudyPlanner};
pub use schedule::DaywiseScheduler;
pub use sources::{ChapterCatalog, HistorySource, PlanKey, PlanRecord, PlanSink};
pub use types::{
    ChapterItem, ChapterMeta, DaySchedule, ExamRecord, ExamType, Phase, ScheduleRequest,
    ScheduleResponse, ScheduleTask, StudentRef, StudyPlanRequest, StudyPlanResponse,
    SubjectCatalog, SubjectInExam, SubjectPlan, TopicScore,
};

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
