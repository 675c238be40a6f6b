//! Study plan generation.
//!
//! Ties the pieces together: chapter metadata and exam history come in
//! through the source traits, every syllabus chapter is scored, and the hour
//! budget is split across all chapters of all subjects in one pass.

use crate::allocation::{group_by_subject, HourAllocator};
use crate::error::{Result, SourceError};
use crate::performance::PerformanceEstimator;
use crate::scoring::{self, ChapterIndex};
use crate::sources::{ChapterCatalog, HistorySource, PlanRecord, PlanSink};
use crate::types::{ChapterItem, StudyPlanRequest, StudyPlanResponse, SubjectPlan};

/// Generates per-subject study plans from injected data sources.
pub struct StudyPlanner<'a> {
    history: &'a dyn HistorySource,
    catalog: &'a dyn ChapterCatalog,
    estimator: PerformanceEstimator,
    allocator: HourAllocator,
}

impl<'a> StudyPlanner<'a> {
    pub fn new(history: &'a dyn HistorySource, catalog: &'a dyn ChapterCatalog) -> Self {
        Self {
            history,
            catalog,
            estimator: PerformanceEstimator::default(),
            allocator: HourAllocator::default(),
        }
    }

    /// Validate the request and build the plan for every subject in it.
    pub fn generate(&self, request: &StudyPlanRequest) -> Result<StudyPlanResponse> {
        let input = request.validate()?;
        let mut items: Vec<ChapterItem> = Vec::new();

        for subject in input.subjects {
            let catalog = self
                .catalog
                .subject_catalog(input.class_num, &subject.subject_code)
                .unwrap_or_default();
            let subject_name = catalog
                .subject_name
                .clone()
                .unwrap_or_else(|| subject.subject_code.clone());
            let index = ChapterIndex::new(&catalog.chapters);

            for chapter in &subject.syllabus {
                let (weightage, difficulty) = index.resolve(chapter);
                let past_performance = self.estimator.lookup(
                    self.history,
                    &input.student.student_id,
                    &subject_name,
                    chapter,
                    input.exam_type,
                );

                items.push(ChapterItem {
                    subject: subject_name.clone(),
                    subject_code: subject.subject_code.clone(),
                    chapter: chapter.clone(),
                    weightage,
                    difficulty,
                    past_performance,
                    score: scoring::score(weightage, difficulty, past_performance),
                    learning_hours: 0.0,
                    revision1_hours: 0.0,
                    revision2_hours: 0.0,
                });
            }
        }

        self.allocator.allocate(&mut items, input.total_hours);
        let all_subject_plans = group_by_subject(items);

        tracing::debug!(
            student_id = %input.student.student_id,
            subjects = all_subject_plans.len(),
            total_hours = input.total_hours,
            "generated study plan"
        );

        Ok(StudyPlanResponse { all_subject_plans })
    }
}

/// Store every subject plan under its (student, class, subject, exam) key.
///
/// The request must already have passed validation.
pub fn persist(
    sink: &dyn PlanSink,
    request: &StudyPlanRequest,
    plans: &[SubjectPlan],
) -> std::result::Result<(), SourceError> {
    let (Some(student), Some(class_num), Some(exam_type)) = (
        request.student.as_ref(),
        request.class_num,
        request.selected_exam_type.as_deref(),
    ) else {
        return Err(SourceError::Rejected("plan request was not validated".to_string()));
    };

    for subject_plan in plans {
        sink.upsert_plan(PlanRecord::new(
            student,
            class_num,
            exam_type,
            &subject_plan.subject,
            subject_plan.plan.clone(),
        ))?;
    }
    Ok(())
}
