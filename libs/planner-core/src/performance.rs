//! Past performance estimation from exam history.
//!
//! The estimate is the mean accuracy of the two most recent observations of
//! a topic in exams that precede the selected one. Missing data never fails;
//! it falls back to a neutral 0.5.

use crate::round_to;
use crate::sources::HistorySource;
use crate::types::{ExamRecord, ExamType};

/// Estimate used when there is nothing to learn from.
pub const DEFAULT_PAST_PERFORMANCE: f64 = 0.5;

/// Number of most recent topic observations that are averaged.
pub const RECENT_OBSERVATIONS: usize = 2;

/// Derives a `[0, 1]` performance ratio for a topic.
#[derive(Debug, Clone)]
pub struct PerformanceEstimator {
    pub recent_observations: usize,
}

impl Default for PerformanceEstimator {
    fn default() -> Self {
        Self {
            recent_observations: RECENT_OBSERVATIONS,
        }
    }
}

impl PerformanceEstimator {
    /// Estimate performance on `topic` before the exam named by `exam_type`.
    ///
    /// Only exams strictly earlier than `exam_type` count. Unknown exam
    /// tokens carry no ordering and yield the default.
    pub fn estimate(&self, history: &[ExamRecord], subject: &str, topic: &str, exam_type: &str) -> f64 {
        let Some(selected) = ExamType::from_token(exam_type) else {
            return DEFAULT_PAST_PERFORMANCE;
        };

        let mut prior: Vec<&ExamRecord> = history
            .iter()
            .filter(|exam| exam.subject == subject && exam.exam_type.rank() < selected.rank())
            .collect();
        prior.sort_by_key(|exam| exam.exam_type.rank());

        let ratios: Vec<f64> = prior
            .iter()
            .flat_map(|exam| exam.topic_scores.iter())
            .filter(|score| score.topic == topic && score.max_marks > 0.0)
            .map(|score| score.marks_obtained / score.max_marks)
            .collect();

        let recent = &ratios[ratios.len().saturating_sub(self.recent_observations)..];
        if recent.is_empty() {
            return DEFAULT_PAST_PERFORMANCE;
        }

        let mean = recent.iter().sum::<f64>() / recent.len() as f64;
        round_to(mean, 2)
    }

    /// Look up a student's history and estimate from it.
    ///
    /// Unknown students and failing sources both produce the default so that
    /// plan generation is never blocked by missing history.
    pub fn lookup(
        &self,
        source: &dyn HistorySource,
        student_id: &str,
        subject: &str,
        topic: &str,
        exam_type: &str,
    ) -> f64 {
        match source.exam_history(student_id) {
            Ok(Some(history)) => self.estimate(&history, subject, topic, exam_type),
            Ok(None) => DEFAULT_PAST_PERFORMANCE,
            Err(e) => {
                tracing::warn!(student_id, subject, topic, error = %e, "history lookup failed, using default");
                DEFAULT_PAST_PERFORMANCE
            }
        }
    }
}
