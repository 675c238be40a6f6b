//! Hour allocation across study phases and chapters.

use crate::round_to;
use crate::types::{ChapterItem, SubjectPlan};

/// Share of the total budget given to each phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSplit {
    pub learning: f64,
    pub revision1: f64,
    pub revision2: f64,
}

impl Default for PhaseSplit {
    fn default() -> Self {
        Self {
            learning: 0.7,
            revision1: 0.2,
            revision2: 0.1,
        }
    }
}

/// Distributes an hour budget over chapters in proportion to their score.
#[derive(Debug, Clone, Default)]
pub struct HourAllocator {
    pub split: PhaseSplit,
}

impl HourAllocator {
    /// Fill in the three phase hours of every item.
    ///
    /// Each phase pool is divided independently and every share is rounded
    /// to one decimal, so pool totals may drift by the rounding residue.
    /// `total_hours` must already be validated as positive.
    pub fn allocate(&self, items: &mut [ChapterItem], total_hours: f64) {
        let total_score = match items.iter().map(|c| c.score).sum::<f64>() {
            s if s == 0.0 => 1.0,
            s => s,
        };

        let learning_pool = total_hours * self.split.learning;
        let revision1_pool = total_hours * self.split.revision1;
        let revision2_pool = total_hours * self.split.revision2;

        for item in items.iter_mut() {
            let share = item.score / total_score;
            item.learning_hours = round_to(learning_pool * share, 1);
            item.revision1_hours = round_to(revision1_pool * share, 1);
            item.revision2_hours = round_to(revision2_pool * share, 1);
        }
    }
}

/// Group items by subject, keeping subjects in first-seen order.
pub fn group_by_subject(items: Vec<ChapterItem>) -> Vec<SubjectPlan> {
    let mut plans: Vec<SubjectPlan> = Vec::new();
    for item in items {
        match plans.iter_mut().find(|p| p.subject == item.subject) {
            Some(plan) => plan.plan.push(item),
            None => plans.push(SubjectPlan {
                subject: item.subject.clone(),
                plan: vec![item],
            }),
        }
    }
    plans
}
