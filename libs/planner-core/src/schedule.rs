//! Day-wise schedule packing.
//!
//! Each subject gets a FIFO queue of phase work: every Learning block first,
//! then Revision 1, then Revision 2, each in chapter order. Days are filled
//! by visiting subjects round-robin; a subject keeps its turn until either
//! its queue or the day's hours run out. The rotation persists across days
//! so no subject is always first or last.

use std::collections::VecDeque;

use crate::round_to;
use crate::types::{DaySchedule, Phase, ScheduleTask, SubjectPlan};

/// Amounts below this are floating-point residue, not work.
const HOUR_EPSILON: f64 = 1e-9;

/// Task hours are emitted in hundredths, so a day needs at least one.
pub const MIN_DAILY_HOURS: f64 = 0.01;

/// Remainders smaller than half a hundredth round to nothing and are dropped.
const MIN_TASK_HOURS: f64 = 0.005;

/// Largest whole number of hundredths that fits in `hours`.
fn floor_to_hundredths(hours: f64) -> f64 {
    ((hours + HOUR_EPSILON) * 100.0).floor() / 100.0
}

#[derive(Debug, Clone)]
struct QueuedTask {
    phase: Phase,
    chapter: String,
    remaining_hours: f64,
}

#[derive(Debug, Clone)]
struct SubjectQueue {
    subject: String,
    queue: VecDeque<QueuedTask>,
}

impl SubjectQueue {
    fn from_plan(plan: &SubjectPlan) -> Self {
        let queue = Phase::ALL
            .iter()
            .flat_map(move |&phase| {
                plan.plan.iter().filter_map(move |item| {
                    let hours = item.hours_for(phase);
                    (hours >= MIN_TASK_HOURS).then(|| QueuedTask {
                        phase,
                        chapter: item.chapter.clone(),
                        remaining_hours: hours,
                    })
                })
            })
            .collect();

        Self {
            subject: plan.subject.clone(),
            queue,
        }
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Consume up to `hours_left` from the front of the queue, returning
    /// the hours still free for the day. Both counters are reduced by the
    /// rounded hours that were emitted.
    fn drain_into(&mut self, today: &mut Vec<ScheduleTask>, mut hours_left: f64) -> f64 {
        loop {
            let budget = floor_to_hundredths(hours_left);
            if budget <= HOUR_EPSILON {
                break;
            }
            let Some(task) = self.queue.front_mut() else {
                break;
            };

            let assigned = round_to(task.remaining_hours, 2).min(budget);
            if assigned > HOUR_EPSILON {
                today.push(ScheduleTask {
                    phase: task.phase,
                    subject: self.subject.clone(),
                    chapter: task.chapter.clone(),
                    hours: assigned,
                });
                task.remaining_hours -= assigned;
                hours_left -= assigned;
            }

            if task.remaining_hours < MIN_TASK_HOURS {
                self.queue.pop_front();
            }
        }
        hours_left
    }
}

/// Packs allocated hours into a fixed number of days.
#[derive(Debug, Clone)]
pub struct DaywiseScheduler {
    pub days_left: u32,
    pub hours_per_day: f64,
}

impl DaywiseScheduler {
    pub fn new(days_left: u32, hours_per_day: f64) -> Self {
        Self {
            days_left,
            hours_per_day,
        }
    }

    /// Build the schedule. Stops early once every subject is exhausted, so
    /// the result may be shorter than `days_left`.
    pub fn schedule(&self, plans: &[SubjectPlan]) -> Vec<DaySchedule> {
        let mut queues: Vec<SubjectQueue> = plans
            .iter()
            .map(SubjectQueue::from_plan)
            .filter(|q| !q.is_empty())
            .collect();

        let mut days = Vec::new();
        let mut cursor = 0usize;

        for day in 1..=self.days_left {
            if queues.is_empty() {
                break;
            }

            let mut hours_left = self.hours_per_day;
            let mut today = Vec::new();

            while hours_left >= MIN_DAILY_HOURS - HOUR_EPSILON && !queues.is_empty() {
                let idx = cursor % queues.len();
                hours_left = queues[idx].drain_into(&mut today, hours_left);

                if queues[idx].is_empty() {
                    // The next subject slides into this slot and continues the day.
                    queues.remove(idx);
                    cursor = idx;
                } else {
                    cursor = idx + 1;
                    break;
                }
            }

            days.push(DaySchedule { day, tasks: today });
        }

        tracing::debug!(
            days = days.len(),
            unscheduled_subjects = queues.len(),
            "built day-wise schedule"
        );
        days
    }
}
