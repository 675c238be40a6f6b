//! Chapter priority scoring.

use crate::types::ChapterMeta;
use std::collections::HashMap;

/// Weightage assumed for chapters missing from the catalog.
pub const DEFAULT_WEIGHTAGE: f64 = 1.0;
/// Difficulty assumed for chapters missing from the catalog.
pub const DEFAULT_DIFFICULTY: f64 = 0.5;

const WEIGHTAGE_WEIGHT: f64 = 0.5;
const DIFFICULTY_WEIGHT: f64 = 0.3;
const WEAKNESS_WEIGHT: f64 = 0.2;

/// Priority of a chapter. Weak past performance raises the score.
pub fn score(weightage: f64, difficulty: f64, past_performance: f64) -> f64 {
    WEIGHTAGE_WEIGHT * weightage + DIFFICULTY_WEIGHT * difficulty + WEAKNESS_WEIGHT * (1.0 - past_performance)
}

/// Chapter metadata indexed by name, with defaults for unknown chapters.
#[derive(Debug, Default)]
pub struct ChapterIndex<'a> {
    by_name: HashMap<&'a str, &'a ChapterMeta>,
}

impl<'a> ChapterIndex<'a> {
    /// Later entries with a repeated name replace earlier ones.
    pub fn new(chapters: &'a [ChapterMeta]) -> Self {
        Self {
            by_name: chapters.iter().map(|c| (c.chapter_name.as_str(), c)).collect(),
        }
    }

    /// `(weightage, difficulty)` for a chapter.
    pub fn resolve(&self, chapter: &str) -> (f64, f64) {
        self.by_name
            .get(chapter)
            .map(|meta| (meta.weightage, meta.difficulty))
            .unwrap_or((DEFAULT_WEIGHTAGE, DEFAULT_DIFFICULTY))
    }
}
