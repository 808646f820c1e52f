use crate::core::calculator::{coverage, overlap};
use crate::models::{day_summary::DayTimeline, entry::Entry};

pub struct Core;

impl Core {
    /// Overlap regions and coverage for the entries of one day.
    pub fn analyze_day(entries: &[Entry]) -> DayTimeline<'_> {
        DayTimeline {
            overlaps: overlap::find_overlaps(entries),
            coverage: coverage::coverage(entries),
        }
    }
}
