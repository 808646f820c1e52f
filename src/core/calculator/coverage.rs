//! Distinct minutes of a day covered by at least one entry.

use crate::models::entry::Entry;
use crate::utils::time::MINUTES_PER_DAY;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub covered_minutes: i64,
    pub free_minutes: i64,
    pub covered_percent: i64,
}

/// Sort by start and merge every interval starting at or before the end of
/// the current one.
fn merge(mut intervals: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
    intervals.sort_by_key(|&(start, _)| start);

    let mut merged: Vec<(i64, i64)> = Vec::with_capacity(intervals.len());
    for (start, end) in intervals {
        match merged.last_mut() {
            Some((_, cur_end)) if start <= *cur_end => *cur_end = (*cur_end).max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

pub fn covered_minutes(entries: &[Entry]) -> i64 {
    if entries.is_empty() {
        return 0;
    }

    // end <= start: the entry is taken to run past midnight
    let intervals = entries
        .iter()
        .map(|e| {
            let start = e.start_minutes();
            let mut end = e.end_minutes();
            if end <= start {
                end += MINUTES_PER_DAY;
            }
            (start, end)
        })
        .collect();

    // Minutes past midnight are credited at the start of the same day,
    // then merged again so they are not counted twice.
    let mut folded = Vec::new();
    for (start, end) in merge(intervals) {
        if end > MINUTES_PER_DAY {
            folded.push((start, MINUTES_PER_DAY));
            folded.push((0, end - MINUTES_PER_DAY));
        } else {
            folded.push((start, end));
        }
    }

    let total: i64 = merge(folded).iter().map(|(s, e)| e - s).sum();
    total.min(MINUTES_PER_DAY)
}

pub fn coverage(entries: &[Entry]) -> Coverage {
    let covered = covered_minutes(entries);

    Coverage {
        covered_minutes: covered,
        free_minutes: MINUTES_PER_DAY - covered,
        covered_percent: (covered as f64 / MINUTES_PER_DAY as f64 * 100.0).round() as i64,
    }
}
