//! Overlap detection on the 24h dial.
//!
//! A day maps onto 0–360°, one minute being a quarter of a degree. Each
//! unordered pair of entries whose arcs intersect yields one region; the
//! region then lists every entry touching its range, not just the pair.
//! With three or more entries sharing a range the same sub-range can show up
//! once per intersecting pair.

use crate::models::entry::Entry;
use crate::utils::time::{MINUTES_PER_DAY, minutes_of_day};
use serde::Serialize;

pub const DEGREES_PER_MINUTE: f64 = 360.0 / MINUTES_PER_DAY as f64;

/// Position of a time of day on the dial. Malformed times sit at 0°.
pub fn time_to_angle(time: &str) -> f64 {
    minutes_of_day(time) as f64 * DEGREES_PER_MINUTE
}

pub fn angle_to_minutes(angle: f64) -> i64 {
    (angle / DEGREES_PER_MINUTE).round() as i64
}

#[derive(Debug, Clone, Serialize)]
pub struct OverlapRegion<'a> {
    pub start_angle: f64,
    pub end_angle: f64,
    pub entries: Vec<&'a Entry>,
}

impl OverlapRegion<'_> {
    pub fn start_minutes(&self) -> i64 {
        angle_to_minutes(self.start_angle)
    }

    pub fn end_minutes(&self) -> i64 {
        angle_to_minutes(self.end_angle)
    }

    pub fn entry_ids(&self) -> Vec<i64> {
        self.entries.iter().map(|e| e.id).collect()
    }
}

fn arc(entry: &Entry) -> (f64, f64) {
    (time_to_angle(&entry.start_time), time_to_angle(&entry.end_time))
}

pub fn find_overlaps(entries: &[Entry]) -> Vec<OverlapRegion<'_>> {
    let arcs: Vec<(f64, f64)> = entries.iter().map(arc).collect();
    let mut overlaps = Vec::new();

    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let (start1, end1) = arcs[i];
            let (start2, end2) = arcs[j];

            let start = start1.max(start2);
            let end = end1.min(end2);

            if start < end {
                let touching = entries
                    .iter()
                    .zip(&arcs)
                    .filter(|(_, (s, e))| !(*e <= start || *s >= end))
                    .map(|(entry, _)| entry)
                    .collect();

                overlaps.push(OverlapRegion {
                    start_angle: start,
                    end_angle: end,
                    entries: touching,
                });
            }
        }
    }

    overlaps
}

/// Entries whose arc contains `angle`, bounds included. An arc ending
/// before it starts wraps through midnight.
pub fn entries_at_angle(entries: &[Entry], angle: f64) -> Vec<&Entry> {
    entries
        .iter()
        .filter(|entry| {
            let (start, end) = arc(entry);
            if end < start {
                angle >= start || angle <= end
            } else {
                angle >= start && angle <= end
            }
        })
        .collect()
}
