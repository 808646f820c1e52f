use chrono::NaiveDate;
use rtimediary::core::calculator::coverage::{coverage, covered_minutes};
use rtimediary::core::calculator::overlap::{
    entries_at_angle, find_overlaps, time_to_angle,
};
use rtimediary::core::logic::Core;
use rtimediary::models::entry::Entry;

fn entry(id: i64, start: &str, end: &str) -> Entry {
    let day = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    Entry::new(id, day, start, end, &format!("entry {id}"))
}

#[test]
fn test_angles() {
    assert_eq!(time_to_angle("00:00:00"), 0.0);
    assert_eq!(time_to_angle("06:00:00"), 90.0);
    assert_eq!(time_to_angle("12:00"), 180.0);
    assert_eq!(time_to_angle("00:01:59"), 0.25);
    assert_eq!(time_to_angle("garbage"), 0.0);
    assert_eq!(time_to_angle("25:00"), 0.0);
}

#[test]
fn test_empty_day() {
    let t = Core::analyze_day(&[]);

    assert!(t.overlaps.is_empty());
    assert_eq!(t.coverage.covered_minutes, 0);
    assert_eq!(t.coverage.free_minutes, 1440);
    assert_eq!(t.coverage.covered_percent, 0);
}

#[test]
fn test_touching_entries_do_not_overlap() {
    let entries = vec![entry(1, "09:00:00", "10:00:00"), entry(2, "10:00:00", "11:00:00")];
    let t = Core::analyze_day(&entries);

    assert!(t.overlaps.is_empty());
    assert_eq!(t.coverage.covered_minutes, 120);
}

#[test]
fn test_identical_entries() {
    let entries = vec![entry(1, "08:00:00", "09:00:00"), entry(2, "08:00:00", "09:00:00")];
    let t = Core::analyze_day(&entries);

    assert_eq!(t.overlaps.len(), 1);
    let r = &t.overlaps[0];
    assert_eq!(r.start_minutes(), 8 * 60);
    assert_eq!(r.end_minutes(), 9 * 60);
    assert_eq!(r.entry_ids(), vec![1, 2]);
    assert_eq!(t.coverage.covered_minutes, 60);
}

#[test]
fn test_triple_overlap_regions_list_every_participant() {
    let entries = vec![
        entry(1, "09:00:00", "11:00:00"),
        entry(2, "10:00:00", "12:00:00"),
        entry(3, "10:30:00", "10:45:00"),
    ];
    let overlaps = find_overlaps(&entries);

    // A∩B, A∩C, B∩C
    assert_eq!(overlaps.len(), 3);

    let ab = &overlaps[0];
    assert_eq!((ab.start_minutes(), ab.end_minutes()), (600, 660));
    assert_eq!(ab.entry_ids(), vec![1, 2, 3]);

    for r in &overlaps[1..] {
        assert_eq!((r.start_minutes(), r.end_minutes()), (630, 645));
        assert_eq!(r.entry_ids(), vec![1, 2, 3]);
    }

    assert_eq!(covered_minutes(&entries), 180);
}

#[test]
fn test_full_day_with_seconds() {
    let c = coverage(&[entry(1, "00:00:00", "23:59:59")]);

    assert_eq!(c.covered_minutes, 1439);
    assert_eq!(c.free_minutes, 1);
    assert_eq!(c.covered_percent, 100);
}

#[test]
fn test_midnight_to_midnight_is_whole_day() {
    let c = coverage(&[entry(1, "00:00:00", "00:00:00")]);

    assert_eq!(c.covered_minutes, 1440);
    assert_eq!(c.covered_percent, 100);
}

#[test]
fn test_zero_length_entry_counts_as_whole_day() {
    let c = coverage(&[entry(1, "13:00:00", "13:00:00")]);
    assert_eq!(c.covered_minutes, 1440);
}

#[test]
fn test_wrap_around_is_folded_without_double_counting() {
    // 22:00 → 02:00 wraps; 01:00-03:00 shares the hour after midnight
    let entries = vec![entry(1, "22:00:00", "02:00:00"), entry(2, "01:00:00", "03:00:00")];

    // 22-24, 0-3
    assert_eq!(covered_minutes(&entries), 120 + 180);
}

#[test]
fn test_coverage_is_capped() {
    let entries = vec![entry(1, "06:00:00", "06:00:00"), entry(2, "20:00:00", "08:00:00")];
    assert_eq!(covered_minutes(&entries), 1440);
}

#[test]
fn test_non_overlapping_sum_equals_coverage() {
    let entries = vec![
        entry(1, "07:15:00", "07:45:00"),
        entry(2, "09:00:00", "12:30:00"),
        entry(3, "13:00:00", "13:01:00"),
        entry(4, "18:20:00", "23:00:00"),
    ];

    let total: i64 = entries.iter().map(Entry::duration_minutes).sum();
    assert_eq!(covered_minutes(&entries), total);
    assert!(find_overlaps(&entries).is_empty());
}

#[test]
fn test_malformed_times_count_as_midnight() {
    let entries = vec![entry(1, "xx:yy", "01:00"), entry(2, "", "00:30")];
    let t = Core::analyze_day(&entries);

    assert_eq!(t.coverage.covered_minutes, 60);
    assert_eq!(t.overlaps.len(), 1);
    assert_eq!(t.overlaps[0].end_minutes(), 30);
}

#[test]
fn test_entries_at_angle() {
    let entries = vec![
        entry(1, "09:00:00", "10:00:00"),
        entry(2, "09:30:00", "11:00:00"),
        entry(3, "23:00:00", "01:00:00"),
    ];

    let ids = |angle: f64| -> Vec<i64> {
        entries_at_angle(&entries, angle)
            .iter()
            .map(|e| e.id)
            .collect()
    };

    assert_eq!(ids(time_to_angle("09:45")), vec![1, 2]);
    // bounds are inclusive
    assert_eq!(ids(time_to_angle("10:00")), vec![1, 2]);
    assert_eq!(ids(time_to_angle("00:30")), vec![3]);
    assert_eq!(ids(time_to_angle("23:30")), vec![3]);
    assert!(ids(time_to_angle("15:00")).is_empty());
}
