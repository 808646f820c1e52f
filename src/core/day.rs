//! Textual rendering of one day: a 24h bar, the overlap regions and the
//! coverage line.

use crate::config::Config;
use crate::core::calculator::overlap::{DEGREES_PER_MINUTE, entries_at_angle};
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::list_entries_for_day;
use crate::errors::AppResult;
use crate::models::day_summary::DayTimeline;
use crate::models::entry::Entry;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, RESET, color_for_coverage, swatch};
use crate::utils::formatting::mins2readable;
use crate::utils::time::{MINUTES_PER_DAY, format_minutes, short_time};
use chrono::NaiveDate;
use serde::Serialize;

const MIN_BAR_WIDTH: usize = 12;

#[derive(Serialize)]
struct DayReport<'a> {
    date: String,
    entries: &'a [Entry],
    #[serde(flatten)]
    timeline: &'a DayTimeline<'a>,
}

/// One cell per `1440 / width` minutes: `·` free, `▒` one entry, `█` two
/// or more. Cells are sampled at their midpoint.
pub fn render_bar(entries: &[Entry], width: usize) -> String {
    let width = width.max(MIN_BAR_WIDTH);
    let cell = MINUTES_PER_DAY as f64 / width as f64;

    (0..width)
        .map(|i| {
            let minute = (i as f64 + 0.5) * cell;
            match entries_at_angle(entries, minute * DEGREES_PER_MINUTE).len() {
                0 => '·',
                1 => '▒',
                _ => '█',
            }
        })
        .collect()
}

/// Hour labels (00, 06, 12, 18) aligned under [`render_bar`].
fn render_ruler(width: usize) -> String {
    let width = width.max(MIN_BAR_WIDTH);
    let mut ruler = vec![' '; width + 2];

    for hour in [0usize, 6, 12, 18] {
        let pos = hour * width / 24;
        for (k, ch) in format!("{:02}", hour).chars().enumerate() {
            if let Some(slot) = ruler.get_mut(pos + k) {
                *slot = ch;
            }
        }
    }

    ruler.into_iter().collect::<String>().trim_end().to_string()
}

pub struct DayLogic;

impl DayLogic {
    pub fn load(pool: &DbPool, date: &NaiveDate) -> AppResult<Vec<Entry>> {
        list_entries_for_day(&pool.conn, date)
    }

    pub fn print_json(date: &NaiveDate, entries: &[Entry]) -> AppResult<()> {
        let timeline = Core::analyze_day(entries);
        let report = DayReport {
            date: date.format("%Y-%m-%d").to_string(),
            entries,
            timeline: &timeline,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }

    pub fn print(date: &NaiveDate, entries: &[Entry], cfg: &Config) {
        header(date.format("%A %Y-%m-%d"));

        if entries.is_empty() {
            info("No entries for this day.");
            return;
        }

        let timeline = Core::analyze_day(entries);

        println!();
        println!("|{}|", render_bar(entries, cfg.timeline_width));
        println!("{}", render_ruler(cfg.timeline_width));
        println!();

        for e in entries {
            println!(
                "{} {}–{} {:>6}  {}",
                swatch(&e.color),
                short_time(&e.start_time),
                short_time(&e.end_time),
                mins2readable(e.duration_minutes(), false, true),
                e.display_name(&cfg.default_entry_name)
            );
        }

        println!();
        if timeline.overlaps.is_empty() {
            println!("{GREY}No overlapping entries.{RESET}");
        } else {
            println!("Overlaps:");
            for region in &timeline.overlaps {
                let names: Vec<&str> = region
                    .entries
                    .iter()
                    .map(|e| e.display_name(&cfg.default_entry_name))
                    .collect();
                let mid = (region.start_angle + region.end_angle) / 2.0;
                let active: Vec<String> = entries_at_angle(entries, mid)
                    .iter()
                    .map(|e| format!("#{}", e.id))
                    .collect();

                println!(
                    "  {:>6.2}°–{:<6.2}° {}–{}  {}  {GREY}(active at midpoint: {}){RESET}",
                    region.start_angle,
                    region.end_angle,
                    format_minutes(region.start_minutes()),
                    format_minutes(region.end_minutes()),
                    names.join(", "),
                    active.join(" ")
                );
            }
        }

        let cov = timeline.coverage;
        println!();
        println!(
            "Coverage: {}{} / {} minutes ({}%){}",
            color_for_coverage(cov.covered_percent),
            cov.covered_minutes,
            MINUTES_PER_DAY,
            cov.covered_percent,
            RESET
        );
        println!("Free:     {} minutes", cov.free_minutes);
    }
}
