use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::get_entry;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET, swatch};
use crate::utils::formatting::mins2readable;

const NOTES_WIDTH: usize = 72;

pub struct ShowLogic;

impl ShowLogic {
    pub fn load(pool: &DbPool, id: i64) -> AppResult<Entry> {
        get_entry(&pool.conn, id)?.ok_or(AppError::EntryNotFound(id))
    }

    pub fn print(entry: &Entry, cfg: &Config) {
        header(format!(
            "#{} {}",
            entry.id,
            entry.display_name(&cfg.default_entry_name)
        ));

        println!("Date:       {}", entry.date_str());
        println!(
            "Time:       {} – {} ({})",
            entry.start_time,
            entry.end_time,
            mins2readable(entry.duration_minutes(), false, false)
        );
        println!("Color:      {} {}", swatch(&entry.color), entry.color);

        if entry.attributes.is_empty() {
            println!("Attributes: {GREY}none{RESET}");
        } else {
            let tags: Vec<String> = entry
                .attributes
                .iter()
                .map(|a| format!("{} {}", swatch(&a.color), a.name))
                .collect();
            println!("Attributes: {}", tags.join("  "));
        }

        println!();
        if entry.notes.trim().is_empty() {
            println!("{GREY}(no notes){RESET}");
        } else {
            for line in textwrap::wrap(&entry.notes, NOTES_WIDTH) {
                println!("  {}", line);
            }
        }
    }
}
