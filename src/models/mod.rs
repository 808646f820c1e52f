pub mod attribute;
pub mod condition;
pub mod day_summary;
pub mod entry;
