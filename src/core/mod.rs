pub mod add;
pub mod attr;
pub mod backup;
pub mod calculator;
pub mod config;
pub mod day;
pub mod del;
pub mod edit;
pub mod export;
pub mod log;
pub mod logic;
pub mod render;
pub mod search;
pub mod show;
