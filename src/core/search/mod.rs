pub mod compiler;
pub mod logic;
pub mod parse;

pub use compiler::{CompiledQuery, QueryParam, compile, compile_raw};
pub use logic::SearchLogic;
pub use parse::parse_condition;
