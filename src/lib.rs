pub mod bracket;
pub mod config;
pub mod error;
pub mod instruction;
pub mod interpreter;
pub mod snapshot;
pub mod tape;
