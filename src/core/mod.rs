pub mod cli;
pub mod context;
pub mod terminal;
pub mod types;
