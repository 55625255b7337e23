pub mod command;
pub mod config;
pub mod core;
pub mod errors;
pub mod prompter;
pub mod logging;
pub mod token;
pub mod ui;

// Re-export main entry helpers if needed in future integration tests.
