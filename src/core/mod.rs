pub mod cli;
pub mod context;
pub mod models;
pub mod store;
pub mod types;
