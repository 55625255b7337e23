pub mod ansi;
pub mod ascii;
pub mod chrome;
pub mod display_manager;
mod width_util;
