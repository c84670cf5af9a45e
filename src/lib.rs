pub mod checker;
pub mod error_utils;
pub mod loader;
pub mod models;
pub mod report;
