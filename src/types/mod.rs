pub mod catalog;
pub mod config;
pub mod preferences;
pub mod result;
