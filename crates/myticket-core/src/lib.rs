pub mod config;
pub mod constants;
pub mod datetime;
pub mod error;
pub mod types;
