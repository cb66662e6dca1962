pub mod config;
pub mod error;
pub mod font;
pub mod style;
pub mod types;
