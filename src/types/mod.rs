//! Core types for vader

mod config;
mod error;
mod sentiment;
mod token;

pub use config::ValenceConfig;
pub use error::LoadError;
pub use sentiment::{SentimentLabel, SentimentRecord, LABEL_THRESHOLD};
pub use token::{is_upper, Token};
