//! # pagerect Config
//!
//! Configuration management for pagerect: browser endpoint, OS window
//! chrome heuristics and logging.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
