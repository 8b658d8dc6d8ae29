pub mod config;
pub mod default_configuration;
pub mod error;
pub mod logger;

pub use error::{Error, Result};
