pub mod config;
pub mod error;

pub use config::ScrubConfig;
pub use error::{Result, ScrubError};
