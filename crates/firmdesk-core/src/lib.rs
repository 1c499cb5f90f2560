//! Firmdesk Core — configuration, data paths, error types.

pub mod config;
pub mod error;

pub use config::{DataPaths, FetchConfig, FirmdeskConfig, MatchThresholds};
pub use error::{Error, Result};
