//! Shared types for the class IR workspace: the error type used by the
//! checked operation layer and the harness, and the harness configuration.

pub mod config;
pub mod error;

pub use config::*;
pub use error::{Error, Result};
