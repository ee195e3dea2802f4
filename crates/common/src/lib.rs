//! Shared types, config, and error definitions for the netgen site service.

pub mod config;
pub mod error;
pub mod source;
pub mod types;

pub use config::SiteConfig;
pub use error::Error;
pub use source::MandateSource;
pub use types::*;

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, Error>;
