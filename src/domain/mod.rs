//! Domain layer for the Marquee plugin.
//!
//! Record types for the movie directory and the crate's error types. Nothing
//! here knows about Zellij, the terminal, or the filesystem.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Summary and detail records

pub mod error;
pub mod movie;

pub use error::{DirectoryError, MarqueeError, Result};
pub use movie::{MovieDetail, MovieSummary, Poster, Rating};
