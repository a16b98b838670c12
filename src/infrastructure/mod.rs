//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`; this layer knows where the
//! plugin keeps its files and how configured paths map into the sandbox.

pub mod paths;

pub use paths::{data_dir, display_path, expand_tilde};
