// src/models/mod.rs

//! Domain models for the link cleaner application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod blacklist;
mod config;
mod link;
mod post;

// Re-export all public types
pub use blacklist::Blacklist;
pub use config::{BatchConfig, Config, HttpConfig, LoggingConfig};
pub use link::{Classification, LinkOccurrence, Removal};
pub use post::Post;
