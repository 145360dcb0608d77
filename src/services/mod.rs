// src/services/mod.rs

//! Core services: link classification and reachability probing.

pub mod cleaner;
pub mod reachability;

pub use cleaner::{CleanOutcome, LinkCleaner};
pub use reachability::{HttpProbe, ReachabilityProbe};
