// src/lib.rs

//! linksweep Library
//!
//! Scans stored posts for anchor links, removes links that are blacklisted
//! or unreachable, and records every removal in an append-only audit log.

pub mod audit;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
