//! External service interactions
//!
//! This module contains services for interacting with the outside world:
//! - Background brand-check requests against the HTTP endpoint
//! - CSV export of the session results

pub mod client;
pub mod export;

pub use client::{CheckMessage, CheckRunner};
pub use export::{export_results, write_csv};
