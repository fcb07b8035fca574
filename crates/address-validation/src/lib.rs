//! Validation core for German postal addresses.
//!
//! Addresses are checked field by field against syntactic rules and a
//! reference set of city names loaded once at startup.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod validation;
