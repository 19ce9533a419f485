//! RCC CLI - Command line tools for runway condition code dispatch checks.
//!
//! This crate provides the dispatch binaries:
//! - rcc_resolve: resolve a runway condition code and print the dispatch report
//! - rcc_catalog: list the contaminant catalog
//! - wind_components: headwind/crosswind components for a runway

pub mod config;
pub mod logging;
pub mod report;

pub use config::{Config, OutputFormat};
pub use report::DispatchReport;
