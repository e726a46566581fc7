//! Scano client - terminal front end for the Scano web security scanner API.
//!
//! The backend performs the actual TLS, header, DNS and infrastructure checks;
//! this crate requests a scan, normalizes the JSON report and renders it.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod ui;

pub use crate::core::client::ReportClient;
pub use crate::core::models::ScanReport;
pub use crate::core::presenter::{present, ReportView};
pub use crate::error::{Result, ScanError};
