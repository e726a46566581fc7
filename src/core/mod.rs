// src/core/mod.rs

/// The canonical Scan Report schema shared by every other module.
pub mod models;

/// Adapter that folds legacy backend payload shapes into `models::ScanReport`.
pub mod normalize;

/// HTTP client for the scan backend: scan requests and PDF report links.
pub mod client;

/// Pure mapping from a report to the panels shown to the user.
pub mod presenter;
