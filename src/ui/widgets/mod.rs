// src/ui/widgets/mod.rs

pub mod footer; // Key hints for the current state.
pub mod input; // Target input box and the status line under it.
pub mod panel; // One report panel (TLS, headers, CSP, DNS, ...).
pub mod summary; // Target and score banner.
