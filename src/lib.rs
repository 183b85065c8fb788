//! # clipcheck
//!
//! Repository checks for the clipper browser extension.
//!
//! ## Tools
//!
//! - **check-emoji**: pre-commit hook rejecting files that contain emoji
//! - **collections-probe**: validates an API token and target collection
//!   against the collections REST API before they are wired into the extension
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod api;
pub mod commands;
pub mod config;
pub mod constants;
pub mod emoji;
pub mod logging;
pub mod marker;
pub mod probe;
pub mod ui;

pub use api::{HttpResponse, Transport, TransportError};
pub use config::{set_home_override, CreatePolicy, ProbeConfig};
pub use probe::{Probe, RunReport, TestResult};
