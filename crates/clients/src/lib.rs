//! # Timetable Clients
//!
//! HTTP clients for the services the timetable service depends on: the
//! account service, which validates bearer tokens, and the hospital
//! directory, which confirms a hospital exists. Every call carries the
//! timeout the underlying [`reqwest::Client`] was built with.

pub mod auth;
pub mod hospital;

use std::time::Duration;

use eyre::{Result, WrapErr};
use reqwest::Client;

pub use auth::HttpTokenValidator;
pub use hospital::HttpHospitalDirectory;

/// Builds the shared HTTP client used for collaborator calls.
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .wrap_err("Failed to build HTTP client")
}
