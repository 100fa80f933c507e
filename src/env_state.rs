//! # Heliograph environment state
//!
//! This module defines [`crate::env_state::HeliographEnv`], the shared
//! environment object used across the `heliograph` library. It owns the
//! persistent **HTTP client** through which the geocoding collaborator is
//! reached.
//!
//! ## Overview
//!
//! 1. Manage a global [`ureq::Agent`] HTTP client with a global timeout.
//! 2. Provide a simple utility for performing HTTP GET requests with query
//!    parameters.
//!
//! The object is cheaply cloneable and passed to the collaborators that need
//! network access. Transport failures are surfaced as
//! [`HeliographError::UreqHttpError`](crate::heliograph_errors::HeliographError),
//! never retried here: timeout and retry policy beyond the global timeout
//! belongs to the caller.

use std::time::Duration;

use ureq::Agent;

use crate::heliograph_errors::HeliographError;

/// User agent sent with every request, as public geocoders require one.
const USER_AGENT: &str = concat!("heliograph/", env!("CARGO_PKG_VERSION"));

/// Shared environment holding the HTTP client.
#[derive(Debug, Clone)]
pub struct HeliographEnv {
    pub http_client: Agent,
}

impl Default for HeliographEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl HeliographEnv {
    /// Create a new environment with an HTTP client using default settings
    /// and a 10 second global timeout.
    pub fn new() -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(10)))
            .build();
        let agent: Agent = config.into();

        HeliographEnv { http_client: agent }
    }

    /// Perform a GET request against `url` with the given query parameters
    /// and return the response body as a string.
    ///
    /// Arguments
    /// -----------------
    /// * `url`: the base URL, without query string.
    /// * `params`: key/value pairs appended as the query string.
    ///
    /// Return
    /// ----------
    /// * The response body, or a [`HeliographError::UreqHttpError`] on any
    ///   transport or HTTP status failure.
    pub(crate) fn get_with_params(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<String, HeliographError> {
        let mut request = self.http_client.get(url).header("User-Agent", USER_AGENT);
        for (key, value) in params {
            request = request.query(*key, *value);
        }
        let body = request.call()?.body_mut().read_to_string()?;
        Ok(body)
    }
}
