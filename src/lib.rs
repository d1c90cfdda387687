//! Admin dashboard backend for a crypto/fiat payment platform.
//!
//! Requests flow from the HTTP API (or a screen) through a use case to a
//! repository adapter that talks to the payments API. Every failure travels
//! back as a typed `Result`; nothing on the expected path panics.

pub mod api;
pub mod app;
pub mod domain;
pub mod infra;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
