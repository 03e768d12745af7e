/// Router Module Index
///
/// Splits routing into the process-wide public endpoints and the route group
/// that is mounted once per prototype version.

/// Health, version listing and the landing page. Never prefixed.
pub mod public;

/// The journey served under each version prefix (`/v1`, `/v2`, ...).
pub mod prototype;
