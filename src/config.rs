use std::{collections::HashSet, env, net::SocketAddr};

use crate::{errors::ConfigError, prefix::MountPrefix};

/// Paths owned by the public router. A version mounted on one of these would
/// shadow (or be shadowed by) a built-in endpoint.
pub const RESERVED_PREFIXES: [&str; 4] = ["/health", "/versions", "/swagger-ui", "/api-docs"];

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_VERSIONS: &str = "v1,v2";

/// AppConfig
///
/// Immutable startup configuration, shared with handlers through `FromRef`.
/// The version list is the static mount registration: one route group per
/// entry, attached once and never changed for the life of the process.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Selects the log format.
    pub env: Env,
    // Socket the HTTP server binds to.
    pub bind_address: SocketAddr,
    // Mount prefixes, one per prototype version, in configuration order.
    pub versions: Vec<MountPrefix>,
}

/// Env
///
/// `Local` logs human-readable output, `Production` logs JSON.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// Local defaults (`/v1`, `/v2` on port 3000), used by tests to build a
    /// router without touching the process environment.
    fn default() -> Self {
        Self {
            env: Env::Local,
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            versions: parse_versions(DEFAULT_VERSIONS).unwrap_or_default(),
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads `APP_ENV`, `BIND_ADDRESS` and `PROTOTYPE_VERSIONS` from the
    /// environment. Fails fast on anything that would produce an invalid or
    /// ambiguous routing table.
    pub fn load() -> Result<Self, ConfigError> {
        let env = match env::var("APP_ENV").as_deref() {
            Ok("production") => Env::Production,
            _ => Env::Local,
        };

        let raw_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address =
            raw_address
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddress {
                    raw: raw_address.clone(),
                    source,
                })?;

        let raw_versions =
            env::var("PROTOTYPE_VERSIONS").unwrap_or_else(|_| DEFAULT_VERSIONS.to_string());
        let versions = parse_versions(&raw_versions)?;

        Ok(Self {
            env,
            bind_address,
            versions,
        })
    }
}

/// parse_versions
///
/// Turns a comma-separated list (`v1, v2,/v3`) into validated mount prefixes.
/// Blank entries are ignored. Duplicates, reserved paths and prefixes nested
/// inside another configured prefix are rejected.
pub fn parse_versions(raw: &str) -> Result<Vec<MountPrefix>, ConfigError> {
    let mut seen = HashSet::new();
    let mut versions = Vec::new();

    for entry in raw.split(',').filter(|entry| !entry.trim().is_empty()) {
        let prefix = MountPrefix::parse(entry).map_err(|source| ConfigError::InvalidPrefix {
            raw: entry.trim().to_string(),
            source,
        })?;

        // `/health/v1` would still be routed by the `/health` endpoint's owner.
        if RESERVED_PREFIXES
            .iter()
            .any(|reserved| crate::prefix::is_within(reserved, prefix.as_str()))
        {
            return Err(ConfigError::ReservedPrefix(prefix.to_string()));
        }
        if !seen.insert(prefix.clone()) {
            return Err(ConfigError::DuplicatePrefix(prefix.to_string()));
        }
        // `/v1` and `/v1/beta` would both claim `/v1/beta/question-1`.
        if let Some(existing) = versions.iter().find(|existing: &&MountPrefix| {
            existing.covers(prefix.as_str()) || prefix.covers(existing.as_str())
        }) {
            return Err(ConfigError::OverlappingPrefix {
                first: existing.to_string(),
                second: prefix.to_string(),
            });
        }
        versions.push(prefix);
    }

    if versions.is_empty() {
        return Err(ConfigError::NoVersions);
    }
    Ok(versions)
}
