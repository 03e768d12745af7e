use thiserror::Error;

/// PrefixError
///
/// Reasons a raw string cannot be used as a route group's mount prefix.
/// Raised only at startup while the version list is being parsed; the
/// request path never produces one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrefixError {
    #[error("mount prefix is empty")]
    Empty,

    #[error("mount prefix cannot be the root path")]
    Root,

    #[error("mount prefix `{0}` must not end with '/'")]
    TrailingSlash(String),

    #[error("mount prefix `{0}` contains an empty path segment")]
    EmptySegment(String),

    #[error("mount prefix `{prefix}` contains forbidden character {found:?}")]
    ForbiddenCharacter { prefix: String, found: char },
}

/// ConfigError
///
/// Startup configuration failures. `AppConfig::load` surfaces these instead
/// of booting with a routing table that axum would reject (or silently shadow).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid prototype version `{raw}`: {source}")]
    InvalidPrefix {
        raw: String,
        #[source]
        source: PrefixError,
    },

    #[error("prototype version `{0}` is listed more than once")]
    DuplicatePrefix(String),

    #[error("prototype versions `{first}` and `{second}` overlap")]
    OverlappingPrefix { first: String, second: String },

    #[error("prototype version `{0}` collides with a built-in route")]
    ReservedPrefix(String),

    #[error("PROTOTYPE_VERSIONS must name at least one version")]
    NoVersions,

    #[error("invalid BIND_ADDRESS `{raw}`: {source}")]
    InvalidBindAddress {
        raw: String,
        #[source]
        source: std::net::AddrParseError,
    },
}
