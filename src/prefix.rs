//! Redirect target prefixing for route groups.
//!
//! A route group is mounted once under a literal prefix such as `/v1`. Its
//! handlers redirect with group-relative paths (`/question-2`) and the helpers
//! here turn those into paths that still carry the group's prefix
//! (`/v1/question-2`).
//!
//! Prefix matching compares whole path segments: under `/v1`, the target
//! `/v10/start` is *not* considered already prefixed.

use std::{borrow::Cow, fmt};

use crate::errors::PrefixError;

const FORBIDDEN: [char; 6] = ['?', '#', '{', '}', '*', ':'];

/// MountPrefix
///
/// The literal path under which a route group is nested. Always starts with
/// `/`, never ends with one, has no empty segments and only visible ASCII, so
/// it can be handed straight to `Router::nest` and into a `Location` header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountPrefix(String);

impl MountPrefix {
    /// Parses a configured version name. `v1` and `/v1` are equivalent.
    pub fn parse(raw: &str) -> Result<Self, PrefixError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PrefixError::Empty);
        }

        let prefix = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        if prefix == "/" {
            return Err(PrefixError::Root);
        }
        if let Some(found) = prefix
            .chars()
            .find(|c| FORBIDDEN.contains(c) || !c.is_ascii_graphic())
        {
            return Err(PrefixError::ForbiddenCharacter { prefix, found });
        }
        if prefix.ends_with('/') {
            return Err(PrefixError::TrailingSlash(prefix));
        }
        if prefix.contains("//") {
            return Err(PrefixError::EmptySegment(prefix));
        }

        Ok(Self(prefix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when `target` already lives under this prefix.
    pub fn covers(&self, target: &str) -> bool {
        is_within(&self.0, target)
    }

    /// Final redirect target for a handler-supplied `target`.
    pub fn apply<'a>(&self, target: &'a str) -> Cow<'a, str> {
        prefix_target(&self.0, target)
    }
}

impl fmt::Display for MountPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MountPrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Segment-aware prefix test. `target` is within `prefix` when it equals the
/// prefix or continues it with `/`, `?` or `#`.
pub fn is_within(prefix: &str, target: &str) -> bool {
    match target.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with(['/', '?', '#']),
        None => false,
    }
}

/// rewrite_target
///
/// Decides whether a redirect target needs the group prefix. Returns the
/// rewritten target, or `None` when the target must be passed through as-is:
///
/// 1. it does not start with `/` (relative paths, `https://…`, `mailto:`),
/// 2. it starts with `//` (protocol-relative, another host),
/// 3. it is already within `prefix`.
///
/// Anything else becomes `prefix + target`. No validation is performed on
/// the target itself.
pub fn rewrite_target(prefix: &str, target: &str) -> Option<String> {
    if !target.starts_with('/') || target.starts_with("//") {
        return None;
    }
    if is_within(prefix, target) {
        return None;
    }
    Some(format!("{prefix}{target}"))
}

/// Same decision as [`rewrite_target`], returning the target to use.
pub fn prefix_target<'a>(prefix: &str, target: &'a str) -> Cow<'a, str> {
    match rewrite_target(prefix, target) {
        Some(rewritten) => Cow::Owned(rewritten),
        None => Cow::Borrowed(target),
    }
}
