//! Route codec for hash-based navigation.
//!
//! A route token is the `|`-separated form of a [`NavState`]:
//!
//! | Level  | Token                                  |
//! |--------|----------------------------------------|
//! | core   | `core`                                 |
//! | master | `master|<master>`                      |
//! | field  | `field|<master>|<field>`               |
//! | module | `module|<master>|<field>|<module>`     |
//! | mini   | `mini|<master>|<field>|<module>|<mini>` |
//!
//! In the address bar the token follows a `#` (see [`to_hash`], [`from_hash`]).
//! Decoding is total: anything malformed lands on the hub.

use crate::error::RouteError;
use crate::models::{Level, NavState};

/// Separator between route segments.
pub const SEPARATOR: char = '|';

/// Encode a state as a route token (no `#` prefix).
pub fn encode(state: &NavState) -> String {
    let mut token = state.level().tag().to_string();
    for id in state.ids() {
        token.push(SEPARATOR);
        token.push_str(id);
    }
    token
}

/// Strictly parse a route token.
///
/// Empty and single-character tokens are the hub. Segments beyond those the
/// kind requires are ignored.
pub fn parse(token: &str) -> Result<NavState, RouteError> {
    if token.chars().count() <= 1 {
        return Ok(NavState::Core);
    }

    let parts: Vec<&str> = token.split(SEPARATOR).collect();
    let kind =
        Level::from_tag(parts[0]).ok_or_else(|| RouteError::UnknownKind(parts[0].to_string()))?;

    let expected = kind.segment_count();
    if parts.len() < expected {
        return Err(RouteError::MissingSegments {
            kind,
            expected,
            found: parts.len(),
        });
    }

    // from_ids only fails above four ids, which the slice bound rules out
    Ok(NavState::from_ids(&parts[1..expected]).unwrap_or_default())
}

/// Decode a route token, falling back to the hub on malformed input.
///
/// Ids are not checked against the content tree here; a dangling id decodes
/// fine and degrades at context resolution.
pub fn decode(token: &str) -> NavState {
    parse(token).unwrap_or_else(|err| {
        tracing::debug!(%err, token, "malformed route, falling back to hub");
        NavState::Core
    })
}

/// URL hash for a state (`#` + token).
pub fn to_hash(state: &NavState) -> String {
    format!("#{}", encode(state))
}

/// Decode a URL hash, with or without its leading `#`.
pub fn from_hash(hash: &str) -> NavState {
    decode(hash.strip_prefix('#').unwrap_or(hash))
}
