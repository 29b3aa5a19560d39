use super::error::RouterError;
use super::params::Params;

use crate::path::{is_valid_path, SLASH};

use smallvec::SmallVec;

const COLON: char = ':';

type Parts<'a> = SmallVec<[&'a str; 8]>;

/// Matches a single pattern against a normalized path.
///
/// Returns `Ok(None)` when the path does not match. Both arguments must
/// satisfy [`is_valid_path`](crate::is_valid_path), otherwise an error is
/// returned and nothing is matched.
///
/// ```
/// use path_dispatch::match_path;
///
/// let params = match_path("/:action/:id", "/up/23300").unwrap().unwrap();
/// assert_eq!(params.get("action"), Some("up"));
/// assert_eq!(params.get("id"), Some("23300"));
///
/// assert!(match_path("/:action/:id", "/up/23300/oops").unwrap().is_none());
/// assert!(match_path("/user", "user").is_err());
/// ```
pub fn match_path<'a>(pattern: &'a str, path: &'a str) -> Result<Option<Params<'a>>, RouterError> {
    if !is_valid_path(pattern) {
        tracing::warn!(pattern = %pattern, "rejected route pattern");
        return Err(RouterError::pattern(pattern));
    }
    if !is_valid_path(path) {
        tracing::warn!(path = %path, "rejected queried path");
        return Err(RouterError::path(path));
    }
    Ok(match_parts(pattern, path))
}

fn match_parts<'a>(pattern: &'a str, path: &'a str) -> Option<Params<'a>> {
    let lhs: Parts<'a> = pattern.split(SLASH).collect();
    let rhs: Parts<'a> = path.split(SLASH).collect();

    if lhs.len() != rhs.len() {
        return None;
    }

    let mut params = Params::new();
    for (&part, &seg) in lhs.iter().zip(rhs.iter()) {
        match part.strip_prefix(COLON) {
            Some(name) if !seg.is_empty() => params.insert(name, seg),
            _ if part == seg => {}
            _ => return None,
        }
    }
    Some(params)
}
