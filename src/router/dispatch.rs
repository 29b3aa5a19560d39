use super::error::RouterError;
use super::handler::Handler;
use super::matcher::match_path;
use super::params::Params;
use super::Route;

use crate::path::normalize;

/// Invokes the handler of the first route matching `path`, or `fallback`
/// when none does.
///
/// `path` is normalized once before matching. Patterns are used as
/// written, so a malformed pattern reached during the scan is reported
/// as an error and neither a handler nor the fallback runs.
///
/// ```
/// use path_dispatch::{dispatch, Route};
///
/// let routes = [Route::new("/user/:id", |p| format!("user {}", p.get("id").unwrap()))];
///
/// let page = dispatch(&routes, "/user/jjg", || "404".to_owned()).unwrap();
/// assert_eq!(page, "user jjg");
///
/// let page = dispatch(&routes, "/nope", || "404".to_owned()).unwrap();
/// assert_eq!(page, "404");
/// ```
pub fn dispatch<H, R, F>(routes: &[Route<H>], path: &str, fallback: F) -> Result<R, RouterError>
where
    H: Handler<R>,
    F: FnOnce() -> R,
{
    let path = normalize(path);
    let found = first_match(routes, &path)?;
    match found {
        Some((route, params)) => {
            tracing::debug!(
                pattern = %route.pattern(),
                params = params.len(),
                "route matched"
            );
            Ok(route.handler().call(params))
        }
        None => {
            tracing::debug!(path = %path, "no route matched, using fallback");
            Ok(fallback())
        }
    }
}

/// Scans `routes` in order. `path` must already be normalized.
pub(super) fn first_match<'s: 'p, 'p, H>(
    routes: &'s [Route<H>],
    path: &'p str,
) -> Result<Option<(&'s Route<H>, Params<'p>)>, RouterError> {
    for route in routes {
        if let Some(params) = match_path(route.pattern(), path)? {
            return Ok(Some((route, params)));
        }
    }
    Ok(None)
}
