#![forbid(unsafe_code)]

//! Path validation and normalization.

use std::borrow::Cow;

pub(crate) const SLASH: char = '/';

/// Returns `true` if `path` starts with `/` and does not end with `/`.
///
/// The root path `/` is the only valid path ending with a slash.
/// Parameter markers are ordinary segment content here.
///
/// ```
/// use path_dispatch::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/user/:id"));
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("/user/"));
/// assert!(!is_valid_path("user"));
/// assert!(!is_valid_path("//"));
/// ```
#[inline]
pub fn is_valid_path(path: &str) -> bool {
    path == "/" || (path.starts_with(SLASH) && !path.ends_with(SLASH))
}

/// Converts a raw path into the normalized form.
///
/// Exactly one trailing slash is stripped and a leading slash is added
/// when missing. Interior slashes are left alone, so the result of a
/// malformed input such as `"///"` may still fail [`is_valid_path`].
///
/// ```
/// use path_dispatch::normalize;
///
/// assert_eq!(normalize("user"), "/user");
/// assert_eq!(normalize("/user/"), "/user");
/// assert_eq!(normalize("user/"), "/user");
/// assert_eq!(normalize("/"), "/");
/// assert_eq!(normalize(""), "/");
/// ```
pub fn normalize(path: &str) -> Cow<'_, str> {
    if path == "/" {
        return Cow::Borrowed(path);
    }
    let body = path.strip_suffix(SLASH).unwrap_or(path);
    if body.starts_with(SLASH) {
        Cow::Borrowed(body)
    } else {
        let mut buf = String::with_capacity(body.len() + 1);
        buf.push(SLASH);
        buf.push_str(body);
        Cow::Owned(buf)
    }
}
