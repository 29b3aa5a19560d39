//! A first-match path router.
//!
//! Routes are tried in the order they were given. The first pattern whose
//! segments line up with the queried path wins, and its handler receives
//! the values captured by `:name` segments. When nothing matches, the
//! fallback runs instead.
//!
//! ```
//! use path_dispatch::{dispatch, BoxHandler, Route};
//!
//! let routes: Vec<Route<BoxHandler<String>>> = vec![
//!     Route::boxed("/", |_| "main page".to_owned()),
//!     Route::boxed("/user", |_| "user page".to_owned()),
//!     Route::boxed("/user/:id", |p| format!("user page of {}", p.get("id").unwrap())),
//! ];
//!
//! let not_found = || "Not found".to_owned();
//! assert_eq!(dispatch(&routes, "/", not_found).unwrap(), "main page");
//! assert_eq!(dispatch(&routes, "/user/jjg", not_found).unwrap(), "user page of jjg");
//! assert_eq!(dispatch(&routes, "/oops", not_found).unwrap(), "Not found");
//! ```

#![deny(unsafe_code)]

mod path;
mod router;
mod router_macro;

#[cfg(feature = "http-router")]
mod http_router;

pub use crate::path::{is_valid_path, normalize};
pub use crate::router::{
    dispatch, match_path, BoxHandler, Handler, Params, Route, Router, RouterError,
};

#[cfg(feature = "http-router")]
pub use crate::http_router::{Method, MethodRouter};
