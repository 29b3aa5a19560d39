use super::dispatch::{dispatch, first_match};
use super::error::RouterError;
use super::handler::{BoxHandler, Handler};
use super::params::Params;
use super::{Route, Router};

use crate::path::is_valid_path;

use std::iter::FromIterator;

impl<H> Router<H> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.routes.clear();
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn routes(&self) -> &[Route<H>] {
        &self.routes
    }

    /// Appends a route.
    ///
    /// # Panics
    /// Panics if `pattern` is not a valid path.
    pub fn insert(&mut self, pattern: &str, handler: H) -> &mut Self {
        if let Err(e) = self.try_insert(pattern, handler) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    pub fn try_insert(&mut self, pattern: &str, handler: H) -> Result<&mut Self, RouterError> {
        if !is_valid_path(pattern) {
            return Err(RouterError::pattern(pattern));
        }
        self.routes.push(Route::with_handler(pattern, handler));
        Ok(self)
    }

    /// Finds the first route matching `path` without calling its handler.
    ///
    /// Unlike [`dispatch`](Router::dispatch), `path` is not normalized.
    pub fn find<'s: 'p, 'p>(&'s self, path: &'p str) -> Result<Option<(&'s H, Params<'p>)>, RouterError> {
        let ret = first_match(&self.routes, path)?;
        Ok(ret.map(|(route, params)| (route.handler(), params)))
    }

    pub fn dispatch<R, F>(&self, path: &str, fallback: F) -> Result<R, RouterError>
    where
        H: Handler<R>,
        F: FnOnce() -> R,
    {
        dispatch(&self.routes, path, fallback)
    }

    #[cfg(feature = "http-router")]
    pub fn dispatch_uri<R, F>(&self, uri: &http::Uri, fallback: F) -> Result<R, RouterError>
    where
        H: Handler<R>,
        F: FnOnce() -> R,
    {
        self.dispatch(uri.path(), fallback)
    }
}

impl<R> Router<BoxHandler<R>> {
    pub fn route<F>(&mut self, pattern: &str, f: F) -> &mut Self
    where
        F: Fn(Params<'_>) -> R + Send + Sync + 'static,
    {
        self.insert(pattern, Box::new(f))
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> FromIterator<Route<H>> for Router<H> {
    fn from_iter<I: IntoIterator<Item = Route<H>>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

impl<H> Extend<Route<H>> for Router<H> {
    fn extend<I: IntoIterator<Item = Route<H>>>(&mut self, iter: I) {
        self.routes.extend(iter)
    }
}
