#![forbid(unsafe_code)]

use crate::router::{BoxHandler, Handler, Params, Router, RouterError};

use std::collections::HashMap;

pub use http::Method;

/// One route table per HTTP method.
#[derive(Debug)]
pub struct MethodRouter<H> {
    method_map: HashMap<Method, Router<H>>,
}

impl<H> MethodRouter<H> {
    pub fn new() -> Self {
        Self {
            method_map: HashMap::new(),
        }
    }

    pub fn get_router(&self, method: &Method) -> Option<&Router<H>> {
        self.method_map.get(method)
    }

    pub fn find<'s: 'p, 'p>(
        &'s self,
        method: &Method,
        path: &'p str,
    ) -> Result<Option<(&'s H, Params<'p>)>, RouterError> {
        match self.method_map.get(method) {
            Some(router) => router.find(path),
            None => Ok(None),
        }
    }

    pub fn insert(&mut self, method: Method, pattern: &str, handler: H) -> &mut Self {
        self.access_router(method).insert(pattern, handler);
        self
    }

    pub fn try_insert(
        &mut self,
        method: Method,
        pattern: &str,
        handler: H,
    ) -> Result<&mut Self, RouterError> {
        self.access_router(method).try_insert(pattern, handler)?;
        Ok(self)
    }

    /// Dispatches within the table registered for `method`.
    ///
    /// A method without any route goes straight to `fallback`.
    pub fn dispatch<R, F>(&self, method: &Method, path: &str, fallback: F) -> Result<R, RouterError>
    where
        H: Handler<R>,
        F: FnOnce() -> R,
    {
        match self.method_map.get(method) {
            Some(router) => router.dispatch(path, fallback),
            None => {
                tracing::debug!(method = method.as_str(), "no routes for method, using fallback");
                Ok(fallback())
            }
        }
    }

    pub fn dispatch_request<B, R, F>(
        &self,
        req: &http::Request<B>,
        fallback: F,
    ) -> Result<R, RouterError>
    where
        H: Handler<R>,
        F: FnOnce() -> R,
    {
        self.dispatch(req.method(), req.uri().path(), fallback)
    }
}

impl<H> MethodRouter<H> {
    fn access_router(&mut self, method: Method) -> &mut Router<H> {
        self.method_map.entry(method).or_insert_with(Router::new)
    }
}

impl<H> Default for MethodRouter<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> MethodRouter<BoxHandler<R>> {
    pub fn route<F>(&mut self, method: Method, pattern: &str, f: F) -> &mut Self
    where
        F: Fn(Params<'_>) -> R + Send + Sync + 'static,
    {
        self.insert(method, pattern, Box::new(f))
    }
}

macro_rules! define_method {
    ($name:tt, $method:tt) => {
        pub fn $name<F>(&mut self, pattern: &str, f: F) -> &mut Self
        where
            F: Fn(Params<'_>) -> R + Send + Sync + 'static,
        {
            self.route(Method::$method, pattern, f)
        }
    };
}

impl<R> MethodRouter<BoxHandler<R>> {
    define_method!(get, GET);
    define_method!(post, POST);
    define_method!(put, PUT);
    define_method!(delete, DELETE);
    define_method!(head, HEAD);
    define_method!(options, OPTIONS);
    define_method!(connect, CONNECT);
    define_method!(patch, PATCH);
    define_method!(trace, TRACE);
}
