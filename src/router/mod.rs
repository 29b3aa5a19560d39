mod dispatch;
mod error;
mod handler;
mod imp;
mod matcher;
mod params;

pub use self::dispatch::dispatch;
pub use self::error::RouterError;
pub use self::handler::{BoxHandler, Handler};
pub use self::matcher::match_path;
pub use self::params::Params;

/// An ordered route table. Earlier routes take priority.
#[derive(Debug)]
pub struct Router<H> {
    routes: Vec<Route<H>>,
}

/// A pattern such as `/user/:id` paired with its handler.
#[derive(Debug, Clone)]
pub struct Route<H> {
    pattern: Box<str>,
    handler: H,
}

impl<H> Route<H> {
    pub fn new<R>(pattern: &str, handler: H) -> Self
    where
        H: Fn(Params<'_>) -> R,
    {
        Self::with_handler(pattern, handler)
    }

    pub fn with_handler(pattern: &str, handler: H) -> Self {
        Self {
            pattern: pattern.into(),
            handler,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

impl<R> Route<BoxHandler<R>> {
    pub fn boxed<F>(pattern: &str, f: F) -> Self
    where
        F: Fn(Params<'_>) -> R + Send + Sync + 'static,
    {
        Self::with_handler(pattern, Box::new(f))
    }
}
