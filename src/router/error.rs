#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("invalid pattern: {0:?} is not a valid path")]
    InvalidPattern(Box<str>),
    #[error("invalid path: {0:?} is not a valid path")]
    InvalidPath(Box<str>),
}

impl RouterError {
    pub(super) fn pattern(pattern: &str) -> Self {
        Self::InvalidPattern(pattern.into())
    }

    pub(super) fn path(path: &str) -> Self {
        Self::InvalidPath(path.into())
    }
}
