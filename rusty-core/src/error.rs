//! Pager error types.

/// Errors returned by pager mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PagerError {
    /// An argument was outside the range the operation accepts.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Convenience alias for pager results.
pub type Result<T, E = PagerError> = std::result::Result<T, E>;
