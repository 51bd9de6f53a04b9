//! Error types for Checkmark.

/// Result type alias for selection operations.
pub type Result<T> = std::result::Result<T, SelectionError>;

/// Reasons a checked-state change was rejected.
///
/// The boolean selection API folds all of these into `false`; the `try_*`
/// variants surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The registered interceptor vetoed the change.
    #[error("selection change blocked by interceptor")]
    Intercepted,

    /// The item could not be found in the owning list.
    #[error("item is not present in the list")]
    NotInList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SelectionError::Intercepted.to_string(),
            "selection change blocked by interceptor"
        );
        assert_eq!(
            SelectionError::NotInList.to_string(),
            "item is not present in the list"
        );
    }
}
