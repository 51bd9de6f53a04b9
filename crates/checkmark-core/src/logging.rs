//! Logging facilities for Checkmark.
//!
//! Checkmark uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("checkmark::selection=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "checkmark_core";
    /// Signal emission target.
    pub const SIGNAL: &str = "checkmark_core::signal";
    /// Selection tracker target (checked-state and select-mode changes).
    pub const SELECTION: &str = "checkmark::selection";
    /// Item list target (row insertion, removal, refresh).
    pub const ITEM_LIST: &str = "checkmark::item_list";
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn test_targets_are_namespaced() {
        for target in [targets::SIGNAL, targets::SELECTION, targets::ITEM_LIST] {
            assert!(target.starts_with("checkmark"));
            assert!(target.contains("::"));
        }
        assert_eq!(targets::CORE, "checkmark_core");
    }
}
