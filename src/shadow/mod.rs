//! Black/white shadow side assignment.

/// Per-mode shadow policy.
pub mod policy;
