//! Stable exit codes for formgate CLI commands.

/// Command succeeded; the checked value or replayed form was accepted.
pub const OK: i32 = 0;
/// Command failed due to unreadable config/script or other errors.
pub const INVALID: i32 = 1;
/// `formgate check` found the value invalid, or the last replayed submit was rejected.
pub const REJECTED: i32 = 2;
