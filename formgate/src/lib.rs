//! Interactive validation for a two-panel sign-up/sign-in form.
//!
//! The crate keeps validation logic apart from whatever draws the form:
//!
//! - **[`core`]**: Pure, deterministic logic (rules, verdicts, form state).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: The [`io::surface::FormSurface`] seam plus config and event
//!   script files.
//!
//! [`controller`] turns UI events into verdicts and surface updates;
//! [`replay`] drives a controller from a script for the CLI.

pub mod controller;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod replay;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
