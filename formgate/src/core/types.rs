//! Shared deterministic types for the form validation core.
//!
//! These types define stable contracts between the engine, the form context
//! and the rendering surface. They carry no I/O and compare by value.

use serde::{Deserialize, Serialize};

/// The fixed set of sign-up fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldKind {
    /// All fields in the order they appear on the form.
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::ConfirmPassword,
    ];

    /// Position of the field in [`FieldKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            FieldKind::Name => 0,
            FieldKind::Email => 1,
            FieldKind::Password => 2,
            FieldKind::ConfirmPassword => 3,
        }
    }

    /// Stable kebab-case label used by scripts, the CLI and transcripts.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::ConfirmPassword => "confirm-password",
        }
    }

    /// Parse a label produced by [`FieldKind::label`].
    pub fn from_label(label: &str) -> Option<FieldKind> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.label() == label)
    }

    /// True for fields whose values should be masked when displayed.
    pub fn is_secret(self) -> bool {
        matches!(self, FieldKind::Password | FieldKind::ConfirmPassword)
    }
}

/// Snapshot of one field as seen by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub kind: FieldKind,
    pub value: String,
    /// Set on first focus; cleared only by the post-submit reset.
    pub touched: bool,
}

impl FieldState {
    /// An empty, untouched field.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            value: String::new(),
            touched: false,
        }
    }
}

/// Pass/fail outcome of validating one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub message: Option<&'static str>,
}

impl Verdict {
    pub const VALID: Verdict = Verdict {
        valid: true,
        message: None,
    };

    pub fn invalid(message: &'static str) -> Self {
        Self {
            valid: false,
            message: Some(message),
        }
    }
}

/// Per-field state machine position.
///
/// `Untouched -> Touched*` happens on first focus. The two touched states
/// alternate on every re-evaluation. Only the post-submit reset returns a
/// field to `Untouched`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPhase {
    Untouched,
    TouchedValid,
    TouchedInvalid,
}

/// Which half of the two-panel UI is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Panel {
    #[default]
    SignIn,
    SignUp,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitOutcome {
    /// Form was valid: notification shown and fields reset.
    Accepted,
    /// Form was invalid: every field is now touched and rendered.
    Rejected,
}
