//! Field verdicts and the aggregate submit gate.
//!
//! Both functions are pure: they read snapshots and return values. Rendering
//! the verdict is the caller's job.

use crate::core::rules::{EMPTY_MESSAGE, RuleSet, is_blank, rule_set};
use crate::core::types::{FieldKind, FieldState, Verdict};

/// Stateless evaluator over a [`RuleSet`].
#[derive(Debug, Clone, Copy)]
pub struct ValidationEngine {
    rules: &'static RuleSet,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self { rules: rule_set() }
    }
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &'static RuleSet {
        self.rules
    }

    /// Validate one field snapshot.
    ///
    /// Order of checks:
    /// 1. untouched fields are always valid;
    /// 2. a blank value fails with [`EMPTY_MESSAGE`];
    /// 3. the kind rule applies, with `ConfirmPassword` compared to
    ///    `reference_password` verbatim (no trimming).
    pub fn validate_field(&self, state: &FieldState, reference_password: &str) -> Verdict {
        if !state.touched {
            return Verdict::VALID;
        }

        if is_blank(&state.value) {
            return Verdict::invalid(EMPTY_MESSAGE);
        }

        let rule = self.rules.rule(state.kind);
        let passes = match state.kind {
            FieldKind::ConfirmPassword => state.value == reference_password,
            _ => rule.test(&state.value),
        };

        if passes {
            Verdict::VALID
        } else {
            Verdict::invalid(rule.message)
        }
    }

    /// True iff every field in `states` validates against the same snapshot.
    pub fn is_form_valid<'a, I>(&self, states: I, reference_password: &str) -> bool
    where
        I: IntoIterator<Item = &'a FieldState>,
    {
        states
            .into_iter()
            .all(|state| self.validate_field(state, reference_password).valid)
    }
}
