//! In-memory state of the sign-up form.
//!
//! [`FormContext`] owns one [`FieldState`] per field and is the only place
//! `touched` flags live. It is passed explicitly to whoever handles events.

use crate::core::engine::ValidationEngine;
use crate::core::types::{FieldKind, FieldPhase, FieldState, Verdict};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormContext {
    fields: [FieldState; 4],
}

impl Default for FormContext {
    fn default() -> Self {
        Self {
            fields: FieldKind::ALL.map(FieldState::new),
        }
    }
}

impl FormContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, kind: FieldKind) -> &FieldState {
        &self.fields[kind.index()]
    }

    fn field_mut(&mut self, kind: FieldKind) -> &mut FieldState {
        &mut self.fields[kind.index()]
    }

    /// All field snapshots in form order.
    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn value(&self, kind: FieldKind) -> &str {
        &self.field(kind).value
    }

    pub fn set_value(&mut self, kind: FieldKind, value: impl Into<String>) {
        self.field_mut(kind).value = value.into();
    }

    /// Current password, the reference for `ConfirmPassword`.
    pub fn password(&self) -> &str {
        self.value(FieldKind::Password)
    }

    pub fn is_touched(&self, kind: FieldKind) -> bool {
        self.field(kind).touched
    }

    pub fn set_touched(&mut self, kind: FieldKind, touched: bool) {
        self.field_mut(kind).touched = touched;
    }

    /// Force every field into a touched state (used when a submit is rejected).
    pub fn touch_all(&mut self) {
        for field in &mut self.fields {
            field.touched = true;
        }
    }

    /// Clear every value and touched flag.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.touched = false;
        }
    }

    pub fn verdict(&self, engine: &ValidationEngine, kind: FieldKind) -> Verdict {
        engine.validate_field(self.field(kind), self.password())
    }

    pub fn is_valid(&self, engine: &ValidationEngine) -> bool {
        engine.is_form_valid(&self.fields, self.password())
    }

    pub fn phase(&self, engine: &ValidationEngine, kind: FieldKind) -> FieldPhase {
        if !self.is_touched(kind) {
            return FieldPhase::Untouched;
        }
        if self.verdict(engine, kind).valid {
            FieldPhase::TouchedValid
        } else {
            FieldPhase::TouchedInvalid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::filled_form;

    #[test]
    fn new_form_is_empty_and_untouched() {
        let form = FormContext::new();
        let engine = ValidationEngine::new();
        for kind in FieldKind::ALL {
            assert_eq!(form.field(kind).kind, kind);
            assert_eq!(form.value(kind), "");
            assert_eq!(form.phase(&engine, kind), FieldPhase::Untouched);
        }
        assert!(form.is_valid(&engine));
    }

    #[test]
    fn phases_follow_touch_and_value() {
        let engine = ValidationEngine::new();
        let mut form = FormContext::new();
        form.set_value(FieldKind::Email, "a@b");
        assert_eq!(form.phase(&engine, FieldKind::Email), FieldPhase::Untouched);

        form.set_touched(FieldKind::Email, true);
        assert_eq!(
            form.phase(&engine, FieldKind::Email),
            FieldPhase::TouchedInvalid
        );

        form.set_value(FieldKind::Email, "a@b.co");
        assert_eq!(form.phase(&engine, FieldKind::Email), FieldPhase::TouchedValid);
    }

    /// Changing the password flips the confirm verdict without touching confirm.
    #[test]
    fn confirm_follows_password_changes() {
        let engine = ValidationEngine::new();
        let mut form = filled_form();
        assert!(form.verdict(&engine, FieldKind::ConfirmPassword).valid);

        form.set_value(FieldKind::Password, "Zyxwvuts");
        assert!(!form.verdict(&engine, FieldKind::ConfirmPassword).valid);
        assert!(form.verdict(&engine, FieldKind::Password).valid);
    }

    #[test]
    fn touch_all_then_reset_returns_to_untouched() {
        let engine = ValidationEngine::new();
        let mut form = FormContext::new();
        form.touch_all();
        assert!(FieldKind::ALL.into_iter().all(|kind| form.is_touched(kind)));
        assert!(!form.is_valid(&engine));

        form.set_value(FieldKind::Name, "Ana");
        form.reset();
        assert_eq!(form, FormContext::new());
    }
}
