//! Event handlers that connect the validation core to a rendering surface.
//!
//! Each handler runs to completion and leaves the surface consistent with the
//! [`FormContext`]: every field it evaluates gets exactly one render or clear,
//! and the submit control always reflects [`FormContext::is_valid`].

use tracing::{debug, info};

use crate::core::engine::ValidationEngine;
use crate::core::form::FormContext;
use crate::core::types::{FieldKind, Panel, SubmitOutcome};
use crate::io::surface::FormSurface;

pub struct FormController<S: FormSurface> {
    engine: ValidationEngine,
    form: FormContext,
    surface: S,
}

impl<S: FormSurface> FormController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            engine: ValidationEngine::new(),
            form: FormContext::new(),
            surface,
        }
    }

    pub fn form(&self) -> &FormContext {
        &self.form
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Page load: set the submit control from the initial (untouched) form.
    pub fn start(&mut self) {
        self.update_submit_gate();
    }

    /// First focus marks the field touched. Nothing is rendered yet.
    pub fn on_focus(&mut self, kind: FieldKind) {
        if !self.form.is_touched(kind) {
            debug!(field = kind.label(), "field touched");
        }
        self.form.set_touched(kind, true);
    }

    /// Re-validate the edited field; password edits also re-check the confirmation.
    pub fn on_input(&mut self, kind: FieldKind) {
        self.refresh(kind);
        self.render(kind);
        if kind == FieldKind::Password {
            self.refresh(FieldKind::ConfirmPassword);
            self.render(FieldKind::ConfirmPassword);
        }
        self.update_submit_gate();
    }

    pub fn on_blur(&mut self, kind: FieldKind) {
        self.refresh(kind);
        self.render(kind);
        self.update_submit_gate();
    }

    /// Accept the form if valid, otherwise surface every field's error.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        for kind in FieldKind::ALL {
            self.refresh(kind);
        }
        self.form.touch_all();

        if !self.form.is_valid(&self.engine) {
            for kind in FieldKind::ALL {
                self.render(kind);
            }
            self.update_submit_gate();
            info!("submit rejected");
            return SubmitOutcome::Rejected;
        }

        self.surface.notify_success();
        self.surface.reset_all_fields();
        self.form.reset();
        for kind in FieldKind::ALL {
            self.surface.clear_field_error(kind);
        }
        self.update_submit_gate();
        info!("submit accepted");
        SubmitOutcome::Accepted
    }

    pub fn on_close_popup(&mut self) {
        self.surface.dismiss_notification();
    }

    pub fn on_show_sign_up(&mut self) {
        self.surface.set_panel(Panel::SignUp);
    }

    pub fn on_show_sign_in(&mut self) {
        self.surface.set_panel(Panel::SignIn);
    }

    /// Pull the latest text for `kind` from the surface into the form.
    fn refresh(&mut self, kind: FieldKind) {
        let value = self.surface.read_value(kind);
        self.form.set_value(kind, value);
    }

    fn render(&mut self, kind: FieldKind) {
        let verdict = self.form.verdict(&self.engine, kind);
        match verdict.message {
            Some(message) if !verdict.valid => self.surface.show_field_error(kind, message),
            _ => self.surface.clear_field_error(kind),
        }
        debug!(field = kind.label(), valid = verdict.valid, "field rendered");
    }

    fn update_submit_gate(&mut self) {
        let enabled = self.form.is_valid(&self.engine);
        self.surface.set_submit_enabled(enabled);
    }
}
