//! Test-only helpers for building field snapshots, controllers and scripts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::controller::FormController;
use crate::core::form::FormContext;
use crate::core::types::{FieldKind, FieldState, Panel};
use crate::io::config::{FormConfig, write_config};
use crate::io::memory::MemorySurface;
use crate::io::script::{FormEvent, Script};
use crate::io::surface::FormSurface;

/// Values that pass every rule, in form order.
pub const VALID_VALUES: [(FieldKind, &str); 4] = [
    (FieldKind::Name, "Ana Costa"),
    (FieldKind::Email, "a@b.co"),
    (FieldKind::Password, "Abcdefgh"),
    (FieldKind::ConfirmPassword, "Abcdefgh"),
];

/// A touched snapshot with `value`.
pub fn touched(kind: FieldKind, value: &str) -> FieldState {
    FieldState {
        kind,
        value: value.to_string(),
        touched: true,
    }
}

/// An untouched snapshot with `value`.
pub fn untouched(kind: FieldKind, value: &str) -> FieldState {
    FieldState {
        touched: false,
        ..touched(kind, value)
    }
}

/// A form with every field touched and valid.
pub fn filled_form() -> FormContext {
    let mut form = FormContext::new();
    for (kind, value) in VALID_VALUES {
        form.set_value(kind, value);
        form.set_touched(kind, true);
    }
    form
}

/// A controller on a default in-memory surface, after page load.
pub fn started() -> FormController<MemorySurface> {
    let mut controller = FormController::new(MemorySurface::default());
    controller.start();
    controller
}

/// Focus, type and blur every field with a valid value.
pub fn fill_valid(controller: &mut FormController<MemorySurface>) {
    for (kind, value) in VALID_VALUES {
        controller.on_focus(kind);
        controller.surface_mut().type_value(kind, value);
        controller.on_input(kind);
        controller.on_blur(kind);
    }
}

/// Script events equivalent to [`fill_valid`], opening the sign-up panel first.
pub fn valid_signup_events() -> Vec<FormEvent> {
    let mut events = vec![FormEvent::ShowSignUp];
    for (field, value) in VALID_VALUES {
        events.push(FormEvent::Focus { field });
        events.push(FormEvent::Input {
            field,
            value: value.to_string(),
        });
        events.push(FormEvent::Blur { field });
    }
    events
}

/// One side effect observed by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    ShowError(FieldKind),
    ClearError(FieldKind),
    SubmitEnabled(bool),
    NotifySuccess,
    DismissNotification,
    ResetAllFields,
    SetPanel(Panel),
}

/// Surface that records every side effect in call order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub values: [String; 4],
    pub calls: Vec<SurfaceCall>,
}

impl FormSurface for RecordingSurface {
    fn read_value(&self, kind: FieldKind) -> String {
        self.values[kind.index()].clone()
    }

    fn show_field_error(&mut self, kind: FieldKind, _message: &str) {
        self.calls.push(SurfaceCall::ShowError(kind));
    }

    fn clear_field_error(&mut self, kind: FieldKind) {
        self.calls.push(SurfaceCall::ClearError(kind));
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.calls.push(SurfaceCall::SubmitEnabled(enabled));
    }

    fn notify_success(&mut self) {
        self.calls.push(SurfaceCall::NotifySuccess);
    }

    fn dismiss_notification(&mut self) {
        self.calls.push(SurfaceCall::DismissNotification);
    }

    fn reset_all_fields(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
        self.calls.push(SurfaceCall::ResetAllFields);
    }

    fn set_panel(&mut self, panel: Panel) {
        self.calls.push(SurfaceCall::SetPanel(panel));
    }
}

/// Write a script as pretty JSON with trailing newline.
pub fn write_script(path: &Path, script: &Script) -> Result<()> {
    let mut payload = serde_json::to_string_pretty(script).context("serialize script")?;
    payload.push('\n');
    fs::write(path, payload).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Temporary directory holding a script and optional config.
pub struct SessionDir {
    temp: tempfile::TempDir,
}

impl SessionDir {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create session tempdir")?;
        Ok(Self { temp })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("formgate.toml")
    }

    /// Write `events` as `session.json` and return its path.
    pub fn write_events(&self, events: Vec<FormEvent>) -> Result<PathBuf> {
        let path = self.path().join("session.json");
        write_script(&path, &Script { events })?;
        Ok(path)
    }

    pub fn write_config(&self, config: &FormConfig) -> Result<PathBuf> {
        let path = self.config_path();
        write_config(&path, config)?;
        Ok(path)
    }
}
