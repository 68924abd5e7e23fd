//! In-memory [`FormSurface`] that records what a browser would display.

use serde::Serialize;

use crate::core::types::{FieldKind, Panel};
use crate::io::config::DisplayConfig;
use crate::io::surface::FormSurface;

/// Visible state of one input and the error slot under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub value: String,
    /// Text of the error slot; `None` until an error was first rendered.
    pub error_text: Option<String>,
    /// Whether the input carries the errored marking.
    pub errored: bool,
}

impl FieldView {
    /// Message currently visible under the field, if any.
    pub fn visible_error(&self) -> Option<&str> {
        self.error_text.as_deref().filter(|text| !text.is_empty())
    }
}

/// Recorded UI state for a sign-up form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemorySurface {
    pub panel: Panel,
    pub fields: [FieldView; 4],
    pub submit_enabled: bool,
    pub popup_visible: bool,
    /// Number of times the success notification was triggered.
    pub notifications: u32,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self {
            panel: Panel::SignIn,
            fields: Default::default(),
            submit_enabled: true,
            popup_visible: false,
            notifications: 0,
        }
    }
}

impl MemorySurface {
    pub fn new(panel: Panel) -> Self {
        Self {
            panel,
            ..Self::default()
        }
    }

    pub fn view(&self, kind: FieldKind) -> &FieldView {
        &self.fields[kind.index()]
    }

    /// Simulate the user typing: replaces the input's text.
    pub fn type_value(&mut self, kind: FieldKind, value: impl Into<String>) {
        self.fields[kind.index()].value = value.into();
    }

    pub fn error(&self, kind: FieldKind) -> Option<&str> {
        self.view(kind).visible_error()
    }

    /// Fields with a visible error, in form order.
    pub fn errored_fields(&self) -> Vec<FieldKind> {
        FieldKind::ALL
            .into_iter()
            .filter(|kind| self.view(*kind).errored)
            .collect()
    }

    /// Plain-text transcript of the visible state, one line per item.
    pub fn render(&self, display: &DisplayConfig) -> String {
        let panel = match self.panel {
            Panel::SignIn => "sign-in",
            Panel::SignUp => "sign-up",
        };
        let mut lines = vec![format!("panel: {panel}")];
        for kind in FieldKind::ALL {
            let view = self.view(kind);
            let mut line = format!("{}:", kind.label());
            if display.show_values {
                let shown = display.render_value(&view.value, kind.is_secret());
                line.push_str(&format!(" {shown:?}"));
            }
            match view.visible_error() {
                Some(message) => line.push_str(&format!(" [error] {message}")),
                None => line.push_str(" [ok]"),
            }
            lines.push(line);
        }
        let submit = if self.submit_enabled {
            "enabled"
        } else {
            "disabled"
        };
        lines.push(format!("submit: {submit}"));
        let popup = if self.popup_visible { "shown" } else { "hidden" };
        lines.push(format!("popup: {popup}"));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl FormSurface for MemorySurface {
    fn read_value(&self, kind: FieldKind) -> String {
        self.view(kind).value.clone()
    }

    fn show_field_error(&mut self, kind: FieldKind, message: &str) {
        let view = &mut self.fields[kind.index()];
        view.error_text = Some(message.to_string());
        view.errored = true;
    }

    fn clear_field_error(&mut self, kind: FieldKind) {
        let view = &mut self.fields[kind.index()];
        // The slot is emptied, not removed, once it exists.
        if let Some(text) = view.error_text.as_mut() {
            text.clear();
        }
        view.errored = false;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn notify_success(&mut self) {
        self.popup_visible = true;
        self.notifications += 1;
    }

    fn dismiss_notification(&mut self) {
        self.popup_visible = false;
    }

    fn reset_all_fields(&mut self) {
        for view in &mut self.fields {
            view.value.clear();
        }
    }

    fn set_panel(&mut self, panel: Panel) {
        self.panel = panel;
    }
}
