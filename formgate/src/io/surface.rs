//! Rendering surface abstraction.
//!
//! The [`FormSurface`] trait decouples the controller from whatever UI shows
//! the form. Tests and the `replay` command use [`MemorySurface`], which
//! records the visible state instead of drawing it.
//!
//! [`MemorySurface`]: crate::io::memory::MemorySurface

use crate::core::types::{FieldKind, Panel};

/// Side effects the controller performs on the UI.
///
/// Every call must be idempotent: repeating it with the same arguments leaves
/// the visible state unchanged.
pub trait FormSurface {
    /// Current text of a field as typed by the user.
    fn read_value(&self, kind: FieldKind) -> String;

    /// Render `message` under the field and mark the field as errored.
    fn show_field_error(&mut self, kind: FieldKind, message: &str);

    /// Remove any message under the field and its errored marking.
    fn clear_field_error(&mut self, kind: FieldKind);

    fn set_submit_enabled(&mut self, enabled: bool);

    /// Show the success popup. It stays until [`FormSurface::dismiss_notification`].
    fn notify_success(&mut self);

    fn dismiss_notification(&mut self);

    /// Empty every input on the form.
    fn reset_all_fields(&mut self);

    /// Slide the container to show `panel`.
    fn set_panel(&mut self, panel: Panel);
}
