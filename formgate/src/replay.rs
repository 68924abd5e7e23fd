//! Replay helpers for `formgate replay`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::controller::FormController;
use crate::core::types::SubmitOutcome;
use crate::io::config::{FormConfig, load_config};
use crate::io::memory::MemorySurface;
use crate::io::script::{FormEvent, load_script};

/// Final state of a replayed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayOutcome {
    pub surface: MemorySurface,
    /// Outcome of the last submit event, if the script submitted at all.
    pub last_submit: Option<SubmitOutcome>,
    pub accepted: u32,
    pub rejected: u32,
}

/// Run `events` against a fresh form on an in-memory surface.
pub fn replay_events(events: &[FormEvent], config: &FormConfig) -> ReplayOutcome {
    let mut controller = FormController::new(MemorySurface::new(config.start_panel));
    controller.start();

    let mut last_submit = None;
    let mut accepted = 0;
    let mut rejected = 0;

    for (index, event) in events.iter().enumerate() {
        debug!(index, ?event, "dispatch");
        match event {
            FormEvent::Focus { field } => controller.on_focus(*field),
            FormEvent::Input { field, value } => {
                controller.surface_mut().type_value(*field, value.clone());
                controller.on_input(*field);
            }
            FormEvent::Blur { field } => controller.on_blur(*field),
            FormEvent::Submit => {
                let outcome = controller.on_submit();
                match outcome {
                    SubmitOutcome::Accepted => accepted += 1,
                    SubmitOutcome::Rejected => rejected += 1,
                }
                last_submit = Some(outcome);
            }
            FormEvent::ClosePopup => controller.on_close_popup(),
            FormEvent::ShowSignUp => controller.on_show_sign_up(),
            FormEvent::ShowSignIn => controller.on_show_sign_in(),
        }
    }

    ReplayOutcome {
        surface: controller.into_surface(),
        last_submit,
        accepted,
        rejected,
    }
}

/// Load config and script from disk and replay them.
///
/// A missing config file falls back to defaults.
#[instrument(skip_all, fields(script = %script_path.display()))]
pub fn replay_from_paths(
    script_path: &Path,
    config_path: &Path,
) -> Result<(ReplayOutcome, FormConfig)> {
    let config = load_config(config_path).with_context(|| "load replay config")?;
    let script = load_script(script_path)?;
    let outcome = replay_events(&script.events, &config);
    Ok((outcome, config))
}
