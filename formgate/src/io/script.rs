//! Event scripts for `formgate replay`.
//!
//! A script is a list of UI events, stored as TOML (`[[events]]` tables) or
//! JSON (`{"events": [...]}` or a bare array).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::FieldKind;

/// One discrete user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum FormEvent {
    Focus { field: FieldKind },
    /// The input's text becomes `value`, then the input handler runs.
    Input { field: FieldKind, value: String },
    Blur { field: FieldKind },
    Submit,
    ClosePopup,
    ShowSignUp,
    ShowSignIn,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<FormEvent>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonScript {
    Bare(Vec<FormEvent>),
    Wrapped(Script),
}

/// Parse a script, choosing the format from the file extension.
pub fn load_script(path: &Path) -> Result<Script> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read script {}", path.display()))?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let parsed = if is_toml {
        parse_toml(&contents)
    } else {
        parse_json(&contents)
    };
    let script = parsed.with_context(|| format!("parse script {}", path.display()))?;
    debug!(path = %path.display(), events = script.events.len(), "script loaded");
    Ok(script)
}

pub fn parse_toml(contents: &str) -> Result<Script> {
    Ok(toml::from_str(contents)?)
}

pub fn parse_json(contents: &str) -> Result<Script> {
    let script = match serde_json::from_str(contents)? {
        JsonScript::Bare(events) => Script { events },
        JsonScript::Wrapped(script) => script,
    };
    Ok(script)
}
