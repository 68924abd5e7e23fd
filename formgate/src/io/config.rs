//! Display configuration for form sessions (`formgate.toml`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::types::Panel;

/// Session configuration (TOML).
///
/// Only affects how a session starts and how transcripts are printed; the
/// validation rules themselves are fixed. Missing fields use defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct FormConfig {
    /// Panel visible when the page loads.
    pub start_panel: Panel,

    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct DisplayConfig {
    /// Include field values in transcripts.
    pub show_values: bool,

    /// Replace password characters with `mask_char` in transcripts.
    pub mask_passwords: bool,

    /// Single character used for masking.
    pub mask_char: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_values: true,
            mask_passwords: true,
            mask_char: "*".to_string(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            start_panel: Panel::SignIn,
            display: DisplayConfig::default(),
        }
    }
}

impl FormConfig {
    pub fn validate(&self) -> Result<()> {
        if self.display.mask_char.chars().count() != 1 {
            return Err(anyhow!(
                "display.mask-char must be exactly one character, got {:?}",
                self.display.mask_char
            ));
        }
        if self.display.mask_char.trim().is_empty() {
            return Err(anyhow!("display.mask-char must not be whitespace"));
        }
        Ok(())
    }
}

impl DisplayConfig {
    /// Render a field value for display, masking secrets when configured.
    pub fn render_value(&self, value: &str, secret: bool) -> String {
        if secret && self.mask_passwords {
            self.mask_char.repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `FormConfig::default()`.
pub fn load_config(path: &Path) -> Result<FormConfig> {
    if !path.exists() {
        let cfg = FormConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FormConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &FormConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, FormConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("formgate.toml");
        let cfg = FormConfig {
            start_panel: Panel::SignUp,
            display: DisplayConfig {
                show_values: false,
                mask_passwords: false,
                mask_char: "#".to_string(),
            },
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("formgate.toml");
        fs::write(&path, "start-panel = \"sign-up\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.start_panel, Panel::SignUp);
        assert_eq!(cfg.display, DisplayConfig::default());
    }

    #[test]
    fn rejects_multi_char_mask() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("formgate.toml");
        fs::write(&path, "[display]\nmask-char = \"**\"\n").expect("write");
        let err = load_config(&path).expect_err("invalid mask");
        assert!(err.to_string().contains("exactly one character"));
    }

    #[test]
    fn render_value_masks_secrets_only() {
        let display = DisplayConfig::default();
        assert_eq!(display.render_value("Abcdefgh", true), "********");
        assert_eq!(display.render_value("Ana", false), "Ana");

        let plain = DisplayConfig {
            mask_passwords: false,
            ..DisplayConfig::default()
        };
        assert_eq!(plain.render_value("Abcdefgh", true), "Abcdefgh");
    }
}
