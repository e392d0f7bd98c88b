//! Application settings loaded from TOML.
//!
//! Default values are embedded via `include_str!("default_settings.toml")`;
//! custom content goes through the same parse-and-validate path.

use serde::Deserialize;

use crate::samples;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub layout: LayoutSettings,
    pub audio: AudioSettings,
    pub editor: EditorSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSettings {
    pub initial_percent: f64,
    pub min_percent: f64,
    pub max_percent: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub beat_hz: f64,
    pub base_hz: f64,
    pub ramp_seconds: f64,
    pub filter_hz: f64,
    pub filter_q: f64,
    pub initial_volume: f64,
    pub max_volume: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorSettings {
    pub default_language: String,
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings TOML must be valid")
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    fn invalid(field: &str, reason: &str) -> SettingsError {
        SettingsError::InvalidValue {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    let l = &s.layout;
    if !(0.0..=100.0).contains(&l.min_percent) || !(0.0..=100.0).contains(&l.max_percent) {
        return Err(invalid("layout", "percentages must lie within [0, 100]"));
    }
    if l.min_percent >= l.max_percent {
        return Err(invalid("layout.min_percent", "must be below max_percent"));
    }
    if !(l.min_percent..=l.max_percent).contains(&l.initial_percent) {
        return Err(invalid(
            "layout.initial_percent",
            "must lie within [min_percent, max_percent]",
        ));
    }

    let a = &s.audio;
    for (field, value) in [
        ("audio.beat_hz", a.beat_hz),
        ("audio.base_hz", a.base_hz),
        ("audio.ramp_seconds", a.ramp_seconds),
        ("audio.filter_hz", a.filter_hz),
        ("audio.filter_q", a.filter_q),
    ] {
        if value <= 0.0 {
            return Err(invalid(field, "must be positive"));
        }
    }
    if a.beat_hz >= a.base_hz * 2.0 {
        // Channel frequencies are base ± beat/2; keep both positive.
        return Err(invalid("audio.beat_hz", "must be below twice base_hz"));
    }
    if !(0.0..=1.0).contains(&a.max_volume) {
        return Err(invalid("audio.max_volume", "must lie within [0, 1]"));
    }
    if !(0.0..=a.max_volume).contains(&a.initial_volume) {
        return Err(invalid(
            "audio.initial_volume",
            "must lie within [0, max_volume]",
        ));
    }

    if !samples::is_supported(&s.editor.default_language) {
        return Err(invalid("editor.default_language", "unknown language"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.layout.initial_percent, 50.0);
        assert_eq!(s.layout.min_percent, 20.0);
        assert_eq!(s.layout.max_percent, 80.0);
        assert_eq!(s.audio.beat_hz, 40.0);
        assert_eq!(s.audio.base_hz, 120.0);
        assert_eq!(s.audio.initial_volume, 0.05);
        assert_eq!(s.editor.default_language, "javascript");
    }

    #[test]
    fn default_impl_matches_embedded_toml() {
        let s = Settings::default();
        assert_eq!(s.audio.max_volume, 0.2);
    }

    fn custom(patch: &str) -> String {
        // Replace one line of the embedded defaults for targeted failures.
        let (key, _) = patch.split_once('=').unwrap();
        DEFAULT_SETTINGS_TOML
            .lines()
            .map(|line| {
                if line.starts_with(key.trim()) {
                    patch
                } else {
                    line
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn error_min_above_max() {
        let err = parse_settings_toml(&custom("min_percent = 90.0")).unwrap_err();
        assert!(err.to_string().contains("min_percent"));
    }

    #[test]
    fn error_initial_outside_bounds() {
        let err = parse_settings_toml(&custom("initial_percent = 10.0")).unwrap_err();
        assert!(err.to_string().contains("initial_percent"));
    }

    #[test]
    fn error_negative_frequency() {
        let err = parse_settings_toml(&custom("base_hz = -1.0")).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_volume_above_ceiling() {
        let err = parse_settings_toml(&custom("initial_volume = 0.5")).unwrap_err();
        assert!(err.to_string().contains("initial_volume"));
    }

    #[test]
    fn error_unknown_language() {
        let err = parse_settings_toml(&custom("default_language = \"cobol\"")).unwrap_err();
        assert!(err.to_string().contains("default_language"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[layout]\ninitial_percent = 50.0").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
