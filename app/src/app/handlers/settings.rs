//! # Settings Handlers
//!
//! Handlers for settings-related actions: theme customization, language
//! toggle, and persistence of both in one JSON config file.

use crate::app::state::AppState;
use crate::ui::theme::ThemeConfig;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Persisted configuration: theme colors plus UI language
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub theme: ThemeConfig,
    pub language: crate::ui::i18n::Language,
}

/// Get default config file path
pub fn get_config_path() -> std::path::PathBuf {
    std::path::PathBuf::from("./shapshap-config.json")
}

/// Load settings from a config file, falling back to defaults
pub fn load_settings(path: &Path) -> AppConfig {
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string()))
    {
        Ok(config) => {
            tracing::info!("Loaded configuration from {:?}", path);
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load config from {:?}: {}. Using defaults.", path, e);
            AppConfig::default()
        }
    }
}

/// Save settings to a config file
pub fn save_settings(path: &Path, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    tracing::info!("Saved configuration to {:?}", path);
    Ok(())
}

/// Handle settings window open/close
pub(crate) fn handle_panel_toggle(state: Arc<RwLock<AppState>>) {
    let mut app_state = state.write();
    app_state.settings.panel_open = !app_state.settings.panel_open;
}

/// Handle theme color change
pub(crate) fn handle_theme_color_change(state: Arc<RwLock<AppState>>, config: ThemeConfig) {
    let mut app_state = state.write();
    app_state.settings.theme_config = config;
    app_state.settings.unsaved_changes = true;
}

/// Handle UI language toggle.
///
/// The new language is persisted immediately so it survives restarts without
/// a trip through the settings window.
pub(crate) fn handle_language_toggle(state: Arc<RwLock<AppState>>) {
    {
        let mut app_state = state.write();
        app_state.settings.language = app_state.settings.language.toggled();
        app_state.settings.unsaved_changes = true;
        tracing::info!(language = app_state.settings.language.label(), "Language changed");
    }
    persist(state);
}

/// Handle settings save
pub(crate) fn handle_settings_save(state: Arc<RwLock<AppState>>) {
    persist(state);
}

/// Handle settings reset to defaults
pub(crate) fn handle_settings_reset(state: Arc<RwLock<AppState>>) {
    let mut app_state = state.write();
    app_state.settings.theme_config = ThemeConfig::default();
    app_state.settings.unsaved_changes = true;
}

/// Write the current settings to the configured path and clear the
/// unsaved-changes flag on success.
fn persist(state: Arc<RwLock<AppState>>) {
    let (path, config) = {
        let app_state = state.read();
        (
            app_state.settings.config_path.clone(),
            AppConfig {
                theme: app_state.settings.theme_config.clone(),
                language: app_state.settings.language,
            },
        )
    };

    if path.is_empty() {
        tracing::warn!("No config path set - settings not persisted");
        return;
    }

    match save_settings(Path::new(&path), &config) {
        Ok(_) => {
            state.write().settings.unsaved_changes = false;
        }
        Err(e) => {
            tracing::error!("Failed to save settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::provider::MockDataProvider;
    use crate::ui::i18n::Language;

    fn test_state() -> Arc<RwLock<AppState>> {
        Arc::new(RwLock::new(AppState::new(Arc::new(MockDataProvider::new()))))
    }

    fn temp_config_path(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("shapshap-{}-{}.json", tag, std::process::id()))
    }

    #[test]
    fn test_config_round_trips_through_file() {
        let path = temp_config_path("round-trip");
        let mut config = AppConfig::default();
        config.theme.primary = [255, 0, 128];
        config.language = Language::Fr;

        save_settings(&path, &config).unwrap();
        let loaded = load_settings(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.theme.primary, [255, 0, 128]);
        assert_eq!(loaded.language, Language::Fr);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let config = load_settings(Path::new("/nonexistent/shapshap-config.json"));
        assert_eq!(config.theme, ThemeConfig::default());
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn test_language_toggle_persists_choice() {
        let state = test_state();
        let path = temp_config_path("lang-toggle");
        state.write().settings.config_path = path.to_string_lossy().to_string();

        handle_language_toggle(state.clone());

        {
            let app_state = state.read();
            assert_eq!(app_state.settings.language, Language::Fr);
            assert!(!app_state.settings.unsaved_changes);
        }
        let saved = load_settings(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(saved.language, Language::Fr);
    }

    #[test]
    fn test_color_change_marks_unsaved_until_saved() {
        let state = test_state();
        let path = temp_config_path("color-save");
        state.write().settings.config_path = path.to_string_lossy().to_string();

        let mut config = ThemeConfig::default();
        config.background = [0, 0, 0];
        handle_theme_color_change(state.clone(), config.clone());
        assert!(state.read().settings.unsaved_changes);

        handle_settings_save(state.clone());
        {
            let app_state = state.read();
            assert!(!app_state.settings.unsaved_changes);
            assert_eq!(app_state.settings.theme_config, config);
        }
        let saved = load_settings(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(saved.theme.background, [0, 0, 0]);
    }

    #[test]
    fn test_reset_restores_default_theme() {
        let state = test_state();
        let mut config = ThemeConfig::default();
        config.primary = [1, 2, 3];
        handle_theme_color_change(state.clone(), config);

        handle_settings_reset(state.clone());
        let app_state = state.read();
        assert_eq!(app_state.settings.theme_config, ThemeConfig::default());
        assert!(app_state.settings.unsaved_changes);
    }

    #[test]
    fn test_panel_toggle_round_trips() {
        let state = test_state();
        assert!(!state.read().settings.panel_open);

        handle_panel_toggle(state.clone());
        assert!(state.read().settings.panel_open);

        handle_panel_toggle(state.clone());
        assert!(!state.read().settings.panel_open);
    }
}
