//! Editor configuration persistence
//!
//! Stores user preferences in `<config dir>/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Columns before a line soft-wraps
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
    /// Screen rows available for text
    #[serde(default = "default_visible_lines")]
    pub visible_lines: usize,
}

fn default_wrap_width() -> usize {
    80
}

fn default_visible_lines() -> usize {
    24
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            wrap_width: default_wrap_width(),
            visible_lines: default_visible_lines(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<EditorConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace unusable zero values with defaults
    fn sanitized(mut self) -> Self {
        if self.wrap_width == 0 {
            tracing::warn!("wrap_width must be at least 1, using {}", default_wrap_width());
            self.wrap_width = default_wrap_width();
        }
        if self.visible_lines == 0 {
            tracing::warn!(
                "visible_lines must be at least 1, using {}",
                default_visible_lines()
            );
            self.visible_lines = default_visible_lines();
        }
        self
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
