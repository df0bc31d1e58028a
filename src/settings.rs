use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::game::types::DifficultyLevel;
use crate::warn;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub player_name: String,
    pub difficulty: DifficultyLevel,
    pub maps_dir: String,
    pub save_file: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            difficulty: DifficultyLevel::default(),
            maps_dir: "maps".to_string(),
            save_file: "games.yaml".to_string(),
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.player_name.trim().is_empty() {
            return Err("Player name must not be empty".to_string());
        }
        if self.player_name.len() > 24 {
            return Err("Player name must be 24 characters or fewer".to_string());
        }
        if self.maps_dir.is_empty() {
            return Err("Maps directory must not be empty".to_string());
        }
        if self.save_file.is_empty() {
            return Err("Save file must not be empty".to_string());
        }
        Ok(())
    }
}

impl GameSettings {
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Config parse error: {}", e))
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Config serialize error: {}", e))
    }

    // A missing file is not an error; first runs play with the defaults.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("Could not read {}: {}", path.display(), e)),
        };
        let settings = Self::from_yaml(&content)?;
        settings
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(settings)
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Falling back to default settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        self.validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        let content = self.to_yaml()?;
        std::fs::write(path, content)
            .map_err(|e| format!("Could not write {}: {}", path.display(), e))
    }
}
