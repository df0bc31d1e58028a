use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::game::types::DifficultyLevel;
use crate::warn;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub player: String,
    pub difficulty: DifficultyLevel,
    pub points: u32,
    pub level: u32,
    pub seconds: u32,
    pub score: u32,
}

#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Format(serde_yaml_ng::Error),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Format(e) => write!(f, "Format error: {}", e),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            SaveError::Format(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<serde_yaml_ng::Error> for SaveError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        SaveError::Format(e)
    }
}

pub fn save_records(path: &Path, records: &[GameRecord]) -> Result<(), SaveError> {
    let content = records_to_yaml(records)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_records(path: &Path) -> Result<Vec<GameRecord>, SaveError> {
    let content = std::fs::read_to_string(path)?;
    records_from_yaml(&content)
}

pub fn load_records_or_empty(path: &Path) -> Vec<GameRecord> {
    match load_records(path) {
        Ok(records) => records,
        Err(e) => {
            warn!("Could not load saved games from {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

pub fn records_to_yaml(records: &[GameRecord]) -> Result<String, SaveError> {
    Ok(serde_yaml_ng::to_string(records)?)
}

pub fn records_from_yaml(content: &str) -> Result<Vec<GameRecord>, SaveError> {
    Ok(serde_yaml_ng::from_str(content)?)
}
