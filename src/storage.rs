use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SAVE_FILE: &str = "snake_save.json";

/// On-disk document. The field name is the storage key the game has
/// always used.
#[derive(Serialize, Deserialize, Default)]
struct SaveData {
    #[serde(rename = "snakeHighScore", default)]
    high_score: u32,
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("write save file: {0}")]
    Io(#[from] io::Error),
    #[error("encode save file: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Missing, unreadable or unparseable save data all degrade to 0.
pub fn load_high_score(path: impl AsRef<Path>) -> u32 {
    fs::read_to_string(path)
        .ok()
        .and_then(|text| serde_json::from_str::<SaveData>(&text).ok())
        .unwrap_or_default()
        .high_score
}

pub fn save_high_score(path: impl AsRef<Path>, high_score: u32) -> Result<(), SaveError> {
    let text = serde_json::to_string_pretty(&SaveData { high_score })?;
    fs::write(path, text)?;
    Ok(())
}
