use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LotoError, Result};
use crate::models::format_token;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub draws_file: PathBuf,
    pub export_dir: PathBuf,
    /// Plus grand numéro du jeu : l'univers va de "01" à ce numéro.
    pub max_number: u32,
    pub bucket_width: u32,
    pub max_combinations: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            draws_file: crate::source::draws_path(),
            export_dir: PathBuf::from("exports"),
            max_number: 25,
            bucket_width: 5,
            max_combinations: 5_000_000,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            LotoError::data_format(format!("configuration {:?} illisible : {}", path, e))
        })?;
        let settings: Settings = serde_json::from_str(&json).map_err(|e| {
            LotoError::data_format(format!("configuration {:?} invalide : {}", path, e))
        })?;
        log::debug!("Configuration chargée depuis {:?}", path);
        Ok(settings)
    }

    pub fn universe(&self) -> Vec<String> {
        (1..=self.max_number as u64).map(format_token).collect()
    }
}
