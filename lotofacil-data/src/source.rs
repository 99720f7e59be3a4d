use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LotoError, Result};
use crate::models::{HistoricalDraw, format_token};

#[derive(Debug, Deserialize)]
struct ResultsDocument {
    results: Vec<Vec<RawNumber>>,
}

/// Les numéros peuvent être écrits "01" ou 1 selon la source.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Text(String),
    Integer(u64),
}

impl RawNumber {
    fn into_token(self) -> Option<String> {
        match self {
            RawNumber::Text(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            }
            RawNumber::Integer(n) => Some(format_token(n)),
        }
    }
}

pub fn draws_path() -> PathBuf {
    let mut path = std::env::current_dir().unwrap_or_default();
    path.push("data");
    path.push("data.json");
    path
}

pub fn load_draws(path: &Path) -> Result<Vec<HistoricalDraw>> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        LotoError::data_format(format!("impossible de lire {:?} : {}", path, e))
    })?;
    let draws = parse_draws(&json)?;
    log::info!("{} tirages lus depuis {:?}", draws.len(), path);
    Ok(draws)
}

/// Lit un document `{"results": [[...], ...]}`.
pub fn parse_draws(json: &str) -> Result<Vec<HistoricalDraw>> {
    let document: ResultsDocument = serde_json::from_str(json)
        .map_err(|e| LotoError::data_format(format!("document de résultats invalide : {}", e)))?;

    document
        .results
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            let numbers = raw
                .into_iter()
                .map(|n| {
                    n.into_token().ok_or_else(|| {
                        LotoError::data_format(format!("numéro vide dans le tirage {}", i + 1))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(HistoricalDraw { numbers })
        })
        .collect()
}
