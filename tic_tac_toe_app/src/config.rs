use std::env;
use std::path::PathBuf;

pub const SCORES_PATH_VAR: &str = "TIC_TAC_TOE_SCORES";
pub const DEFAULT_SCORES_PATH: &str = "tic_tac_toe_scores.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub scores_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let scores_path = lookup(SCORES_PATH_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORES_PATH));

        Self { scores_path }
    }
}
