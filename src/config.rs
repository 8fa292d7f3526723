//! Survey configuration
//!
//! Loaded once at startup from the environment (plus an optional env file)
//! and passed read-only into the providers.

use crate::types::{LangpayError, Result};
use std::collections::HashMap;
use std::env;
use std::path::Path;

/// Env var holding the SuperJob application key
pub const SUPERJOB_KEY_VAR: &str = "SJOB_KEY";

/// Env var holding the log filter
pub const LOG_FILTER_VAR: &str = "LANGPAY_LOG";

const DEFAULT_ENV_FILE: &str = ".env";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Languages surveyed, in report order
const DEFAULT_LANGUAGES: [&str; 9] = [
    "go",
    "C",
    "CSS",
    "Scala",
    "PHP",
    "Ruby",
    "Python",
    "Java",
    "JavaScript",
];

/// Top-level configuration
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    pub languages: Vec<String>,
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
    pub log_filter: String,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            headhunter: HeadHunterConfig::default(),
            superjob: SuperJobConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SurveyConfig {
    /// Load from the process environment, falling back to `env_file`
    /// (or `./.env` when none is given) for unset variables.
    ///
    /// An explicitly named env file must exist and parse. The default one is
    /// optional: unreadable or malformed lines are skipped with a warning.
    pub fn load(env_file: Option<&Path>) -> Result<Self> {
        let file_vars = match env_file {
            Some(path) => read_env_file(path)?,
            None => read_default_env_file(Path::new(DEFAULT_ENV_FILE)),
        };

        Ok(Self::from_lookup(|key| {
            env::var(key).ok().or_else(|| file_vars.get(key).cloned())
        }))
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            superjob: SuperJobConfig {
                app_key: lookup(SUPERJOB_KEY_VAR),
                ..defaults.superjob
            },
            log_filter: lookup(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
            ..defaults
        }
    }
}

/// Read `KEY=value` pairs without touching the process environment
fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| {
        LangpayError::Config(format!("cannot read env file {}: {}", path.display(), e))
    })?;

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| {
            LangpayError::Config(format!("invalid env file {}: {}", path.display(), e))
        })?;
        vars.insert(key, value);
    }
    Ok(vars)
}

/// Read the optional default env file, keeping every line that parses.
/// Runs before logging is set up, so warnings go straight to stderr.
fn read_default_env_file(path: &Path) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    if !path.exists() {
        return vars;
    }

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) => {
            eprintln!("[langpay] Warning: cannot read {}: {}", path.display(), e);
            return vars;
        }
    };

    for item in iter {
        match item {
            Ok((key, value)) => {
                vars.insert(key, value);
            }
            Err(e) => {
                eprintln!(
                    "[langpay] Warning: skipping line in {}: {}",
                    path.display(),
                    e
                );
            }
        }
    }
    vars
}

/// HeadHunter search settings
#[derive(Debug, Clone)]
pub struct HeadHunterConfig {
    pub url: String,
    pub title: String,
    pub user_agent: String,
    pub search_prefix: String,
    /// Only vacancies published within this many days
    pub period_days: u32,
    /// HeadHunter area id (1 = Moscow)
    pub area_id: u32,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            url: "https://api.hh.ru/vacancies".to_string(),
            title: "HeadHunter Moscow".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            search_prefix: "Программист".to_string(),
            period_days: 30,
            area_id: 1,
        }
    }
}

/// SuperJob search settings
#[derive(Debug, Clone)]
pub struct SuperJobConfig {
    pub url: String,
    pub title: String,
    pub search_prefix: String,
    pub town: String,
    pub app_key: Option<String>,
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            url: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            title: "SuperJob Moscow".to_string(),
            search_prefix: "программист".to_string(),
            town: "Москва".to_string(),
            app_key: None,
        }
    }
}
