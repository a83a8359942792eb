use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealmate_recipe::CuisineType;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding one JSON document per stored key
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".mealmate")
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SuggestionsConfig {
    /// Used when a request names no cuisines, highest preference first
    #[serde(default = "default_cuisines")]
    pub default_cuisines: Vec<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// How far back meal history counts as "recent"
    #[serde(default = "default_recent_days")]
    pub recent_days: u32,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            default_cuisines: default_cuisines(),
            limit: default_limit(),
            recent_days: default_recent_days(),
        }
    }
}

impl SuggestionsConfig {
    /// Default cuisines parsed into their enum form. Unknown names are skipped.
    pub fn preferred_cuisines(&self) -> Vec<CuisineType> {
        self.default_cuisines
            .iter()
            .filter_map(|name| CuisineType::from_str(name.trim()).ok())
            .collect()
    }
}

fn default_cuisines() -> Vec<String> {
    vec![
        "karnataka".to_string(),
        "tamil".to_string(),
        "punjabi".to_string(),
    ]
}

fn default_limit() -> usize {
    5
}

fn default_recent_days() -> u32 {
    7
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// External `{"recipes": [...]}` file replacing the bundled catalog
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALMATE__STORAGE__DIR, etc.)
    /// 2. Config file specified by path, `CONFIG_PATH`, or `config/default.toml`
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("storage.dir", ".mealmate")?
            .set_default("observability.log_level", default_log_level())?
            .set_default("suggestions.default_cuisines", default_cuisines())?
            .set_default("suggestions.limit", default_limit() as i64)?
            .set_default("suggestions.recent_days", i64::from(default_recent_days()))?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALMATE")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("suggestions.default_cuisines")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.suggestions.limit == 0 {
            return Err("Suggestion limit must be at least 1".to_string());
        }
        if self.suggestions.recent_days == 0 {
            return Err("Suggestion recent_days must be at least 1".to_string());
        }
        if let Some(unknown) = self
            .suggestions
            .default_cuisines
            .iter()
            .find(|name| CuisineType::from_str(name.trim()).is_err())
        {
            return Err(format!("Unknown default cuisine: {unknown}"));
        }
        Ok(())
    }
}
