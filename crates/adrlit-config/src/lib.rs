//! Runtime configuration for adrlit.
//!
//! Values are layered, lowest precedence first:
//! 1. built-in defaults
//! 2. a TOML file (`adrlit.toml` in the working directory, or `--config`)
//! 3. `.env` (loaded through `dotenvy`) and `ADRLIT_*` environment variables

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "adrlit.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse config file {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },

    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub extraction: ExtractionConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// ── Server ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the dashboard listens on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Largest accepted request body (uploads included), in bytes
    #[serde(default = "default_max_upload")]
    pub max_upload_bytes: usize,
}

fn default_bind() -> String { "127.0.0.1:3001".to_string() }
fn default_max_upload() -> usize { 20 * 1024 * 1024 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_upload_bytes: default_max_upload(),
        }
    }
}

// ── Extraction ────────────────────────────────────────────────────────────────

/// Keyword dictionaries and heuristics used by the extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Drug names reported under "Molecules", in report order
    #[serde(default = "default_drug_keywords")]
    pub drug_keywords: Vec<String>,

    /// Adverse-reaction terms reported under "ADRs Reported", in report order
    #[serde(default = "default_adr_terms")]
    pub adr_terms: Vec<String>,

    /// How many lines below the title are searched for author names
    #[serde(default = "default_author_header_lines")]
    pub author_header_lines: usize,
}

pub fn default_drug_keywords() -> Vec<String> {
    ["Risperidone", "Tramadol", "Aripiprazole", "Trihexyphenidyl"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn default_adr_terms() -> Vec<String> {
    [
        "dyskinesia",
        "tremor",
        "dysarthria",
        "dysphagia",
        "involuntary movements",
        "extrapyramidal",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_author_header_lines() -> usize { 12 }

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            drug_keywords: default_drug_keywords(),
            adr_terms: default_adr_terms(),
            author_header_lines: default_author_header_lines(),
        }
    }
}

// ── Cache ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Number of recent reports kept for export downloads
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize { 64 }

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: default_capacity() }
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load configuration from defaults, an optional TOML file and the environment.
    ///
    /// An explicit `path` must exist; without one, `adrlit.toml` is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_toml_file(p)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_toml_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => {
                debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
                Self::default()
            }
        };

        if let Ok(env_path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", env_path.display());
        }
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file; missing keys fall back to defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply `ADRLIT_*` overrides using `lookup` to read variables.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup("ADRLIT_BIND") {
            self.server.bind = bind;
        }
        if let Some(level) = lookup("ADRLIT_LOG") {
            self.logging.level = level;
        }
        if let Some(raw) = lookup("ADRLIT_MAX_UPLOAD_BYTES") {
            self.server.max_upload_bytes = parse_env("ADRLIT_MAX_UPLOAD_BYTES", &raw)?;
        }
        if let Some(raw) = lookup("ADRLIT_CACHE_CAPACITY") {
            self.cache.capacity = parse_env("ADRLIT_CACHE_CAPACITY", &raw)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.extraction.drug_keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(ConfigError::Invalid("extraction.drug_keywords is empty".into()));
        }
        if self.extraction.adr_terms.iter().all(|k| k.trim().is_empty()) {
            return Err(ConfigError::Invalid("extraction.adr_terms is empty".into()));
        }
        if self.cache.capacity == 0 {
            return Err(ConfigError::Invalid("cache.capacity must be at least 1".into()));
        }
        if self.server.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid("server.max_upload_bytes must be at least 1".into()));
        }
        Ok(())
    }
}

fn parse_env(key: &str, raw: &str) -> Result<usize> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
