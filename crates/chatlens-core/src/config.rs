use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "0.0.0.0:8000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/transcripts.json")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Supports `${ENV_VAR}` placeholders; resolves to empty when the
    /// variable is unset, which puts the service in degraded-summary mode.
    #[serde(default = "default_api_key")]
    pub api_key: String,
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_api_key() -> String {
    "${OPENAI_API_KEY}".to_string()
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            api_key: default_api_key(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChatlensConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub summarizer: SummarizerConfig,
}

/// Replace every `${VAR}` occurrence with the value of the environment
/// variable, or empty when unset. An unclosed placeholder passes through.
pub fn resolve_env_var(raw: &str) -> String {
    let mut output = String::new();
    let mut rest = raw;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);

        let candidate = &rest[start + 2..];
        let Some(end) = candidate.find('}') else {
            output.push_str(&rest[start..]);
            return output;
        };

        let key = &candidate[..end];
        output.push_str(&std::env::var(key).unwrap_or_default());
        rest = &candidate[end + 1..];
    }

    output.push_str(rest);
    output
}

/// Load configuration from a YAML file and resolve `${ENV}` placeholders.
pub fn load_config(path: &Path) -> Result<ChatlensConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let mut config: ChatlensConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse yaml file: {}", path.display()))?;
    resolve_config_env(&mut config);
    Ok(config)
}

/// Built-in defaults with `${ENV}` placeholders resolved, for when no
/// config file exists.
pub fn default_config() -> ChatlensConfig {
    let mut config = ChatlensConfig::default();
    resolve_config_env(&mut config);
    config
}

fn resolve_config_env(config: &mut ChatlensConfig) {
    config.server.bind = resolve_env_var(&config.server.bind);
    config.summarizer.model = resolve_env_var(&config.summarizer.model);
    config.summarizer.api_base = resolve_env_var(&config.summarizer.api_base);
    config.summarizer.api_key = resolve_env_var(&config.summarizer.api_key);
}
