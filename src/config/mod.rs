mod api;
mod env;

use crate::api::DEFAULT_BASE_URL;
use crate::cli::Args;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use api::{ApiConfig, OutputConfig};
pub use env::{expand_env_var_in_string, parse_flag};

pub const API_KEY_VAR: &str = "RBXSTATS_API_KEY";
pub const API_ENDPOINT_VAR: &str = "RBXSTATS_API_ENDPOINT";
pub const VERBOSE_VAR: &str = "RBXSTATS_VERBOSE";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_endpoint: String,
    pub verbose: bool,
    pub json: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JsonConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self, String> {
        let json_config = JsonConfig::load().map_err(|e| format!("{:#}", e))?;
        Self::resolve(args, &json_config, |name| std::env::var(name).ok())
    }

    /// Merge CLI args, environment (through `lookup`) and file config.
    pub fn resolve<F>(args: &Args, json_config: &JsonConfig, lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        // API key: env var > config file. An empty env var counts as unset.
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.is_empty())
            .or_else(|| {
                json_config
                    .api
                    .key
                    .as_deref()
                    .map(|key| expand_env_var_in_string(key, &lookup))
            })
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                format!(
                    "{} environment variable not set and no api.key in config",
                    API_KEY_VAR
                )
            })?;

        // API endpoint: CLI args > env var > config file > default
        let api_endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| lookup(API_ENDPOINT_VAR))
            .or_else(|| json_config.api.endpoint.clone())
            .map(|endpoint| endpoint.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let verbose = args.verbose
            || lookup(VERBOSE_VAR)
                .map(|v| parse_flag(&v))
                .or(json_config.output.verbose)
                .unwrap_or(false);

        let json = args.json || json_config.output.json.unwrap_or(false);

        Ok(Config {
            api_key,
            api_endpoint,
            verbose,
            json,
        })
    }
}

impl JsonConfig {
    pub fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(JsonConfig::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );

        if is_yaml {
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config file: {}", path.display()))
        } else {
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config file: {}", path.display()))
        }
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".rbxstats.yaml"),
            PathBuf::from(".rbxstats.yml"),
            PathBuf::from(".rbxstats.json"),
        ];

        if let Some(config_dir) = Self::user_config_dir() {
            paths.push(config_dir.join("rbxstats.yaml"));
            paths.push(config_dir.join("rbxstats.yml"));
            paths.push(config_dir.join("rbxstats.json"));
        }

        paths
    }

    fn user_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("rbxstats"))
    }

    pub fn example() -> Self {
        JsonConfig {
            api: ApiConfig {
                endpoint: Some(DEFAULT_BASE_URL.to_string()),
                key: Some(format!("${{{}}}", API_KEY_VAR)),
            },
            output: OutputConfig {
                verbose: Some(false),
                json: Some(false),
            },
        }
    }

    /// Write [`JsonConfig::example`] to `path` unless a file already exists there.
    /// Returns whether a file was written.
    pub fn write_example(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = serde_yaml::to_string(&Self::example())?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(true)
    }

    pub fn user_config_path() -> Option<PathBuf> {
        Self::user_config_dir().map(|dir| dir.join("rbxstats.yaml"))
    }
}
