//! Configuration: command line, environment, and config file
//!
//! Precedence is command line / environment, then the TOML file, then
//! built-in defaults.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

use crate::api::constants::DEFAULT_API_URL;
use crate::model::{Route, RouteError};

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "grove.log";

/// Environment variable holding the tracing filter
pub const LOG_FILTER_ENV: &str = "GROVE_LOG";

/// Errors loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Terminal browser for a Git repository backend
#[derive(Debug, Parser)]
#[command(name = "grove", version, about)]
pub struct Cli {
    /// Location to open, e.g. /tree/main/src or /blob/main/README.md
    #[arg(default_value = "/")]
    pub route: String,

    /// Backend API base URL
    #[arg(long, env = "GROVE_API_URL")]
    pub api_url: Option<String>,

    /// Path of a TOML config file
    #[arg(long, env = "GROVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Where to write logs
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Contents of the TOML config file
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub log_file: PathBuf,
    pub start: Route,
}

impl Config {
    /// Resolve settings from parsed arguments, reading the config file if one is given
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    fn merge(cli: Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let api_url = cli
            .api_url
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            log_file: cli
                .log_file
                .or(file.log_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            start: Route::parse(&cli.route)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RepositoryLocation;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["grove"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::merge(cli(&[]), FileConfig::default()).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(config.start, Route::Root);
    }

    #[test]
    fn test_start_route_argument() {
        let config = Config::merge(cli(&["/blob/main/src/app.ts"]), FileConfig::default()).unwrap();
        assert_eq!(
            config.start,
            Route::Blob(RepositoryLocation::from_route_params(
                "main",
                Some("src/app.ts")
            ))
        );
    }

    #[test]
    fn test_invalid_start_route() {
        let err = Config::merge(cli(&["/commits/main"]), FileConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Route(RouteError::Unsupported(_))));
    }

    #[test]
    fn test_file_values_used_when_cli_silent() {
        let file = config_file("api_url = \"http://repo.local/api/\"\nlog_file = \"/tmp/g.log\"\n");
        let config = Config::from_cli(cli(&[
            "--config",
            file.path().to_str().unwrap(),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "http://repo.local/api");
        assert_eq!(config.log_file, PathBuf::from("/tmp/g.log"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = config_file("api_url = \"http://repo.local/api\"\n");
        let config = Config::from_cli(cli(&[
            "--config",
            file.path().to_str().unwrap(),
            "--api-url",
            "http://other:8080/api",
        ]))
        .unwrap();
        assert_eq!(config.api_url, "http://other:8080/api");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = config_file("api_url = \"x\"\ncolour = true\n");
        let err = FileConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
