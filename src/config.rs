use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_ENV: &str = "ROSTER_CONFIG_FILE";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaseUrl(pub String);

impl Default for BaseUrl {
    fn default() -> Self {
        Self("http://127.0.0.1:5000".to_owned())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct TimeoutSecs(pub u64);

impl Default for TimeoutSecs {
    fn default() -> Self {
        Self(10)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: BaseUrl,

    #[serde(default)]
    pub timeout_secs: TimeoutSecs,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.0)
    }
}

impl AppConfig {
    pub fn try_read(file_path: &Path) -> anyhow::Result<AppConfig> {
        let json = &std::fs::read_to_string(file_path)
            .with_context(|| format!("Reading config file {file_path:?}"))?;
        serde_json::from_str::<AppConfig>(json)
            .with_context(|| format!("Parsing JSON config file {file_path:?}"))
    }

    /// The file given on the command line, else the one named by
    /// `ROSTER_CONFIG_FILE`, else the defaults.
    pub fn resolve(cli_path: Option<&Path>) -> anyhow::Result<AppConfig> {
        let file_path = cli_path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from));

        match file_path {
            Some(file_path) => Self::try_read(&file_path),
            None => Ok(AppConfig::default()),
        }
    }
}
