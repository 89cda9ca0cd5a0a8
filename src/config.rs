use crate::core::units::pmp::OverflowPolicy;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub check: CheckConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Reads a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse config '{}'", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            overflow: OverflowPolicy::Error,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("invalid report format '{}' (expected text or json)", s)),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,

    #[serde(default = "default_trace")]
    pub trace: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            trace: default_trace(),
        }
    }
}

fn default_trace() -> bool {
    true
}
