//! Configuration loading and parsing

use anyhow::{Context, Result};
use hotel_bookings::{AnalysisConfig, ChartConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default = "default_dataset")]
    pub dataset: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
        }
    }
}

fn default_dataset() -> PathBuf {
    PathBuf::from("dataset/hotel_bookings.csv")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_charts_dir")]
    pub charts_dir: PathBuf,
    #[serde(default = "default_render_charts")]
    pub render_charts: bool,
    /// Write the report here instead of stdout
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub chart: ChartConfig,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            charts_dir: default_charts_dir(),
            render_charts: default_render_charts(),
            file: None,
            chart: ChartConfig::default(),
        }
    }
}

fn default_charts_dir() -> PathBuf {
    PathBuf::from("charts")
}

fn default_render_charts() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
