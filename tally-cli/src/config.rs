use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use tally_ingest::IngestOptions;

use crate::state::{ensure_tally_home, tally_home};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ocr: OcrSection,
    pub output: OutputSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrSection {
    /// Tesseract language code
    pub language: String,
    /// Directory with `*.traineddata` files (Tesseract's default if unset)
    pub tessdata_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
    /// File name used by `parse --output` when no path is given
    pub csv_file_name: String,
    pub show_raw_text: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Used when RUST_LOG is not set
    pub level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl Default for OcrSection {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            tessdata_dir: None,
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            csv_file_name: "extracted_transactions.csv".to_string(),
            show_raw_text: false,
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            ocr_language: self.ocr.language.clone(),
            tessdata_dir: self.ocr.tessdata_dir.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(tally_home()?.join("config.toml"))
}

/// Load `config.toml`, or defaults if it does not exist yet.
pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config) -> Result<()> {
    ensure_tally_home()?;
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
