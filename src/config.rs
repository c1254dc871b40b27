use std::{path::PathBuf, str::FromStr};

use anyhow::{ensure, Context as _, Result};

use crate::{
    gradient::GradientConfig,
    output::DEFAULT_QUALITY,
};


/// 実行時の設定. 既定値は元のサンプルと同じ 256x256 の `output.jpeg`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub gradient: GradientConfig,
    pub output_path: PathBuf,
    pub quality: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gradient: GradientConfig::default(),
            output_path: PathBuf::from("output.jpeg"),
            quality: DEFAULT_QUALITY,
        }
    }
}

impl Config {
    /// `.env` があれば読み込んでから `GRADIENT_*` 環境変数で既定値を上書きする.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(width) = parse_var(&lookup, "GRADIENT_WIDTH")? {
            config.gradient.width = width;
        }
        if let Some(height) = parse_var(&lookup, "GRADIENT_HEIGHT")? {
            config.gradient.height = height;
        }
        if let Some(blue) = parse_var(&lookup, "GRADIENT_BLUE")? {
            config.gradient.blue = blue;
        }
        if let Some(row_order) = parse_var(&lookup, "GRADIENT_ROW_ORDER")? {
            config.gradient.row_order = row_order;
        }
        if let Some(path) = lookup("GRADIENT_OUTPUT") {
            config.output_path = PathBuf::from(path);
        }
        if let Some(quality) = parse_var(&lookup, "GRADIENT_QUALITY")? {
            ensure!(
                (1..=100).contains(&quality),
                "GRADIENT_QUALITY must be in 1..=100, but got {}",
                quality
            );
            config.quality = quality;
        }

        Ok(config)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = match lookup(key) {
        Some(raw) => raw,
        None => return Ok(None),
    };

    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e| anyhow::anyhow!("{}", e))
        .with_context(|| format!("failed to parse {}='{}'", key, raw))
}
