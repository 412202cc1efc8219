//! `perf.toml` loading
//!
//! Every key is optional. Missing keys fall back to the values the perf
//! pipeline has always used, so an absent file behaves like an empty one.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TOOLCHAIN: &str = "stable";
pub const QUINN_GIT: &str = "https://github.com/quinn-rs/quinn";
pub const QUINN_REV: &str = "0.10.2";
pub const QUINN_ROOT: &str = "target/perf/quinn";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerfConfig {
    /// Rustup toolchain used for the quinn install and the qns build.
    pub toolchain: String,
    /// Extra RUSTFLAGS appended after `-g`.
    pub rustflags: String,
    pub quinn: QuinnConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuinnConfig {
    pub git: String,
    pub rev: String,
    /// Install root, relative to the repo root unless absolute.
    pub root: PathBuf,
}

impl Default for PerfConfig {
    fn default() -> Self {
        Self {
            toolchain: DEFAULT_TOOLCHAIN.to_string(),
            rustflags: String::new(),
            quinn: QuinnConfig::default(),
        }
    }
}

impl Default for QuinnConfig {
    fn default() -> Self {
        Self {
            git: QUINN_GIT.to_string(),
            rev: QUINN_REV.to_string(),
            root: PathBuf::from(QUINN_ROOT),
        }
    }
}

/// Command-line overrides; `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub toolchain: Option<String>,
    pub quinn_rev: Option<String>,
    pub rustflags: Option<String>,
}

impl PerfConfig {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Parsing perf config")
    }

    /// Loads `path`. When `required` is false a missing file yields defaults.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if !path.is_file() {
            if required {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            tracing::debug!(path = %path.display(), "no perf config, using defaults");
            return Ok(Self::default());
        }
        let text =
            fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn apply(mut self, o: Overrides) -> Self {
        if let Some(t) = o.toolchain {
            self.toolchain = t;
        }
        if let Some(r) = o.quinn_rev {
            self.quinn.rev = r;
        }
        if let Some(f) = o.rustflags {
            self.rustflags = f;
        }
        self
    }
}
