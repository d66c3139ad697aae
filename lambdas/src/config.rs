//! Optional demo configuration (TOML).
//!
//! Without a config file the demo runs on its built-in literals and prints
//! the canonical transcript.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};

use crate::core::count::NUMBERS;

/// Inputs to the demonstration steps. Missing fields take the built-in values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    /// Sequence scanned by the counting step.
    pub numbers: Vec<i32>,

    pub sum: SumOperands,

    pub capture: CaptureConfig,
}

/// Arguments passed to the two-parameter closure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SumOperands {
    pub lhs: i32,
    pub rhs: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CaptureConfig {
    /// Value of `x` while both capture closures are constructed.
    pub initial: i32,
    /// Value assigned to `x` before either closure is invoked.
    pub reassigned: i32,
}

impl Default for SumOperands {
    fn default() -> Self {
        Self { lhs: 1, rhs: 2 }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            initial: 1,
            reassigned: 13,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            numbers: NUMBERS.to_vec(),
            sum: SumOperands::default(),
            capture: CaptureConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<()> {
        if self.numbers.is_empty() {
            return Err(anyhow!("numbers must be a non-empty array"));
        }
        if self.sum.lhs.checked_add(self.sum.rhs).is_none() {
            return Err(anyhow!(
                "sum.lhs + sum.rhs overflows i32 ({} + {})",
                self.sum.lhs,
                self.sum.rhs
            ));
        }
        if self.capture.initial == self.capture.reassigned {
            return Err(anyhow!(
                "capture.reassigned must differ from capture.initial (both {})",
                self.capture.initial
            ));
        }
        Ok(())
    }

    /// Pretty TOML with trailing newline.
    pub fn to_toml(&self) -> Result<String> {
        let mut buf = toml::to_string_pretty(self).context("serialize config toml")?;
        if !buf.ends_with('\n') {
            buf.push('\n');
        }
        Ok(buf)
    }
}

/// Load config from a TOML file.
///
/// A missing file is an error.
pub fn load_config(path: &Path) -> Result<DemoConfig> {
    let display = path.display();
    if !path.exists() {
        bail!("config {display} not found");
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {display}"))?;
    let cfg: DemoConfig =
        toml::from_str(&contents).with_context(|| format!("parse {display}"))?;
    cfg.validate().with_context(|| format!("validate {display}"))?;
    Ok(cfg)
}
