// SPDX-License-Identifier: MIT
//! Run configuration for the bigzip tool

use std::path::PathBuf;

use crate::error::{BigzipError, Result};
use crate::format::FillMode;

/// Default size multiplier when none is given
pub const DEFAULT_FACTOR: f64 = 5.0;

/// Settings for one inflate or restore run
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    /// Explicit output path; derived from the input when `None`
    pub output: Option<PathBuf>,
    pub factor: f64,
    pub mode: String,
    /// Restore the original instead of inflating
    pub restore: bool,
    /// Overwrite an existing output instead of picking a unique name
    pub force: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            factor: DEFAULT_FACTOR,
            mode: FillMode::Repeat.to_string(),
            restore: false,
            force: false,
        }
    }
}

impl Config {
    pub fn inflate(input: impl Into<PathBuf>, factor: f64, mode: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            factor,
            mode: mode.into(),
            ..Self::default()
        }
    }

    pub fn restore(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            restore: true,
            ..Self::default()
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Validate configuration
    ///
    /// Runs before any file is touched. Factor and mode only matter when
    /// inflating; returns the parsed fill mode.
    pub fn validate(&self) -> Result<FillMode> {
        if self.input.as_os_str().is_empty() {
            return Err(BigzipError::InvalidConfig(
                "an input path is required".to_string(),
            ));
        }

        if self.restore {
            return Ok(FillMode::default());
        }

        if !self.factor.is_finite() || self.factor < 1.0 {
            return Err(BigzipError::InvalidConfig(format!(
                "factor must be a finite number >= 1.0, got {}",
                self.factor
            )));
        }

        self.mode.parse()
    }

    /// Requested container size for an input of `input_len` bytes
    pub fn desired_total_size(&self, input_len: u64) -> u64 {
        // float to int casts saturate
        (input_len as f64 * self.factor).ceil() as u64
    }
}
