//! Configuration management and validation.
//!
//! Provides the configuration structure passed explicitly into the
//! analysis pipeline entry point. Defaults are documented values on
//! [`AnalysisConfig::default`], not process-wide state, so tests can run
//! the pipeline against arbitrary inputs without environment mutation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::app::models::{CoercionPolicy, InputProfile};
use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_TOP_N};
use crate::{Error, Result};

/// Configuration for one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Path to the sales CSV file
    pub input_path: PathBuf,

    /// Number of top products to report
    pub top_n: usize,

    /// Column-naming profile of the input file
    pub profile: InputProfile,

    /// Policy applied when numeric text fails to parse
    pub policy: CoercionPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            top_n: DEFAULT_TOP_N,
            profile: InputProfile::Standard,
            policy: CoercionPolicy::Strict,
        }
    }
}

impl AnalysisConfig {
    /// Create configuration with a custom input path
    pub fn with_input_path(mut self, input_path: impl Into<PathBuf>) -> Self {
        self.input_path = input_path.into();
        self
    }

    /// Create configuration with a custom top-N count
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Create configuration with a custom input profile
    pub fn with_profile(mut self, profile: InputProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Create configuration with a custom coercion policy
    pub fn with_policy(mut self, policy: CoercionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(Error::configuration(
                "Top-N count must be greater than 0".to_string(),
            ));
        }

        if self.input_path.as_os_str().is_empty() {
            return Err(Error::configuration(
                "Input path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
