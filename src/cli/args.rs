//! Command-line argument definitions for the sales analyzer
//!
//! This module defines the CLI interface using the clap derive API. The
//! arguments map onto an explicit [`AnalysisConfig`] handed to the
//! pipeline; nothing here mutates process-wide state.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::app::models::{CoercionPolicy, InputProfile};
use crate::config::AnalysisConfig;
use crate::constants::DEFAULT_TOP_N;
use crate::{Error, Result};

/// CLI arguments for the sales analyzer
///
/// Reads a tabular sales file and reports total revenue, average order
/// value, and the top-N products by revenue.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sales-analyzer",
    version,
    about = "Analyze a sales CSV file: total revenue, average order value, top products",
    long_about = "A single-pass batch analysis tool for tabular sales data. Reads one CSV \
                  file of sales records, validates each row against the inclusion rules, \
                  and reports total revenue, average order value, and the top-N products \
                  ranked by accumulated revenue. Row-level problems are warned about and \
                  skipped; structural input problems abort the run."
)]
pub struct Args {
    /// Path to the sales CSV file
    ///
    /// Defaults to ./sales.csv when not specified.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Path to the sales CSV file"
    )]
    pub input_path: Option<PathBuf>,

    /// Number of top products to report
    #[arg(
        short = 'n',
        long = "top-n",
        value_name = "COUNT",
        default_value_t = DEFAULT_TOP_N,
        help = "Number of top products to report"
    )]
    pub top_n: usize,

    /// Column-naming profile of the input file
    ///
    /// `standard` expects product_name,quantity,unit_price and checks the
    /// header for all three columns before processing any row; `compact`
    /// expects product,quantity,price.
    #[arg(
        long = "profile",
        value_enum,
        default_value = "standard",
        help = "Column-naming profile of the input file"
    )]
    pub profile: ProfileChoice,

    /// Policy applied when numeric text fails to parse
    ///
    /// `strict` rejects the row with a warning naming the field; `lenient`
    /// silently coerces the value to zero, trading visibility for
    /// robustness.
    #[arg(
        long = "policy",
        value_enum,
        default_value = "strict",
        help = "Coercion policy for malformed numeric text"
    )]
    pub policy: PolicyChoice,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Input profile options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProfileChoice {
    /// Columns product_name, quantity, unit_price
    Standard,
    /// Columns product, quantity, price
    Compact,
}

impl From<ProfileChoice> for InputProfile {
    fn from(choice: ProfileChoice) -> Self {
        match choice {
            ProfileChoice::Standard => InputProfile::Standard,
            ProfileChoice::Compact => InputProfile::Compact,
        }
    }
}

/// Coercion policy options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyChoice {
    /// Reject rows whose numeric text fails to parse
    Strict,
    /// Coerce unparseable numeric text to zero
    Lenient,
}

impl From<PolicyChoice> for CoercionPolicy {
    fn from(choice: PolicyChoice) -> Self {
        match choice {
            PolicyChoice::Strict => CoercionPolicy::Strict,
            PolicyChoice::Lenient => CoercionPolicy::Lenient,
        }
    }
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(Error::configuration(
                "Top-N count must be greater than 0".to_string(),
            ));
        }

        if let Some(input_path) = &self.input_path {
            if input_path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is a directory, not a file: {}",
                    input_path.display()
                )));
            }
        }

        Ok(())
    }

    /// Build the analysis configuration from the parsed arguments
    pub fn to_config(&self) -> AnalysisConfig {
        let mut config = AnalysisConfig::default()
            .with_top_n(self.top_n)
            .with_profile(self.profile.into())
            .with_policy(self.policy.into());

        if let Some(input_path) = &self.input_path {
            config = config.with_input_path(input_path.clone());
        }

        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_INPUT_FILE;

    fn default_args() -> Args {
        Args {
            input_path: None,
            top_n: DEFAULT_TOP_N,
            profile: ProfileChoice::Standard,
            policy: PolicyChoice::Strict,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_to_config_defaults() {
        let config = default_args().to_config();

        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT_FILE));
        assert_eq!(config.top_n, DEFAULT_TOP_N);
        assert_eq!(config.profile, InputProfile::Standard);
        assert_eq!(config.policy, CoercionPolicy::Strict);
    }

    #[test]
    fn test_to_config_applies_overrides() {
        let mut args = default_args();
        args.input_path = Some(PathBuf::from("q3-orders.csv"));
        args.top_n = 10;
        args.profile = ProfileChoice::Compact;
        args.policy = PolicyChoice::Lenient;

        let config = args.to_config();

        assert_eq!(config.input_path, PathBuf::from("q3-orders.csv"));
        assert_eq!(config.top_n, 10);
        assert_eq!(config.profile, InputProfile::Compact);
        assert_eq!(config.policy, CoercionPolicy::Lenient);
    }

    #[test]
    fn test_validate_rejects_zero_top_n() {
        let mut args = default_args();
        args.top_n = 0;

        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_directory_input() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut args = default_args();
        args.input_path = Some(temp_dir.path().to_path_buf());

        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = default_args();

        // Default level
        assert_eq!(args.get_log_level(), "warn");

        // Verbose levels
        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        // Quiet mode
        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from([
            "sales-analyzer",
            "--input",
            "orders.csv",
            "--top-n",
            "3",
            "--profile",
            "compact",
            "--policy",
            "lenient",
        ]);

        assert_eq!(args.input_path, Some(PathBuf::from("orders.csv")));
        assert_eq!(args.top_n, 3);
        assert!(matches!(args.profile, ProfileChoice::Compact));
        assert!(matches!(args.policy, PolicyChoice::Lenient));
    }
}
