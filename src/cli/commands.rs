//! Command execution for the sales analyzer CLI
//!
//! This module contains the run orchestration and logging setup: parse
//! and validate arguments, build the configuration, drive the analysis
//! pipeline, and print the report. The report goes to stdout; all
//! diagnostics go to stderr via tracing.

use tracing::{debug, info};

use crate::Result;
use crate::app::services::analyzer::{AnalysisStats, SalesAnalyzer};
use crate::cli::args::Args;
use crate::cli::report;

/// Main command runner for the sales analyzer
///
/// Orchestrates the entire workflow:
/// 1. Set up logging from the verbosity flags
/// 2. Validate arguments and build the analysis configuration
/// 3. Run the validation and aggregation pipeline
/// 4. Print the report and log a run summary
pub fn run(args: Args) -> Result<AnalysisStats> {
    setup_logging(&args)?;

    info!("Starting sales analyzer");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = args.to_config();
    config.validate()?;
    debug!("Analysis configuration: {:?}", config);

    let analyzer = SalesAnalyzer::new(config.clone());
    let outcome = analyzer.analyze()?;

    report::print_report(&outcome.report, config.profile);

    info!("{}", outcome.stats.summary());

    Ok(outcome.stats)
}

/// Set up structured logging to stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sales_analyzer={}", log_level)));

    // Standard logging with timestamps, kept off stdout so the report
    // stream stays clean
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
