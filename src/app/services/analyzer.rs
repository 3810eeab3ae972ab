//! Analysis pipeline orchestration
//!
//! Drives one full run: read the sales file, validate and fold each row,
//! rank the per-product revenue, and collect run statistics. Data flows
//! strictly one direction and no state survives past the run.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::Result;
use crate::app::models::{RankedProduct, RawRecord, Rejection};
use crate::app::services::aggregator::{RunningTotals, rank_products};
use crate::app::services::csv_reader::read_sales_file;
use crate::app::services::record_validator::RecordValidator;
use crate::config::AnalysisConfig;

/// Sales analyzer driving the validation and aggregation pipeline
///
/// # Example
///
/// ```rust
/// use sales_analyzer::app::services::analyzer::SalesAnalyzer;
/// use sales_analyzer::config::AnalysisConfig;
///
/// # fn example() -> sales_analyzer::Result<()> {
/// let config = AnalysisConfig::default().with_input_path("sales.csv");
/// let outcome = SalesAnalyzer::new(config).analyze()?;
///
/// println!("Total revenue: {}", outcome.report.total_revenue);
/// println!("{}", outcome.stats.summary());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SalesAnalyzer {
    config: AnalysisConfig,
}

impl SalesAnalyzer {
    /// Create an analyzer for the given configuration
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// The configuration this analyzer runs under
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the full pipeline against the configured input file
    ///
    /// Structural input problems (missing file, malformed CSV, missing
    /// required columns) are run-fatal; row-level validation failures are
    /// logged as warnings and excluded from every aggregate.
    pub fn analyze(&self) -> Result<AnalysisOutcome> {
        let rows = read_sales_file(&self.config.input_path, self.config.profile)?;
        Ok(self.analyze_records(rows))
    }

    /// Run validation, aggregation, and ranking over materialized rows
    ///
    /// Split out from [`analyze`](Self::analyze) so tests and embedders
    /// can drive the pipeline without a file on disk.
    pub fn analyze_records(&self, rows: Vec<RawRecord>) -> AnalysisOutcome {
        let validator = RecordValidator::new(self.config.policy);
        let mut totals = RunningTotals::new();
        let mut stats = AnalysisStats::new();
        stats.rows_read = rows.len();

        if rows.is_empty() {
            warn!("No sales records found in input; no valid data to analyze");
        }

        for raw in &rows {
            match validator.validate(raw) {
                Ok(record) => {
                    totals.fold(&record);
                    stats.accepted += 1;
                }
                Err(rejection) => {
                    warn!("Skipping {}", rejection);
                    stats.add_rejection(rejection);
                }
            }
        }

        let top_products = rank_products(totals.product_revenue(), self.config.top_n);

        info!(
            "Analysis complete: {} rows -> {} valid orders, {} distinct products",
            stats.rows_read,
            stats.accepted,
            totals.distinct_product_count()
        );

        AnalysisOutcome {
            report: AnalysisReport {
                total_revenue: totals.total_revenue(),
                average_order_value: totals.average_order_value(),
                top_products,
            },
            stats,
        }
    }
}

/// The three computed outputs handed to the report renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub total_revenue: Decimal,
    pub average_order_value: Decimal,
    /// Ranking ordered by revenue descending, product name ascending on
    /// ties, at most the configured top-N entries
    pub top_products: Vec<RankedProduct>,
}

/// Statistics for one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisStats {
    /// Number of data rows read from the input
    pub rows_read: usize,
    /// Number of rows that passed validation and were aggregated
    pub accepted: usize,
    /// Number of rows rejected by a validation rule
    pub rejected: usize,
    /// Per-row rejection records, in input order
    pub rejections: Vec<Rejection>,
}

impl AnalysisStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one rejected row
    pub fn add_rejection(&mut self, rejection: Rejection) {
        self.rejected += 1;
        self.rejections.push(rejection);
    }

    /// Share of rows that passed validation, as a percentage
    pub fn acceptance_rate(&self) -> f64 {
        if self.rows_read == 0 {
            100.0
        } else {
            (self.accepted as f64 / self.rows_read as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Run summary: {} rows read, {} accepted, {} rejected ({:.1}% accepted)",
            self.rows_read,
            self.accepted,
            self.rejected,
            self.acceptance_rate()
        )
    }
}

/// Result of one analysis run: report values plus run statistics
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub report: AnalysisReport,
    pub stats: AnalysisStats,
}
