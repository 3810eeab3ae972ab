//! Report assembly and rendering
//!
//! Consumes the three computed outputs (total revenue, average order
//! value, ranked products) and renders the console report. Rendering is
//! pure string assembly so repeated runs over the same input produce
//! byte-identical output; [`print_report`] only adds color accents when
//! writing to a terminal.

use colored::Colorize;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::app::models::InputProfile;
use crate::app::services::analyzer::AnalysisReport;

/// Width of the rule lines framing the standard report
const RULE_WIDTH: usize = 60;

/// Title line of the standard report
const REPORT_TITLE: &str = "SALES ANALYSIS REPORT";

/// Format a decimal amount as a currency string
///
/// Leading `$`, thousands-grouped integer part, exactly two decimals,
/// midpoint rounded away from zero.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

/// Insert `,` separators every three digits from the right
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let count = digits.len();

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (count - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Render the report for the given profile
pub fn render_report(report: &AnalysisReport, profile: InputProfile) -> String {
    match profile {
        InputProfile::Standard => render_standard(report),
        InputProfile::Compact => render_compact(report),
    }
}

/// Boxed report layout used with the standard profile
fn render_standard(report: &AnalysisReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&rule);
    out.push_str("\n\n");

    out.push_str(&format!(
        "Total Revenue: {}\n",
        format_currency(report.total_revenue)
    ));
    out.push_str(&format!(
        "Average Order Value: {}\n\n",
        format_currency(report.average_order_value)
    ));

    out.push_str(&format!(
        "Top {} Products by Revenue:\n",
        report.top_products.len()
    ));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    if report.top_products.is_empty() {
        out.push_str("No valid product data found.\n");
    } else {
        for (index, entry) in report.top_products.iter().enumerate() {
            out.push_str(&format!(
                "{}. {:<40} {:>15}\n",
                index + 1,
                entry.product,
                format_currency(entry.revenue)
            ));
        }
    }

    out.push_str(&rule);
    out.push('\n');

    out
}

/// Plain list layout used with the compact profile
fn render_compact(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Total Revenue: {}\n",
        format_currency(report.total_revenue)
    ));
    out.push_str(&format!(
        "Average Order Value: {}\n\n",
        format_currency(report.average_order_value)
    ));

    out.push_str(&format!(
        "Top {} Products by Sales:\n",
        report.top_products.len()
    ));

    if report.top_products.is_empty() {
        out.push_str("No valid product data found.\n");
    } else {
        for entry in &report.top_products {
            out.push_str(&format!(
                "- {}: {}\n",
                entry.product,
                format_currency(entry.revenue)
            ));
        }
    }

    out
}

/// Print the rendered report to stdout with color accents on the title
pub fn print_report(report: &AnalysisReport, profile: InputProfile) {
    for line in render_report(report, profile).lines() {
        if line == REPORT_TITLE {
            println!("{}", line.bright_green().bold());
        } else {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::app::models::RankedProduct;

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            total_revenue: dec!(80.00),
            average_order_value: dec!(26.666666),
            top_products: vec![
                RankedProduct {
                    product: "Gadget".to_string(),
                    revenue: dec!(50.00),
                },
                RankedProduct {
                    product: "Widget".to_string(),
                    revenue: dec!(50.00),
                },
            ],
        }
    }

    fn empty_report() -> AnalysisReport {
        AnalysisReport {
            total_revenue: Decimal::ZERO,
            average_order_value: Decimal::ZERO,
            top_products: Vec::new(),
        }
    }

    #[test]
    fn test_format_currency_basic() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(5)), "$5.00");
        assert_eq!(format_currency(dec!(26.666666)), "$26.67");
        assert_eq!(format_currency(dec!(50.00)), "$50.00");
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(1234.5)), "$1,234.50");
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_currency(dec!(999)), "$999.00");
        assert_eq!(format_currency(dec!(1000)), "$1,000.00");
    }

    #[test]
    fn test_format_currency_rounds_midpoint_away_from_zero() {
        assert_eq!(format_currency(dec!(2.005)), "$2.01");
        assert_eq!(format_currency(dec!(2.015)), "$2.02");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-1234.5)), "-$1,234.50");
    }

    #[test]
    fn test_standard_report_layout() {
        let rendered = render_report(&sample_report(), InputProfile::Standard);

        assert!(rendered.contains("SALES ANALYSIS REPORT"));
        assert!(rendered.contains("Total Revenue: $80.00"));
        assert!(rendered.contains("Average Order Value: $26.67"));
        assert!(rendered.contains("Top 2 Products by Revenue:"));

        // Ranked lines: `rank. product  $amount`, tie broken by name
        let gadget_line = rendered
            .lines()
            .find(|line| line.starts_with("1."))
            .unwrap();
        assert!(gadget_line.contains("Gadget"));
        assert!(gadget_line.ends_with("$50.00"));
        let widget_line = rendered
            .lines()
            .find(|line| line.starts_with("2."))
            .unwrap();
        assert!(widget_line.contains("Widget"));
    }

    #[test]
    fn test_compact_report_layout() {
        let rendered = render_report(&sample_report(), InputProfile::Compact);

        assert!(rendered.contains("Total Revenue: $80.00"));
        assert!(rendered.contains("Top 2 Products by Sales:"));
        assert!(rendered.contains("- Gadget: $50.00"));
        assert!(rendered.contains("- Widget: $50.00"));
        assert!(!rendered.contains("SALES ANALYSIS REPORT"));
    }

    #[test]
    fn test_empty_report_renders_placeholder() {
        for profile in [InputProfile::Standard, InputProfile::Compact] {
            let rendered = render_report(&empty_report(), profile);

            assert!(rendered.contains("Total Revenue: $0.00"));
            assert!(rendered.contains("Average Order Value: $0.00"));
            assert!(rendered.contains("No valid product data found."));
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let report = sample_report();

        let first = render_report(&report, InputProfile::Standard);
        let second = render_report(&report, InputProfile::Standard);

        assert_eq!(first, second);
    }
}
