//! Shared components for CLI commands
//!
//! Logging setup and the colored final report used by both commands.

use crate::app::services::pipeline::PipelineReport;
use crate::Result;
use colored::Colorize;
use indicatif::HumanDuration;
use tracing::debug;

/// Set up structured logging with the given level
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("olympedia_processor={}", log_level)));

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

/// Print the colored end-of-run report for a completed pipeline
pub fn print_final_report(report: &PipelineReport) {
    println!();
    println!("{}", "Pipeline run complete".green().bold());
    println!("{}", "=====================".green());
    println!(
        "  Staging:        {} rows from {} files ({})",
        report.staging.total_rows(),
        report.staging.files_loaded,
        HumanDuration(report.staging.elapsed)
    );
    println!(
        "  Normalization:  {} athletes ({:.1}% dated), {} results ({:.1}% ranked) ({})",
        report.normalization.athletes_in,
        report.normalization.birth_date_rate(),
        report.normalization.results_in,
        report.normalization.rank_rate(),
        HumanDuration(report.normalization.elapsed)
    );
    println!(
        "  Dimensions:     {} rows across 4 dimensions ({})",
        report.dimensions.total_rows(),
        HumanDuration(report.dimensions.elapsed)
    );
    println!(
        "  Facts:          {} rows, {:.1}% mandatory keys resolved ({})",
        report.facts.facts_emitted,
        report.facts.mandatory_resolution_rate(),
        HumanDuration(report.facts.elapsed)
    );
    println!(
        "  Export:         {} tables, {} views ({})",
        report.export.tables_written,
        report.export.views_written,
        HumanDuration(report.export.elapsed)
    );
    println!(
        "  Total:          {}",
        HumanDuration(report.total_elapsed).to_string().bold()
    );

    if report.facts.mandatory_anomalies() > 0 {
        println!();
        println!(
            "{} {} fact rows have unresolved mandatory relationships",
            "warning:".yellow().bold(),
            report.facts.mandatory_anomalies()
        );
    }
}
