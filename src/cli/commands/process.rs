//! Process command implementation
//!
//! Runs the full pipeline: configuration layering, input discovery,
//! normalization, dimensional rebuild, fact resolution, warehouse export,
//! and the final report.

use super::shared::{print_final_report, setup_logging};
use crate::app::services::pipeline::PipelineOrchestrator;
use crate::app::services::staging_loader::discover_inputs;
use crate::cli::args::ProcessArgs;
use crate::constants::{table_filename, tables};
use crate::Result;
use tracing::{debug, info};

/// Process command runner
pub async fn run_process(args: ProcessArgs) -> Result<()> {
    setup_logging(args.log_level())?;

    info!("Starting Olympedia processor");
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config();
    config.validate()?;

    if args.dry_run {
        return run_dry_run(&config);
    }

    let orchestrator = PipelineOrchestrator::new(config);
    let report = orchestrator.run(args.show_progress()).await?;

    if !args.quiet {
        print_final_report(&report);
    }

    Ok(())
}

/// Show what a run would read and write without touching the warehouse
fn run_dry_run(config: &crate::config::PipelineConfig) -> Result<()> {
    info!("Performing dry run - no files will be written");

    let discovered = discover_inputs(&config.data_dir)?;
    let inputs = [
        ("athlete biography", &discovered.athlete_bio),
        ("geocoordinate enrichment", &discovered.athlete_geo),
        ("NOC region reference", &discovered.noc_region),
        ("population reference", &discovered.population),
        ("competition results", &discovered.result),
    ];

    for (label, path) in inputs {
        match path {
            Some(path) => info!("Would read {}: {}", label, path.display()),
            None => info!("Would skip {}: no matching file", label),
        }
    }

    let extension = config.export.format.extension();
    for table in [
        tables::DIM_ATHLETES,
        tables::DIM_GAMES,
        tables::DIM_EVENTS,
        tables::DIM_COUNTRIES,
        tables::FACT_RESULTS,
    ] {
        info!(
            "Would create: {}",
            config.output_dir.join(table_filename(table, extension)).display()
        );
    }

    info!(
        "Dry run complete: {} of 5 inputs found",
        discovered.found_count()
    );
    Ok(())
}
