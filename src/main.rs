use clap::Parser;
use olympedia_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the selected command
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            // Success - the command has already reported its results
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Olympedia Processor - Olympic Results Warehouse Builder");
    println!("=======================================================");
    println!();
    println!("Normalize historical Olympic athlete and result CSV extracts and rebuild");
    println!("them as a star-schema warehouse with read-only aggregate views.");
    println!();
    println!("USAGE:");
    println!("    olympedia-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Run the full pipeline and export the warehouse (main command)");
    println!("    validate    Check integrity of a previously exported warehouse");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Rebuild the warehouse from the default data directory:");
    println!("    olympedia-processor process");
    println!();
    println!("    # Rebuild from explicit paths as Parquet:");
    println!("    olympedia-processor process --data-dir /path/to/staged \\");
    println!("                                --output /path/to/warehouse --format parquet");
    println!();
    println!("    # Check a previously exported warehouse:");
    println!("    olympedia-processor validate --warehouse /path/to/warehouse");
    println!();
    println!("For detailed help on any command, use:");
    println!("    olympedia-processor <COMMAND> --help");
}
