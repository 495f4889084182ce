//! disk-doc CLI entry point
//!
//! Storage device health checks against captured diagnostic reports.

use anyhow::{Context, Result};
use clap::Parser;
use disk_doc::checks::get_checkpoints_by_family;
use disk_doc::cli::args::{Args, CheckArgs, Command};
use disk_doc::cli::output::{format_error, get_formatter};
use disk_doc::commands::{filename, info, notes};
use disk_doc::version::get_build_info;
use disk_doc::{run_check, CheckConfig, CheckFamily};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.debug);

    match args.command {
        Command::Check(check) => run_checks(&check),
        Command::Info(report) => run_tool(&report.report, "show device info", info::run),
        Command::Notes(report) => run_tool(&report.report, "show report notes", notes::run),
        Command::Filename(report) => {
            run_tool(&report.report, "suggest report filename", filename::run)
        }
        Command::List => {
            print_checkpoint_list();
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("{}", get_build_info());
            ExitCode::SUCCESS
        }
    }
}

/// Initialize tracing/logging based on CLI flags.
fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}

fn run_checks(args: &CheckArgs) -> ExitCode {
    let config = CheckConfig::from_args(args);

    let verdict = match run_check(&config) {
        Ok(verdict) => verdict,
        Err(e) => {
            println!("{}", format_error(&e));
            return ExitCode::from(1);
        }
    };

    let formatter = get_formatter(config.format);
    println!("{}", formatter.format(&verdict));

    ExitCode::from(verdict.exit_code())
}

fn run_tool<F>(path: &Path, action: &str, tool: F) -> ExitCode
where
    F: FnOnce(&Path) -> Result<Vec<String>, disk_doc::DiskDocError>,
{
    let lines = tool(path).with_context(|| format!("{} from {}", action, path.display()));
    print_lines(lines)
}

fn print_lines(lines: Result<Vec<String>>) -> ExitCode {
    match lines {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("ERROR: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn print_checkpoint_list() {
    println!("Available checkpoints:");

    for family in [CheckFamily::Sat, CheckFamily::Nvme, CheckFamily::Common] {
        println!();
        println!("{} CHECKPOINTS:", family.to_string().to_uppercase());

        let checkpoints = get_checkpoints_by_family(family);
        if checkpoints.is_empty() {
            println!("  (none)");
        }
        for checkpoint in checkpoints {
            println!(
                "  {:<8} {:<28} {}",
                checkpoint.id, checkpoint.name, checkpoint.description
            );
        }
    }
}
