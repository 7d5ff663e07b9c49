//! SeqLaunch CLI Entry Point
//!
//! Exposes each workflow operation as a subcommand so an external
//! delegation framework (or a human) can invoke them independently.
//!
//! # Usage
//!
//! ```bash
//! # Submit a pipeline run
//! seqlaunch launch --globus-root /mnt/store --params /runs/s1/params.yaml \
//!     --work-dir /runs/s1/work --compute-env 5xAbCdEfGh
//!
//! # Poll a run until it finishes
//! seqlaunch monitor wf-123
//!
//! # Poll with a 10 minute interval and a 24 hour limit
//! seqlaunch monitor wf-123 --interval 600 --timeout 86400
//! ```

use std::process::ExitCode;
use std::time::Duration;

use colored::Colorize;
use log::{error, info};

use seqlaunch::api::{resolve_token, SeqeraClient};
use seqlaunch::config::LaunchSettings;
use seqlaunch::workflow::{launch_workflow, monitor_workflow, MonitorOptions};
use seqlaunch::{APP_NAME, VERSION};

/// Arguments for the `launch` subcommand.
#[derive(Debug, Default)]
struct LaunchArgs {
    globus_root: Option<String>,
    params: Option<String>,
    work_dir: Option<String>,
    compute_env: Option<String>,
}

/// Arguments for the `monitor` subcommand.
#[derive(Debug, Default)]
struct MonitorArgs {
    workflow_id: Option<String>,
    interval_secs: Option<u64>,
    timeout_secs: Option<u64>,
}

/// Parsed command line.
#[derive(Debug)]
struct Config {
    command: Command,
    token: Option<String>,
    settings_path: Option<String>,
    verbose: bool,
}

#[derive(Debug)]
enum Command {
    Launch(LaunchArgs),
    Monitor(MonitorArgs),
}

/// Configures the logging system with appropriate formatting.
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            use std::io::Write;

            match record.level() {
                log::Level::Warn | log::Level::Error => {
                    writeln!(buf, "[{}] {}", record.level(), record.args())
                }
                _ => writeln!(buf, "{}", record.args()),
            }
        })
        .init();
}

/// Prints the application banner with version information.
fn print_banner() {
    println!();
    println!("{} v{}", APP_NAME, VERSION);
    println!("Pipeline Launch and Monitoring for the Seqera Platform");
    println!();
}

/// Prints usage information.
fn print_usage() {
    println!("Usage: seqlaunch <COMMAND> [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  launch              Submit a pipeline run and print its workflow id");
    println!("  monitor <ID>        Block until the workflow reaches a terminal state");
    println!();
    println!("Launch options:");
    println!("  --globus-root PATH  Base path prefixed to the relative paths below");
    println!("  --params REL        Parameter file, relative to the base path");
    println!("  --work-dir REL      Working directory, relative to the base path");
    println!("  --compute-env ID    Target compute environment identifier");
    println!();
    println!("Monitor options:");
    println!("  --interval SECS     Seconds between status checks (default: 300)");
    println!("  --timeout SECS      Give up after this many seconds (default: no limit)");
    println!();
    println!("Common options:");
    println!("  --token TOKEN       API access token (default: $SEQERA_API_ACCESS_TOKEN)");
    println!("  --settings FILE     YAML overlay for pipeline metadata");
    println!("  --verbose           Enable debug logging");
    println!("  --help              Show this help message");
    println!("  --version           Show version information");
    println!();
    println!("Examples:");
    println!("  seqlaunch launch --globus-root /mnt/store --params /runs/s1/params.yaml \\");
    println!("      --work-dir /runs/s1/work --compute-env 5xAbCdEfGh");
    println!("  seqlaunch monitor wf-123 --timeout 86400");
}

/// Reads the value following a flag, erroring if it is missing.
fn take_value(args: &[String], i: &mut usize, flag: &str) -> Result<String, String> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("{} requires a value", flag))
}

/// Parses command-line arguments into a Config struct.
fn parse_arguments(args: &[String]) -> Result<Config, String> {
    let mut command: Option<Command> = None;
    let mut token = None;
    let mut settings_path = None;
    let mut verbose = false;

    let mut i = 1; // Skip program name
    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            "--version" | "-V" => {
                println!("{} {}", APP_NAME, VERSION);
                std::process::exit(0);
            }
            "--verbose" | "-v" => {
                verbose = true;
            }
            "--token" => {
                token = Some(take_value(args, &mut i, "--token")?);
            }
            "--settings" => {
                settings_path = Some(take_value(args, &mut i, "--settings")?);
            }
            "launch" if command.is_none() => {
                command = Some(Command::Launch(LaunchArgs::default()));
            }
            "monitor" if command.is_none() => {
                command = Some(Command::Monitor(MonitorArgs::default()));
            }
            "--globus-root" | "--params" | "--work-dir" | "--compute-env" => {
                let Some(Command::Launch(ref mut launch)) = command else {
                    return Err(format!("{} is only valid after 'launch'", arg));
                };
                let flag = arg.clone();
                let value = take_value(args, &mut i, &flag)?;
                match flag.as_str() {
                    "--globus-root" => launch.globus_root = Some(value),
                    "--params" => launch.params = Some(value),
                    "--work-dir" => launch.work_dir = Some(value),
                    _ => launch.compute_env = Some(value),
                }
            }
            "--interval" | "--timeout" => {
                let Some(Command::Monitor(ref mut monitor)) = command else {
                    return Err(format!("{} is only valid after 'monitor'", arg));
                };
                let flag = arg.clone();
                let value = take_value(args, &mut i, &flag)?;
                let secs: u64 = value
                    .parse()
                    .map_err(|_| format!("Invalid value for {}: {}", flag, value))?;
                if flag == "--interval" {
                    monitor.interval_secs = Some(secs);
                } else {
                    monitor.timeout_secs = Some(secs);
                }
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            _ => {
                // Positional argument: the monitor subcommand's workflow id
                match command {
                    Some(Command::Monitor(ref mut monitor)) if monitor.workflow_id.is_none() => {
                        monitor.workflow_id = Some(arg.clone());
                    }
                    _ => return Err(format!("Unexpected argument: {}", arg)),
                }
            }
        }
        i += 1;
    }

    let command = command.ok_or_else(|| "No command specified".to_string())?;
    Ok(Config {
        command,
        token,
        settings_path,
        verbose,
    })
}

/// Loads the settings overlay or falls back to the built-in defaults.
fn load_settings(path: Option<&str>) -> Result<LaunchSettings, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(LaunchSettings::load(path)?),
        None => Ok(LaunchSettings::default()),
    }
}

/// Runs the `launch` subcommand.
fn run_launch(
    args: LaunchArgs,
    settings: &LaunchSettings,
    token: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let globus_root = args.globus_root.ok_or("launch requires --globus-root")?;
    let params = args.params.ok_or("launch requires --params")?;
    let work_dir = args.work_dir.ok_or("launch requires --work-dir")?;
    let compute_env = args.compute_env.ok_or("launch requires --compute-env")?;

    let client = SeqeraClient::new(&settings.api_base, &resolve_token(token)?);

    let workflow_id = launch_workflow(
        &client,
        settings,
        &globus_root,
        &params,
        &work_dir,
        &compute_env,
    )?;

    println!();
    println!("{} {}", "Workflow launched:".green().bold(), workflow_id);
    // Bare id on stdout so callers can capture it
    println!("{}", workflow_id);
    Ok(())
}

/// Runs the `monitor` subcommand.
fn run_monitor(
    args: MonitorArgs,
    settings: &LaunchSettings,
    token: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let workflow_id = args.workflow_id.ok_or("monitor requires a workflow id")?;

    let mut options = MonitorOptions::default();
    if let Some(secs) = args.interval_secs {
        options.poll_interval = Duration::from_secs(secs);
    }
    options.deadline = args.timeout_secs.map(Duration::from_secs);

    let client = SeqeraClient::new(&settings.api_base, &resolve_token(token)?);

    monitor_workflow(&client, &workflow_id, &options)?;

    println!();
    println!(
        "{} {}",
        "Workflow completed successfully:".green().bold(),
        workflow_id
    );
    Ok(())
}

/// Main application entry point.
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    // Parse arguments
    let config = parse_arguments(&args).map_err(|e| {
        eprintln!("Error: {}", e);
        eprintln!();
        print_usage();
        e
    })?;

    // Setup logging
    setup_logging(config.verbose);

    // Print banner
    print_banner();

    // Load pipeline metadata
    let settings = load_settings(config.settings_path.as_deref())?;
    info!("API base: {}", settings.api_base);

    match config.command {
        Command::Launch(launch) => run_launch(launch, &settings, config.token.as_deref()),
        Command::Monitor(monitor) => run_monitor(monitor, &settings, config.token.as_deref()),
    }
    .map_err(|e| {
        error!("Operation failed: {}", e);
        e
    })
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
