use carselector::core::config::{self, CliOverrides};
use carselector::{Error, ListFormat, print_catalog, tui};
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "carselector", about = "Browse car body styles and their pros and cons")]
struct Args {
    /// Config file (default: ~/.carselector/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start on this car's detail screen
    #[arg(short, long)]
    open: Option<String>,

    /// Print the catalog and exit
    #[arg(short, long)]
    list: bool,

    /// Output format for --list
    #[arg(short, long, default_value_t, value_enum)]
    format: ListFormat,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,

    /// off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,

    /// Log file path (default: carselector.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    if args.list {
        return print_catalog(&mut std::io::stdout().lock(), args.format);
    }

    let (file_config, config_source) = config::load_config(args.config.as_deref())?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            open: args.open,
            no_mouse: args.no_mouse,
            log_level: args.log_level,
            log_file: args.log_file,
        },
    )?;

    // The TUI owns stdout, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    config_source.log();
    for warning in &resolved.warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Config: {:?}", resolved);

    log::info!(
        "Car Selector starting (open: {:?}, mouse: {})",
        resolved.open,
        resolved.mouse
    );

    tui::run(&resolved)?;
    Ok(())
}
