use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use waypoint::core::config::{self, CliOverrides, WaypointConfig};
use waypoint::core::destination::Destination;

#[derive(Parser)]
#[command(name = "waypoint", about = "Stack-based navigation demo for the terminal")]
struct Args {
    /// Config file to use instead of ~/.waypoint/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reopen the navigation path saved on last exit
    #[arg(long, overrides_with = "no_restore")]
    restore: bool,

    /// Start at root even if restoring is configured
    #[arg(long, overrides_with = "restore")]
    no_restore: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Destinations to push before the first frame
    #[arg(long, value_enum, num_args = 1..)]
    start: Vec<Destination>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        let restore = match (self.restore, self.no_restore) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        CliOverrides {
            restore,
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Nothing can be logged until the logger exists, so hold on to the outcome
    let loaded = config::load_config(args.config.as_deref());
    let defaults = WaypointConfig::default();
    let file_config = loaded.as_ref().map_or(&defaults, |(c, _)| c);
    let resolved = config::resolve(file_config, &args.overrides());

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    match &loaded {
        Ok((_, source)) => log::info!("{}", source),
        Err(e) => log::warn!("{}; using defaults", e),
    }
    if let Some(name) = &resolved.rejected_log_level {
        log::warn!(
            "Unknown log level '{}', using {}",
            name,
            config::DEFAULT_LOG_LEVEL
        );
    }
    log::info!(
        "Waypoint starting up (restore={}, start={:?})",
        resolved.restore,
        args.start
    );

    waypoint::tui::run(&resolved, &args.start)
}
