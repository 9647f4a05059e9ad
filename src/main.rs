use clap::Parser;
use pawlist::core::config::{self, CliOverrides, PawConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pawlist", version, about = "Browse adoptable dogs in your terminal")]
struct Args {
    /// Read settings from this file instead of ~/.pawlist/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How long the adoption message stays on screen, in milliseconds
    #[arg(long)]
    toast_ms: Option<u64>,

    /// Where to write the log
    #[arg(long, default_value = "pawlist.log")]
    log_file: PathBuf,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Stdout belongs to the terminal UI, so log to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    log::info!("pawlist v{} starting up", env!("CARGO_PKG_VERSION"));

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        PawConfig::default()
    });

    let cli = CliOverrides {
        toast_ms: args.toast_ms,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!("Resolved config: {:?}", resolved);

    pawlist::tui::run(resolved)
}
