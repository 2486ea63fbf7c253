use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};

use debugstrip::{strip_file, StripConfig};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let matches = Command::new("debugstrip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Truncates msgpack.nvgt at the debug marker and removes dbgout lines, in place")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let config = StripConfig::default();
    let report = strip_file(&config).with_context(|| {
        format!(
            "Failed to strip debug section from {}",
            config.target_path.display()
        )
    })?;

    println!(
        "Stripped {}: kept {} of {} line(s) before the marker.",
        config.target_path.display(),
        report.kept,
        report.marker_index
    );
    Ok(())
}
