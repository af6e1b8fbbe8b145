use anyhow::Result;
use cli::{Cli, Commands};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::process::ExitCode;

mod asset_check;
mod assets;
mod cli;
mod config;
mod config_wizard;
mod guide;
mod palette;
mod render;
mod sinks;
mod styles;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None => render::run(&Default::default()),
        Some(Commands::Render(args)) => render::run(&args),
        Some(Commands::Config(args)) => config_wizard::run(&args),
        Some(Commands::Assets(args)) => asset_check::run(&args),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logging: {e}");
    }
}
