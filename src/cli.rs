use crate::sinks::Format;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Where the configuration and screenshots come from
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Configuration file (defaults to ./guide-book.toml if it exists)
    #[clap(short, long)]
    pub config: Option<PathBuf>,
    /// Directory to read screenshots from, overriding the configuration
    #[clap(short, long)]
    pub assets: Option<PathBuf>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct RenderArgs {
    #[clap(flatten)]
    pub input: InputArgs,
    /// Output file, overriding the configuration
    #[clap(short, long)]
    pub output: Option<PathBuf>,
    /// Output format, overriding the configuration
    #[clap(short, long, value_enum)]
    pub format: Option<Format>,
    /// Date stamped on the cover and footer (YYYY-MM-DD); defaults to today
    #[clap(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Overwrite an existing guide-book.toml without asking
    #[clap(long)]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Renders the user guide (the default when no command is given)
    Render(RenderArgs),
    /// Generates a guide-book.toml config file with the default settings
    Config(ConfigArgs),
    /// Lists the screenshots the guide references and whether they exist
    Assets(InputArgs),
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}
