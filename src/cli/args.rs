// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::CliLang;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "line_views",
    version = crate::VERSION,
    about = "Prints word and line views of a text file"
)]
pub struct Args {
    /// Text file to analyze. Asked for on standard input when omitted.
    #[arg(value_hint = ValueHint::FilePath)]
    pub path: Option<PathBuf>,

    /// Language of the report texts
    #[arg(long, value_enum, default_value = "en", env = "LINE_VIEWS_LANG")]
    pub lang: CliLang,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
