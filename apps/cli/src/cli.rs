//! Command-line arguments and usage text.

use clap::Parser;
use quiz_core::GameMode;
use std::fmt::Write as _;
use std::path::PathBuf;

/// katacant - katakana learning program :3
#[derive(Parser, Debug)]
#[command(name = "katacant", version)]
pub struct Cli {
    /// Game mode to play, or `help` to list the modes
    pub mode: Option<String>,

    /// Number of questions you want to be asked (0 asks every question once)
    #[arg(short = 'n', long = "count", value_name = "UINT")]
    pub count: Option<usize>,

    /// Plain mode: disable colors and cursor movement
    #[arg(short, long)]
    pub plain: bool,

    /// Seed for the question order (defaults to the current time)
    #[arg(short, long, value_name = "UINT")]
    pub seed: Option<u64>,

    /// Directory that contains the `data/` folder
    #[arg(long, env = "KATACANT_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Load the mode's data, print it as JSON and exit
    #[arg(long)]
    pub check: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Usage text listing every game mode.
pub fn usage(progname: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "katacan't - katakana learning program :3. Copyright 2025 virtualgrub39");
    let _ = writeln!(out, "USAGE:");
    let _ = writeln!(out, "\t{} MODE <OPTIONS>", progname);
    let _ = writeln!(out, "MODE:");
    for mode in GameMode::ALL {
        let _ = writeln!(out, "\t{:<25} - {}", mode.name(), mode.description());
    }
    let _ = writeln!(out, "OPTIONS:");
    let _ = writeln!(out, "\t-n UINT - specify number of questions you want to be asked");
    let _ = writeln!(
        out,
        "\t-p      - plain mode - disable color output and fancy text formatting using escape codes"
    );
    let _ = writeln!(out, "\t-s UINT - specify seed for the question order");
    let _ = writeln!(out, "\t--check - validate the mode's data file and print it as JSON");
    out
}
