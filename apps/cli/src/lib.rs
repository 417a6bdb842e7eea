pub mod cli;
pub mod session;
pub mod style;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use quiz_core::{GameMode, QuestionRecord, Sampler};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::cli::{usage, Cli};
use crate::session::Session;
use crate::style::Style;

/// Data file contents as printed by `--check`.
#[derive(Serialize)]
pub struct CheckReport<'a> {
    pub mode: GameMode,
    pub path: PathBuf,
    pub records: &'a [QuestionRecord],
}

pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let progname = std::env::args().next().unwrap_or_else(|| "katacant".into());

    let Some(mode_name) = cli.mode.as_deref() else {
        print!("{}", usage(&progname));
        return Ok(ExitCode::FAILURE);
    };

    if mode_name.eq_ignore_ascii_case("help") {
        print!("{}", usage(&progname));
        return Ok(ExitCode::SUCCESS);
    }

    let Some(mode) = GameMode::from_name(mode_name) else {
        bail!("Invalid game mode. Use `help` to display available modes.");
    };

    let path = mode.resolve_path(&cli.data_dir);
    let records = quiz_core::load(&path)?;

    if cli.check {
        let report = CheckReport {
            mode,
            path,
            records: &records,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    let requested = match cli.count {
        Some(n) if n > 0 => n,
        _ => records.len(),
    };
    let seed = cli.seed.unwrap_or_else(clock_seed);
    tracing::info!(mode = mode.name(), requested, seed, "starting session");

    let order = Sampler::new(seed).sample(records.len(), requested);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), Style::detect(cli.plain));
    let summary = session
        .run(&records, &order, requested)
        .context("failed to run quiz session")?;

    print!("{}", summary);
    Ok(ExitCode::SUCCESS)
}

/// Seed derived from the wall clock, for runs without `--seed`.
fn clock_seed() -> u64 {
    chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64
}

/// Initialize logging on stderr. `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
