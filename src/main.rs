use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bfstep::config::{BoundsPolicy, Config, EofBehavior};
use bfstep::instruction::instruction_count;
use bfstep::interpreter::Interpreter;
use bfstep::snapshot::Snapshot;
use clap::Parser;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "bfstep", about = "Direct-dispatch interpreter for the eight-instruction tape language")]
struct Cli {
    /// Path to the program source.
    program: PathBuf,

    /// How to treat a data cursor move past either end of the tape.
    #[arg(long, value_enum, default_value_t = BoundsPolicy::Permissive)]
    bounds: BoundsPolicy,

    /// Byte stored by ',' once input is exhausted.
    #[arg(long, value_enum, default_value_t = EofBehavior::MaxByte)]
    eof: EofBehavior,

    /// Resume from a snapshot written by --save-snapshot.
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Write the interpreter state to this file when the run ends.
    #[arg(long)]
    save_snapshot: Option<PathBuf>,
}

fn main() -> ExitCode {
    let log_level = std::env::var("BFSTEP_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bfstep: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let program = std::fs::read(&cli.program)
        .with_context(|| format!("cannot read program {}", cli.program.display()))?;
    debug!(
        bytes = program.len(),
        instructions = instruction_count(&program),
        "loaded program"
    );

    let config = Config {
        bounds: cli.bounds,
        eof: cli.eof,
        ..Default::default()
    };
    let input = io::stdin().lock();
    let output = BufWriter::new(io::stdout().lock());

    let mut interp = match &cli.resume {
        Some(path) => {
            let snapshot = load_snapshot(path)?;
            info!(
                ip = snapshot.instruction_cursor,
                cursor = snapshot.data_cursor,
                "resuming from snapshot"
            );
            Interpreter::restore(&program, snapshot, config, input, output)?
        }
        None => Interpreter::new(&program, config, input, output)?,
    };

    let result = interp.run();

    if let Some(path) = &cli.save_snapshot {
        std::fs::write(path, interp.snapshot().to_bytes())
            .with_context(|| format!("cannot write snapshot {}", path.display()))?;
        info!(path = %path.display(), "saved snapshot");
    }

    let summary = result?;
    info!(
        steps = summary.steps,
        bounds_violations = summary.bounds_violations,
        "program halted"
    );
    Ok(())
}

fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("cannot read snapshot {}", path.display()))?;
    Snapshot::from_bytes(&bytes).with_context(|| format!("cannot load snapshot {}", path.display()))
}
