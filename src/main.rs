//! CLI driver: read a problem instance, plan the loads, write the report.

use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use u_loading::allocation::plan_loads;
use u_loading::io::{parse_instance, write_run, write_run_json};

/// Report format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Fixed-format text report.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "u-loading")]
#[command(version)]
#[command(about = "Plan vehicle loads with a dual-constraint knapsack")]
struct Cli {
    /// Problem instance file.
    input: PathBuf,

    /// Report file (stdout if omitted).
    output: Option<PathBuf>,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value_t)]
    format: OutputFormat,
}

fn run(cli: &Cli) -> u_loading::Result<()> {
    let input = std::fs::read_to_string(&cli.input)?;
    let (vehicles, items) = parse_instance(&input)?;
    let run = plan_loads(items, &vehicles)?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    match cli.format {
        OutputFormat::Text => write_run(&mut out, &run)?,
        OutputFormat::Json => write_run_json(&mut out, &run)?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("u-loading: {err}");
            ExitCode::FAILURE
        }
    }
}
