//! timcalc: print SDRC timing register values for the parts in
//! `sdrc-memories`, or for a timing record read from a JSON file.

mod record_file;
mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sdrc::OverflowPolicy;
use tracing_subscriber::EnvFilter;

use crate::report::Format;

#[derive(Parser)]
#[command(name = "timcalc")]
#[command(about = "AM/DM37x SDRC timing register calculator for LPDDR parts", long_about = None)]
#[command(version)]
struct Cli {
    /// Mask cycle counts that overflow their register field instead of failing
    #[arg(long, global = true)]
    truncate: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print registers for every part and clock rate in the tables (default)
    All,
    /// List known parts and the clock rates they have timings for
    List,
    /// Print registers for one part
    Show {
        /// Part name, case-insensitive (see `timcalc list`)
        part: String,
        /// Only this SDRC clock rate
        #[arg(long)]
        mhz: Option<u32>,
    },
    /// Compute registers from a JSON object of timing parameters
    Calc {
        /// File holding `{"tCK": 5, "tRFC": 140, ...}`
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let policy = if cli.truncate {
        OverflowPolicy::Truncate
    } else {
        OverflowPolicy::Strict
    };

    let output = match cli.command.unwrap_or(Commands::All) {
        Commands::All => report::render(&report::all(policy)?, cli.format)?,
        Commands::List => report::render_list(cli.format)?,
        Commands::Show { part, mhz } => {
            let groups = report::show(&part, mhz, policy)?;
            report::render(&groups, cli.format)?
        }
        Commands::Calc { file } => {
            let group = record_file::calculate(&file, policy)?;
            report::render(std::slice::from_ref(&group), cli.format)?
        }
    };

    print!("{output}");
    Ok(())
}

/// Log to stderr so stdout stays parseable with `--format json`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // Only fails if a global subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
