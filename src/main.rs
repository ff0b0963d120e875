//! freqscan: sliding-window residue frequency profiles over FASTA sequences.
//!
//! Usage: freqscan --span <n> --step <n> [--chars <residues>] [input]

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;

use freqscan::{FreqError, ScanCommand, ScanConfig};

#[derive(Parser)]
#[command(name = "freqscan")]
#[command(version)]
#[command(
    about = "Report sliding-window residue frequencies for each record of a FASTA file",
    long_about = None
)]
struct Cli {
    /// Window span: number of residues measured per window
    #[arg(short = 'p', long)]
    span: usize,

    /// Window step: residues the window advances between measurements
    #[arg(short = 't', long)]
    step: usize,

    /// Residues to count, as a string (e.g. "AC"); empty counts nothing
    #[arg(short = 'c', long, default_value = "")]
    chars: String,

    /// Input FASTA file (use - or omit for stdin)
    input: Option<PathBuf>,

    /// Print scan statistics to stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), FreqError> {
    let config = ScanConfig::new(cli.span, cli.step, &cli.chars)?;
    let cmd = ScanCommand::new(config);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let stats = match cli.input {
        Some(path) if path.to_string_lossy() != "-" => cmd.run_path(&path, &mut handle)?,
        _ => {
            let stdin = io::stdin();
            cmd.run_reader(stdin.lock(), &mut handle)?
        }
    };

    if cli.stats {
        eprintln!("Scan stats: {}", stats);
    }

    Ok(())
}
