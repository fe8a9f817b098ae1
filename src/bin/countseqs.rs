use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use seqtally::types::ReadCountStyle;
use seqtally::{count_files, CountOptions};

/// Count sequences in fasta/fastq files.
///
/// Output is in four tab-delimited columns: filename, number of sequences,
/// total number of bases, average sequence length. Files can be plain or
/// compressed with gzip (".gz").
#[derive(Parser, Debug)]
#[command(name = "countseqs", version)]
struct Args {
    /// Input FASTA/FASTQ files
    #[arg(required = true, num_args = 1..)]
    files: Vec<PathBuf>,

    /// Write output to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the total of all files at the end
    #[arg(short, long)]
    total: bool,

    /// Print the number of reads in millions
    #[arg(short, long)]
    millions: bool,

    /// Do not show a progress spinner
    #[arg(short, long)]
    quiet: bool,
}

fn spinner(quiet: bool, msg: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(msg);
    spinner
}

fn run(args: Args) -> Result<bool, Box<dyn std::error::Error>> {
    let options = CountOptions {
        total: args.total,
        style: if args.millions {
            ReadCountStyle::Millions
        } else {
            ReadCountStyle::Raw
        },
    };

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let progress = spinner(
        args.quiet,
        format!("Counting sequences in {} file(s)...", args.files.len()),
    );
    let summary = count_files(&args.files, &options, &mut out)?;
    progress.finish_and_clear();

    // each failure has already been logged
    log::info!(
        "{} of {} file(s) counted, {} failed",
        summary.totals.files,
        args.files.len(),
        summary.failures.len()
    );
    Ok(summary.failures.is_empty())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            log::error!("{e}");
            eprintln!("countseqs: {e}");
            process::exit(1);
        }
    }
}
