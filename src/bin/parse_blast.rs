use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use seqtally::blast::LimitSet;
use seqtally::input::open_stdin;
use seqtally::{filter_files, filter_stream};

/// Filter BLAST tabular output (-outfmt 6) on % identity, alignment length,
/// mismatches, e-value and bit score.
///
/// Passing hits are written as: subject id, s. start, s. end, % identity,
/// alignment length, evalue, bit score, query id. Reads standard input when
/// no files are given.
#[derive(Parser, Debug)]
#[command(name = "parse-blast", version)]
struct Args {
    /// BLAST tabular files (plain or .gz)
    files: Vec<PathBuf>,

    /// Minimum % identity
    #[arg(short = 'i', long = "identity")]
    min_identity: Option<f64>,

    /// Minimum alignment length
    #[arg(short = 'l', long = "length")]
    min_alignment_length: Option<u64>,

    /// Maximum number of mismatches
    #[arg(short = 'm', long = "mismatches")]
    max_mismatches: Option<u64>,

    /// Maximum e-value
    #[arg(short = 'e', long = "evalue")]
    max_evalue: Option<f64>,

    /// Minimum bit score
    #[arg(short = 'b', long = "bitscore")]
    min_bitscore: Option<f64>,

    /// Write filtered hits to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write a per-file hit report to this file
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Do not show a progress spinner
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn limits(&self) -> LimitSet {
        LimitSet::builder()
            .min_identity(self.min_identity)
            .min_alignment_length(self.min_alignment_length)
            .max_mismatches(self.max_mismatches)
            .max_evalue(self.max_evalue)
            .min_bitscore(self.min_bitscore)
            .build()
    }
}

fn spinner(quiet: bool, msg: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.green} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(msg);
    spinner
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let limits = args.limits();
    if limits.is_empty() {
        log::warn!("no limits given, every hit will be kept");
    } else {
        log::debug!("limits: {limits:?}");
    }

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut report = args
        .report
        .as_ref()
        .map(|path| File::create(path).map(BufWriter::new))
        .transpose()?;
    let report = report.as_mut().map(|w| w as &mut dyn Write);

    if args.files.is_empty() {
        let mut cursor = open_stdin();
        filter_stream("(stdin)", &mut cursor, &limits, &mut out, report)?;
        return Ok(());
    }

    let progress = spinner(
        args.quiet,
        format!("Filtering {} BLAST file(s)...", args.files.len()),
    );
    let totals = filter_files(&args.files, &limits, &mut out, report)?;
    progress.finish_and_clear();

    log::info!(
        "{} file(s): {} hits in, {} hits out",
        totals.files,
        totals.hits_in,
        totals.hits_out
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{e}");
        eprintln!("parse-blast: {e}");
        process::exit(1);
    }
}
