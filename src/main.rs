//! Lookalike CLI binary.

use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use env_logger::Builder;
use indicatif::ProgressBar;
use log::LevelFilter;

use lookalike::domain::host_from_input;
use lookalike::{fuzz_domain, output, DEFAULT_LIMIT, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(name = "lookalike")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate and rank lookalike variants of a domain name")]
struct Cli {
    /// Domain or URL to fuzz
    domain: String,

    /// Maximum number of candidates to output
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// File the JSON records are persisted to
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Verbosity level (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    quiet: bool,

    /// Disable the progress spinner
    #[arg(long)]
    no_progress: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        LevelFilter::Error
    } else {
        match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let domain = host_from_input(&cli.domain);

    let spinner = if cli.quiet || cli.no_progress {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_message(format!("Fuzzing {domain}"));
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    };

    let results = fuzz_domain(&domain, cli.limit);
    spinner.finish_and_clear();

    if let Err(e) = output::emit(&cli.output, &results) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    if !cli.quiet {
        eprintln!("Generated {} candidates", results.len());
    }
}
