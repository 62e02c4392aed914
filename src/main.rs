//! latex-typograph - tie spaced dashes and reference commands in LaTeX sources
//!
//! Each input is rewritten and saved next to the original as
//! `name.01.tex`, `name.02.tex`, ... so nothing is ever overwritten.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{filter::LevelFilter, fmt};

use latex_typograph::charset;
use latex_typograph::file_handler::{next_output_path, read_document, write_document};
use latex_typograph::{Error, Options, Result, typograph};

#[derive(Debug, Parser)]
#[command(
    name = "latex-typograph",
    version,
    about = "Insert non-breaking spaces before spaced dashes and reference commands"
)]
struct Cli {
    /// LaTeX files to process
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
    /// Write the result here instead of a numbered sibling of the input
    #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
    output: Option<PathBuf>,
    /// Print the result to standard output
    #[arg(long)]
    stdout: bool,
    /// Do not report non-ASCII characters
    #[arg(long)]
    no_charset_check: bool,
    /// Increase logging verbosity (-v, -vv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> Options {
        Options::default()
            .with_output(self.output.clone())
            .with_stdout(self.stdout)
            .with_charset_check(!self.no_charset_check)
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(log_level(cli.verbose));

    let opts = cli.options();
    if opts.output.is_some() && cli.files.len() != 1 {
        error!("{}", Error::AmbiguousOutput { count: cli.files.len() });
        process::exit(2);
    }

    let mut failed = false;
    for file in &cli.files {
        if let Err(e) = process_file(file, &opts) {
            error!("{e}");
            failed = true;
        }
    }

    if failed {
        process::exit(1);
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn process_file(path: &Path, opts: &Options) -> Result<()> {
    info!("file {}", path.display());

    let text = read_document(path)?;
    let typeset = typograph(&text);
    debug!(
        dashes = typeset.dashes,
        references = typeset.references,
        shorthands = typeset.shorthands,
        "passes finished"
    );

    if opts.stdout {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(typeset.text.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|source| Error::Write {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
        info!("printed to <stdout>");
    } else {
        let output = match &opts.output {
            Some(output) => output.clone(),
            None => next_output_path(path)?,
        };
        write_document(&output, &typeset.text)?;
        info!("saved to {}", output.display());
    }
    info!("{} substitutions", typeset.total());

    if opts.charset_check {
        report_charset(&typeset.text);
    }
    Ok(())
}

fn report_charset(text: &str) {
    let findings = charset::scan(text);
    if findings.is_empty() {
        return;
    }

    warn!("non-ASCII characters and their codes:");
    for finding in findings {
        warn!("line {}: {} {}", finding.line, finding.ch, finding.code_point());
    }
}
