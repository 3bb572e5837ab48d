// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::{file::load_options, options::{AppOptions, ExportFormat}},
    error::{Error, Result},
    log::{self, LogTarget},
    model::AllowList,
    pipeline,
};

/// Average web-language popularity across TIOBE, Tecsify and PYPL.
#[derive(Debug, Parser)]
#[command(name = "lang_rank", version, about)]
pub struct Args {
    /// Config file (default: ./lang_rank.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<String>,

    /// Output format: csv, tsv or xlsx
    #[arg(long, value_name = "FMT")]
    pub format: Option<ExportFormat>,

    /// Comma-separated allow-list, e.g. "Python,Go,C#"
    #[arg(long, value_name = "A,B,...")]
    pub languages: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Fetch sources one after another
    #[arg(long)]
    pub sequential: bool,

    /// Print the effective allow-list and exit
    #[arg(long)]
    pub list_languages: bool,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Flags overlay the config file, which overlays the defaults.
    pub fn options(&self) -> Result<AppOptions> {
        let mut opts = load_options(self.config.as_deref())?;
        if let Some(dir) = &self.out {
            opts.export.set_dir(dir);
        }
        if let Some(fmt) = self.format {
            opts.export.format = fmt;
        }
        if let Some(list) = &self.languages {
            let allow = AllowList::parse_csv(list);
            if allow.is_empty() {
                return Err(Error::Config(s!("--languages is empty")));
            }
            opts.languages = allow;
        }
        if let Some(secs) = self.timeout {
            opts.fetch.timeout = std::time::Duration::from_secs(secs);
        }
        if self.sequential {
            opts.fetch.sequential = true;
        }
        Ok(opts)
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    log::init(LogTarget::Stderr, args.verbose)?;
    let opts = args.options()?;

    if args.list_languages {
        for name in opts.languages.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let report = pipeline::run_live(&opts, None)?;
    for line in report.warnings() {
        eprintln!("warning: {}", line);
    }
    println!("{}", report.success_line());
    Ok(())
}
