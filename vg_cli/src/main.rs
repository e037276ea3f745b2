/**
 * `vgen`: prints random verification codes.
 */

mod config;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use vg_alphabet::LetterCase;
use vg_random::{RandomSource, SharedRandom};
use crate::config::GeneratorConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random verification codes", long_about = None)]
struct Args {
    /// How many codes to print, one per line
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Seed the random source for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Digits only
    Digits {
        #[arg(short, long)]
        length: usize,

        /// Never start with '0'
        #[arg(long)]
        no_leading_zero: bool,
    },

    /// Letters only; uppercase wins if both case flags are given
    Letters {
        #[arg(short, long)]
        length: usize,

        #[arg(long)]
        upper: bool,

        #[arg(long)]
        lower: bool,
    },

    /// Letters and digits
    Word {
        #[arg(short, long)]
        length: usize,
    },

    /// Characters from a custom alphabet
    Charset {
        #[arg(short, long)]
        length: usize,

        #[arg(short, long)]
        charset: String,
    },

    /// A string shaped by a simplified regular expression
    Pattern {
        #[arg(value_name = "PATTERN")]
        pattern: String,
    },

    /// A generator described by a JSON file
    Config {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

impl Command {
    fn into_config(self) -> anyhow::Result<GeneratorConfig> {
        Ok(match self {
            Command::Digits{ length, no_leading_zero } =>
                GeneratorConfig::Digits{ length, no_leading_zero },

            Command::Letters{ length, upper, lower } =>
                GeneratorConfig::Letters{ length, case: LetterCase::from_flags(upper, lower).into() },

            Command::Word{ length } => GeneratorConfig::Word{ length },

            Command::Charset{ length, charset } => GeneratorConfig::Charset{ length, charset },

            Command::Pattern{ pattern } => GeneratorConfig::Pattern{ pattern },

            Command::Config{ path } => GeneratorConfig::load(&path)?,
        })
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let rng: Arc<dyn RandomSource> = match args.seed {
        Some(seed) => Arc::new(SharedRandom::with_seed(seed)),
        None => vg_random::shared(),
    };

    let config = args.command.into_config()?;
    info!(?config, count = args.count, seeded = args.seed.is_some(), "generating codes");
    let generator = config.build(rng).context("cannot build generator")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for _ in 0..args.count {
        writeln!(out, "{}", generator.generate()).context("failed to write to stdout")?;
    }
    out.flush().context("failed to write to stdout")?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
