//! Word Chains - CLI
//!
//! Reads commands from standard input (or a script file) and runs them against
//! an in-memory dictionary of words and patterns.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use word_chains::{
    output::banner,
    session::{Flow, Session},
};

#[derive(Parser)]
#[command(
    name = "word_chains",
    about = "Dictionary of words and wildcard patterns with edit-distance chains",
    version,
    author
)]
struct Cli {
    /// Read commands from this file instead of standard input
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Load this file into the dictionary before the first command
    #[arg(short, long, value_name = "FILE")]
    dictionary: Option<PathBuf>,

    /// Do not print the startup banner
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if !cli.quiet {
        println!("{}", banner());
    }

    let mut session = Session::new(io::stdout().lock());

    if let Some(path) = &cli.dictionary {
        session
            .load(path)
            .with_context(|| format!("loading {}", path.display()))?;
    }

    let flow = match &cli.script {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            session.run(BufReader::new(file))
        }
        None => session.run(io::stdin().lock()),
    }
    .context("running commands")?;

    if flow == Flow::Terminate {
        log::info!("session terminated by command");
    }

    Ok(())
}
