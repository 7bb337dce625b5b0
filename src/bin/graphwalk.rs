//! graphwalk CLI — run depth-first graph queries against graph documents.
//!
//! Usage:
//!   graphwalk short-words <FILE> --shorter-than <K> [--start N]
//!   graphwalk longest-word <FILE> [--start N]
//!   graphwalk self-loopers <FILE> [--start N]
//!   graphwalk can-reach <FILE> <FROM> <TO>
//!   graphwalk unreachable <FILE> <START>

use clap::{ArgAction, Parser, Subcommand};
use graphwalk::{
    can_reach, load_document, longest_word, unreachable, write_self_loopers, write_short_words,
    FlightDocument, Format, GraphError, GraphResult, MapDocument, VertexGraph, VertexId,
    WordGraphDocument,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "graphwalk",
    version,
    about = "Depth-first reachability queries over graph documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Document format (json or yaml); inferred from the extension when omitted
    #[arg(long, global = true)]
    format: Option<Format>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print reachable words shorter than a bound
    ShortWords {
        /// Word graph document
        file: PathBuf,
        /// Exclusive upper bound on word length
        #[arg(long, short = 'k', allow_negative_numbers = true)]
        shorter_than: i64,
        /// Index of the starting vertex
        #[arg(long, default_value_t = 0)]
        start: usize,
    },
    /// Print the longest reachable word
    LongestWord {
        /// Word graph document
        file: PathBuf,
        /// Index of the starting vertex
        #[arg(long, default_value_t = 0)]
        start: usize,
    },
    /// Print reachable vertices that list themselves as a neighbor
    SelfLoopers {
        /// Word graph document
        file: PathBuf,
        /// Index of the starting vertex
        #[arg(long, default_value_t = 0)]
        start: usize,
    },
    /// Check whether one airport can be reached from another
    CanReach {
        /// Flight network document
        file: PathBuf,
        /// Departure airport code
        from: String,
        /// Destination airport code
        to: String,
    },
    /// Print keys that cannot be reached from a starting key
    Unreachable {
        /// Map graph document
        file: PathBuf,
        /// Starting key
        start: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_words(file: &Path, format: Option<Format>) -> GraphResult<VertexGraph<String>> {
    load_document::<WordGraphDocument>(file, format)?.into_graph()
}

fn cmd_short_words<W: Write>(
    file: &Path,
    format: Option<Format>,
    k: i64,
    start: usize,
    out: &mut W,
) -> GraphResult<()> {
    let graph = load_words(file, format)?;
    write_short_words(&graph, Some(VertexId::from_index(start)), k, out)?;
    Ok(())
}

fn cmd_longest_word<W: Write>(
    file: &Path,
    format: Option<Format>,
    start: usize,
    out: &mut W,
) -> GraphResult<()> {
    let graph = load_words(file, format)?;
    writeln!(out, "{}", longest_word(&graph, Some(VertexId::from_index(start))))?;
    Ok(())
}

fn cmd_self_loopers<W: Write>(
    file: &Path,
    format: Option<Format>,
    start: usize,
    out: &mut W,
) -> GraphResult<()> {
    let graph = load_words(file, format)?;
    write_self_loopers(&graph, Some(VertexId::from_index(start)), out)?;
    Ok(())
}

fn cmd_can_reach<W: Write>(
    file: &Path,
    format: Option<Format>,
    from: &str,
    to: &str,
    out: &mut W,
) -> GraphResult<()> {
    let network = load_document::<FlightDocument>(file, format)?.into_network();
    let from = network
        .find_by_code(from)
        .ok_or_else(|| GraphError::UnknownCode(from.to_string()))?;
    let to = network
        .find_by_code(to)
        .ok_or_else(|| GraphError::UnknownCode(to.to_string()))?;
    writeln!(out, "{}", can_reach(&network, Some(&from), Some(&to)))?;
    Ok(())
}

fn cmd_unreachable<W: Write>(
    file: &Path,
    format: Option<Format>,
    start: &str,
    out: &mut W,
) -> GraphResult<()> {
    let graph: MapDocument = load_document(file, format)?;
    let mut keys: Vec<String> = unreachable(&graph, Some(&start.to_string()))
        .into_iter()
        .collect();
    keys.sort();
    for key in keys {
        writeln!(out, "{}", key)?;
    }
    Ok(())
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> GraphResult<()> {
    let format = cli.format;
    match &cli.command {
        Commands::ShortWords {
            file,
            shorter_than,
            start,
        } => cmd_short_words(file, format, *shorter_than, *start, out),
        Commands::LongestWord { file, start } => cmd_longest_word(file, format, *start, out),
        Commands::SelfLoopers { file, start } => cmd_self_loopers(file, format, *start, out),
        Commands::CanReach { file, from, to } => cmd_can_reach(file, format, from, to, out),
        Commands::Unreachable { file, start } => cmd_unreachable(file, format, start, out),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = run(&cli, &mut out).and_then(|()| out.flush().map_err(GraphError::from));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
