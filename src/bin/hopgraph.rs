//! hopgraph CLI: load hop-network files, then answer reachability queries.
//!
//! Usage:
//!   hopgraph [--dfs] [--json] [--dump matrix|list] [-o out] <files>...
//!
//! Every positional argument is an input file. The output file is only ever
//! named with `-o`; a trailing positional is not taken as the output.

use clap::{Parser, ValueEnum};
use hopgraph::{
    HopNetwork, IngestConfig, NetworkLoader, OutputFormat, QuerySession, SessionConfig, Strategy,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "hopgraph",
    version,
    about = "Reachability queries over hop networks",
    after_help = "Every positional argument is read as an input file. To write answers \
to a file use -o/--output; the last positional is never treated as the output file."
)]
struct Cli {
    /// Tab-separated record files: source, destination, hop time
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Write query results to this file instead of stdout (the only way to name it)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Answer in depth-first order (default is breadth-first)
    #[arg(long)]
    dfs: bool,
    /// Emit one JSON object per answer
    #[arg(long)]
    json: bool,
    /// Print the loaded network to stderr before querying
    #[arg(long, value_enum)]
    dump: Option<DumpFormat>,
    /// Longest accepted stop name, in characters
    #[arg(long, default_value_t = hopgraph::ingest::MAX_NAME_LEN)]
    max_name_len: usize,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum DumpFormat {
    /// Full adjacency matrix
    Matrix,
    /// One line per stop with its direct neighbors
    List,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_network(cli: &Cli) -> Result<HopNetwork, String> {
    let config = IngestConfig::new().max_name_len(cli.max_name_len);
    NetworkLoader::with_config(config)
        .load_files(&cli.files)
        .map_err(|e| e.to_string())
}

fn dump_network(network: &HopNetwork, format: DumpFormat) {
    match format {
        DumpFormat::Matrix => eprint!("{}", network.matrix_view()),
        DumpFormat::List => eprint!("{}", network.adjacency_view()),
    }
}

fn cmd_query(network: &HopNetwork, cli: &Cli) -> i32 {
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut config = SessionConfig::new()
        .strategy(Strategy::from_breadth_first(!cli.dfs))
        .format(format);
    if !cli.json {
        config = config.prompt("Enter a stop name (or 'exit' to quit): ");
    }
    let session = QuerySession::new(network, config);

    let mut output: Box<dyn Write> = match &cli.output {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(BufWriter::new(file)),
            Err(e) => {
                eprintln!("Error: cannot create '{}': {}", path.display(), e);
                return 1;
            }
        },
        None => Box::new(io::stdout()),
    };

    let stdin = io::stdin();
    let result = session
        .run(stdin.lock(), &mut output, &mut io::stderr())
        .and_then(|summary| output.flush().map(|()| summary));

    match result {
        Ok(summary) => {
            tracing::info!(queries = summary.queries, misses = summary.misses, "session finished");
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let network = match load_network(&cli) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(format) = cli.dump {
        dump_network(&network, format);
    }

    let code = cmd_query(&network, &cli);
    std::process::exit(code);
}
