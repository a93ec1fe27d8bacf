//! Anagram Finder - CLI
//!
//! Looks up the anagrams of a word in a cached dictionary index.
//! The index is built from a remote word list on first use.

use anagram_finder::{
    commands::{index_stats, lookup_word, rebuild_index, run_interactive},
    config::Config,
    index::{DEFAULT_CACHE_PATH, DEFAULT_HEADER_SENTINEL, SharedIndex},
    output::{print_lookup_result, print_rebuild_result, print_stats},
    source::{DEFAULT_TIMEOUT_SECS, DEFAULT_WORDLIST_URL, IndexLoader},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "anagram_finder",
    about = "Find dictionary anagrams of a word",
    version,
    author,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word to look up (same as the `lookup` command)
    word: Option<String>,

    /// Dictionary URL
    #[arg(long, global = true, env = "ANAGRAM_URL", default_value = DEFAULT_WORDLIST_URL)]
    url: String,

    /// Build from a local word list instead of the URL
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Cache artifact path
    #[arg(short, long, global = true, env = "ANAGRAM_CACHE", default_value = DEFAULT_CACHE_PATH)]
    cache: PathBuf,

    /// Neither read nor write the cache
    #[arg(long, global = true)]
    no_cache: bool,

    /// Line ending the word list header
    #[arg(long, global = true, default_value = DEFAULT_HEADER_SENTINEL)]
    sentinel: String,

    /// Treat every line of the word list as a word
    #[arg(long, global = true)]
    no_header: bool,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Build the index in parallel
    #[arg(long, global = true)]
    parallel: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the anagrams of a word
    Lookup {
        /// The word to look up
        word: String,
    },

    /// Show index statistics
    Stats {
        /// Number of largest classes to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Rebuild the index from the word source and overwrite the cache
    Rebuild,

    /// Answer lookups line by line from stdin
    Interactive,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            url: self.url.clone(),
            wordlist: self.wordlist.clone(),
            cache_path: (!self.no_cache).then(|| self.cache.clone()),
            header_sentinel: (!self.no_header).then(|| self.sentinel.clone()),
            timeout: Duration::from_secs(self.timeout),
            parallel: self.parallel,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let loader = IndexLoader::from_config(&cli.config());

    let command = match (cli.command, cli.word) {
        (Some(command), _) => command,
        (None, Some(word)) => Commands::Lookup { word },
        (None, None) => anyhow::bail!("missing word to look up (see --help)"),
    };

    match command {
        Commands::Lookup { word } => run_lookup_command(&loader, &word),
        Commands::Stats { top } => run_stats_command(&loader, top),
        Commands::Rebuild => run_rebuild_command(&loader),
        Commands::Interactive => run_interactive_command(&loader),
    }
}

fn run_lookup_command(loader: &IndexLoader, word: &str) -> Result<()> {
    let result = lookup_word(loader, word).context("could not load or rebuild the word index")?;
    print_lookup_result(&result);
    Ok(())
}

fn run_stats_command(loader: &IndexLoader, top: usize) -> Result<()> {
    let stats = index_stats(loader, top).context("could not load or rebuild the word index")?;
    print_stats(&stats);
    Ok(())
}

fn run_rebuild_command(loader: &IndexLoader) -> Result<()> {
    let result = rebuild_index(loader).context("could not rebuild the word index")?;
    print_rebuild_result(&result);
    Ok(())
}

fn run_interactive_command(loader: &IndexLoader) -> Result<()> {
    let index = loader
        .load()
        .context("could not load or rebuild the word index")?;
    let shared = SharedIndex::new(index);

    run_interactive(loader, &shared, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
