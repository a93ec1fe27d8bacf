//! Interactive lookup session
//!
//! Keeps one index in memory and answers queries line by line. A refresh builds a
//! new index and swaps it in without disturbing lookups already holding a snapshot.

use super::lookup::LookupResult;
use super::progress::with_spinner;
use crate::index::{IndexStats, SharedIndex};
use crate::output::{NOT_RECOGNIZED, format_stats};
use crate::source::IndexLoader;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

const HELP: &str = "Enter a word to list its anagrams. Commands: :refresh, :stats, :help, :quit";

/// Largest classes listed by `:stats`
const STATS_TOP: usize = 5;

/// Run the session over `input`, writing answers to `output`
///
/// # Errors
///
/// Returns an error if reading a line or writing an answer fails.
pub fn run_interactive<R: BufRead, W: Write>(
    loader: &IndexLoader,
    shared: &SharedIndex,
    input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "{HELP}")?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };
        let line = line?;

        match line.trim() {
            "" => {}
            ":quit" | ":q" | ":exit" => return Ok(()),
            ":help" | ":h" => writeln!(output, "{HELP}")?,
            ":stats" => {
                let stats = IndexStats::from_index(&shared.snapshot(), STATS_TOP);
                writeln!(output, "{}", format_stats(&stats))?;
            }
            ":refresh" => match with_spinner("Rebuilding word index...", || loader.refresh()) {
                Ok(index) => {
                    let words = index.word_count();
                    shared.replace(index);
                    info!(words, "swapped in refreshed index");
                    writeln!(output, "Index refreshed ({words} words).")?;
                }
                Err(e) => {
                    error!(error = %e, "refresh failed; keeping current index");
                    writeln!(output, "Refresh failed: {e}")?;
                }
            },
            cmd if cmd.starts_with(':') => writeln!(output, "Unknown command '{cmd}'. {HELP}")?,
            word => {
                let result = LookupResult::from_index(&shared.snapshot(), word);
                if result.is_found() {
                    for m in &result.matches {
                        writeln!(output, "{m}")?;
                    }
                } else {
                    writeln!(output, "{NOT_RECOGNIZED}")?;
                }
            }
        }
    }
}
