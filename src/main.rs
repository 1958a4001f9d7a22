use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use intstrings::{count_digit, digit_at, BoundedMatcher, MatchResult, NaiveMatcher, Pattern};

#[derive(Parser, Debug)]
#[command(
    name = "intstrings",
    about = "Queries over the digit stream of concatenated integers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the digit at a 1-indexed position of the stream.
    DigitAt {
        /// First integer of the stream.
        start: u64,
        /// 1-indexed position to read.
        position: u64,
    },
    /// Count occurrences of a digit within a stream prefix.
    Count {
        /// First integer of the stream.
        start: u64,
        /// Number of leading digits to examine.
        length: u64,
        /// Digit (0-9) to count.
        digit: u8,
    },
    /// Find the first occurrence of a digit pattern in the stream.
    Find {
        /// First integer of the stream.
        start: u64,
        /// Decimal-digit pattern to search for.
        pattern: String,
        /// Use the unbounded reference matcher instead of the bounded one.
        #[arg(long)]
        naive: bool,
        /// Give up after generating this many digits without a match.
        #[arg(long)]
        max_digits: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::DigitAt { start, position } => {
            let digit = digit_at(start, position).with_context(|| {
                format!("digit query failed for start={start} position={position}")
            })?;
            println!("{digit}");
        }
        Commands::Count {
            start,
            length,
            digit,
        } => {
            let count = count_digit(start, length, digit)
                .with_context(|| format!("count query failed for start={start}"))?;
            println!("{count}");
        }
        Commands::Find {
            start,
            pattern,
            naive,
            max_digits,
        } => {
            let found = run_find(start, &pattern, naive, max_digits)
                .with_context(|| format!("search failed for pattern '{pattern}'"))?;
            println!("[{}, {}]", found.start, found.end);
        }
    }

    Ok(())
}

fn run_find(
    start: u64,
    pattern_text: &str,
    naive: bool,
    max_digits: Option<u64>,
) -> Result<MatchResult> {
    let pattern = Pattern::new(pattern_text).context("invalid pattern")?;

    let found = if naive {
        let mut matcher = NaiveMatcher::new(start, pattern)?;
        if let Some(budget) = max_digits {
            matcher = matcher.with_digit_budget(budget);
        }
        matcher.search()?
    } else {
        let mut matcher = BoundedMatcher::new(start, pattern)?;
        if let Some(budget) = max_digits {
            matcher = matcher.with_digit_budget(budget);
        }
        matcher.search()?
    };

    Ok(found)
}
