use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;
use sfx::output::{self, PatternMatch};
use sfx::tree::stats::show_stats;
use sfx::tree::{BuildVisitor, CommonPrefixVisitor, NoopVisitor, SuffixTree, SuffixTreeBuilder, TreeConfig};
use sfx::utils::{read_patterns, read_text, ProgressVisitor, MIN_PROGRESS_LEN};
use sfx::Alphabet;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "sfx")]
#[command(about = "Suffix-tree pattern index with linear-time construction")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with the tree configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// First character of the alphabet (overrides the config)
    #[arg(long, global = true)]
    first: Option<char>,

    /// Number of characters in the alphabet (overrides the config)
    #[arg(long, global = true)]
    alphabet_size: Option<u8>,

    /// Suppress progress and diagnostics
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Where the indexed text comes from (first line of stdin by default)
#[derive(Args)]
struct Source {
    /// Text to index
    #[arg(short, long)]
    text: Option<String>,

    /// Read the text from the first line of a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find occurrences of patterns (-1 when absent)
    Match {
        #[command(flatten)]
        source: Source,

        /// Patterns to look up
        patterns: Vec<String>,

        /// Read additional patterns from a file, one per line
        #[arg(long = "patterns", value_name = "FILE")]
        patterns_file: Option<PathBuf>,

        /// Print every occurrence instead of one
        #[arg(short, long)]
        all: bool,

        /// Colorize output
        #[arg(long)]
        color: bool,
    },
    /// Print, per suffix, the longest prefix shared with an earlier suffix
    Lcp {
        #[command(flatten)]
        source: Source,
    },
    /// Show tree statistics
    Stats {
        #[command(flatten)]
        source: Source,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the tree's edges
    Tree {
        #[command(flatten)]
        source: Source,

        /// Colorize output
        #[arg(long)]
        color: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Match {
            source,
            patterns,
            patterns_file,
            all,
            color,
        } => {
            let mut patterns = patterns;
            if let Some(path) = patterns_file {
                patterns.extend(read_patterns(&path)?);
            }
            if patterns.is_empty() {
                anyhow::bail!("No patterns given. Pass them as arguments or with --patterns.");
            }

            let text = load_text(source)?;
            let tree = build_tree(&config, &text, quiet, &mut NoopVisitor)?;

            // The finished tree is immutable; queries share it freely
            let matches = patterns
                .par_iter()
                .map(|pattern| -> Result<PatternMatch> {
                    let positions = if all {
                        tree.find_all(pattern)
                    } else {
                        tree.find(pattern).map(|found| found.into_iter().collect())
                    }
                    .with_context(|| format!("Invalid pattern {:?}", pattern))?;
                    Ok(PatternMatch {
                        pattern: pattern.clone(),
                        positions,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            output::write_matches(&mut output::stdout(color), &matches)?;
        }
        Commands::Lcp { source } => {
            let text = load_text(source)?;
            let mut visitor = CommonPrefixVisitor::new(text.chars().count());
            build_tree(&config, &text, quiet, &mut visitor)?;

            let stdout = std::io::stdout();
            let mut out = std::io::BufWriter::new(stdout.lock());
            output::write_lengths(&mut out, visitor.lengths())?;
            out.flush()?;
        }
        Commands::Stats { source, json } => {
            let text = load_text(source)?;
            let tree = build_tree(&config, &text, quiet, &mut NoopVisitor)?;
            let stats = tree.stats();

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                show_stats(&stats);
            }
        }
        Commands::Tree { source, color } => {
            let text = load_text(source)?;
            let tree = build_tree(&config, &text, quiet, &mut NoopVisitor)?;
            output::write_tree(&mut output::stdout(color), &tree)?;
        }
    }

    Ok(())
}

/// Config file first, then command line overrides
fn resolve_config(cli: &Cli) -> Result<TreeConfig> {
    let mut config = match &cli.config {
        Some(path) => TreeConfig::load(path)?,
        None => TreeConfig::default(),
    };

    if cli.first.is_some() || cli.alphabet_size.is_some() {
        config.alphabet = Alphabet::new(
            cli.first.unwrap_or(config.alphabet.first),
            cli.alphabet_size.unwrap_or(config.alphabet.size),
        )?;
    }

    Ok(config)
}

fn load_text(source: Source) -> Result<String> {
    read_text(source.text, source.file.as_deref())
}

fn build_tree<V: BuildVisitor>(
    config: &TreeConfig,
    text: &str,
    quiet: bool,
    visitor: &mut V,
) -> Result<SuffixTree> {
    let start = Instant::now();
    let mut progress = if quiet || text.len() < MIN_PROGRESS_LEN {
        ProgressVisitor::hidden()
    } else {
        ProgressVisitor::new(text.chars().count())
    };

    let tree = SuffixTreeBuilder::new(config.clone())
        .build_with_visitor(text, &mut (&mut progress, visitor))
        .context("Failed to build suffix tree")?;
    progress.finish();

    if !quiet {
        eprintln!(
            "sfx: indexed {} symbols in {:.1?} ({} nodes)",
            tree.len(),
            start.elapsed(),
            tree.nodes().len()
        );
    }

    Ok(tree)
}
