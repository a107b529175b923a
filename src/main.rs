//! gendiff command-line interface.
//!
//! Compares two configuration files, or renders a diff tree computed elsewhere, and
//! prints the result in the chosen output format.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gendiff::{compute_diff, format_diff, has_changes, parse_file, parse_tree};
use gendiff::{DiffConfig, OutputFormat};
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// gendiff - Compare two configuration files and show the difference
///
/// Reads JSON, YAML or TOML files and prints a tree of the keys that were
/// added (+), removed (-) or changed (both lines).
#[derive(Parser)]
#[command(name = "gendiff")]
#[command(version)]
#[command(about = "Compares two configuration files and shows a difference", long_about = None)]
struct Cli {
    /// First file to compare
    #[arg(value_name = "FILE1", required_unless_present = "tree")]
    file1: Option<PathBuf>,

    /// Second file to compare
    #[arg(value_name = "FILE2", required_unless_present = "tree")]
    file2: Option<PathBuf>,

    /// Render a pre-computed JSON diff tree instead of comparing files
    #[arg(long, value_name = "PATH", conflicts_with_all = ["file1", "file2"])]
    tree: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "stylish")]
    format: OutputFormatArg,

    /// Keep keys in source order instead of sorting them
    #[arg(long)]
    no_sort: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    verbose: bool,
}

/// Output format argument for clap
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormatArg {
    /// Indented tree with +/- markers
    Stylish,
    /// Status-tagged JSON tree
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Stylish => OutputFormat::Stylish,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    let output_format: OutputFormat = cli.format.into();

    if let Some(tree_path) = &cli.tree {
        let content = fs::read_to_string(tree_path)
            .with_context(|| format!("Failed to read diff tree: {}", tree_path.display()))?;
        let diff = parse_tree(&content)
            .with_context(|| format!("Failed to decode diff tree: {}", tree_path.display()))?;
        let output =
            format_diff(&diff, &output_format).context("Failed to format diff output")?;
        println!("{}", output);
        return Ok(0);
    }

    // clap guarantees both files when --tree is absent
    let (Some(file1), Some(file2)) = (&cli.file1, &cli.file2) else {
        anyhow::bail!("Two files are required unless --tree is given");
    };

    let old = parse_file(file1)
        .with_context(|| format!("Failed to parse first file: {}", file1.display()))?;
    let new = parse_file(file2)
        .with_context(|| format!("Failed to parse second file: {}", file2.display()))?;

    let diff_config = DiffConfig {
        sort_keys: !cli.no_sort,
    };
    let diff = compute_diff(&old, &new, &diff_config);

    let output = format_diff(&diff, &output_format).context("Failed to format diff output")?;
    println!("{}", output);

    if has_changes(&diff) {
        Ok(1)
    } else {
        Ok(0)
    }
}
