//! X13 digest CLI
//!
//! A command-line tool for computing X13 chained digests.
//!
//! # Commands
//!
//! - `hash` - Digest a message given as hex, text, a file, or stdin
//! - `benchmark` - Run performance benchmark
//! - `info` - Show the selected backend and the stage order

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use x13_core::{Backend, StageKind, STAGE_COUNT};

#[derive(Parser)]
#[command(name = "x13")]
#[command(version = "0.1.0")]
#[command(about = "X13 chained proof-of-work digest")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log backend diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the 32-byte X13 digest of a message
    Hash {
        /// Message as a hex string
        #[arg(long, group = "input")]
        hex: Option<String>,

        /// Message as literal text
        #[arg(long, group = "input")]
        text: Option<String>,

        /// Read the message from a file
        #[arg(long, group = "input")]
        file: Option<PathBuf>,

        /// Digest only the window starting at this byte offset
        #[arg(long, requires = "length")]
        offset: Option<usize>,

        /// Length of the window in bytes
        #[arg(long, requires = "offset")]
        length: Option<usize>,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of digests to compute
        #[arg(short, long, default_value = "1000")]
        count: u32,
    },

    /// Show the selected backend and the stage order
    Info,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Hash {
            hex,
            text,
            file,
            offset,
            length,
        } => cmd_hash(hex, text, file, offset, length),
        Commands::Benchmark { count } => cmd_benchmark(count),
        Commands::Info => cmd_info(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "x13_core=debug" } else { "x13_core=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the message bytes from whichever source was given.
///
/// Falls back to reading stdin so the tool composes with pipes.
fn read_message(
    hex_input: Option<String>,
    text: Option<String>,
    file: Option<PathBuf>,
) -> anyhow::Result<Vec<u8>> {
    if let Some(h) = hex_input {
        return hex::decode(h.trim()).context("invalid hex input");
    }
    if let Some(t) = text {
        return Ok(t.into_bytes());
    }
    if let Some(path) = file {
        return std::fs::read(&path).with_context(|| format!("reading {}", path.display()));
    }

    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .context("reading stdin")?;
    Ok(buf)
}

fn cmd_hash(
    hex_input: Option<String>,
    text: Option<String>,
    file: Option<PathBuf>,
    offset: Option<usize>,
    length: Option<usize>,
) -> anyhow::Result<()> {
    let message = read_message(hex_input, text, file)?;

    let digest = match (offset, length) {
        (Some(offset), Some(length)) => x13_core::digest_range(&message, offset, length)?,
        _ => x13_core::digest(&message)?,
    };

    println!("{}", digest);
    Ok(())
}

fn cmd_benchmark(count: u32) -> anyhow::Result<()> {
    println!("Running benchmark with {} digests...", count);

    let input = b"benchmark input data for the x13 chain";
    let backend = x13_core::initialize();

    let start = Instant::now();

    for i in 0..count {
        let mut data = input.to_vec();
        data.extend_from_slice(&i.to_le_bytes());
        let _ = x13_core::digest(&data)?;
    }

    let elapsed = start.elapsed();
    let hashrate = count as f64 / elapsed.as_secs_f64();

    println!("\nResults:");
    println!("  Backend: {}", backend_name(backend));
    println!("  Total digests: {}", count);
    println!("  Time elapsed: {:.2}s", elapsed.as_secs_f64());
    println!("  Hashrate: {:.2} H/s", hashrate);

    Ok(())
}

fn cmd_info() -> anyhow::Result<()> {
    let backend = x13_core::initialize();

    println!("Backend: {}", backend_name(backend));
    println!("Output: 32 bytes (first half of the final 512-bit state)");
    println!("\nStage order ({} stages):", STAGE_COUNT);
    for (index, stage) in StageKind::CHAIN.iter().enumerate() {
        println!("  {:2}. {}", index + 1, stage.name());
    }

    Ok(())
}

fn backend_name(backend: Backend) -> &'static str {
    match backend {
        Backend::Accelerated => "accelerated",
        Backend::Portable => "portable",
    }
}
