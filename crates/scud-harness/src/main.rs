//! Micro-benchmark harness
//!
//! Loads an HTTP request capture fully into memory, then times N
//! back-to-back parse cycles per engine over the same buffer: the anchor
//! extractor from scud-core and a conventional incremental parser
//! (httparse). Each cycle resets the span table in place and re-parses,
//! so steady-state cycles allocate nothing.
//!
//! Usage: `scud-harness <file> <loop count>`
//!
//! Set `RUST_LOG=debug` to dump every populated span after each engine's
//! run.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

mod baseline;

use std::env;
use std::fs;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use bytes::Bytes;
use scud_core::{Extractor, Outcome, SpanTable};
use tracing::{debug, error, info};

/// Harness configuration parsed from the command line
#[derive(Debug, Clone)]
struct HarnessConfig {
    path: String,
    loops: u32,
}

impl HarnessConfig {
    fn from_args() -> Option<Self> {
        let mut args = env::args().skip(1);
        let path = args.next()?;
        let loops: u32 = args.next()?.parse().ok()?;
        if loops == 0 || args.next().is_some() {
            return None;
        }
        Some(Self { path, loops })
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let Some(config) = HarnessConfig::from_args() else {
        eprintln!("usage: scud-harness <file> <loop count>");
        return ExitCode::FAILURE;
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &HarnessConfig) -> Result<(), Box<dyn std::error::Error>> {
    let data = Bytes::from(fs::read(&config.path)?);
    info!(
        capture = %config.path,
        bytes = data.len(),
        loops = config.loops,
        "capture loaded"
    );

    let extractor = Extractor::new()?;
    let mut table = SpanTable::new();

    let mut total = Duration::ZERO;
    let mut outcome = Outcome::NotHttp;
    for _ in 0..config.loops {
        let start = Instant::now();
        outcome = extractor.parse(&data, &mut table)?;
        total += start.elapsed();
    }
    report("anchors", config, total, outcome, &table, &data);

    let mut total = Duration::ZERO;
    for _ in 0..config.loops {
        let start = Instant::now();
        outcome = baseline::parse(&data, &mut table);
        total += start.elapsed();
    }
    report("state-machine", config, total, outcome, &table, &data);

    Ok(())
}

fn report(
    engine: &str,
    config: &HarnessConfig,
    total: Duration,
    outcome: Outcome,
    table: &SpanTable,
    buf: &[u8],
) {
    info!(
        engine,
        loops = config.loops,
        total_ns = total.as_nanos() as u64,
        per_cycle_ns = (total.as_nanos() / u128::from(config.loops)) as u64,
        ?outcome,
        "engine finished"
    );
    for (kind, _) in table.populated() {
        if let Some(bytes) = table.slice(kind, buf) {
            debug!(
                engine,
                kind = ?kind,
                value = %String::from_utf8_lossy(bytes),
                "span"
            );
        }
    }
}
