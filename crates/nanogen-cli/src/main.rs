#![doc = include_str!("../README.md")]

mod config;
mod telemetry;

use anyhow::Context;
use clap::Parser;
use config::{CliArgs, CliConfig, SourceKind};
use nanogen::{CounterGenerator, IdGenerator, NanoGenerator, OsRandom, ThreadRandom};
use std::io::{self, Write};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = CliConfig::try_from(args)?;

    init_telemetry(&config.log)?;
    log_startup_info(&config);

    // Built once and reused for every identifier.
    let generator = config.generator.clone();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.source {
        SourceKind::Os => {
            let generator = NanoGenerator::try_from_config(generator, OsRandom)?;
            mint(&generator, config.count, &mut out)
        }
        SourceKind::Thread => {
            let generator = NanoGenerator::try_from_config(generator, ThreadRandom)?;
            mint(&generator, config.count, &mut out)
        }
        SourceKind::Counter => {
            let generator = CounterGenerator::new(generator.prefix, generator.length);
            mint(&generator, config.count, &mut out)
        }
    }
}

fn log_startup_info(config: &CliConfig) {
    if cfg!(debug_assertions) {
        tracing::debug!("Starting with full config: {:#?}", config);
    } else {
        tracing::debug!(
            "Minting {} identifier(s) from the {:?} source",
            config.count,
            config.source
        );
    }
}

/// Writes `count` identifiers to `out`, one per line.
///
/// Each identifier is entered as the `trace_id` of a span before it is
/// written, so everything logged while handling it carries the identifier.
fn mint<G, W>(generator: &G, count: usize, out: &mut W) -> anyhow::Result<()>
where
    G: IdGenerator,
    G::Err: std::error::Error + Send + Sync + 'static,
    W: Write,
{
    for seq in 0..count {
        let trace_id = generator
            .generate()
            .context("failed to generate identifier")?;

        let span = tracing::info_span!("unit", trace_id = %trace_id);
        let _guard = span.enter();

        writeln!(out, "{trace_id}").context("failed to write identifier")?;
        tracing::debug!(seq, "identifier issued");
    }
    out.flush()?;

    tracing::info!(count, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanogen::DEFAULT_ALPHABET;

    #[test]
    fn mint_writes_one_per_line() {
        let generator = CounterGenerator::new("x", 3);
        let mut out = Vec::new();
        mint(&generator, 3, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "x001\nx002\nx003\n");
    }

    #[test]
    fn mint_random() {
        let generator = NanoGenerator::with_prefix_and_source("r_", ThreadRandom);
        let mut out = Vec::new();
        mint(&generator, 5, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            let id = line.strip_prefix("r_").unwrap();
            assert_eq!(id.len(), generator.length());
            assert!(id.bytes().all(|b| DEFAULT_ALPHABET.as_bytes().contains(&b)));
        }
    }
}
