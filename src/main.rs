// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point: read a bound, print the number of fixed points.

use anyhow::{Context, Result};
use clap::Parser;
use digitsum_fixed_points::context::DEFAULT_CACHE_CAPACITY;
use digitsum_fixed_points::{parse_bound, CacheConfig, CountingContext};
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Upper bound n; read from the first line of standard input when omitted
    bound: Option<String>,

    /// Capacity of the digit and digit-sum caches
    #[arg(long, default_value_t = DEFAULT_CACHE_CAPACITY)]
    digit_cache: usize,

    /// Capacity of the range-count cache
    #[arg(long, default_value_t = DEFAULT_CACHE_CAPACITY)]
    range_cache: usize,

    /// Log cache and search statistics to stderr
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.stats { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let text = match args.bound {
        Some(text) => text,
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("reading bound from standard input")?;
            line
        }
    };
    let bound = parse_bound(&text).context("parsing bound")?;

    let mut ctx = CountingContext::with_config(CacheConfig {
        digit_capacity: args.digit_cache,
        range_capacity: args.range_cache,
    });
    let fixed_points = ctx
        .count_fixed_points(bound)
        .with_context(|| format!("counting fixed points up to {}", bound))?;
    println!("{}", fixed_points);

    if args.stats {
        ctx.statistics.log_summary();
    }
    Ok(())
}
