// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use suggestset::{Insertion, RankedResultSet, RankingConfig};

mod cli;
use cli::input::load_entries;
use cli::{display, Cli, Commands, RankOptions};

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank { options, json } => {
            let (mut set, config) = rank(&options)?;
            set.dump();
            let output = set.drain();
            if json {
                let rendered =
                    serde_json::to_string_pretty(&output).context("failed to encode results")?;
                println!("{}", rendered);
            } else {
                display::print_ranked(&output, config.capacity);
            }
        }
        Commands::Scores { options } => {
            let (set, _) = rank(&options)?;
            display::print_scores(&set.extract_scores());
        }
    }

    Ok(())
}

fn load_config(options: &RankOptions) -> Result<RankingConfig> {
    let base = match &options.config {
        Some(path) => RankingConfig::load(path)?,
        None => RankingConfig::default(),
    };
    Ok(base
        .with_overrides(options.capacity, options.weight)
        .validate()?)
}

fn rank(options: &RankOptions) -> Result<(RankedResultSet, RankingConfig)> {
    let config = load_config(options)?;
    let entries = load_entries(&options.input)?;
    let total = entries.len();

    #[cfg(feature = "parallel")]
    if options.parallel {
        let candidates = entries
            .into_iter()
            .filter_map(cli::input::Entry::into_candidate)
            .collect();
        let set = suggestset::parallel::rank_parallel_with(candidates, &config);
        info!(total, retained = set.len(), "ranked in parallel");
        return Ok((set, config));
    }

    let mut set = RankedResultSet::from_config(&config);
    let mut invalid = 0usize;
    let mut skipped = 0usize;
    for entry in entries {
        match entry.apply(&mut set) {
            Insertion::Invalid(_) => invalid += 1,
            Insertion::Skipped => skipped += 1,
            _ => {}
        }
    }
    info!(total, invalid, skipped, retained = set.len(), "ranked");

    Ok((set, config))
}
