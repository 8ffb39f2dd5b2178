// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the suggestset command-line interface.
//!
//! Two subcommands over a file of scored candidates: `rank` prints the
//! surviving suggestions, `scores` prints only their scores. Both read the
//! same input and the same ranking options.

pub mod display;
pub mod input;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "suggestset",
    about = "Keep the best-scoring word suggestions from a candidate stream",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidates and print the retained suggestions
    Rank {
        #[command(flatten)]
        options: RankOptions,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rank candidates and print only the scores, best first
    Scores {
        #[command(flatten)]
        options: RankOptions,
    },
}

#[derive(Args)]
pub struct RankOptions {
    /// Candidate file: a JSON array or one JSON object per line
    pub input: PathBuf,

    /// Maximum number of suggestions to keep (overrides --config)
    #[arg(short, long)]
    pub capacity: Option<usize>,

    /// Auxiliary weight reported with the results (overrides --config)
    #[arg(short, long)]
    pub weight: Option<f32>,

    /// JSON ranking config: {"capacity": N, "weight": W}
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Rank across all cores; arrival order between equal keys is not kept
    #[cfg(feature = "parallel")]
    #[arg(long)]
    pub parallel: bool,
}
