// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate files for the CLI.
//!
//! Each record is one candidate as the dictionary layer would report it, raw
//! sentinels included:
//!
//! ```json
//! {"word": "hello", "score": 120, "kind": "correction"}
//! {"codePoints": [104, 105], "score": -1, "prediction": true}
//! ```
//!
//! A file is either a JSON array of records or one record per line. Blank
//! lines are skipped.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use suggestset::{
    confidence_from_raw, index_from_raw, probability_from_raw, Candidate, Insertion, KindFlags,
    RankedResultSet, SuggestionKind,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CandidateRecord {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub code_points: Option<Vec<u32>>,
    pub score: i32,
    #[serde(default)]
    pub kind: SuggestionKind,
    #[serde(default)]
    pub flags: u32,
    /// Raw index; negative means none.
    #[serde(default)]
    pub partial_commit_index: Option<i32>,
    /// Raw confidence; `i32::MIN` means none.
    #[serde(default)]
    pub auto_commit_confidence: Option<i32>,
    /// Route through the prediction path, where `score == -1` is skipped.
    #[serde(default)]
    pub prediction: bool,
}

/// A record resolved into what the result set accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Prediction {
        code_points: Vec<u32>,
        probability: Option<i32>,
    },
    Suggestion(Candidate),
}

impl Entry {
    pub fn apply(self, set: &mut RankedResultSet) -> Insertion {
        match self {
            Entry::Prediction {
                code_points,
                probability,
            } => set.add_prediction(code_points, probability),
            Entry::Suggestion(candidate) => set.insert(candidate),
        }
    }

    /// Candidate form, for batch ranking. Skipped predictions yield `None`.
    pub fn into_candidate(self) -> Option<Candidate> {
        match self {
            Entry::Prediction {
                code_points,
                probability,
            } => probability.map(|p| Candidate::new(code_points, p, SuggestionKind::Prediction)),
            Entry::Suggestion(candidate) => Some(candidate),
        }
    }
}

impl CandidateRecord {
    pub fn into_entry(self) -> Result<Entry> {
        let code_points = match (self.word, self.code_points) {
            (Some(word), None) => word.chars().map(u32::from).collect(),
            (None, Some(code_points)) => code_points,
            (Some(_), Some(_)) => bail!("record has both \"word\" and \"codePoints\""),
            (None, None) => bail!("record needs \"word\" or \"codePoints\""),
        };

        if self.prediction {
            return Ok(Entry::Prediction {
                code_points,
                probability: probability_from_raw(self.score),
            });
        }

        let candidate = Candidate::new(code_points, self.score, self.kind)
            .with_flags(KindFlags::from_bits_truncate(self.flags))
            .with_partial_commit_index(self.partial_commit_index.and_then(index_from_raw))
            .with_auto_commit_confidence(self.auto_commit_confidence.and_then(confidence_from_raw));
        Ok(Entry::Suggestion(candidate))
    }
}

/// Parse records from a JSON array or JSON lines.
pub fn parse_entries(content: &str) -> Result<Vec<Entry>> {
    let records: Vec<CandidateRecord> = if content.trim_start().starts_with('[') {
        serde_json::from_str(content).context("invalid candidate array")?
    } else {
        // Numbered over the untrimmed text so errors point at the file's own lines
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line).with_context(|| format!("invalid record on line {}", i + 1))
            })
            .collect::<Result<_>>()?
    };

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            record
                .into_entry()
                .with_context(|| format!("record {}", i + 1))
        })
        .collect()
}

pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_entries(&content).with_context(|| format!("in {}", path.display()))
}
