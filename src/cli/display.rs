// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for ranked suggestions.
//!
//! OneDark for dark terminals, One Light for light ones. `SUGGESTSET_THEME`
//! picks explicitly, `COLORFGBG` is the fallback hint, dark is the default.
//! `NO_COLOR` and non-TTY stdout turn styling off entirely so piped output
//! stays plain.

use std::sync::OnceLock;

use suggestset::{Candidate, RankedOutput, SuggestionKind};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// Longest word shown before truncation
const WORD_COLUMN: usize = 28;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

impl Theme {
    /// `SUGGESTSET_THEME` value: "dark"/"d" or "light"/"l", any case.
    fn from_name(name: &str) -> Option<Theme> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" | "d" => Some(Theme::Dark),
            "light" | "l" => Some(Theme::Light),
            _ => None,
        }
    }

    /// `COLORFGBG` is "fg;bg" (sometimes "fg;default;bg"). ANSI backgrounds 7
    /// and 9..=15 are the light ones.
    fn from_colorfgbg(value: &str) -> Option<Theme> {
        let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        Some(match bg {
            7 | 9..=15 => Theme::Light,
            _ => Theme::Dark,
        })
    }
}

fn detect_theme() -> Theme {
    let env = |key: &str| std::env::var(key).ok();
    env("SUGGESTSET_THEME")
        .and_then(|name| Theme::from_name(&name))
        .or_else(|| env("COLORFGBG").and_then(|value| Theme::from_colorfgbg(&value)))
        .unwrap_or(Theme::Dark)
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

fn border(color_fn: fn() -> String) -> (String, &'static str) {
    if use_colors() {
        (color_fn(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Visible length, skipping ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Shorten a word to `max` chars, marking the cut with `…`.
pub fn truncate_word(word: &str, max: usize) -> String {
    if word.chars().count() <= max {
        word.to_string()
    } else {
        let kept: String = word.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let (b, r) = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}│{}{}{}{}│{}", b, r, content, " ".repeat(pad), b, r);
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (b, r) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}┌{}{}{}{}┐{}", b, r, label_part, b, "─".repeat(remaining), r);
}

/// └──────────────────┘
pub fn section_bot() {
    let (b, r) = border(GRAY);
    println!("{}└{}┘{}", b, "─".repeat(BOX_WIDTH), r);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Kind name, colored by family.
pub fn kind_label(kind: SuggestionKind) -> String {
    let color: fn() -> String = match kind {
        SuggestionKind::Typed | SuggestionKind::Resumed => GREEN,
        SuggestionKind::Correction | SuggestionKind::OovCorrection => YELLOW,
        SuggestionKind::Completion => BLUE,
        SuggestionKind::Prediction => MAGENTA,
        _ => GRAY,
    };
    themed(color, &[], kind.name())
}

/// Score, right-aligned. Negative scores are dimmed.
pub fn score_value(score: i32) -> String {
    let text = format!("{:>11}", score);
    if score < 0 {
        themed(GRAY, &[], &text)
    } else {
        themed(GREEN, &[BOLD], &text)
    }
}

fn metadata(candidate: &Candidate) -> String {
    let mut parts = Vec::new();
    if let Some(index) = candidate.partial_commit_index {
        parts.push(format!("commit@{}", index));
    }
    if let Some(confidence) = candidate.auto_commit_confidence {
        parts.push(format!("conf={}", confidence));
    }
    if !candidate.flags.is_empty() {
        parts.push(format!("flags={:#010x}", candidate.flags.bits()));
    }
    parts.join(" ")
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Boxed table of a ranking pass.
pub fn print_ranked(output: &RankedOutput, capacity: usize) {
    section_top("SUGGESTIONS");
    row(&format!(
        " {} of {} retained   weight: {}",
        output.count(),
        capacity,
        output
            .weight
            .map_or_else(|| "unset".to_string(), |w| format!("{:.4}", w))
    ));
    if let Some(confidence) = output.auto_commit_confidence() {
        row(&format!(" auto-commit confidence: {}", confidence));
    }
    row("");

    for (rank, candidate) in output.candidates.iter().enumerate() {
        let word = truncate_word(&candidate.word(), WORD_COLUMN);
        row(&format!(
            " {} {} {} {} {}",
            pad_left(&(rank + 1).to_string(), 3),
            pad_right(&word, WORD_COLUMN),
            score_value(candidate.score),
            pad_right(&kind_label(candidate.kind), 14),
            themed(GRAY, &[], &metadata(candidate)),
        ));
    }
    section_bot();
}

/// One score per line, best first.
pub fn print_scores(scores: &[i32]) {
    for score in scores {
        println!("{}", score);
    }
}
