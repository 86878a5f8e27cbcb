//! Loosely typed view of a configuration document
//!
//! Every field is optional here; presence is checked later by the cascade
//! resolver. A `//` comment trailing a value on the same line is ignored. JSON `null` is treated the same as an absent key, and unknown
//! keys are ignored so older files keep loading.
//!
//! # Example document
//!
//! ```json
//! {
//!   "quicksortChests": [
//!     { "baseBlockId": "minecraft:diamond_block", "range": 8 },
//!     { "baseBlockId": "minecraft:gold_block", "range": 4 }
//!   ],
//!   "logLevel": "INFO"
//! }
//! ```

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::strip::StrippedText;

/// Top-level document record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    /// Chest profiles in declaration order
    #[serde(default)]
    pub quicksort_chests: Option<Vec<PartialChestProfile>>,
    /// Severity name, validated by the assembler
    #[serde(default)]
    pub log_level: Option<String>,
}

/// A chest profile as written, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialChestProfile {
    #[serde(default)]
    pub base_block_id: Option<String>,
    #[serde(default)]
    pub range: Option<i32>,
    #[serde(default)]
    pub cooldown_ticks: Option<i32>,
    #[serde(default)]
    pub animation_ticks: Option<i32>,
    #[serde(default)]
    pub sound_volume: Option<f32>,
    #[serde(default)]
    pub sound_pitch: Option<f32>,
    #[serde(default)]
    pub nbt_match_enabled_ids: Option<Vec<String>>,
    #[serde(default)]
    pub target_container_ids: Option<Vec<String>>,
    /// Raw token lists; `null` entries are skipped during classification
    #[serde(default)]
    pub sorting_groups: Option<Vec<Option<Vec<String>>>>,
    #[serde(default)]
    pub support_item_frames: Option<bool>,
}

impl RawConfig {
    /// Parse comment-stripped text.
    ///
    /// Error positions are reported against the original, unstripped document.
    pub fn parse(stripped: &StrippedText) -> Result<Self> {
        let text = strip_trailing_comments(stripped.as_str());
        serde_json::from_str(&text).map_err(|e| Error::Parse {
            line: stripped.original_line(e.line()),
            column: e.column(),
            message: strip_position_suffix(&e.to_string()),
        })
    }
}

/// Drop `//` tails outside string literals. Line count and the columns
/// before each comment are unchanged.
fn strip_trailing_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        out.push_str(without_trailing_comment(line));
        out.push('\n');
    }
    out
}

fn without_trailing_comment(line: &str) -> &str {
    let mut in_string = false;
    let mut escaped = false;
    let mut after_slash = false;

    for (idx, c) in line.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '/' if after_slash => return &line[..idx - 1],
            '/' => after_slash = true,
            '"' => {
                in_string = true;
                after_slash = false;
            }
            _ => after_slash = false,
        }
    }
    line
}

/// serde_json appends " at line X column Y" to its messages. Those positions
/// refer to the stripped text, so drop them in favor of the mapped ones.
fn strip_position_suffix(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}
