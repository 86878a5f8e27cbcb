//! Resolved configuration model and the parse entry points
//!
//! [`parse`] is the single entry point of the engine: it strips comments,
//! parses the document, runs the profile cascade, and validates `logLevel`.
//! The returned [`Configuration`] is immutable; callers that reload replace
//! the whole value.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::cascade::resolve_all;
use crate::document::RawConfig;
use crate::error::Result;
use crate::identifier::Identifier;
use crate::severity::LogSeverity;
use crate::sorting::SortingGroup;
use crate::strip::{decode, strip_comments};

/// Fully resolved settings for one kind of sorting chest.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChestProfile {
    /// Block the chest must sit on to sort
    pub base_block_id: Identifier,
    /// Search radius for target containers
    pub range: i32,
    pub cooldown_ticks: i32,
    pub animation_ticks: i32,
    pub sound_volume: f32,
    pub sound_pitch: f32,
    /// Items whose extra data must match for them to sort together
    pub nbt_match_enabled_ids: BTreeSet<Identifier>,
    /// Container blocks that may receive items
    pub target_container_ids: BTreeSet<Identifier>,
    pub sorting_groups: BTreeSet<SortingGroup>,
    pub support_item_frames: bool,
}

/// The resolved configuration snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    chest_profiles: Vec<ChestProfile>,
    log_severity: LogSeverity,
}

impl Configuration {
    /// Profiles in declaration order.
    pub fn chest_profiles(&self) -> &[ChestProfile] {
        &self.chest_profiles
    }

    pub fn log_severity(&self) -> LogSeverity {
        self.log_severity
    }

    /// Profile whose base block is `block_id`, if any. The first match wins.
    pub fn profile_for(&self, block_id: &Identifier) -> Option<&ChestProfile> {
        self.chest_profiles
            .iter()
            .find(|p| &p.base_block_id == block_id)
    }

    /// Pretty-printed JSON view of the resolved model.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Resolve raw configuration bytes.
///
/// `template` seeds the cascade for the first profile. Without one, the
/// first profile must spell out every required field.
pub fn parse(bytes: &[u8], template: Option<&ChestProfile>) -> Result<Configuration> {
    parse_str(decode(bytes)?, template)
}

/// Resolve configuration text. See [`parse`].
pub fn parse_str(text: &str, template: Option<&ChestProfile>) -> Result<Configuration> {
    let stripped = strip_comments(text);
    let raw = RawConfig::parse(&stripped)?;
    assemble(raw, template)
}

fn assemble(raw: RawConfig, template: Option<&ChestProfile>) -> Result<Configuration> {
    let log_severity = match raw.log_level.as_deref() {
        Some(name) => name.parse()?,
        None => LogSeverity::default(),
    };

    let entries = raw.quicksort_chests.unwrap_or_else(|| {
        tracing::warn!("Configuration has no quicksortChests list; no chests will sort");
        Vec::new()
    });
    let chest_profiles = resolve_all(&entries, template)?;

    Ok(Configuration {
        chest_profiles,
        log_severity,
    })
}
