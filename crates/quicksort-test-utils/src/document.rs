//! Builders for configuration document text.
//!
//! Tests describe only the fields they care about; everything else is left
//! out of the generated JSON so the cascade has to fill it in.

use serde_json::{Map, Value, json};

/// One entry of the `quicksortChests` list.
#[derive(Debug, Clone, Default)]
pub struct ChestEntry {
    fields: Map<String, Value>,
}

impl ChestEntry {
    /// An entry with no fields at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// An entry that sets every required field.
    pub fn complete(base_block_id: &str) -> Self {
        Self::empty()
            .base_block_id(base_block_id)
            .range(8)
            .cooldown_ticks(2)
            .animation_ticks(6)
            .sound_volume(0.5)
            .sound_pitch(2.0)
            .nbt_match_enabled_ids(&[])
            .target_container_ids(&["minecraft:chest"])
    }

    pub fn base_block_id(self, id: &str) -> Self {
        self.with("baseBlockId", json!(id))
    }

    pub fn range(self, range: i32) -> Self {
        self.with("range", json!(range))
    }

    pub fn cooldown_ticks(self, ticks: i32) -> Self {
        self.with("cooldownTicks", json!(ticks))
    }

    pub fn animation_ticks(self, ticks: i32) -> Self {
        self.with("animationTicks", json!(ticks))
    }

    pub fn sound_volume(self, volume: f32) -> Self {
        self.with("soundVolume", json!(volume))
    }

    pub fn sound_pitch(self, pitch: f32) -> Self {
        self.with("soundPitch", json!(pitch))
    }

    pub fn nbt_match_enabled_ids(self, ids: &[&str]) -> Self {
        self.with("nbtMatchEnabledIds", json!(ids))
    }

    pub fn target_container_ids(self, ids: &[&str]) -> Self {
        self.with("targetContainerIds", json!(ids))
    }

    pub fn sorting_groups(self, groups: &[&[&str]]) -> Self {
        self.with("sortingGroups", json!(groups))
    }

    pub fn support_item_frames(self, enabled: bool) -> Self {
        self.with("supportItemFrames", json!(enabled))
    }

    /// Set an arbitrary key, including ones the engine does not know.
    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Drop a key set earlier.
    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Render a full document from entries and an optional `logLevel`.
pub fn config_document(entries: Vec<ChestEntry>, log_level: Option<&str>) -> String {
    let chests: Vec<Value> = entries.into_iter().map(ChestEntry::into_value).collect();
    let mut root = Map::new();
    root.insert("quicksortChests".to_string(), Value::Array(chests));
    if let Some(level) = log_level {
        root.insert("logLevel".to_string(), json!(level));
    }
    serde_json::to_string_pretty(&Value::Object(root)).unwrap()
}

/// Insert a `// comment` line before every line of `document`.
pub fn interleave_comments(document: &str) -> String {
    document
        .lines()
        .enumerate()
        .map(|(i, line)| format!("  // note {i}: keep this \"quoted\" {{ text }}\n{line}\n"))
        .collect()
}
