//! Default cascade for chest profiles
//!
//! Profiles are resolved in declaration order. A field missing from entry
//! `i` is taken from the resolved entry `i - 1`; entry `0` falls back to the
//! template supplied by the caller. `sortingGroups` and `supportItemFrames`
//! never cascade: absent means empty / `false`.

use std::collections::BTreeSet;

use crate::config::ChestProfile;
use crate::document::PartialChestProfile;
use crate::error::{Error, Result};
use crate::identifier::Identifier;
use crate::sorting::classify_groups;

/// Resolves one entry against the profile before it.
struct FieldResolver<'a> {
    profile_index: usize,
    default_source: Option<&'a ChestProfile>,
    inherited: Vec<&'static str>,
}

impl<'a> FieldResolver<'a> {
    fn required<T>(
        &mut self,
        field: &'static str,
        explicit: Option<T>,
        inherit: impl FnOnce(&'a ChestProfile) -> T,
    ) -> Result<T> {
        if let Some(value) = explicit {
            return Ok(value);
        }
        match self.default_source {
            Some(default) => {
                self.inherited.push(field);
                Ok(inherit(default))
            }
            None => Err(Error::MissingRequiredField {
                profile_index: self.profile_index,
                field,
            }),
        }
    }

    fn identifier(&self, field: &'static str, value: &str) -> Result<Identifier> {
        value.parse().map_err(|_| Error::InvalidIdentifier {
            profile_index: self.profile_index,
            field,
            value: value.to_string(),
        })
    }

    fn identifier_set(
        &self,
        field: &'static str,
        values: Option<&[String]>,
    ) -> Result<Option<BTreeSet<Identifier>>> {
        values
            .map(|values| {
                values
                    .iter()
                    .map(|value| self.identifier(field, value))
                    .collect()
            })
            .transpose()
    }
}

/// Resolve `entry` (the `profile_index`-th declared profile) against
/// `default_source`.
///
/// Fails with [`Error::MissingRequiredField`] when a required field is
/// absent from both.
pub fn resolve_profile(
    profile_index: usize,
    entry: &PartialChestProfile,
    default_source: Option<&ChestProfile>,
) -> Result<ChestProfile> {
    let mut fields = FieldResolver {
        profile_index,
        default_source,
        inherited: Vec::new(),
    };

    let base_block_id = entry
        .base_block_id
        .as_deref()
        .map(|id| fields.identifier("baseBlockId", id))
        .transpose()?;
    let nbt_match_enabled_ids =
        fields.identifier_set("nbtMatchEnabledIds", entry.nbt_match_enabled_ids.as_deref())?;
    let target_container_ids =
        fields.identifier_set("targetContainerIds", entry.target_container_ids.as_deref())?;

    let profile = ChestProfile {
        base_block_id: fields.required("baseBlockId", base_block_id, |d| {
            d.base_block_id.clone()
        })?,
        range: fields.required("range", entry.range, |d| d.range)?,
        cooldown_ticks: fields.required("cooldownTicks", entry.cooldown_ticks, |d| {
            d.cooldown_ticks
        })?,
        animation_ticks: fields.required("animationTicks", entry.animation_ticks, |d| {
            d.animation_ticks
        })?,
        sound_volume: fields.required("soundVolume", entry.sound_volume, |d| d.sound_volume)?,
        sound_pitch: fields.required("soundPitch", entry.sound_pitch, |d| d.sound_pitch)?,
        nbt_match_enabled_ids: fields.required(
            "nbtMatchEnabledIds",
            nbt_match_enabled_ids,
            |d| d.nbt_match_enabled_ids.clone(),
        )?,
        target_container_ids: fields.required(
            "targetContainerIds",
            target_container_ids,
            |d| d.target_container_ids.clone(),
        )?,
        sorting_groups: match &entry.sorting_groups {
            Some(groups) => classify_groups(groups)?,
            None => BTreeSet::new(),
        },
        support_item_frames: entry.support_item_frames.unwrap_or(false),
    };

    tracing::debug!(
        profile_index,
        base_block_id = %profile.base_block_id,
        inherited = ?fields.inherited,
        "Resolved chest profile"
    );

    Ok(profile)
}

/// Resolve all entries in order, threading each result into the next.
pub fn resolve_all(
    entries: &[PartialChestProfile],
    template: Option<&ChestProfile>,
) -> Result<Vec<ChestProfile>> {
    entries
        .iter()
        .enumerate()
        .try_fold(Vec::with_capacity(entries.len()), |mut resolved, (idx, entry)| {
            let default_source = resolved.last().or(template);
            let profile = resolve_profile(idx, entry, default_source)?;
            resolved.push(profile);
            Ok(resolved)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::SortingGroupItem;
    use pretty_assertions::assert_eq;

    fn explicit_entry() -> PartialChestProfile {
        PartialChestProfile {
            base_block_id: Some("minecraft:diamond_block".into()),
            range: Some(8),
            cooldown_ticks: Some(2),
            animation_ticks: Some(6),
            sound_volume: Some(0.5),
            sound_pitch: Some(2.0),
            nbt_match_enabled_ids: Some(vec!["minecraft:potion".into()]),
            target_container_ids: Some(vec!["minecraft:chest".into(), "barrel".into()]),
            sorting_groups: Some(vec![Some(vec!["minecraft:stick".into()])]),
            support_item_frames: Some(true),
        }
    }

    #[test]
    fn test_explicit_entry_needs_no_default() {
        let profile = resolve_profile(0, &explicit_entry(), None).unwrap();
        assert_eq!(profile.base_block_id.to_string(), "minecraft:diamond_block");
        assert_eq!(profile.range, 8);
        assert_eq!(profile.target_container_ids.len(), 2);
        assert!(profile.support_item_frames);
        assert_eq!(profile.sorting_groups.len(), 1);
    }

    #[test]
    fn test_missing_field_without_default() {
        let entry = PartialChestProfile {
            cooldown_ticks: None,
            ..explicit_entry()
        };
        let err = resolve_profile(0, &entry, None).unwrap_err();
        assert_eq!(
            err,
            Error::MissingRequiredField {
                profile_index: 0,
                field: "cooldownTicks",
            }
        );
    }

    #[test]
    fn test_inherits_required_fields_only() {
        let first = resolve_profile(0, &explicit_entry(), None).unwrap();
        let entry = PartialChestProfile {
            base_block_id: Some("gold_block".into()),
            range: Some(4),
            ..Default::default()
        };

        let second = resolve_profile(1, &entry, Some(&first)).unwrap();

        assert_eq!(second.base_block_id.to_string(), "minecraft:gold_block");
        assert_eq!(second.range, 4);
        assert_eq!(second.cooldown_ticks, first.cooldown_ticks);
        assert_eq!(second.nbt_match_enabled_ids, first.nbt_match_enabled_ids);
        assert!(second.sorting_groups.is_empty());
        assert!(!second.support_item_frames);
    }

    #[test]
    fn test_explicit_empty_sorting_groups() {
        let entry = PartialChestProfile {
            sorting_groups: Some(vec![]),
            ..explicit_entry()
        };
        let profile = resolve_profile(0, &entry, None).unwrap();
        assert!(profile.sorting_groups.is_empty());
    }

    #[test]
    fn test_invalid_identifier_names_field() {
        let entry = PartialChestProfile {
            target_container_ids: Some(vec!["Not Valid".into()]),
            ..explicit_entry()
        };
        let err = resolve_profile(3, &entry, None).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidIdentifier {
                profile_index: 3,
                field: "targetContainerIds",
                value: "Not Valid".into(),
            }
        );
    }

    #[test]
    fn test_malformed_token_fails_profile() {
        let entry = PartialChestProfile {
            sorting_groups: Some(vec![Some(vec![":stick".into()])]),
            ..explicit_entry()
        };
        let err = resolve_profile(0, &entry, None).unwrap_err();
        assert!(matches!(err, Error::MalformedToken { .. }));
    }

    #[test]
    fn test_resolve_all_threads_previous_profile() {
        let entries = vec![
            explicit_entry(),
            PartialChestProfile {
                range: Some(2),
                ..Default::default()
            },
            PartialChestProfile {
                sound_pitch: Some(1.0),
                ..Default::default()
            },
        ];

        let resolved = resolve_all(&entries, None).unwrap();

        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[1].range, 2);
        // Third inherits range from the resolved second, not the first.
        assert_eq!(resolved[2].range, 2);
        assert_eq!(resolved[2].sound_pitch, 1.0);
        assert_eq!(resolved[2].sound_volume, 0.5);
        assert_eq!(
            resolved[0].sorting_groups.iter().next().unwrap().iter().next(),
            Some(&SortingGroupItem::classify("minecraft:stick").unwrap())
        );
    }
}
