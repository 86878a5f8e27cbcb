//! Show command implementation

use std::collections::BTreeSet;
use std::fmt::Display;
use std::path::Path;

use colored::Colorize;
use quicksort_config::{ChestProfile, SortingGroup};
use quicksort_store::ConfigStore;

use crate::error::Result;
use crate::logging::Logging;

/// Run the show command
pub fn run_show(
    store: ConfigStore,
    file: Option<&Path>,
    json: bool,
    logging: &Logging,
) -> Result<()> {
    let (path, config) = super::load(store, file, logging)?;

    if json {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    println!("{} ({})", "Chest Profiles".bold(), path.display());
    println!();

    if config.chest_profiles().is_empty() {
        println!("  {}", "None".dimmed());
        println!();
    }

    for (idx, profile) in config.chest_profiles().iter().enumerate() {
        print_profile(idx, profile);
        println!();
    }

    println!("{}: {}", "Log Level".dimmed(), config.log_severity().to_string().cyan());

    Ok(())
}

fn print_profile(idx: usize, profile: &ChestProfile) {
    println!(
        "{} {}",
        format!("[{idx}]").dimmed(),
        profile.base_block_id.to_string().cyan().bold()
    );
    row("range", profile.range);
    row("cooldownTicks", profile.cooldown_ticks);
    row("animationTicks", profile.animation_ticks);
    row("soundVolume", profile.sound_volume);
    row("soundPitch", profile.sound_pitch);
    row("nbtMatchEnabledIds", join(&profile.nbt_match_enabled_ids));
    row("targetContainerIds", join(&profile.target_container_ids));
    row("sortingGroups", format_groups(&profile.sorting_groups));
    row("supportItemFrames", profile.support_item_frames);
}

fn row(label: &str, value: impl Display) {
    println!("    {:<20}{}", label.dimmed(), value);
}

fn join<T: Display>(items: &BTreeSet<T>) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_groups(groups: &BTreeSet<SortingGroup>) -> String {
    if groups.is_empty() {
        return "-".to_string();
    }
    groups
        .iter()
        .map(|group| format!("{{{}}}", join(group)))
        .collect::<Vec<_>>()
        .join(" ")
}
