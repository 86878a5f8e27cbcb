//! Classify command implementation

use colored::Colorize;
use quicksort_config::SortingGroupItem;

use crate::error::{CliError, Result};

/// Run the classify command
pub fn run_classify(tokens: &[String]) -> Result<()> {
    let mut malformed = 0;

    for token in tokens {
        match SortingGroupItem::classify(token) {
            Ok(item) => println!("{:<32} {:<20} {}", token, kind(&item).cyan(), item),
            Err(e) => {
                malformed += 1;
                println!("{:<32} {:<20} {}", token, "malformed".red(), e);
            }
        }
    }

    if malformed > 0 {
        return Err(CliError::user(format!(
            "{malformed} of {} token(s) could not be classified",
            tokens.len()
        )));
    }
    Ok(())
}

fn kind(item: &SortingGroupItem) -> &'static str {
    match item {
        SortingGroupItem::Tag { .. } => "tag",
        SortingGroupItem::ItemId { .. } => "item",
        SortingGroupItem::ItemIdWithWildcard { .. } => "item-wildcard",
    }
}
