//! Bundled default configuration
//!
//! The default document ships inside the crate. It is written out for new
//! installs, and its first profile is the template that seeds the cascade
//! for user documents.

use crate::config::{ChestProfile, Configuration, parse, parse_str};
use crate::error::{Error, Result};

/// Name of the bundled default document.
pub const DEFAULT_CONFIG_RESOURCE_NAME: &str = "quicksort-default-config.json5";

/// File name user configuration is read from.
pub const CONFIG_FILENAME: &str = "quicksort.json5";

/// Text of the bundled default document.
pub const DEFAULT_CONFIG_DOCUMENT: &str =
    include_str!("../resources/quicksort-default-config.json5");

/// The bundled document, resolved without a template.
pub fn bundled_config() -> Result<Configuration> {
    parse_str(DEFAULT_CONFIG_DOCUMENT, None)
}

/// First profile of the bundled document.
pub fn bundled_template() -> Result<ChestProfile> {
    bundled_config()?
        .chest_profiles()
        .first()
        .cloned()
        .ok_or(Error::EmptyBundledConfig)
}

/// Resolve a user document seeded with [`bundled_template`].
pub fn parse_with_bundled_template(bytes: &[u8]) -> Result<Configuration> {
    let template = bundled_template()?;
    parse(bytes, Some(&template))
}
