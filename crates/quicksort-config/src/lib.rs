//! Chest profile configuration for Quicksort.
//!
//! Turns a comment-annotated JSON document into an immutable, fully
//! validated [`Configuration`]:
//!
//! 1. [`strip`] removes full-line `//` comments.
//! 2. [`document`] parses the text into all-optional records.
//! 3. [`cascade`] fills missing profile fields from the previous profile
//!    (or a template for the first one).
//! 4. [`sorting`] classifies sorting group tokens.
//! 5. [`config`] assembles the result and validates `logLevel`.
//!
//! # Example
//!
//! ```
//! use quicksort_config::{defaults, parse_str};
//!
//! let template = defaults::bundled_template().unwrap();
//! let config = parse_str(
//!     r#"{
//!   // Reach a little further than the default.
//!   "quicksortChests": [ { "range": 10 } ]
//! }"#,
//!     Some(&template),
//! )
//! .unwrap();
//!
//! assert_eq!(config.chest_profiles()[0].range, 10);
//! ```

pub mod cascade;
pub mod config;
pub mod defaults;
pub mod document;
pub mod error;
pub mod identifier;
pub mod severity;
pub mod sorting;
pub mod strip;

pub use config::{ChestProfile, Configuration, parse, parse_str};
pub use error::{Error, Result};
pub use identifier::{Identifier, IdentifierError, TagKey};
pub use severity::LogSeverity;
pub use sorting::{SortingGroup, SortingGroupItem};
