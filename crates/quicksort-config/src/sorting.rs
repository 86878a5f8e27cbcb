//! Sorting group token classification
//!
//! A sorting group is a list of tokens naming items that may be sorted
//! into the same container. Each token is classified by shape:
//!
//! | Token              | Variant                                  |
//! |--------------------|------------------------------------------|
//! | `minecraft:*wool`  | [`SortingGroupItem::ItemIdWithWildcard`] |
//! | `minecraft:stick`  | [`SortingGroupItem::ItemId`]             |
//! | `wool_items`       | [`SortingGroupItem::Tag`]                |
//!
//! Only the first `:` splits namespace from path. A `*` anywhere, including
//! the namespace (`*:stone`), makes the token a wildcard pattern.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::identifier::{Identifier, TagKey, is_valid_namespace, is_valid_path};

const NAMESPACE_SEPARATOR: char = ':';
const WILDCARD: char = '*';

/// A set of interchangeable matchers.
pub type SortingGroup = BTreeSet<SortingGroupItem>;

/// Classified form of one sorting group token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SortingGroupItem {
    /// Every item carrying the tag.
    Tag { tag: TagKey },
    /// Exactly one item.
    ItemId { id: Identifier },
    /// Items in `namespace` whose path matches a `*` pattern.
    ItemIdWithWildcard { namespace: String, path: String },
}

impl SortingGroupItem {
    /// Classify a raw token.
    pub fn classify(token: &str) -> Result<Self> {
        let Some((namespace, path)) = token.split_once(NAMESPACE_SEPARATOR) else {
            let id = Identifier::with_default_namespace(token)
                .map_err(|e| Error::malformed(token, e.reason))?;
            return Ok(SortingGroupItem::Tag {
                tag: TagKey::item(id),
            });
        };

        if namespace.is_empty() {
            return Err(Error::malformed(token, "namespace is empty"));
        }
        if path.is_empty() {
            return Err(Error::malformed(token, "path is empty"));
        }
        if path.contains(NAMESPACE_SEPARATOR) {
            return Err(Error::malformed(token, "more than one ':' separator"));
        }

        if token.contains(WILDCARD) {
            let namespace_literal = namespace.replace(WILDCARD, "");
            if !namespace_literal.is_empty() && !is_valid_namespace(&namespace_literal) {
                return Err(Error::malformed(token, "namespace may only contain [a-z0-9_.-] and '*'"));
            }
            let literal = path.replace(WILDCARD, "");
            if !literal.is_empty() && !is_valid_path(&literal) {
                return Err(Error::malformed(token, "path may only contain [a-z0-9_./-] and '*'"));
            }
            return Ok(SortingGroupItem::ItemIdWithWildcard {
                namespace: namespace.to_string(),
                path: path.to_string(),
            });
        }

        let id = Identifier::new(namespace, path).map_err(|e| Error::malformed(token, e.reason))?;
        Ok(SortingGroupItem::ItemId { id })
    }
}

impl fmt::Display for SortingGroupItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortingGroupItem::Tag { tag } => write!(f, "{tag}"),
            SortingGroupItem::ItemId { id } => write!(f, "{id}"),
            SortingGroupItem::ItemIdWithWildcard { namespace, path } => {
                write!(f, "{namespace}:{path}")
            }
        }
    }
}

/// Classify one group of tokens. Duplicate classifications collapse.
pub fn classify_group<S: AsRef<str>>(tokens: &[S]) -> Result<SortingGroup> {
    tokens
        .iter()
        .map(|t| SortingGroupItem::classify(t.as_ref()))
        .collect()
}

/// Classify every group, skipping `null` and empty lists.
pub fn classify_groups(groups: &[Option<Vec<String>>]) -> Result<BTreeSet<SortingGroup>> {
    groups
        .iter()
        .flatten()
        .filter(|tokens| !tokens.is_empty())
        .map(|tokens| classify_group(tokens.as_slice()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::DEFAULT_NAMESPACE;

    #[test]
    fn test_wildcard_keeps_pattern_verbatim() {
        let item = SortingGroupItem::classify("minecraft:*_wool").unwrap();
        assert_eq!(
            item,
            SortingGroupItem::ItemIdWithWildcard {
                namespace: "minecraft".into(),
                path: "*_wool".into(),
            }
        );
        assert_eq!(item.to_string(), "minecraft:*_wool");
    }

    #[test]
    fn test_pure_wildcard_path() {
        let item = SortingGroupItem::classify("mymod:*").unwrap();
        assert!(matches!(item, SortingGroupItem::ItemIdWithWildcard { .. }));
    }

    #[test]
    fn test_bare_token_is_tag_in_default_namespace() {
        let item = SortingGroupItem::classify("logs").unwrap();
        match item {
            SortingGroupItem::Tag { tag } => {
                assert_eq!(tag.id.namespace(), DEFAULT_NAMESPACE);
                assert_eq!(tag.id.path(), "logs");
            }
            other => panic!("expected tag, got {other:?}"),
        }
    }

    #[test]
    fn test_wildcard_in_namespace_is_a_pattern() {
        let item = SortingGroupItem::classify("*:stone").unwrap();
        assert_eq!(
            item,
            SortingGroupItem::ItemIdWithWildcard {
                namespace: "*".into(),
                path: "stone".into(),
            }
        );
    }

    #[test]
    fn test_classify_group_collapses_duplicates() {
        let group = classify_group(&["minecraft:stick", "minecraft:stick", "sticks"]).unwrap();
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_classify_groups_skips_null_and_empty() {
        let groups = vec![None, Some(vec![]), Some(vec!["minecraft:stick".to_string()])];
        let classified = classify_groups(&groups).unwrap();
        assert_eq!(classified.len(), 1);
    }

    #[test]
    fn test_one_bad_token_fails_the_group() {
        let err = classify_group(&["minecraft:stick", "minecraft:"]).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedToken {
                token: "minecraft:".into(),
                reason: "path is empty".into(),
            }
        );
    }
}
