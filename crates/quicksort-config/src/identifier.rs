//! Namespaced identifiers for blocks, items, and tags
//!
//! An identifier is written `namespace:path`. A bare `path` is resolved
//! against [`DEFAULT_NAMESPACE`], so `"chest"` and `"minecraft:chest"`
//! name the same block.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

/// Namespace assumed when an identifier omits one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Registry that sorting-group tags are looked up in.
pub const ITEM_TAG_REGISTRY: &str = "item";

static NAMESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_.-]+$").unwrap());

static PATH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_./-]+$").unwrap());

pub(crate) fn is_valid_namespace(namespace: &str) -> bool {
    NAMESPACE_PATTERN.is_match(namespace)
}

pub(crate) fn is_valid_path(path: &str) -> bool {
    PATH_PATTERN.is_match(path)
}

/// Rejected identifier text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier '{value}': {reason}")]
pub struct IdentifierError {
    pub value: String,
    pub reason: &'static str,
}

/// A validated `namespace:path` identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    /// Build an identifier from already separated parts.
    pub fn new(
        namespace: impl Into<String>,
        path: impl Into<String>,
    ) -> std::result::Result<Self, IdentifierError> {
        let namespace = namespace.into();
        let path = path.into();
        let reject = |reason| IdentifierError {
            value: format!("{namespace}:{path}"),
            reason,
        };

        if namespace.is_empty() {
            return Err(reject("namespace is empty"));
        }
        if path.is_empty() {
            return Err(reject("path is empty"));
        }
        if !is_valid_namespace(&namespace) {
            return Err(reject("namespace may only contain [a-z0-9_.-]"));
        }
        if !is_valid_path(&path) {
            return Err(reject("path may only contain [a-z0-9_./-]"));
        }

        Ok(Self { namespace, path })
    }

    /// Identifier in the default namespace.
    pub fn with_default_namespace(
        path: impl Into<String>,
    ) -> std::result::Result<Self, IdentifierError> {
        Self::new(DEFAULT_NAMESPACE, path)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::with_default_namespace(s),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Reference to a tag in a registry, e.g. `#minecraft:wool` in the item registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TagKey {
    pub registry: &'static str,
    pub id: Identifier,
}

impl TagKey {
    /// Tag in the item registry.
    pub fn item(id: Identifier) -> Self {
        Self {
            registry: ITEM_TAG_REGISTRY,
            id,
        }
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_qualified() {
        let id: Identifier = "minecraft:chest".parse().unwrap();
        assert_eq!(id.namespace(), "minecraft");
        assert_eq!(id.path(), "chest");
    }

    #[test]
    fn test_parse_bare_uses_default_namespace() {
        let id: Identifier = "barrel".parse().unwrap();
        assert_eq!(id.to_string(), "minecraft:barrel");
    }

    #[test]
    fn test_path_may_contain_slashes() {
        let id: Identifier = "mymod:blocks/crate".parse().unwrap();
        assert_eq!(id.path(), "blocks/crate");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(":chest".parse::<Identifier>().is_err());
        assert!("minecraft:".parse::<Identifier>().is_err());
        assert!("Minecraft:Chest".parse::<Identifier>().is_err());
        assert!("minecraft:a:b".parse::<Identifier>().is_err());
        assert!("".parse::<Identifier>().is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let id: Identifier = "minecraft:chest".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"minecraft:chest\"");
    }

    #[test]
    fn test_tag_key_display() {
        let tag = TagKey::item(Identifier::with_default_namespace("wool").unwrap());
        assert_eq!(tag.to_string(), "#minecraft:wool");
        assert_eq!(tag.registry, ITEM_TAG_REGISTRY);
    }
}
