//! Shared configuration documents under `test-fixtures/configs/`.

use std::fs;
use std::path::PathBuf;

/// Directory holding the fixture documents.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/configs")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Raw bytes of a fixture document.
///
/// # Panics
/// Panics if the fixture does not exist.
pub fn fixture_bytes(name: &str) -> Vec<u8> {
    let path = fixture_path(name);
    fs::read(&path).unwrap_or_else(|e| panic!("missing fixture {}: {e}", path.display()))
}
