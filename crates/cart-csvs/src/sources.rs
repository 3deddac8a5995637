/*!
# External Collaborators

[`CartParser`](crate::CartParser) gets raw text through a [`SourceReader`] and
item identifiers from an [`IdGenerator`]. Both are injected at construction, so
tests can hand in in-memory text or deterministic ids.
*/

use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

// ================================================================================================
// Source Readers
// ================================================================================================

pub trait SourceReader {
    /// Full contents of the source at `path`
    fn read_source(&self, path: &Path) -> io::Result<String>;
}

/// Reads sources from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl SourceReader for FsReader {
    fn read_source(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl<F> SourceReader for F
where
    F: Fn(&Path) -> io::Result<String>,
{
    fn read_source(&self, path: &Path) -> io::Result<String> {
        self(path)
    }
}

// ================================================================================================
// Identifier Generators
// ================================================================================================

pub trait IdGenerator {
    /// A fresh identifier, never returned before by this generator
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `<prefix>-1`, `<prefix>-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
