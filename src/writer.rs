//! Writes fragments to disk, skipping files whose content has not changed.
//!
//! Every file starts with a `% generator-hash:` line holding the SHA-256 of
//! the body. LaTeX reads it as a comment; the writer reads it to decide
//! whether a rebuild would touch the file at all, which keeps `latexmk` from
//! recompiling an unchanged book.

use progbook_render::Fragment;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

const HASH_PREFIX: &str = "% generator-hash: ";

/// What happened to a fragment on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

pub fn content_hash(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

#[derive(Debug, Clone)]
pub struct FragmentWriter {
    root: PathBuf,
}

impl FragmentWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn stored_hash(path: &Path) -> io::Result<Option<String>> {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let mut first = String::new();
        BufReader::new(file).read_line(&mut first)?;
        Ok(first
            .trim_end()
            .strip_prefix(HASH_PREFIX)
            .map(str::to_string))
    }

    pub fn write(&self, fragment: &Fragment) -> io::Result<WriteOutcome> {
        let path = self.root.join(&fragment.name);
        let hash = content_hash(&fragment.content);

        if Self::stored_hash(&path)?.as_deref() == Some(hash.as_str()) {
            log::debug!("'{}' is up to date", path.display());
            return Ok(WriteOutcome::Unchanged);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, format!("{}{}\n\n{}", HASH_PREFIX, hash, fragment.content))?;
        log::info!("Updated '{}'", path.display());
        Ok(WriteOutcome::Written)
    }

    /// Writes every fragment and returns how many files changed.
    pub fn write_all(&self, fragments: &[Fragment]) -> io::Result<usize> {
        let mut written = 0;
        for fragment in fragments {
            if self.write(fragment)? == WriteOutcome::Written {
                written += 1;
            }
        }
        Ok(written)
    }
}
