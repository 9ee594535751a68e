//! Artifact persistence.
//!
//! The writer is the only place rendered artifacts touch the filesystem.
//! Regeneration overwrites in place (rendering is deterministic, so a rerun
//! over unchanged input is a no-op by content), but the outcome is always
//! reported so an overwrite is never invisible to the operator.

use anyhow::{Context, Result};
use similar::{ChangeTag, TextDiff};
use std::fmt;
use std::fs;
use std::path::Path;

use super::render::RenderedArtifact;

/// What writing an artifact did to the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist before.
    Created,
    /// The file existed with different content and was replaced.
    Updated { added: usize, removed: usize },
    /// The file already held exactly this content; nothing was written.
    Unchanged,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Updated { added, removed } => {
                write!(f, "updated (+{added} -{removed})")
            }
            Self::Unchanged => f.write_str("unchanged"),
        }
    }
}

/// Write `artifact` under `root`, creating parent directories as needed.
pub fn write_artifact(root: &Path, artifact: &RenderedArtifact) -> Result<WriteOutcome> {
    let full_path = root.join(&artifact.path);

    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let existing = if full_path.exists() {
        Some(
            fs::read_to_string(&full_path)
                .with_context(|| format!("failed to read existing file: {}", full_path.display()))?,
        )
    } else {
        None
    };

    if existing.as_deref() == Some(artifact.content.as_str()) {
        return Ok(WriteOutcome::Unchanged);
    }

    fs::write(&full_path, &artifact.content)
        .with_context(|| format!("failed to write file: {}", full_path.display()))?;

    Ok(match existing {
        None => WriteOutcome::Created,
        Some(old) => {
            let diff = TextDiff::from_lines(old.as_str(), artifact.content.as_str());
            let added = diff
                .iter_all_changes()
                .filter(|c| c.tag() == ChangeTag::Insert)
                .count();
            let removed = diff
                .iter_all_changes()
                .filter(|c| c.tag() == ChangeTag::Delete)
                .count();
            WriteOutcome::Updated { added, removed }
        }
    })
}
