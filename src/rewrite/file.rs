//! Single-pass file rewriting.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

use thiserror::Error;

use super::ImageWrapper;
use crate::{debug, debug_do};

/// Errors from reading, decoding or writing a target file.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("`{0}` is not valid UTF-8")]
    Decode(PathBuf, #[source] Utf8Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

/// What a run did to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// File was rewritten with `replaced` wrapped images.
    Updated { replaced: usize },
    /// Dry run: file would have been rewritten.
    WouldUpdate { replaced: usize },
    /// Nothing matched, file untouched.
    Unchanged,
}

impl Outcome {
    pub const fn replaced(self) -> usize {
        match self {
            Self::Updated { replaced } | Self::WouldUpdate { replaced } => replaced,
            Self::Unchanged => 0,
        }
    }

    pub const fn is_unchanged(self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

/// Rewrite `path` in place.
///
/// The whole file is read and processed in memory; it is written back only
/// when at least one image was wrapped and `dry_run` is off.
pub fn rewrite_file(
    path: &Path,
    wrapper: &ImageWrapper,
    dry_run: bool,
) -> Result<Outcome, RewriteError> {
    let bytes = fs::read(path).map_err(|err| RewriteError::Read(path.to_path_buf(), err))?;
    let content =
        std::str::from_utf8(&bytes).map_err(|err| RewriteError::Decode(path.to_path_buf(), err))?;

    let rewrite = wrapper.rewrite(content);
    if !rewrite.is_changed() {
        return Ok(Outcome::Unchanged);
    }

    debug_do! {
        for src in wrapper.matched_sources(content) {
            debug!("match"; "{}: {}", path.display(), src);
        }
    }

    let replaced = rewrite.replaced;
    if dry_run {
        return Ok(Outcome::WouldUpdate { replaced });
    }

    fs::write(path, rewrite.content.as_bytes())
        .map_err(|err| RewriteError::Write(path.to_path_buf(), err))?;
    Ok(Outcome::Updated { replaced })
}
