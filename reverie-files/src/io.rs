//! File loading/saving and the picker collaborator boundary.

use crate::current::CharacterFile;
use crate::error::FileResult;
use crate::versioned::VersionedFile;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads and detects any supported character file.
pub fn load_file(path: &Path) -> FileResult<VersionedFile> {
    let bytes = std::fs::read(path)?;
    let file = VersionedFile::sniff(&bytes)?;
    debug!(
        path = %path.display(),
        format = file.format_name(),
        contained = %file.contained_modes(),
        "loaded character file"
    );
    Ok(file)
}

/// Writes a current-format file as pretty JSON.
pub fn save_file(file: &CharacterFile, path: &Path) -> FileResult<()> {
    let json = serde_json::to_string_pretty(file)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), saved = %file.saved, "saved character file");
    Ok(())
}

/// The file chooser collaborator. Implementations present whatever UI the
/// host has; a `None` return is a cancel, never an error.
#[async_trait]
pub trait FilePicker: Send + Sync {
    /// Picks a file to open. `start` is the preferred starting directory;
    /// `fallbacks` are offered in order when it is unset or gone.
    async fn pick_open(&self, start: Option<PathBuf>, fallbacks: &[PathBuf]) -> Option<PathBuf>;

    /// Picks a destination to save to, with a suggested file name.
    async fn pick_save(&self, start: Option<PathBuf>, suggested: &str) -> Option<PathBuf>;
}

/// Last-used directories, scoped per operation kind.
///
/// Process-lifetime state with no persistence; injected into the
/// workflows that need it rather than living in a static.
#[derive(Debug, Clone, Default)]
pub struct DirectoryContext {
    last_load: Option<PathBuf>,
    last_save: Option<PathBuf>,
}

impl DirectoryContext {
    /// The directory the last load was picked from.
    #[must_use]
    pub fn last_load(&self) -> Option<PathBuf> {
        self.last_load.clone()
    }

    /// The directory the last save was written to.
    #[must_use]
    pub fn last_save(&self) -> Option<PathBuf> {
        self.last_save.clone()
    }

    /// Remembers the directory a loaded file came from.
    pub fn remember_load(&mut self, file: &Path) {
        self.last_load = file.parent().map(Path::to_path_buf);
    }

    /// Remembers the directory a saved file went to.
    pub fn remember_save(&mut self, file: &Path) {
        self.last_save = file.parent().map(Path::to_path_buf);
    }
}
