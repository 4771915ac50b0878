//! The closed union over supported format revisions.

use crate::current::{CharacterFile, CURRENT_FORMAT_TAG};
use crate::dat::DatCharacterFile;
use crate::error::{FileError, FileResult};
use crate::legacy::LegacyCharacterFile;
use reverie_types::SaveModes;

/// One persisted file in any supported revision.
///
/// Dispatch is a match over this closed set; adding a revision means
/// adding a variant and its single upgrade step.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionedFile {
    Legacy(LegacyCharacterFile),
    Dat(DatCharacterFile),
    Current(CharacterFile),
}

impl VersionedFile {
    /// Short format name, used in logs and error messages.
    #[must_use]
    pub fn format_name(&self) -> &'static str {
        match self {
            VersionedFile::Legacy(_) => "legacy",
            VersionedFile::Dat(_) => "dat",
            VersionedFile::Current(_) => "current",
        }
    }

    /// The groups the file carries, regardless of revision.
    #[must_use]
    pub fn contained_modes(&self) -> SaveModes {
        match self {
            VersionedFile::Legacy(file) => file.contained_modes(),
            VersionedFile::Dat(file) => file.contained_modes(),
            VersionedFile::Current(file) => file.contained_modes(),
        }
    }

    /// Walks the upgrade chain until the current format is reached.
    /// Identity on an already-current file.
    pub fn upgrade(self) -> FileResult<CharacterFile> {
        let mut file = self;
        loop {
            file = match file {
                VersionedFile::Current(current) => return Ok(current),
                VersionedFile::Legacy(legacy) => legacy.upgrade()?,
                VersionedFile::Dat(dat) => dat.upgrade(),
            };
        }
    }

    /// Detects the revision of a raw byte buffer and parses it.
    /// Fails with [`FileError::UnsupportedFormat`] when nothing matches;
    /// no mutation has happened by then.
    pub fn sniff(bytes: &[u8]) -> FileResult<VersionedFile> {
        if DatCharacterFile::sniff(bytes) {
            return Ok(VersionedFile::Dat(DatCharacterFile::from_bytes(bytes)?));
        }

        let Ok(value) = serde_json::from_slice::<serde_json::Value>(bytes) else {
            return Err(FileError::UnsupportedFormat);
        };
        let Some(object) = value.as_object() else {
            return Err(FileError::UnsupportedFormat);
        };

        let is_current = object
            .get("format")
            .and_then(|tag| tag.as_str())
            .is_some_and(|tag| tag == CURRENT_FORMAT_TAG);
        if is_current {
            let file: CharacterFile = serde_json::from_value(value)?;
            return Ok(VersionedFile::Current(file));
        }

        let is_legacy = LegacyCharacterFile::MARKER_KEYS
            .iter()
            .any(|key| object.contains_key(*key));
        if is_legacy {
            let file: LegacyCharacterFile = serde_json::from_value(value)?;
            return Ok(VersionedFile::Legacy(file));
        }

        Err(FileError::UnsupportedFormat)
    }
}
