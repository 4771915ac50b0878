//! The binary appearance export format.
//!
//! Layout, little-endian: u32 magic, u32 version, 4 reserved bytes, then
//! the packed appearance block. Carries appearance only — no equipment,
//! no weapons.

use crate::error::{FileError, FileResult};
use crate::versioned::VersionedFile;
use crate::CharacterFile;
use reverie_model::{Appearance, CUSTOMIZE_LEN};
use reverie_types::SaveModes;

const HEADER_LEN: usize = 12;

/// An appearance-only binary export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatCharacterFile {
    pub version: u32,
    pub appearance: Appearance,
}

impl DatCharacterFile {
    /// Magic number at offset 0.
    pub const MAGIC: u32 = 0x2013_FF14;
    /// Current revision of the binary layout.
    pub const VERSION: u32 = 1;
    /// Total encoded length.
    pub const LEN: usize = HEADER_LEN + CUSTOMIZE_LEN;

    /// Whether a byte buffer starts with the dat magic.
    #[must_use]
    pub fn sniff(bytes: &[u8]) -> bool {
        bytes.len() >= 4 && u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) == Self::MAGIC
    }

    /// Decodes a dat buffer.
    pub fn from_bytes(bytes: &[u8]) -> FileResult<Self> {
        let malformed = |reason: &str| FileError::Malformed {
            format: "dat",
            reason: reason.to_string(),
        };

        if !Self::sniff(bytes) {
            return Err(malformed("missing magic number"));
        }
        if bytes.len() < Self::LEN {
            return Err(malformed("truncated"));
        }

        let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let block: [u8; CUSTOMIZE_LEN] = bytes[HEADER_LEN..Self::LEN]
            .try_into()
            .map_err(|_| malformed("truncated appearance block"))?;

        Ok(Self {
            version,
            appearance: Appearance::from_bytes(&block),
        })
    }

    /// Encodes the dat layout.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::LEN);
        bytes.extend_from_slice(&Self::MAGIC.to_le_bytes());
        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 4]);
        bytes.extend_from_slice(&self.appearance.to_bytes());
        bytes
    }

    /// The groups a dat file can carry.
    #[must_use]
    pub fn contained_modes(&self) -> SaveModes {
        SaveModes::APPEARANCE
    }

    /// Single upgrade step: dat carries appearance only, so the current
    /// form is an appearance-only snapshot.
    #[must_use]
    pub fn upgrade(self) -> VersionedFile {
        VersionedFile::Current(CharacterFile {
            saved: SaveModes::APPEARANCE,
            appearance: Some(self.appearance),
            ..CharacterFile::default()
        })
    }
}
