//! Versioned character file formats for Reverie.
//!
//! Three formats are readable; one is writable:
//! - **Current** ([`CharacterFile`]): JSON with a format tag, a
//!   [`SaveModes`](reverie_types::SaveModes) header and optional field
//!   groups. The only format ever written.
//! - **Dat** ([`DatCharacterFile`]): the binary appearance-only export,
//!   recognized by its magic number.
//! - **Legacy** ([`LegacyCharacterFile`]): the predecessor tool's JSON.
//!
//! [`VersionedFile`] is the closed union over the three; its
//! [`upgrade`](VersionedFile::upgrade) walks each file up the revision
//! chain to the current format. Upgrades are pure value transformations:
//! they never touch a live mirror.

mod catalog;
mod current;
mod dat;
mod error;
mod io;
mod legacy;
mod versioned;

pub use catalog::{NpcAppearance, NpcCatalog};
pub use current::{AccessorySet, CharacterFile, GearSet, CURRENT_FORMAT_TAG};
pub use dat::DatCharacterFile;
pub use error::{FileError, FileResult};
pub use io::{load_file, save_file, DirectoryContext, FilePicker};
pub use legacy::LegacyCharacterFile;
pub use versioned::VersionedFile;
