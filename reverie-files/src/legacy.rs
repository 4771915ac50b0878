//! The predecessor tool's JSON format.
//!
//! Flat PascalCase keys, appearance attributes at top level, equipment as
//! `"base,variant"` / `"set,base,variant"` strings. No saved-modes header
//! (contained groups are inferred from which fields are present) and no
//! weapon visibility (everything upgrades as visible).

use crate::current::{AccessorySet, CharacterFile, GearSet};
use crate::error::FileResult;
use crate::versioned::VersionedFile;
use reverie_model::{Appearance, WeaponModel, WeaponSet};
use reverie_types::{ItemRef, SaveModes};
use serde::{Deserialize, Serialize};

/// A parsed legacy file. All fields optional: old exports wrote only the
/// groups they were asked to save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LegacyCharacterFile {
    // Appearance attributes.
    pub race: Option<u8>,
    pub gender: Option<u8>,
    pub age: Option<u8>,
    pub height: Option<u8>,
    pub tribe: Option<u8>,
    pub head: Option<u8>,
    pub hair: Option<u8>,
    pub enable_highlights: Option<u8>,
    pub skin_tone: Option<u8>,
    pub right_eye_color: Option<u8>,
    pub hair_tone: Option<u8>,
    pub highlight_tone: Option<u8>,
    pub facial_features: Option<u8>,
    pub facial_feature_color: Option<u8>,
    pub eyebrows: Option<u8>,
    pub left_eye_color: Option<u8>,
    pub eyes: Option<u8>,
    pub nose: Option<u8>,
    pub jaw: Option<u8>,
    pub mouth: Option<u8>,
    pub lip_tone: Option<u8>,
    pub ear_muscle_tail_size: Option<u8>,
    pub tail_ears_type: Option<u8>,
    pub bust: Option<u8>,
    pub face_paint: Option<u8>,
    pub face_paint_color: Option<u8>,

    // Equipment, as item strings.
    pub head_piece: Option<String>,
    pub chest: Option<String>,
    pub arms: Option<String>,
    pub legs: Option<String>,
    pub feet: Option<String>,
    pub ears: Option<String>,
    pub neck: Option<String>,
    pub wrists: Option<String>,
    pub left_ring: Option<String>,
    pub right_ring: Option<String>,
    pub main_hand: Option<String>,
    pub off_hand: Option<String>,
}

impl LegacyCharacterFile {
    /// Keys whose presence marks a JSON object as this format.
    pub(crate) const MARKER_KEYS: [&'static str; 4] = ["Race", "HeadPiece", "MainHand", "Chest"];

    /// The groups this file carries. A group counts only when every one
    /// of its fields was written.
    #[must_use]
    pub fn contained_modes(&self) -> SaveModes {
        let mut modes = SaveModes::NONE;
        if self.race.is_some() {
            modes |= SaveModes::APPEARANCE;
        }
        if self.has_all_gear() {
            modes |= SaveModes::EQUIPMENT_GEAR;
        }
        if self.has_all_accessories() {
            modes |= SaveModes::EQUIPMENT_ACCESSORIES;
        }
        if self.main_hand.is_some() {
            modes |= SaveModes::EQUIPMENT_WEAPONS;
        }
        modes
    }

    /// Single upgrade step to the current format.
    pub fn upgrade(self) -> FileResult<VersionedFile> {
        let saved = self.contained_modes();

        let appearance = saved
            .contains(SaveModes::APPEARANCE)
            .then(|| self.appearance());

        let gear = if saved.contains(SaveModes::EQUIPMENT_GEAR) {
            Some(GearSet {
                head: parse_item(&self.head_piece)?,
                chest: parse_item(&self.chest)?,
                arms: parse_item(&self.arms)?,
                legs: parse_item(&self.legs)?,
                feet: parse_item(&self.feet)?,
            })
        } else {
            None
        };

        let accessories = if saved.contains(SaveModes::EQUIPMENT_ACCESSORIES) {
            Some(AccessorySet {
                ear: parse_item(&self.ears)?,
                neck: parse_item(&self.neck)?,
                wrist: parse_item(&self.wrists)?,
                left_ring: parse_item(&self.left_ring)?,
                right_ring: parse_item(&self.right_ring)?,
            })
        } else {
            None
        };

        let weapons = if saved.contains(SaveModes::EQUIPMENT_WEAPONS) {
            Some(WeaponSet {
                main_hand: WeaponModel {
                    item: parse_item(&self.main_hand)?,
                    visible: true,
                },
                off_hand: WeaponModel {
                    item: parse_item(&self.off_hand)?,
                    visible: true,
                },
            })
        } else {
            None
        };

        Ok(VersionedFile::Current(CharacterFile {
            saved,
            appearance,
            gear,
            accessories,
            weapons,
            ..CharacterFile::default()
        }))
    }

    fn has_all_gear(&self) -> bool {
        self.head_piece.is_some()
            && self.chest.is_some()
            && self.arms.is_some()
            && self.legs.is_some()
            && self.feet.is_some()
    }

    fn has_all_accessories(&self) -> bool {
        self.ears.is_some()
            && self.neck.is_some()
            && self.wrists.is_some()
            && self.left_ring.is_some()
            && self.right_ring.is_some()
    }

    fn appearance(&self) -> Appearance {
        Appearance {
            race: self.race.unwrap_or_default(),
            gender: self.gender.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
            height: self.height.unwrap_or_default(),
            tribe: self.tribe.unwrap_or_default(),
            head: self.head.unwrap_or_default(),
            hair: self.hair.unwrap_or_default(),
            enable_highlights: self.enable_highlights.unwrap_or_default(),
            skin_tone: self.skin_tone.unwrap_or_default(),
            right_eye_color: self.right_eye_color.unwrap_or_default(),
            hair_tone: self.hair_tone.unwrap_or_default(),
            highlight_tone: self.highlight_tone.unwrap_or_default(),
            facial_features: self.facial_features.unwrap_or_default(),
            facial_feature_color: self.facial_feature_color.unwrap_or_default(),
            eyebrows: self.eyebrows.unwrap_or_default(),
            left_eye_color: self.left_eye_color.unwrap_or_default(),
            eyes: self.eyes.unwrap_or_default(),
            nose: self.nose.unwrap_or_default(),
            jaw: self.jaw.unwrap_or_default(),
            mouth: self.mouth.unwrap_or_default(),
            lip_tone: self.lip_tone.unwrap_or_default(),
            ear_muscle_tail_size: self.ear_muscle_tail_size.unwrap_or_default(),
            tail_ears_type: self.tail_ears_type.unwrap_or_default(),
            bust: self.bust.unwrap_or_default(),
            face_paint: self.face_paint.unwrap_or_default(),
            face_paint_color: self.face_paint_color.unwrap_or_default(),
        }
    }
}

/// A missing weapon string upgrades as an explicit empty model.
fn parse_item(field: &Option<String>) -> FileResult<ItemRef> {
    match field {
        Some(s) => Ok(ItemRef::parse(s)?),
        None => Ok(ItemRef::EMPTY),
    }
}
