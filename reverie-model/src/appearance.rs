//! The fixed appearance record.

use serde::{Deserialize, Serialize};

/// Length of the packed appearance block as the external process stores it.
pub const CUSTOMIZE_LEN: usize = 26;

/// A character's appearance: one byte per attribute, in the external
/// process's wire order. The record is always applied and copied as a
/// whole, never attribute by attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub race: u8,
    pub gender: u8,
    pub age: u8,
    pub height: u8,
    pub tribe: u8,
    pub head: u8,
    pub hair: u8,
    pub enable_highlights: u8,
    pub skin_tone: u8,
    pub right_eye_color: u8,
    pub hair_tone: u8,
    pub highlight_tone: u8,
    pub facial_features: u8,
    pub facial_feature_color: u8,
    pub eyebrows: u8,
    pub left_eye_color: u8,
    pub eyes: u8,
    pub nose: u8,
    pub jaw: u8,
    pub mouth: u8,
    pub lip_tone: u8,
    pub ear_muscle_tail_size: u8,
    pub tail_ears_type: u8,
    pub bust: u8,
    pub face_paint: u8,
    pub face_paint_color: u8,
}

impl Appearance {
    /// Packs the record into the wire-order byte block.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; CUSTOMIZE_LEN] {
        [
            self.race,
            self.gender,
            self.age,
            self.height,
            self.tribe,
            self.head,
            self.hair,
            self.enable_highlights,
            self.skin_tone,
            self.right_eye_color,
            self.hair_tone,
            self.highlight_tone,
            self.facial_features,
            self.facial_feature_color,
            self.eyebrows,
            self.left_eye_color,
            self.eyes,
            self.nose,
            self.jaw,
            self.mouth,
            self.lip_tone,
            self.ear_muscle_tail_size,
            self.tail_ears_type,
            self.bust,
            self.face_paint,
            self.face_paint_color,
        ]
    }

    /// Unpacks a wire-order byte block.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; CUSTOMIZE_LEN]) -> Self {
        Self {
            race: bytes[0],
            gender: bytes[1],
            age: bytes[2],
            height: bytes[3],
            tribe: bytes[4],
            head: bytes[5],
            hair: bytes[6],
            enable_highlights: bytes[7],
            skin_tone: bytes[8],
            right_eye_color: bytes[9],
            hair_tone: bytes[10],
            highlight_tone: bytes[11],
            facial_features: bytes[12],
            facial_feature_color: bytes[13],
            eyebrows: bytes[14],
            left_eye_color: bytes[15],
            eyes: bytes[16],
            nose: bytes[17],
            jaw: bytes[18],
            mouth: bytes[19],
            lip_tone: bytes[20],
            ear_muscle_tail_size: bytes[21],
            tail_ears_type: bytes[22],
            bust: bytes[23],
            face_paint: bytes[24],
            face_paint_color: bytes[25],
        }
    }
}
