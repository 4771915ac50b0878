use pretty_assertions::assert_eq;
use reverie_model::{Appearance, CUSTOMIZE_LEN};

fn sample() -> Appearance {
    Appearance {
        race: 4,
        gender: 1,
        age: 1,
        height: 50,
        tribe: 8,
        head: 3,
        hair: 12,
        enable_highlights: 1,
        skin_tone: 30,
        right_eye_color: 5,
        hair_tone: 17,
        highlight_tone: 9,
        facial_features: 0b0000_0101,
        facial_feature_color: 2,
        eyebrows: 1,
        left_eye_color: 6,
        eyes: 2,
        nose: 1,
        jaw: 0,
        mouth: 3,
        lip_tone: 20,
        ear_muscle_tail_size: 60,
        tail_ears_type: 1,
        bust: 40,
        face_paint: 0,
        face_paint_color: 0,
    }
}

#[test]
fn byte_block_is_wire_length() {
    assert_eq!(sample().to_bytes().len(), CUSTOMIZE_LEN);
}

#[test]
fn bytes_round_trip() {
    let appearance = sample();
    let back = Appearance::from_bytes(&appearance.to_bytes());
    assert_eq!(back, appearance);
}

#[test]
fn wire_order_starts_with_race_and_gender() {
    let bytes = sample().to_bytes();
    assert_eq!(bytes[0], 4);
    assert_eq!(bytes[1], 1);
    assert_eq!(bytes[25], 0);
}
