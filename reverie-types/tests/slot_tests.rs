use reverie_types::SlotId;

#[test]
fn exactly_ten_slots() {
    assert_eq!(SlotId::ALL.len(), 10);
    assert_eq!(SlotId::GEAR.len(), 5);
    assert_eq!(SlotId::ACCESSORIES.len(), 5);
}

#[test]
fn gear_and_accessories_partition_the_slots() {
    for slot in SlotId::GEAR {
        assert!(slot.is_gear());
        assert!(!slot.is_accessory());
    }
    for slot in SlotId::ACCESSORIES {
        assert!(slot.is_accessory());
        assert!(!slot.is_gear());
    }
}

#[test]
fn names_round_trip() {
    for slot in SlotId::ALL {
        assert_eq!(SlotId::from_name(slot.name()).unwrap(), slot);
    }
}

#[test]
fn unknown_slot_name_is_rejected() {
    let err = SlotId::from_name("tail").unwrap_err();
    assert!(matches!(err, reverie_types::Error::UnknownSlot(name) if name == "tail"));
}

#[test]
fn serde_uses_snake_case_names() {
    let json = serde_json::to_string(&SlotId::LeftRing).unwrap();
    assert_eq!(json, "\"left_ring\"");
}
