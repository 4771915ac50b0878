use pretty_assertions::assert_eq;
use reverie_model::{Equipment, WeaponModel, WeaponSet};
use reverie_types::{ItemRef, SlotId};

#[test]
fn all_ten_slots_start_empty() {
    let equipment = Equipment::default();
    for (slot, item) in equipment.iter() {
        assert!(item.is_empty(), "slot {slot} should start empty");
    }
    assert_eq!(equipment.iter().count(), 10);
}

#[test]
fn set_and_get_round_trip_every_slot() {
    let mut equipment = Equipment::default();
    for (i, slot) in SlotId::ALL.into_iter().enumerate() {
        let item = ItemRef::gear(1000 + i as u16, i as u16);
        equipment.set(slot, item);
        assert_eq!(equipment.get(slot), item);
    }
}

#[test]
fn set_touches_only_the_named_slot() {
    let mut equipment = Equipment::default();
    equipment.set(SlotId::Chest, ItemRef::gear(6023, 12));

    for (slot, item) in equipment.iter() {
        if slot == SlotId::Chest {
            assert_eq!(item, ItemRef::gear(6023, 12));
        } else {
            assert!(item.is_empty(), "slot {slot} should be untouched");
        }
    }
}

#[test]
fn clear_sets_the_empty_sentinel() {
    let mut equipment = Equipment::default();
    equipment.set(SlotId::Neck, ItemRef::gear(700, 1));
    equipment.clear(SlotId::Neck);
    assert_eq!(equipment.get(SlotId::Neck), ItemRef::EMPTY);
}

#[test]
fn weapons_default_visible_and_hide() {
    let mut weapons = WeaponSet::default();
    assert!(weapons.main_hand.visible);
    assert!(weapons.off_hand.visible);

    weapons.main_hand.hide();
    weapons.off_hand.hide();
    assert!(!weapons.main_hand.visible);
    assert!(!weapons.off_hand.visible);
}

#[test]
fn hiding_keeps_the_item_equipped() {
    let mut model = WeaponModel {
        item: ItemRef::weapon(201, 35, 2),
        visible: true,
    };
    model.hide();
    assert_eq!(model.item, ItemRef::weapon(201, 35, 2));
}
