use async_trait::async_trait;
use pretty_assertions::assert_eq;
use reverie_files::{CharacterFile, LegacyCharacterFile, NpcAppearance, VersionedFile};
use reverie_model::{Appearance, EntityMirror, WeaponModel};
use reverie_sync::{
    ActorSession, CharacterApplicator, InMemoryPort, PortError, PortResult, ProcessPort,
    SyncConfig, WeaponHand,
};
use reverie_types::{ActorId, ItemRef, NpcId, ObjectKind, SaveModes, SlotId};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

fn baseline_mirror(actor: ActorId) -> EntityMirror {
    let mut mirror = EntityMirror::new(actor, ObjectKind::Player);
    for (i, slot) in SlotId::ALL.into_iter().enumerate() {
        mirror.set_slot(slot, ItemRef::gear(100 + i as u16, 1));
    }
    mirror.appearance.race = 1;
    mirror.appearance.hair = 2;
    mirror.weapons.main_hand = WeaponModel {
        item: ItemRef::weapon(10, 1, 1),
        visible: true,
    };
    mirror.weapons.off_hand = WeaponModel {
        item: ItemRef::weapon(11, 1, 1),
        visible: true,
    };
    mirror
}

/// A donor snapshot with values distinct from every baseline field.
fn donor_file() -> CharacterFile {
    let mut donor = EntityMirror::new(ActorId::new(), ObjectKind::Player);
    for (i, slot) in SlotId::ALL.into_iter().enumerate() {
        donor.set_slot(slot, ItemRef::gear(200 + i as u16, 2));
    }
    donor.appearance.race = 7;
    donor.appearance.hair = 9;
    donor.weapons.main_hand = WeaponModel {
        item: ItemRef::weapon(50, 5, 5),
        visible: false,
    };
    donor.weapons.off_hand = WeaponModel {
        item: ItemRef::weapon(51, 5, 5),
        visible: true,
    };
    CharacterFile::from_mirror(&donor, SaveModes::ALL)
}

async fn make_session(kind_port: Arc<dyn ProcessPort>, actor: ActorId) -> Arc<ActorSession> {
    ActorSession::track(kind_port, actor, SyncConfig::default())
        .await
        .unwrap()
}

async fn make_tracked() -> (Arc<InMemoryPort>, Arc<ActorSession>, ActorId) {
    let port = Arc::new(InMemoryPort::new());
    let actor = ActorId::new();
    port.insert_actor(baseline_mirror(actor));
    let session = make_session(port.clone(), actor).await;
    (port, session, actor)
}

// ── Selection discipline ─────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn appearance_selection_leaves_equipment_untouched() {
    let (_port, session, actor) = make_tracked().await;
    let file = donor_file();

    let summary = CharacterApplicator::new()
        .apply(&file, &session, SaveModes::APPEARANCE)
        .await
        .unwrap();
    assert!(summary.is_complete());

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.appearance, file.appearance.unwrap());

    let untouched = baseline_mirror(actor);
    assert_eq!(snapshot.equipment, untouched.equipment);
    assert_eq!(snapshot.weapons, untouched.weapons);

    session.detach().await;
}

#[tokio::test(start_paused = true)]
async fn gear_selection_touches_only_the_five_gear_slots() {
    let (_port, session, actor) = make_tracked().await;
    let file = donor_file();

    CharacterApplicator::new()
        .apply(&file, &session, SaveModes::EQUIPMENT_GEAR)
        .await
        .unwrap();

    let snapshot = session.snapshot().await.unwrap();
    let untouched = baseline_mirror(actor);
    for slot in SlotId::GEAR {
        assert_eq!(snapshot.slot(slot), file.slot_item(slot).unwrap());
    }
    for slot in SlotId::ACCESSORIES {
        assert_eq!(snapshot.slot(slot), untouched.slot(slot));
    }
    assert_eq!(snapshot.appearance, untouched.appearance);
    assert_eq!(snapshot.weapons, untouched.weapons);

    session.detach().await;
}

#[tokio::test(start_paused = true)]
async fn selection_all_against_appearance_only_legacy_file() {
    let (_port, session, actor) = make_tracked().await;

    // A legacy file that only ever stored appearance data.
    let legacy: LegacyCharacterFile =
        serde_json::from_str(r#"{"Race": 9, "Gender": 1, "Hair": 3}"#).unwrap();
    let file = VersionedFile::Legacy(legacy).upgrade().unwrap();

    CharacterApplicator::new()
        .apply(&file, &session, SaveModes::ALL)
        .await
        .unwrap();

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.appearance.race, 9);

    // All ten slots remain exactly as they were.
    let untouched = baseline_mirror(actor);
    assert_eq!(snapshot.equipment, untouched.equipment);
    assert_eq!(snapshot.weapons, untouched.weapons);

    session.detach().await;
}

#[tokio::test(start_paused = true)]
async fn weapons_selection_against_a_full_npc_file() {
    let (_port, session, actor) = make_tracked().await;

    let donor = donor_file();
    let npc = NpcAppearance {
        npc: NpcId::new(77),
        name: "Test Subject".to_string(),
        appearance: donor.appearance.unwrap(),
        equipment: baseline_mirror(ActorId::new()).equipment,
        weapons: donor.weapons.unwrap(),
    };
    let file = npc.to_file();
    assert_eq!(file.contained_modes(), SaveModes::ALL);

    CharacterApplicator::new()
        .apply(&file, &session, SaveModes::EQUIPMENT_WEAPONS)
        .await
        .unwrap();

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.weapons, donor.weapons.unwrap());

    let untouched = baseline_mirror(actor);
    assert_eq!(snapshot.equipment, untouched.equipment);
    assert_eq!(snapshot.appearance, untouched.appearance);

    session.detach().await;
}

#[tokio::test(start_paused = true)]
async fn stored_empty_overwrites_an_equipped_slot() {
    let (_port, session, _actor) = make_tracked().await;

    let mut file = donor_file();
    if let Some(gear) = file.gear.as_mut() {
        gear.arms = ItemRef::EMPTY;
    }

    CharacterApplicator::new()
        .apply(&file, &session, SaveModes::EQUIPMENT_GEAR)
        .await
        .unwrap();

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.slot(SlotId::Arms), ItemRef::EMPTY);

    session.detach().await;
}

#[tokio::test(start_paused = true)]
async fn empty_effective_set_is_a_no_op() {
    let (_port, session, actor) = make_tracked().await;

    let summary = CharacterApplicator::new()
        .apply(&donor_file(), &session, SaveModes::NONE)
        .await
        .unwrap();
    assert!(summary.is_empty());

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot, baseline_mirror(actor));

    session.detach().await;
}

// ── Fixed presets ────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn clear_empties_all_slots_and_hides_weapons() {
    let (port, session, actor) = make_tracked().await;

    let summary = CharacterApplicator::new().clear_all(&session).await.unwrap();
    assert!(summary.is_complete());

    let snapshot = session.snapshot().await.unwrap();
    for slot in SlotId::ALL {
        assert_eq!(snapshot.slot(slot), ItemRef::EMPTY, "slot {slot}");
    }
    assert!(!snapshot.weapons.main_hand.visible);
    assert!(!snapshot.weapons.off_hand.visible);

    // Hiding is not unequipping.
    let untouched = baseline_mirror(actor);
    assert_eq!(snapshot.weapons.main_hand.item, untouched.weapons.main_hand.item);
    assert_eq!(snapshot.appearance, untouched.appearance);

    // The external process saw the same result.
    let external = port.actor_state(actor).unwrap();
    assert_eq!(external.equipment, snapshot.equipment);

    session.detach().await;
}

#[tokio::test(start_paused = true)]
async fn npc_smallclothes_clears_and_equips_the_fixed_sets() {
    let (_port, session, actor) = make_tracked().await;

    let summary = CharacterApplicator::new()
        .npc_smallclothes(&session)
        .await
        .unwrap();
    assert!(summary.is_complete());

    let snapshot = session.snapshot().await.unwrap();
    for slot in [
        SlotId::Ear,
        SlotId::Head,
        SlotId::LeftRing,
        SlotId::Neck,
        SlotId::RightRing,
        SlotId::Wrist,
    ] {
        assert_eq!(snapshot.slot(slot), ItemRef::EMPTY, "slot {slot}");
    }
    for slot in [SlotId::Arms, SlotId::Chest, SlotId::Legs, SlotId::Feet] {
        assert_eq!(snapshot.slot(slot), ItemRef::NPC_BODY, "slot {slot}");
    }

    let untouched = baseline_mirror(actor);
    assert_eq!(snapshot.weapons, untouched.weapons);
    assert_eq!(snapshot.appearance, untouched.appearance);

    session.detach().await;
}

// ── Partial failure ──────────────────────────────────────────────

/// Fails every write after the first `budget` ones.
struct FlakyPort {
    inner: InMemoryPort,
    budget: AtomicI64,
}

impl FlakyPort {
    fn new(inner: InMemoryPort, budget: i64) -> Self {
        Self {
            inner,
            budget: AtomicI64::new(budget),
        }
    }

    fn spend(&self) -> PortResult<()> {
        if self.budget.fetch_sub(1, Ordering::SeqCst) <= 0 {
            Err(PortError::Access("injected write failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProcessPort for FlakyPort {
    async fn read_actor(&self, actor: ActorId) -> PortResult<EntityMirror> {
        self.inner.read_actor(actor).await
    }

    async fn write_slot(&self, actor: ActorId, slot: SlotId, item: ItemRef) -> PortResult<()> {
        self.spend()?;
        self.inner.write_slot(actor, slot, item).await
    }

    async fn write_appearance(&self, actor: ActorId, appearance: Appearance) -> PortResult<()> {
        self.spend()?;
        self.inner.write_appearance(actor, appearance).await
    }

    async fn write_weapon(&self, actor: ActorId, hand: WeaponHand, item: ItemRef) -> PortResult<()> {
        self.spend()?;
        self.inner.write_weapon(actor, hand, item).await
    }

    async fn write_weapon_visibility(
        &self,
        actor: ActorId,
        hand: WeaponHand,
        visible: bool,
    ) -> PortResult<()> {
        self.spend()?;
        self.inner.write_weapon_visibility(actor, hand, visible).await
    }
}

#[tokio::test(start_paused = true)]
async fn mid_sequence_failures_are_reported_not_swallowed() {
    let inner = InMemoryPort::new();
    let actor = ActorId::new();
    inner.insert_actor(baseline_mirror(actor));
    let port = Arc::new(FlakyPort::new(inner, 3));
    let session = make_session(port, actor).await;

    let summary = CharacterApplicator::new()
        .apply(&donor_file(), &session, SaveModes::ALL)
        .await
        .unwrap();

    // Everything: appearance + ten slots + two weapons + two flags.
    assert_eq!(summary.applied.len() + summary.failed.len(), 15);
    assert_eq!(summary.applied.len(), 3);
    assert!(!summary.is_complete());
    for (_, reason) in &summary.failed {
        assert!(reason.contains("injected write failure"));
    }

    session.detach().await;
}
