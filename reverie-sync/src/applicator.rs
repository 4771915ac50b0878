//! Applies character files to live entities.
//!
//! The whole of an apply runs under a single write lease, so the
//! background reader (and through it any observer of the mirror) sees
//! the sequence as one unit. Individual field writes are not
//! transactional at the process level: a mid-sequence failure leaves a
//! partial application, which is always reported in the summary.

use crate::error::SyncResult;
use crate::port::WeaponHand;
use crate::session::ActorSession;
use reverie_files::CharacterFile;
use reverie_types::{ItemRef, SaveModes, SlotId};
use std::fmt;
use tracing::{debug, info, warn};

/// One field targeted by an apply run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedField {
    Appearance,
    Slot(SlotId),
    Weapon(WeaponHand),
    WeaponVisibility(WeaponHand),
}

impl fmt::Display for AppliedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppliedField::Appearance => f.write_str("appearance"),
            AppliedField::Slot(slot) => write!(f, "slot {slot}"),
            AppliedField::Weapon(hand) => write!(f, "{hand} weapon"),
            AppliedField::WeaponVisibility(hand) => write!(f, "{hand} visibility"),
        }
    }
}

/// Outcome of one apply run.
///
/// Partial application is possible when the process fails mid-sequence;
/// it is reported here, never swallowed.
#[derive(Debug, Clone, Default)]
pub struct AppliedSummary {
    /// Fields written successfully, in application order.
    pub applied: Vec<AppliedField>,
    /// Fields that failed, with the error text.
    pub failed: Vec<(AppliedField, String)>,
}

impl AppliedSummary {
    /// True when every attempted field landed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// True when nothing was attempted at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.failed.is_empty()
    }

    fn record(&mut self, field: AppliedField, result: SyncResult<()>) {
        match result {
            Ok(()) => self.applied.push(field),
            Err(err) => {
                warn!(field = %field, error = %err, "field write failed");
                self.failed.push((field, err.to_string()));
            }
        }
    }
}

/// Merges persisted snapshots onto live entities.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharacterApplicator;

impl CharacterApplicator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Merges the selected groups of a file onto a live entity.
    ///
    /// The effective set is `selection & file.contained_modes()`: only
    /// fields in groups both selected and contained are touched, and a
    /// group's stored empty sentinel overwrites like any other value.
    pub async fn apply(
        &self,
        file: &CharacterFile,
        session: &ActorSession,
        selection: SaveModes,
    ) -> SyncResult<AppliedSummary> {
        let effective = selection & file.contained_modes();
        debug!(
            actor = %session.actor(),
            selection = %selection,
            contained = %file.contained_modes(),
            effective = %effective,
            "applying character file"
        );

        let mut summary = AppliedSummary::default();
        if effective.is_empty() {
            return Ok(summary);
        }

        let mut lease = session.acquire_write_lease().await?;

        if effective.contains(SaveModes::APPEARANCE) {
            if let Some(appearance) = file.appearance {
                let result = lease.set_appearance(appearance).await;
                summary.record(AppliedField::Appearance, result);
            }
        }

        if effective.contains(SaveModes::EQUIPMENT_GEAR) {
            for slot in SlotId::GEAR {
                Self::apply_slot(&mut lease, file, slot, &mut summary).await;
            }
        }

        if effective.contains(SaveModes::EQUIPMENT_ACCESSORIES) {
            for slot in SlotId::ACCESSORIES {
                Self::apply_slot(&mut lease, file, slot, &mut summary).await;
            }
        }

        if effective.contains(SaveModes::EQUIPMENT_WEAPONS) {
            if let Some(weapons) = file.weapons {
                for (hand, model) in [
                    (WeaponHand::Main, weapons.main_hand),
                    (WeaponHand::Off, weapons.off_hand),
                ] {
                    let result = lease.set_weapon(hand, model.item).await;
                    summary.record(AppliedField::Weapon(hand), result);

                    let result = lease.set_weapon_visibility(hand, model.visible).await;
                    summary.record(AppliedField::WeaponVisibility(hand), result);
                }
            }
        }

        drop(lease);
        info!(
            actor = %session.actor(),
            applied = summary.applied.len(),
            failed = summary.failed.len(),
            "apply finished"
        );
        Ok(summary)
    }

    async fn apply_slot(
        lease: &mut crate::lease::WriteLease,
        file: &CharacterFile,
        slot: SlotId,
        summary: &mut AppliedSummary,
    ) {
        // A stored empty is still a value; only a missing group skips.
        if let Some(item) = file.slot_item(slot) {
            let result = lease.set_slot(slot, item).await;
            summary.record(AppliedField::Slot(slot), result);
        }
    }

    /// Preset: empties every slot and hides both weapon models.
    ///
    /// Takes no selection on purpose — clearing always covers the full
    /// equipment and weapon groups.
    pub async fn clear_all(&self, session: &ActorSession) -> SyncResult<AppliedSummary> {
        let mut lease = session.acquire_write_lease().await?;
        let mut summary = AppliedSummary::default();

        for slot in SlotId::ALL {
            let result = lease.clear_slot(slot).await;
            summary.record(AppliedField::Slot(slot), result);
        }
        for hand in [WeaponHand::Main, WeaponHand::Off] {
            let result = lease.set_weapon_visibility(hand, false).await;
            summary.record(AppliedField::WeaponVisibility(hand), result);
        }

        drop(lease);
        info!(actor = %session.actor(), "cleared equipment and weapons");
        Ok(summary)
    }

    /// Preset: the fixed NPC smallclothes look — accessories and head
    /// cleared, the NPC body item in the four body slots.
    ///
    /// Like [`clear_all`](Self::clear_all), selection-independent.
    pub async fn npc_smallclothes(&self, session: &ActorSession) -> SyncResult<AppliedSummary> {
        const CLEARED: [SlotId; 6] = [
            SlotId::Ear,
            SlotId::Head,
            SlotId::LeftRing,
            SlotId::Neck,
            SlotId::RightRing,
            SlotId::Wrist,
        ];
        const BODY: [SlotId; 4] = [SlotId::Arms, SlotId::Chest, SlotId::Legs, SlotId::Feet];

        let mut lease = session.acquire_write_lease().await?;
        let mut summary = AppliedSummary::default();

        for slot in CLEARED {
            let result = lease.clear_slot(slot).await;
            summary.record(AppliedField::Slot(slot), result);
        }
        for slot in BODY {
            let result = lease.set_slot(slot, ItemRef::NPC_BODY).await;
            summary.record(AppliedField::Slot(slot), result);
        }

        drop(lease);
        info!(actor = %session.actor(), "applied npc smallclothes");
        Ok(summary)
    }
}
