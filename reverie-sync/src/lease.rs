//! The scoped write lease.

use crate::error::{SyncError, SyncResult};
use crate::mode::SyncMode;
use crate::port::{PortError, PortResult, WeaponHand};
use crate::session::SessionShared;
use reverie_model::Appearance;
use reverie_types::{ItemRef, SlotId};
use std::sync::Arc;
use tokio::sync::OwnedMutexGuard;
use tracing::debug;

/// Exclusive right to run a bulk write sequence against one mirror.
///
/// While a lease is alive the background reader cannot start a pass, so
/// the whole sequence becomes visible as one unit. Each mutation goes to
/// the external process first and lands in the mirror only on success.
///
/// Dropping the lease — on every exit path — restores the prior mode,
/// or Off when the session went stale under it.
pub struct WriteLease {
    shared: Arc<SessionShared>,
    prior: SyncMode,
    _gate: OwnedMutexGuard<()>,
}

impl std::fmt::Debug for WriteLease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteLease")
            .field("actor", &self.shared.actor)
            .field("prior", &self.prior)
            .finish_non_exhaustive()
    }
}

impl WriteLease {
    pub(crate) fn new(shared: Arc<SessionShared>, gate: OwnedMutexGuard<()>, prior: SyncMode) -> Self {
        Self {
            shared,
            prior,
            _gate: gate,
        }
    }

    /// Writes one equipment slot.
    pub async fn set_slot(&mut self, slot: SlotId, item: ItemRef) -> SyncResult<()> {
        let result = self
            .shared
            .port
            .write_slot(self.shared.actor, slot, item)
            .await;
        self.absorb(result)?;
        self.shared.mirror.write().await.set_slot(slot, item);
        Ok(())
    }

    /// Sets a slot to the empty sentinel.
    pub async fn clear_slot(&mut self, slot: SlotId) -> SyncResult<()> {
        self.set_slot(slot, ItemRef::EMPTY).await
    }

    /// Replaces the whole appearance record as one block.
    pub async fn set_appearance(&mut self, appearance: Appearance) -> SyncResult<()> {
        let result = self
            .shared
            .port
            .write_appearance(self.shared.actor, appearance)
            .await;
        self.absorb(result)?;
        self.shared.mirror.write().await.appearance = appearance;
        Ok(())
    }

    /// Writes one weapon model.
    pub async fn set_weapon(&mut self, hand: WeaponHand, item: ItemRef) -> SyncResult<()> {
        let result = self
            .shared
            .port
            .write_weapon(self.shared.actor, hand, item)
            .await;
        self.absorb(result)?;
        let mut mirror = self.shared.mirror.write().await;
        match hand {
            WeaponHand::Main => mirror.weapons.main_hand.item = item,
            WeaponHand::Off => mirror.weapons.off_hand.item = item,
        }
        Ok(())
    }

    /// Writes one weapon's visibility flag.
    pub async fn set_weapon_visibility(&mut self, hand: WeaponHand, visible: bool) -> SyncResult<()> {
        let result = self
            .shared
            .port
            .write_weapon_visibility(self.shared.actor, hand, visible)
            .await;
        self.absorb(result)?;
        let mut mirror = self.shared.mirror.write().await;
        match hand {
            WeaponHand::Main => mirror.weapons.main_hand.visible = visible,
            WeaponHand::Off => mirror.weapons.off_hand.visible = visible,
        }
        Ok(())
    }

    fn absorb(&self, result: PortResult<()>) -> SyncResult<()> {
        match result {
            Ok(()) => Ok(()),
            Err(PortError::Unreachable) => {
                self.shared.mark_stale();
                Err(SyncError::StaleEntity)
            }
            Err(PortError::Access(msg)) => Err(SyncError::Port(msg)),
        }
    }
}

impl Drop for WriteLease {
    fn drop(&mut self) {
        let restore = if self.shared.is_stale() || self.shared.is_shutdown() {
            SyncMode::Off
        } else {
            self.prior
        };
        self.shared.mode.send_replace(restore);
        debug!(actor = %self.shared.actor, mode = %restore, "write lease released");
    }
}
