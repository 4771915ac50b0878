//! The external-process access boundary.

use async_trait::async_trait;
use reverie_model::{Appearance, EntityMirror};
use reverie_types::{ActorId, ItemRef, SlotId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use thiserror::Error;

/// Result type for process accesses.
pub type PortResult<T> = Result<T, PortError>;

/// Errors raised at the process boundary.
#[derive(Debug, Error)]
pub enum PortError {
    /// The process, or the actor inside it, can no longer be reached.
    #[error("external process unreachable")]
    Unreachable,

    /// One access failed; the process itself is still there.
    #[error("access failed: {0}")]
    Access(String),
}

/// Which hand a weapon access targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponHand {
    Main,
    Off,
}

impl std::fmt::Display for WeaponHand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            WeaponHand::Main => "main hand",
            WeaponHand::Off => "off hand",
        })
    }
}

/// Narrow interface to the external process.
///
/// How field bytes are located inside the process's address space is the
/// implementation's business; the core only sees typed reads and writes.
#[async_trait]
pub trait ProcessPort: Send + Sync {
    /// Reads the actor's full current state.
    async fn read_actor(&self, actor: ActorId) -> PortResult<EntityMirror>;

    /// Writes one equipment slot.
    async fn write_slot(&self, actor: ActorId, slot: SlotId, item: ItemRef) -> PortResult<()>;

    /// Writes the whole appearance record as one block.
    async fn write_appearance(&self, actor: ActorId, appearance: Appearance) -> PortResult<()>;

    /// Writes one weapon model.
    async fn write_weapon(&self, actor: ActorId, hand: WeaponHand, item: ItemRef) -> PortResult<()>;

    /// Writes one weapon's visibility flag.
    async fn write_weapon_visibility(
        &self,
        actor: ActorId,
        hand: WeaponHand,
        visible: bool,
    ) -> PortResult<()>;
}

/// In-process stand-in for the external process.
///
/// Backs offline sessions and the test suites: tracks how many full
/// reads have been served and can be switched unreachable to simulate
/// the process going away.
#[derive(Default)]
pub struct InMemoryPort {
    actors: Mutex<HashMap<ActorId, EntityMirror>>,
    reads: AtomicU64,
    unreachable: AtomicBool,
}

impl InMemoryPort {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) an actor's external state.
    pub fn insert_actor(&self, mirror: EntityMirror) {
        self.actors
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(mirror.actor, mirror);
    }

    /// Number of full reads served so far.
    #[must_use]
    pub fn read_count(&self) -> u64 {
        self.reads.load(Ordering::SeqCst)
    }

    /// Simulates the process appearing/disappearing.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    /// The current external-side state of an actor.
    #[must_use]
    pub fn actor_state(&self, actor: ActorId) -> Option<EntityMirror> {
        self.actors
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&actor)
            .cloned()
    }

    fn check_reachable(&self) -> PortResult<()> {
        if self.unreachable.load(Ordering::SeqCst) {
            Err(PortError::Unreachable)
        } else {
            Ok(())
        }
    }

    fn with_actor<R>(
        &self,
        actor: ActorId,
        f: impl FnOnce(&mut EntityMirror) -> R,
    ) -> PortResult<R> {
        self.check_reachable()?;
        let mut actors = self.actors.lock().unwrap_or_else(|e| e.into_inner());
        let mirror = actors
            .get_mut(&actor)
            .ok_or_else(|| PortError::Access(format!("unknown actor {actor}")))?;
        Ok(f(mirror))
    }
}

#[async_trait]
impl ProcessPort for InMemoryPort {
    async fn read_actor(&self, actor: ActorId) -> PortResult<EntityMirror> {
        let state = self.with_actor(actor, |mirror| mirror.clone())?;
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(state)
    }

    async fn write_slot(&self, actor: ActorId, slot: SlotId, item: ItemRef) -> PortResult<()> {
        self.with_actor(actor, |mirror| mirror.set_slot(slot, item))
    }

    async fn write_appearance(&self, actor: ActorId, appearance: Appearance) -> PortResult<()> {
        self.with_actor(actor, |mirror| mirror.appearance = appearance)
    }

    async fn write_weapon(&self, actor: ActorId, hand: WeaponHand, item: ItemRef) -> PortResult<()> {
        self.with_actor(actor, |mirror| match hand {
            WeaponHand::Main => mirror.weapons.main_hand.item = item,
            WeaponHand::Off => mirror.weapons.off_hand.item = item,
        })
    }

    async fn write_weapon_visibility(
        &self,
        actor: ActorId,
        hand: WeaponHand,
        visible: bool,
    ) -> PortResult<()> {
        self.with_actor(actor, |mirror| match hand {
            WeaponHand::Main => mirror.weapons.main_hand.visible = visible,
            WeaponHand::Off => mirror.weapons.off_hand.visible = visible,
        })
    }
}
