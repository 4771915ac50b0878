//! Memory-access coordination and partial apply for Reverie.
//!
//! The live side of the system: each tracked external entity gets an
//! [`ActorSession`] owning its mirror, its [`SyncMode`] and one
//! background reader task that keeps the mirror current. Bulk writes —
//! applying a file, clearing equipment, the NPC presets — run under a
//! [`WriteLease`], which pauses the reader for its lifetime so the whole
//! sequence is observed as a single unit.
//!
//! # Components
//!
//! - **Session**: per-entity mode state machine, reader task, lease gate
//! - **Lease**: scoped exclusive write access; release restores the mode
//!   on every exit path
//! - **Applicator**: merges the selected groups of a file onto a live
//!   entity, plus the two fixed presets
//! - **Ops**: the load/save/apply-NPC workflows over the collaborator
//!   traits ([`FilePicker`](reverie_files::FilePicker),
//!   [`NpcCatalog`](reverie_files::NpcCatalog), [`NpcSelector`])
//!
//! # Example
//!
//! ```
//! use reverie_model::EntityMirror;
//! use reverie_sync::{ActorSession, InMemoryPort, SyncConfig};
//! use reverie_types::{ActorId, ObjectKind};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> reverie_sync::SyncResult<()> {
//! let port = Arc::new(InMemoryPort::new());
//! let actor = ActorId::new();
//! port.insert_actor(EntityMirror::new(actor, ObjectKind::Player));
//!
//! let session = ActorSession::track(port, actor, SyncConfig::default()).await?;
//! let mut lease = session.acquire_write_lease().await?;
//! lease.clear_slot(reverie_types::SlotId::Head).await?;
//! drop(lease);
//! # session.detach().await;
//! # Ok(())
//! # }
//! ```

mod applicator;
mod error;
mod lease;
mod mode;
mod ops;
mod port;
mod session;

pub use applicator::{AppliedField, AppliedSummary, CharacterApplicator};
pub use error::{SyncError, SyncResult};
pub use lease::WriteLease;
pub use mode::SyncMode;
pub use ops::{CharacterOps, NpcSelector};
pub use port::{InMemoryPort, PortError, PortResult, ProcessPort, WeaponHand};
pub use session::{ActorSession, SyncConfig};
