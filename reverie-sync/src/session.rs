//! Per-entity memory-access coordination.
//!
//! One [`ActorSession`] per tracked external entity. The session owns the
//! mirror, the sync mode and the single background reader task; every
//! mutation of the mirror goes through a [`WriteLease`] obtained here.
//!
//! One mutex gates both sides: a reader pass holds it for the duration of
//! a pass, a lease holds it for the lease lifetime. That single primitive
//! gives at-most-one-writer and "no reader pass between lease grant and
//! release" at once.

use crate::error::{SyncError, SyncResult};
use crate::lease::WriteLease;
use crate::mode::SyncMode;
use crate::port::{PortError, ProcessPort};
use reverie_model::EntityMirror;
use reverie_types::ActorId;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Configuration for a tracked session.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Cadence of background reader passes.
    pub read_interval: Duration,
    /// Optional cap on how long a lease acquisition may wait.
    /// `None` waits indefinitely; shutdown still aborts the wait.
    pub lease_timeout: Option<Duration>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            read_interval: Duration::from_millis(100),
            lease_timeout: None,
        }
    }
}

/// State shared between the session handle, the reader task and leases.
pub(crate) struct SessionShared {
    pub(crate) actor: ActorId,
    pub(crate) port: Arc<dyn ProcessPort>,
    pub(crate) mirror: RwLock<EntityMirror>,
    pub(crate) mode: watch::Sender<SyncMode>,
    pub(crate) gate: Arc<Mutex<()>>,
    stale: AtomicBool,
    passes: AtomicU64,
    shutdown: watch::Sender<bool>,
}

impl SessionShared {
    pub(crate) fn is_stale(&self) -> bool {
        self.stale.load(Ordering::SeqCst)
    }

    pub(crate) fn is_shutdown(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Marks the session stale and forces it Off.
    pub(crate) fn mark_stale(&self) {
        if !self.stale.swap(true, Ordering::SeqCst) {
            warn!(actor = %self.actor, "external process unreachable; session forced off");
        }
        self.mode.send_replace(SyncMode::Off);
    }
}

/// One tracked external entity: the mirror, its sync mode and the
/// background reader that keeps it current.
pub struct ActorSession {
    shared: Arc<SessionShared>,
    config: SyncConfig,
    reader: Mutex<Option<JoinHandle<()>>>,
}

impl ActorSession {
    /// Starts tracking an actor: seeds the mirror with one initial read
    /// and spawns the background reader.
    pub async fn track(
        port: Arc<dyn ProcessPort>,
        actor: ActorId,
        config: SyncConfig,
    ) -> SyncResult<Arc<Self>> {
        let initial = port.read_actor(actor).await.map_err(|err| match err {
            PortError::Unreachable => SyncError::StaleEntity,
            PortError::Access(msg) => SyncError::Port(msg),
        })?;

        let (mode, _) = watch::channel(SyncMode::ReadWrite);
        let (shutdown, _) = watch::channel(false);
        let shared = Arc::new(SessionShared {
            actor,
            port,
            mirror: RwLock::new(initial),
            mode,
            gate: Arc::new(Mutex::new(())),
            stale: AtomicBool::new(false),
            passes: AtomicU64::new(0),
            shutdown,
        });

        let handle = tokio::spawn(reader_loop(shared.clone(), config.read_interval));
        info!(actor = %actor, interval = ?config.read_interval, "tracking actor");

        Ok(Arc::new(Self {
            shared,
            config,
            reader: Mutex::new(Some(handle)),
        }))
    }

    /// The tracked actor.
    #[must_use]
    pub fn actor(&self) -> ActorId {
        self.shared.actor
    }

    /// The current sync mode.
    #[must_use]
    pub fn mode(&self) -> SyncMode {
        *self.shared.mode.borrow()
    }

    /// Whether the external process has become unreachable.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.shared.is_stale()
    }

    /// Completed reader passes so far.
    #[must_use]
    pub fn reader_passes(&self) -> u64 {
        self.shared.passes.load(Ordering::SeqCst)
    }

    /// Sets the sync mode. Idempotent. By the time this returns, no
    /// reader pass started under the previous mode is still in flight.
    pub async fn set_mode(&self, mode: SyncMode) {
        let _quiesce = self.shared.gate.lock().await;
        let prev = self.shared.mode.send_replace(mode);
        if prev != mode {
            debug!(actor = %self.shared.actor, from = %prev, to = %mode, "sync mode changed");
        }
    }

    /// Acquires the exclusive write lease, waiting out the current
    /// holder and any in-flight reader pass. The session stays in
    /// `Write` until the returned lease is dropped.
    pub async fn acquire_write_lease(&self) -> SyncResult<WriteLease> {
        if self.shared.is_stale() {
            return Err(SyncError::StaleEntity);
        }

        let gate = self.shared.gate.clone();
        let mut shutdown = self.shared.shutdown.subscribe();
        let timeout = self.config.lease_timeout;

        let guard = tokio::select! {
            guard = async move {
                match timeout {
                    Some(limit) => tokio::time::timeout(limit, gate.lock_owned())
                        .await
                        .map_err(|_| SyncError::LeaseTimeout),
                    None => Ok(gate.lock_owned().await),
                }
            } => guard?,
            _ = shutdown.changed() => return Err(SyncError::Shutdown),
        };

        // The wait may have outlived the process.
        if self.shared.is_stale() {
            return Err(SyncError::StaleEntity);
        }

        let prior = self.shared.mode.send_replace(SyncMode::Write);
        debug!(actor = %self.shared.actor, "write lease acquired");
        Ok(WriteLease::new(self.shared.clone(), guard, prior))
    }

    /// Clones the current mirror state.
    pub async fn snapshot(&self) -> SyncResult<EntityMirror> {
        if self.shared.is_stale() {
            return Err(SyncError::StaleEntity);
        }
        Ok(self.shared.mirror.read().await.clone())
    }

    /// Stops the background reader and freezes the session at Off.
    pub async fn detach(&self) {
        self.shared.shutdown.send_replace(true);
        if let Some(handle) = self.reader.lock().await.take() {
            let _ = handle.await;
        }
        self.shared.mode.send_replace(SyncMode::Off);
        info!(actor = %self.shared.actor, "stopped tracking actor");
    }
}

/// The background reader: one pass per tick while the mode reads and no
/// lease is held. A busy gate skips the pass rather than queueing behind
/// the writer.
async fn reader_loop(shared: Arc<SessionShared>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut shutdown = shared.shutdown.subscribe();

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = shutdown.changed() => break,
        }

        if shared.is_stale() || !shared.mode.borrow().reads() {
            continue;
        }

        let Ok(_pass) = shared.gate.try_lock() else {
            continue;
        };
        // Re-check under the gate: the mode may have changed while a
        // writer held the lock.
        if !shared.mode.borrow().reads() {
            continue;
        }

        match shared.port.read_actor(shared.actor).await {
            Ok(state) => {
                *shared.mirror.write().await = state;
                shared.passes.fetch_add(1, Ordering::SeqCst);
            }
            Err(PortError::Unreachable) => shared.mark_stale(),
            Err(PortError::Access(msg)) => {
                warn!(actor = %shared.actor, error = %msg, "reader pass failed");
            }
        }
    }
}
