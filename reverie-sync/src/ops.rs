//! Load / save / apply-NPC workflows.
//!
//! The headless equivalents of the editor page actions. Every operation
//! names itself in logs, reports failures to the caller, and leaves the
//! session usable afterwards.

use crate::applicator::{AppliedSummary, CharacterApplicator};
use crate::error::{SyncError, SyncResult};
use crate::session::ActorSession;
use async_trait::async_trait;
use reverie_files::{
    load_file, save_file, CharacterFile, DirectoryContext, FileError, FilePicker, NpcAppearance,
    NpcCatalog,
};
use reverie_types::{NpcId, SaveModes};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};
use tracing::{debug, error, warn};

/// The NPC chooser collaborator: a modal UI elsewhere. `None` is a
/// cancel, never an error.
#[async_trait]
pub trait NpcSelector: Send + Sync {
    async fn choose(&self) -> Option<NpcId>;
}

/// Wiring for the user-facing operations: the file picker, the NPC
/// catalog and chooser, last-used directories, and the applicator that
/// does the actual merging.
pub struct CharacterOps {
    picker: Arc<dyn FilePicker>,
    catalog: Arc<dyn NpcCatalog>,
    selector: Arc<dyn NpcSelector>,
    dirs: Mutex<DirectoryContext>,
    /// Directories offered when no load has happened yet.
    candidates: Vec<PathBuf>,
    applicator: CharacterApplicator,
}

impl CharacterOps {
    pub fn new(
        picker: Arc<dyn FilePicker>,
        catalog: Arc<dyn NpcCatalog>,
        selector: Arc<dyn NpcSelector>,
        candidates: Vec<PathBuf>,
    ) -> Self {
        Self {
            picker,
            catalog,
            selector,
            dirs: Mutex::new(DirectoryContext::default()),
            candidates,
            applicator: CharacterApplicator::new(),
        }
    }

    /// Picks a file, upgrades it and applies the selected groups.
    /// Returns `Ok(None)` when the picker is cancelled.
    pub async fn load(
        &self,
        session: &ActorSession,
        selection: SaveModes,
    ) -> SyncResult<Option<AppliedSummary>> {
        self.ensure_editable(session).await?;

        let start = self.dirs.lock().await.last_load();
        let Some(path) = self.picker.pick_open(start, &self.candidates).await else {
            debug!("load cancelled");
            return Ok(None);
        };

        let result = self.load_from(session, &path, selection).await;
        if let Err(err) = &result {
            error!(operation = "load", path = %path.display(), error = %err, "operation failed");
        }
        result.map(Some)
    }

    async fn load_from(
        &self,
        session: &ActorSession,
        path: &Path,
        selection: SaveModes,
    ) -> SyncResult<AppliedSummary> {
        let owned = path.to_path_buf();
        let file = tokio::task::spawn_blocking(move || load_file(&owned))
            .await
            .map_err(|err| FileError::Io(std::io::Error::other(err)))??;

        self.dirs.lock().await.remember_load(path);

        let current = file.upgrade()?;
        self.applicator.apply(&current, session, selection).await
    }

    /// Snapshots the mirror and writes it as a current-format file.
    /// Returns the written path, or `Ok(None)` when cancelled.
    pub async fn save(&self, session: &ActorSession) -> SyncResult<Option<PathBuf>> {
        let snapshot = session.snapshot().await?;
        let file = CharacterFile::from_mirror(&snapshot, SaveModes::ALL);

        let start = self.dirs.lock().await.last_save();
        let Some(path) = self.picker.pick_save(start, "character.chara.json").await else {
            debug!("save cancelled");
            return Ok(None);
        };

        let owned = path.clone();
        let result = tokio::task::spawn_blocking(move || save_file(&file, &owned))
            .await
            .map_err(|err| FileError::Io(std::io::Error::other(err)))
            .and_then(|inner| inner);

        match result {
            Ok(()) => {
                self.dirs.lock().await.remember_save(&path);
                Ok(Some(path))
            }
            Err(err) => {
                error!(operation = "save", path = %path.display(), error = %err, "operation failed");
                Err(err.into())
            }
        }
    }

    /// Chooses an NPC and applies its look through the same path as a
    /// loaded file. `Ok(None)` on cancel or an unknown catalog entry.
    pub async fn apply_npc(
        &self,
        session: &ActorSession,
        selection: SaveModes,
    ) -> SyncResult<Option<AppliedSummary>> {
        self.ensure_editable(session).await?;

        let Some(id) = self.selector.choose().await else {
            debug!("npc selection cancelled");
            return Ok(None);
        };
        let Some(npc) = self.catalog.resolve(id) else {
            warn!(operation = "apply npc", npc = %id, "unknown catalog entry");
            return Ok(None);
        };

        let file = npc.to_file();
        let result = self.applicator.apply(&file, session, selection).await;
        if let Err(err) = &result {
            error!(operation = "apply npc", npc = %id, error = %err, "operation failed");
        }
        result.map(Some)
    }

    /// Applies an already-resolved NPC on a background task.
    ///
    /// The returned channel carries the outcome, so a failed background
    /// apply is observable instead of vanishing with the task.
    pub fn apply_npc_detached(
        self: &Arc<Self>,
        session: Arc<ActorSession>,
        npc: NpcAppearance,
        selection: SaveModes,
    ) -> oneshot::Receiver<SyncResult<AppliedSummary>> {
        let (tx, rx) = oneshot::channel();
        let ops = Arc::clone(self);
        tokio::spawn(async move {
            let file = npc.to_file();
            let result = ops.applicator.apply(&file, &session, selection).await;
            if let Err(err) = &result {
                error!(operation = "apply npc", npc = %npc.npc, error = %err, "background apply failed");
            }
            let _ = tx.send(result);
        });
        rx
    }

    /// The "clear" preset: always clears all equipment and hides both
    /// weapons, independent of any selection.
    pub async fn clear(&self, session: &ActorSession) -> SyncResult<AppliedSummary> {
        self.ensure_editable(session).await?;
        let result = self.applicator.clear_all(session).await;
        if let Err(err) = &result {
            error!(operation = "clear", error = %err, "operation failed");
        }
        result
    }

    /// The "NPC smallclothes" preset, equally selection-independent.
    pub async fn npc_smallclothes(&self, session: &ActorSession) -> SyncResult<AppliedSummary> {
        self.ensure_editable(session).await?;
        let result = self.applicator.npc_smallclothes(session).await;
        if let Err(err) = &result {
            error!(operation = "npc smallclothes", error = %err, "operation failed");
        }
        result
    }

    async fn ensure_editable(&self, session: &ActorSession) -> SyncResult<()> {
        let snapshot = session.snapshot().await?;
        if !snapshot.is_editable() {
            return Err(SyncError::UneditableActor(snapshot.kind));
        }
        Ok(())
    }
}
