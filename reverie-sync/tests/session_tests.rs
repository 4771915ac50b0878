use reverie_model::EntityMirror;
use reverie_sync::{ActorSession, InMemoryPort, SyncConfig, SyncError, SyncMode};
use reverie_types::{ActorId, ItemRef, ObjectKind, SlotId};
use std::sync::Arc;
use std::time::Duration;

fn make_port() -> (Arc<InMemoryPort>, ActorId) {
    let port = Arc::new(InMemoryPort::new());
    let actor = ActorId::new();
    let mut mirror = EntityMirror::new(actor, ObjectKind::Player);
    mirror.set_slot(SlotId::Head, ItemRef::gear(100, 1));
    port.insert_actor(mirror);
    (port, actor)
}

async fn make_session(port: &Arc<InMemoryPort>, actor: ActorId) -> Arc<ActorSession> {
    ActorSession::track(port.clone(), actor, SyncConfig::default())
        .await
        .unwrap()
}

// ── Tracking ─────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn track_seeds_the_mirror() {
    let (port, actor) = make_port();
    let session = make_session(&port, actor).await;

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.actor, actor);
    assert_eq!(snapshot.slot(SlotId::Head), ItemRef::gear(100, 1));
    assert_eq!(session.mode(), SyncMode::ReadWrite);

    session.detach().await;
}

#[tokio::test]
async fn track_fails_when_process_is_gone() {
    let (port, actor) = make_port();
    port.set_unreachable(true);

    let result = ActorSession::track(port, actor, SyncConfig::default()).await;
    assert!(matches!(result, Err(SyncError::StaleEntity)));
}

// ── Background reader ────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn reader_keeps_the_mirror_in_sync() {
    let (port, actor) = make_port();
    let session = make_session(&port, actor).await;

    // The character changes gear behind our back.
    let mut state = port.actor_state(actor).unwrap();
    state.set_slot(SlotId::Chest, ItemRef::gear(777, 7));
    port.insert_actor(state);

    tokio::time::sleep(Duration::from_millis(500)).await;

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.slot(SlotId::Chest), ItemRef::gear(777, 7));
    assert!(session.reader_passes() > 0);

    session.detach().await;
}

#[tokio::test(start_paused = true)]
async fn off_mode_freezes_the_mirror() {
    let (port, actor) = make_port();
    let session = make_session(&port, actor).await;

    session.set_mode(SyncMode::Off).await;
    let passes = session.reader_passes();

    let mut state = port.actor_state(actor).unwrap();
    state.set_slot(SlotId::Legs, ItemRef::gear(55, 5));
    port.insert_actor(state);

    tokio::time::sleep(Duration::from_secs(1)).await;

    assert_eq!(session.reader_passes(), passes);
    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.slot(SlotId::Legs), ItemRef::EMPTY);

    session.detach().await;
}

#[tokio::test(start_paused = true)]
async fn read_resumes_after_off() {
    let (port, actor) = make_port();
    let session = make_session(&port, actor).await;

    session.set_mode(SyncMode::Off).await;
    tokio::time::sleep(Duration::from_millis(300)).await;
    let frozen = session.reader_passes();

    session.set_mode(SyncMode::ReadWrite).await;
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(session.reader_passes() > frozen);

    session.detach().await;
}

#[tokio::test(start_paused = true)]
async fn set_mode_is_idempotent() {
    let (port, actor) = make_port();
    let session = make_session(&port, actor).await;

    session.set_mode(SyncMode::Read).await;
    session.set_mode(SyncMode::Read).await;
    assert_eq!(session.mode(), SyncMode::Read);

    session.detach().await;
}

// ── Staleness ────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn vanished_process_forces_off_and_reports_stale() {
    let (port, actor) = make_port();
    let session = make_session(&port, actor).await;

    port.set_unreachable(true);
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert!(session.is_stale());
    assert_eq!(session.mode(), SyncMode::Off);
    assert!(matches!(
        session.snapshot().await,
        Err(SyncError::StaleEntity)
    ));
    assert!(matches!(
        session.acquire_write_lease().await,
        Err(SyncError::StaleEntity)
    ));

    session.detach().await;
}

// ── Detach ───────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn detach_stops_the_reader() {
    let (port, actor) = make_port();
    let session = make_session(&port, actor).await;

    session.detach().await;
    assert_eq!(session.mode(), SyncMode::Off);

    let passes = session.reader_passes();
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(session.reader_passes(), passes);
}
