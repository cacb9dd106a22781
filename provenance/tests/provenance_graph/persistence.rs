//! Session-driven persistence: initial record, appends, oversized skip, ordering
//! under a slow sink, and interaction while pushes are still in flight.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use provenance::{
    InMemorySink, PersistenceBridge, PersistenceConfig, PersistenceSink, PushOutcome, Session,
    SinkError, SkipReason, VisState,
};
use serde_json::Value;

use crate::common::star_network;

/// **Scenario**: Every committed move is pushed; the record accumulates history.
#[tokio::test]
async fn session_pushes_every_move() {
    let sink = Arc::new(InMemorySink::new());
    let bridge = PersistenceBridge::new(sink.clone(), PersistenceConfig::default());
    let mut session = Session::new(star_network(), VisState::new(), true).with_persistence(bridge, "user-1");

    session.select_node("n1").unwrap();
    session.toggle_edge("e32").unwrap();
    session.undo();
    // a no-op move pushes nothing
    session.redo();
    session.redo();

    let outcomes = session.flush().await;
    assert_eq!(outcomes.len(), 5);
    assert_eq!(outcomes[0], PushOutcome::Created);
    assert!(outcomes.iter().all(|o| matches!(o, PushOutcome::Created | PushOutcome::Appended)));

    let record = sink.record("user-1").expect("record written");
    assert_eq!(record["initialState"]["event"], "");
    assert_eq!(sink.history_len("user-1"), 5);
}

/// **Scenario**: An oversized snapshot produces no write call and no error.
#[tokio::test]
async fn oversized_snapshot_is_not_written() {
    let sink = Arc::new(InMemorySink::new());
    let config = PersistenceConfig::default().with_size_threshold(200);
    let bridge = PersistenceBridge::<VisState>::new(sink.clone(), config);

    let mut huge = VisState::new();
    huge.search = (0..500).map(|i| format!("node-{}", i)).collect();
    let outcome = bridge.push_snapshot(&huge, true, "big").outcome().await;

    assert!(matches!(outcome, PushOutcome::Skipped(SkipReason::Oversized { .. })));
    assert_eq!(sink.write_count(), 0);
    assert!(sink.record("big").is_none());
}

/// **Scenario**: Filtered event types are skipped while others are appended.
#[tokio::test]
async fn skipped_event_types_are_not_persisted() {
    let sink = Arc::new(InMemorySink::new());
    let config = PersistenceConfig::default().skip_event("Search");
    let bridge = PersistenceBridge::new(sink.clone(), config);
    let mut session = Session::new(star_network(), VisState::new(), true).with_persistence(bridge, "s");

    session.search("n4").unwrap();
    session.select_node("n1").unwrap();
    let outcomes = session.flush().await;

    assert_eq!(
        outcomes[1],
        PushOutcome::Skipped(SkipReason::EventFiltered("Search".into()))
    );
    assert_eq!(sink.history_len("s"), 2);
}

/// In-memory sink with read and write latency.
struct SlowSink {
    inner: InMemorySink,
    read_delay: Duration,
    write_delay: Duration,
}

#[async_trait]
impl PersistenceSink for SlowSink {
    async fn get(&self, sink_id: &str) -> Result<Option<Value>, SinkError> {
        tokio::time::sleep(self.read_delay).await;
        self.inner.get(sink_id).await
    }

    async fn write(&self, sink_id: &str, record: Value, merge: bool) -> Result<(), SinkError> {
        tokio::time::sleep(self.write_delay).await;
        self.inner.write(sink_id, record, merge).await
    }
}

/// Sink whose writes never complete.
struct StalledSink;

#[async_trait]
impl PersistenceSink for StalledSink {
    async fn get(&self, _sink_id: &str) -> Result<Option<Value>, SinkError> {
        Ok(None)
    }

    async fn write(&self, _: &str, _: Value, _: bool) -> Result<(), SinkError> {
        std::future::pending().await
    }
}

/// **Scenario**: Overlapping pushes to a slow sink lose no snapshots.
///
/// Given: a multi-threaded runtime and a sink with 1ms reads and 30ms writes  
/// When: the session pushes its root and two selections back to back, then flushes  
/// Then: the first push creates the record, the rest append, and history holds all three in order
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn overlapping_pushes_accumulate_in_order() {
    let sink = Arc::new(SlowSink {
        inner: InMemorySink::new(),
        read_delay: Duration::from_millis(1),
        write_delay: Duration::from_millis(30),
    });
    let bridge = PersistenceBridge::new(sink.clone(), PersistenceConfig::default());
    let mut session = Session::new(star_network(), VisState::new(), true).with_persistence(bridge, "user-1");

    session.select_node("n1").unwrap();
    session.select_node("n3").unwrap();
    let outcomes = session.flush().await;

    assert_eq!(
        outcomes,
        vec![PushOutcome::Created, PushOutcome::Appended, PushOutcome::Appended]
    );
    assert_eq!(sink.inner.history_len("user-1"), 3);
    let record = sink.inner.record("user-1").unwrap();
    assert_eq!(record["history"][0]["event"], "");
    assert_eq!(record["history"][1]["state"]["selected"], serde_json::json!({"n1": ["n2"]}));
    assert_eq!(
        record["history"][2]["state"]["selected"],
        serde_json::json!({"n1": ["n2"], "n3": ["n2"]})
    );
}

/// **Scenario**: Interaction proceeds while pushes are stuck in flight.
///
/// Given: a session whose sink never finishes a write  
/// When: select, undo and redo are called  
/// Then: each returns at once, current state follows, and every push is still pending
#[tokio::test]
async fn moves_do_not_wait_for_pushes() {
    let bridge = PersistenceBridge::new(Arc::new(StalledSink), PersistenceConfig::default());
    let mut session = Session::new(star_network(), VisState::new(), true).with_persistence(bridge, "s");

    session.select_node("n1").unwrap();
    assert!(session.current_state().selected.contains("n1"));
    assert!(session.undo().is_some());
    assert!(session.current_state().selected.is_empty());
    assert!(session.redo().is_some());
    assert!(session.current_state().selected.contains("n1"));

    tokio::task::yield_now().await;
    assert_eq!(session.pending_pushes(), 4);
    assert!(tokio::time::timeout(Duration::from_millis(20), session.flush())
        .await
        .is_err());
}
