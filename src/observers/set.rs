//! # ObserverSet: non-blocking fan-out of notices.
//!
//! [`ObserverSet`] hands each [`Notice`] to every registered observer
//! without awaiting their processing.
//!
//! ## Guarantees
//! - `emit(notice)` returns immediately.
//! - Per-observer FIFO (queue order).
//! - Panics inside observers are caught and reported (isolation).
//!
//! ## Non-guarantees
//! - No ordering across different observers (use `Notice::seq` to restore it).
//! - No retries on queue overflow: the notice is dropped for that observer.
//!
//! ```text
//!    emit(Notice)
//!        │                      (Arc-clone per observer)
//!        ├──────────► [queue O1] ──► worker O1 ──► on_notice()
//!        └──────────► [queue O2] ──► worker O2 ──► on_notice()
//! ```

use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::observers::notice::Notice;
use crate::observers::observer::Observe;

struct Lane {
    name: &'static str,
    queue: mpsc::Sender<Arc<Notice>>,
}

/// Fan-out over observers, each with a bounded queue and a worker task.
///
/// Constructing a non-empty set spawns one tokio task per observer; an empty
/// set is inert and `emit` is a no-op.
pub struct ObserverSet {
    lanes: Vec<Lane>,
    workers: Vec<JoinHandle<()>>,
}

impl ObserverSet {
    /// Creates the set and spawns one worker per observer.
    ///
    /// Requires a running tokio runtime when `observers` is non-empty.
    #[must_use]
    pub fn new(observers: Vec<Arc<dyn Observe>>) -> Self {
        let mut lanes = Vec::with_capacity(observers.len());
        let mut workers = Vec::with_capacity(observers.len());

        for observer in observers {
            let (lane, handle) = Self::spawn_worker(observer);
            lanes.push(lane);
            workers.push(handle);
        }

        Self { lanes, workers }
    }

    fn spawn_worker(observer: Arc<dyn Observe>) -> (Lane, JoinHandle<()>) {
        let name = observer.name();
        let capacity = observer.queue_capacity().max(1);
        let (tx, mut rx) = mpsc::channel::<Arc<Notice>>(capacity);

        let handle = tokio::spawn(async move {
            while let Some(notice) = rx.recv().await {
                let fut = observer.on_notice(notice.as_ref());
                if let Err(panic) = std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                    eprintln!("[evbus] observer '{}' panicked: {panic:?}", observer.name());
                }
            }
        });

        (Lane { name, queue: tx }, handle)
    }

    /// Fans one notice out to all observers without blocking.
    ///
    /// If an observer's queue is full or its worker has closed, the notice is
    /// dropped for that observer and a warning names it.
    pub fn emit(&self, notice: Notice) {
        if self.lanes.is_empty() {
            return;
        }
        let shared = Arc::new(notice);
        for lane in &self.lanes {
            if let Err(err) = lane.queue.try_send(Arc::clone(&shared)) {
                let cause = match err {
                    mpsc::error::TrySendError::Full(_) => "queue full",
                    mpsc::error::TrySendError::Closed(_) => "worker closed",
                };
                eprintln!("[evbus] observer '{}' dropped notice: {cause}", lane.name);
            }
        }
    }

    /// Closes all queues and waits for the workers to drain.
    pub async fn shutdown(self) {
        drop(self.lanes);
        for worker in self.workers {
            let _ = worker.await;
        }
    }

    /// True when no observers are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Number of attached observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lanes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::notice::NoticeKind;
    use std::sync::Mutex;
    use std::time::Duration;

    struct Recorder {
        seen: Arc<Mutex<Vec<u64>>>,
    }

    #[async_trait::async_trait]
    impl Observe for Recorder {
        async fn on_notice(&self, notice: &Notice) {
            self.seen.lock().unwrap().push(notice.seq);
        }

        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    struct Panicker;

    #[async_trait::async_trait]
    impl Observe for Panicker {
        async fn on_notice(&self, _notice: &Notice) {
            panic!("observer blew up");
        }

        fn name(&self) -> &'static str {
            "panicker"
        }
    }

    #[tokio::test]
    async fn test_notices_reach_observer_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder: Arc<dyn Observe> = Arc::new(Recorder {
            seen: Arc::clone(&seen),
        });
        let set = ObserverSet::new(vec![recorder]);

        let seqs: Vec<u64> = (0..5)
            .map(|_| {
                let n = Notice::new(NoticeKind::Dispatched);
                let seq = n.seq;
                set.emit(n);
                seq
            })
            .collect();

        set.shutdown().await;
        assert_eq!(*seen.lock().unwrap(), seqs);
    }

    #[tokio::test]
    async fn test_panicking_observer_does_not_kill_worker() {
        let set = ObserverSet::new(vec![Arc::new(Panicker) as Arc<dyn Observe>]);
        set.emit(Notice::new(NoticeKind::Dispatched));
        set.emit(Notice::new(NoticeKind::Dispatched));

        // Workers survive panics; shutdown drains cleanly.
        tokio::time::timeout(Duration::from_secs(5), set.shutdown())
            .await
            .expect("shutdown hung after observer panic");
    }

    #[tokio::test]
    async fn test_empty_set_is_inert() {
        let set = ObserverSet::new(Vec::new());
        assert!(set.is_empty());
        set.emit(Notice::new(NoticeKind::Dispatched));
        set.shutdown().await;
    }
}
