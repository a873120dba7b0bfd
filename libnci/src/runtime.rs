// libnci/src/runtime.rs
//! Drive a [`Reader`] from a tokio task.
//!
//! The engine itself is synchronous and must never be ticked concurrently;
//! the task holds the reader's mutex for exactly one tick at a time, so the
//! host may lock it between ticks (e.g. to call `deactivate`).

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{MissedTickBehavior, interval};

use crate::reader::{Reader, ReaderEvent};

/// Handle to a spawned polling task
#[derive(Debug)]
pub struct ReaderTask {
    handle: JoinHandle<()>,
}

impl ReaderTask {
    /// Tick `reader` every `period` and forward its events. The task ends
    /// when the returned receiver is dropped.
    pub fn spawn(
        reader: Arc<Mutex<Reader>>,
        period: Duration,
    ) -> (Self, UnboundedReceiver<ReaderEvent>) {
        let (tx, rx) = unbounded_channel();
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.is_closed() {
                    break;
                }
                let event = reader.lock().await.run();
                if let Some(event) = event {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
            debug!("reader task stopped");
        });
        (Self { handle }, rx)
    }

    pub fn abort(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the task to end
    pub async fn join(self) -> std::result::Result<(), JoinError> {
        self.handle.await
    }
}
