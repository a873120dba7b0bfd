// libnci/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::transport::traits::Transport;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    inbound: VecDeque<Vec<u8>>,
    sent: Vec<Vec<u8>>,
    write_failures: usize,
    init_failures: usize,
    init_count: usize,
}

/// Mock transport for unit tests. It records written frames and hands out
/// queued inbound frames one per `read()`.
///
/// Clones share state: keep one handle in the test and give another to the
/// engine, then push frames and inspect writes while the engine runs.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        // a panicking test thread must not hide the recorded state
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue a frame the controller "sends" to the host
    pub fn push_message(&self, frame: Vec<u8>) {
        self.lock().inbound.push_back(frame);
    }

    pub fn pending(&self) -> usize {
        self.lock().inbound.len()
    }

    /// All frames written so far, oldest first
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.lock().sent.clone()
    }

    pub fn last_sent(&self) -> Option<Vec<u8>> {
        self.lock().sent.last().cloned()
    }

    /// Return and forget all recorded writes
    pub fn take_sent(&self) -> Vec<Vec<u8>> {
        std::mem::take(&mut self.lock().sent)
    }

    /// Set how many subsequent writes should fail (for tests).
    pub fn set_write_failures(&self, n: usize) {
        self.lock().write_failures = n;
    }

    /// Set how many subsequent initialize calls should fail (for tests).
    pub fn set_init_failures(&self, n: usize) {
        self.lock().init_failures = n;
    }

    pub fn init_count(&self) -> usize {
        self.lock().init_count
    }
}

impl Transport for MockTransport {
    fn initialize(&mut self) -> Result<()> {
        let mut s = self.lock();
        s.init_count += 1;
        if s.init_failures > 0 {
            s.init_failures -= 1;
            return Err(Error::Transport("mock initialize failure".into()));
        }
        Ok(())
    }

    fn has_message(&mut self) -> bool {
        !self.lock().inbound.is_empty()
    }

    fn write(&mut self, frame: &[u8]) -> Result<()> {
        let mut s = self.lock();
        if s.write_failures > 0 {
            s.write_failures -= 1;
            return Err(Error::Transport("mock write failure".into()));
        }
        s.sent.push(frame.to_vec());
        Ok(())
    }

    fn read(&mut self) -> Result<Vec<u8>> {
        Ok(self.lock().inbound.pop_front().unwrap_or_default())
    }
}
