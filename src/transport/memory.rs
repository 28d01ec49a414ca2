//! In-process transport that records what was sent.
//!
//! Clones share state, so a caller can hand one clone to a screen and
//! inspect the other.

use super::{Transport, TransportError};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MemoryState {
    connected: bool,
    closed: bool,
    sent: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryTransport {
    /// A transport that reports an active connection
    pub fn connected() -> Self {
        let transport = Self::default();
        transport.set_connected(true);
        transport
    }

    /// A transport with no active connection
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn set_connected(&self, connected: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.connected = connected;
        }
    }

    /// Messages sent so far, oldest first
    pub fn sent(&self) -> Vec<String> {
        self.state.lock().map(|state| state.sent.clone()).unwrap_or_default()
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().map(|state| state.closed).unwrap_or(false)
    }
}

impl Transport for MemoryTransport {
    fn is_connected(&self) -> bool {
        self.state.lock().map(|state| state.connected).unwrap_or(false)
    }

    fn send(&mut self, text: String) -> Result<(), TransportError> {
        let mut state = self.state.lock().map_err(|_| TransportError::Closed)?;
        if !state.connected {
            return Err(TransportError::NotConnected);
        }
        state.sent.push(text);
        Ok(())
    }

    fn close(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.connected = false;
            state.closed = true;
        }
    }
}
