//! Transport boundary between the game screens and the server
//!
//! Screens only need three things from a connection: whether it is up, a
//! fire-and-forget `send`, and `close` on teardown. Inbound traffic is
//! delivered separately as [`TransportEvent`]s on a channel that the UI loop
//! drains, so every handler runs on the UI task.

pub mod memory;
pub mod websocket;

use crate::protocol::Event;
use thiserror::Error;

pub use memory::MemoryTransport;
pub use websocket::WsTransport;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("no active connection")]
    NotConnected,
    #[error("connection task has shut down")]
    Closed,
}

/// Notifications produced by a transport for the UI loop
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    Connected,
    Inbound(Event),
    Disconnected,
    Error(String),
}

pub trait Transport {
    fn is_connected(&self) -> bool;

    /// Queue an already serialized message. No delivery guarantee.
    fn send(&mut self, text: String) -> Result<(), TransportError>;

    /// Close the connection. Calling it again is a no-op.
    fn close(&mut self);
}
