//! WebSocket transport to the game server.

use super::{Transport, TransportError, TransportEvent};
use crate::protocol::Event;
use anyhow::{Context, Result};
use futures_util::{SinkExt, StreamExt};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

enum Outbound {
    Text(String),
    Close,
}

/// Handle to a background WebSocket connection.
///
/// Cloning is cheap and every clone talks to the same connection task.
#[derive(Clone)]
pub struct WsTransport {
    url: String,
    outbound_tx: mpsc::UnboundedSender<Outbound>,
    connected: Arc<AtomicBool>,
}

impl WsTransport {
    /// Spawn the connection task. Must be called inside a tokio runtime.
    pub fn connect(url: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<TransportEvent>) {
        let url = url.into();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        let connected = Arc::new(AtomicBool::new(false));

        tokio::spawn(Self::connection_task(
            url.clone(),
            event_tx,
            outbound_rx,
            Arc::clone(&connected),
        ));

        (
            Self {
                url,
                outbound_tx,
                connected,
            },
            event_rx,
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn connection_task(
        url: String,
        event_tx: mpsc::UnboundedSender<TransportEvent>,
        mut outbound_rx: mpsc::UnboundedReceiver<Outbound>,
        connected: Arc<AtomicBool>,
    ) {
        if let Err(e) = Self::run_connection(&url, &event_tx, &mut outbound_rx, &connected).await {
            log::error!("Transport: {:#}", e);
            let _ = event_tx.send(TransportEvent::Error(format!("{:#}", e)));
        }

        connected.store(false, Ordering::SeqCst);
        let _ = event_tx.send(TransportEvent::Disconnected);
        log::info!("Transport: connection to {} finished", url);
    }

    async fn run_connection(
        url: &str,
        event_tx: &mpsc::UnboundedSender<TransportEvent>,
        outbound_rx: &mut mpsc::UnboundedReceiver<Outbound>,
        connected: &AtomicBool,
    ) -> Result<()> {
        let (ws_stream, _) = connect_async(url)
            .await
            .with_context(|| format!("Failed to connect to {}", url))?;

        connected.store(true, Ordering::SeqCst);
        let _ = event_tx.send(TransportEvent::Connected);
        log::info!("Transport: connected to {}", url);

        let (mut write, mut read) = ws_stream.split();

        loop {
            tokio::select! {
                outbound = outbound_rx.recv() => match outbound {
                    Some(Outbound::Text(text)) => {
                        write
                            .send(Message::Text(text.into()))
                            .await
                            .context("Failed to send message")?;
                    }
                    Some(Outbound::Close) | None => {
                        let _ = write.send(Message::Close(None)).await;
                        break;
                    }
                },
                inbound = read.next() => match inbound {
                    Some(Ok(Message::Text(text))) => Self::handle_text_message(text.as_str(), event_tx),
                    Some(Ok(Message::Ping(data))) => {
                        let _ = write.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e).context("WebSocket read failed"),
                },
            }
        }

        Ok(())
    }

    fn handle_text_message(text: &str, event_tx: &mpsc::UnboundedSender<TransportEvent>) {
        match Event::decode(text) {
            Ok(event) => {
                log::debug!("Transport: received {}", event.kind());
                let _ = event_tx.send(TransportEvent::Inbound(event));
            }
            Err(e) => log::warn!("Transport: dropping undecodable message: {}", e),
        }
    }
}

impl Transport for WsTransport {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn send(&mut self, text: String) -> Result<(), TransportError> {
        if !self.is_connected() {
            return Err(TransportError::NotConnected);
        }
        self.outbound_tx
            .send(Outbound::Text(text))
            .map_err(|_| TransportError::Closed)
    }

    fn close(&mut self) {
        if self.connected.swap(false, Ordering::SeqCst) {
            log::info!("Transport: closing connection to {}", self.url);
        }
        let _ = self.outbound_tx.send(Outbound::Close);
    }
}
