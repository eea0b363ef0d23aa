//! In-process transport pair, for tests and local experiments.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::protocol::Message;
use crate::transport::{Transport, TransportError};

/// One end of a pair of crossed unbounded channels. Dropping either end
/// makes the survivor report `PeerDisconnected`, mirroring a closed socket.
pub struct InMemoryTransport {
    tx: UnboundedSender<Message>,
    rx: UnboundedReceiver<Message>,
}

impl InMemoryTransport {
    /// Two connected ends.
    pub fn pair() -> (Self, Self) {
        let (tx_a, rx_b) = mpsc::unbounded_channel();
        let (tx_b, rx_a) = mpsc::unbounded_channel();
        (
            Self { tx: tx_a, rx: rx_a },
            Self { tx: tx_b, rx: rx_b },
        )
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        self.tx
            .send(msg)
            .map_err(|_| TransportError::PeerDisconnected)?;
        Ok(())
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        match self.rx.recv().await {
            Some(msg) => Ok(msg),
            None => Err(TransportError::PeerDisconnected.into()),
        }
    }
}
