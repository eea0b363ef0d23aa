//! Message channel between the two peers.

use core::fmt;

use crate::protocol::Message;

/// A bidirectional, ordered message channel. Both operations complete fully
/// or fail; no partial frame is ever surfaced to the caller.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<Message>;
}

/// Fatal channel failures. Every variant ends the session; there is no
/// reconnection protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The peer closed the connection mid-frame.
    PeerDisconnected,
    /// A received payload was empty or did not decode into a `Message`.
    MalformedMessage,
    /// A frame length prefix exceeded the accepted maximum.
    FrameTooLarge(u32),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::PeerDisconnected => write!(f, "peer disconnected"),
            TransportError::MalformedMessage => write!(f, "malformed message"),
            TransportError::FrameTooLarge(len) => write!(f, "frame too large: {} bytes", len),
        }
    }
}

impl std::error::Error for TransportError {}

pub mod in_memory;
pub mod tcp;
