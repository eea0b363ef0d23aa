//! Length-prefixed bincode framing over a TCP stream.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};

use crate::protocol::Message;
use crate::transport::{Transport, TransportError};

/// Frames carry a handful of bytes; anything bigger is garbage.
const MAX_FRAME_LEN: u32 = 1024;

/// One peer's end of the connection. Every frame is a 4-byte big-endian
/// payload length followed by the bincode payload.
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }

    /// Dial a hosting peer.
    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }

    /// Bind `0.0.0.0:port`, accept exactly one peer, and stop listening.
    pub async fn host(port: u16) -> anyhow::Result<(Self, SocketAddr)> {
        let listener = TcpListener::bind(("0.0.0.0", port)).await?;
        let (stream, peer) = listener.accept().await?;
        Ok((Self::new(stream), peer))
    }

    fn map_io(err: std::io::Error) -> anyhow::Error {
        use std::io::ErrorKind;
        match err.kind() {
            ErrorKind::UnexpectedEof
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::BrokenPipe => TransportError::PeerDisconnected.into(),
            _ => err.into(),
        }
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let payload = bincode::serialize(&msg)?;
        if payload.len() as u32 > MAX_FRAME_LEN {
            return Err(TransportError::FrameTooLarge(payload.len() as u32).into());
        }
        let len = (payload.len() as u32).to_be_bytes();
        self.stream.write_all(&len).await.map_err(Self::map_io)?;
        self.stream.write_all(&payload).await.map_err(Self::map_io)?;
        log::debug!("sent {:?}", msg);
        Ok(())
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let mut len_buf = [0u8; 4];
        self.stream
            .read_exact(&mut len_buf)
            .await
            .map_err(Self::map_io)?;
        let len = u32::from_be_bytes(len_buf);
        if len == 0 {
            return Err(TransportError::MalformedMessage.into());
        }
        if len > MAX_FRAME_LEN {
            return Err(TransportError::FrameTooLarge(len).into());
        }
        let mut payload = vec![0u8; len as usize];
        self.stream
            .read_exact(&mut payload)
            .await
            .map_err(Self::map_io)?;
        let msg =
            bincode::deserialize(&payload).map_err(|_| TransportError::MalformedMessage)?;
        log::debug!("received {:?}", msg);
        Ok(msg)
    }
}
