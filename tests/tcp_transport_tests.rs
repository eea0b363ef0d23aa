use broadside::{AttackResult, Message, TcpTransport, Transport, TransportError};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

#[tokio::test(flavor = "multi_thread")]
async fn frames_cross_a_real_socket() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let mut transport = TcpTransport::new(socket);
        let msg = transport.recv().await.unwrap();
        assert_eq!(msg, Message::Attack { row: 3, col: 7 });
        transport
            .send(Message::Outcome(AttackResult::Miss))
            .await
            .unwrap();
    });

    let mut client = TcpTransport::connect(addr).await?;
    client.send(Message::Attack { row: 3, col: 7 }).await?;
    let reply = client.recv().await?;
    assert_eq!(reply, Message::Outcome(AttackResult::Miss));

    server.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn peer_close_mid_receive_raises_disconnect() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        drop(socket);
    });

    let mut client = TcpTransport::connect(addr).await?;
    let err = client.recv().await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<TransportError>(),
        Some(&TransportError::PeerDisconnected)
    );

    server.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn close_after_partial_length_prefix_raises_disconnect() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        socket.write_all(&[0u8, 0]).await.unwrap();
        socket.flush().await.unwrap();
        drop(socket);
    });

    let mut client = TcpTransport::connect(addr).await?;
    let err = client.recv().await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<TransportError>(),
        Some(&TransportError::PeerDisconnected)
    );

    server.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn oversized_frame_is_rejected() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        socket.write_all(&[0xFF, 0xFF, 0xFF, 0xFF]).await.unwrap();
        socket.flush().await.unwrap();
    });

    let mut client = TcpTransport::connect(addr).await?;
    let err = client.recv().await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<TransportError>(),
        Some(&TransportError::FrameTooLarge(u32::MAX))
    );

    server.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn zero_length_frame_is_rejected() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        socket.write_all(&[0u8, 0, 0, 0]).await.unwrap();
        socket.flush().await.unwrap();
    });

    let mut client = TcpTransport::connect(addr).await?;
    let err = client.recv().await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<TransportError>(),
        Some(&TransportError::MalformedMessage)
    );

    server.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn undecodable_payload_is_rejected() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        // valid length prefix, garbage payload
        socket.write_all(&[0u8, 0, 0, 4]).await.unwrap();
        socket.write_all(&[0xFF, 0xFF, 0xFF, 0xFF]).await.unwrap();
        socket.flush().await.unwrap();
    });

    let mut client = TcpTransport::connect(addr).await?;
    let err = client.recv().await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<TransportError>(),
        Some(&TransportError::MalformedMessage)
    );

    server.await?;
    Ok(())
}
