//! Integration tests for the accept-loop collaborator.

use peerlink::base::error::SocketError;
use peerlink::socket::{Connection, Listener, SocketAddress};

#[tokio::test]
async fn test_ephemeral_bind_resolves_port() {
    let addr = SocketAddress::new("127.0.0.1", 0).unwrap();
    let listener = Listener::bind(&addr).await.unwrap();

    let local = listener.local_address();
    assert_eq!(local.ip(), "127.0.0.1");
    assert_ne!(local.port(), 0);
}

#[tokio::test]
async fn test_accept_adopts_open_connection() {
    let addr = SocketAddress::new("127.0.0.1", 0).unwrap();
    let listener = Listener::bind(&addr).await.unwrap();
    let target = listener.local_address();

    let accepting = tokio::spawn(async move { listener.accept().await.unwrap() });
    let mut client = Connection::connect(&target).await.unwrap();
    let mut server = accepting.await.unwrap();

    assert!(server.is_open());
    assert_eq!(server.peer_address().ip(), "127.0.0.1");

    client.send(b"ping").await.unwrap();
    let got = server.receive().await.unwrap();
    assert_eq!(&got[..], &b"ping"[..]);

    server.send(b"pong").await.unwrap();
    let got = client.receive().await.unwrap();
    assert_eq!(&got[..], &b"pong"[..]);
}

#[tokio::test]
async fn test_bind_conflict_is_an_error() {
    let addr = SocketAddress::new("127.0.0.1", 0).unwrap();
    let first = Listener::bind(&addr).await.unwrap();
    let taken = first.local_address();

    let err = Listener::bind(&taken).await.unwrap_err();
    match err {
        SocketError::Bind { address, reason } => {
            assert_eq!(address, taken);
            assert!(!reason.is_empty());
        }
        other => panic!("expected Bind error, got {other:?}"),
    }
}
