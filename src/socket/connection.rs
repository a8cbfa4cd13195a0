//! The connection entity: one owned TCP stream, burst-delimited messaging.
//!
//! A [`Connection`] owns exactly one transport handle and a cached snapshot
//! of the remote address. It is created either by an outbound
//! [`Connection::connect`] or by adopting a stream an accept loop already
//! established ([`Connection::from_accepted`]), and exposes whole-message
//! [`send`](Connection::send) and [`receive`](Connection::receive) calls.
//!
//! The receive side is the heart of the crate: it returns one complete
//! message per call using only "no more bytes are queued right now" as the
//! message boundary, so callers never deal with partial reads. See
//! [`Connection::receive`] for the algorithm.

use crate::base::error::SocketError;
use crate::socket::address::SocketAddress;
use bytes::{Bytes, BytesMut};
use std::io;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Chunk size for each read inside [`Connection::receive`].
///
/// A burst whose length is an exact multiple of this still terminates in a
/// single `receive()` call; the value only controls chunking granularity.
pub const RECV_BUF_SIZE: usize = 1024;

#[cfg(unix)]
fn handle_id(stream: &TcpStream) -> i32 {
    use std::os::fd::AsRawFd;
    stream.as_raw_fd()
}

#[cfg(not(unix))]
fn handle_id(_stream: &TcpStream) -> i32 {
    -1
}

/// One live (or formerly live) TCP endpoint pairing.
///
/// The stream is exclusively owned: adoption transfers ownership in, and
/// nothing ever hands it back out. While open, the connection holds the
/// stream; once closed it holds nothing, so no operation on a closed
/// connection can touch the OS handle. Dropping a still-open connection
/// releases the handle silently (best-effort teardown with no caller left
/// to observe an error).
#[derive(Debug)]
pub struct Connection {
    stream: Option<TcpStream>,
    remote: SocketAddress,
}

impl Connection {
    /// Open an outbound connection to `address`.
    ///
    /// Blocks until the OS reports the connect as established or failed.
    /// On failure returns [`SocketError::Connect`] carrying the target
    /// address and the OS error text; the handle allocated for the attempt
    /// is released either way.
    pub async fn connect(address: &SocketAddress) -> Result<Self, SocketError> {
        let stream = TcpStream::connect(address.to_socket_addr())
            .await
            .map_err(|e| {
                tracing::debug!("connect to {} failed: {}", address, e);
                SocketError::Connect {
                    address: *address,
                    reason: e.to_string(),
                }
            })?;
        tracing::debug!("connected to {}", address);
        Ok(Self {
            stream: Some(stream),
            remote: *address,
        })
    }

    /// Adopt a stream that an accept loop already established.
    ///
    /// The connection starts open; the peer's address is queried from the
    /// OS to populate [`peer_address`](Connection::peer_address). A failing
    /// or non-IPv4 peer query returns [`SocketError::PeerAddress`].
    pub fn from_accepted(stream: TcpStream) -> Result<Self, SocketError> {
        let peer = stream.peer_addr().map_err(|e| SocketError::PeerAddress {
            reason: e.to_string(),
        })?;
        let remote = SocketAddress::try_from(peer)?;
        tracing::debug!("adopted inbound connection from {}", remote);
        Ok(Self {
            stream: Some(stream),
            remote,
        })
    }

    /// Whether the connection is still open.
    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// The remote peer's address, as captured at construction.
    ///
    /// Available regardless of open state.
    pub fn peer_address(&self) -> SocketAddress {
        self.remote
    }

    /// Send `message` (possibly empty) as one burst.
    ///
    /// Issues exactly one underlying write and requires the OS to accept
    /// every byte of it: a short write is fatal and returns
    /// [`SocketError::Send`] with the expected and actual counts, never a
    /// silent retry. Completes once the OS has taken the bytes into its
    /// send buffer, not when the peer acknowledges them.
    pub async fn send(&mut self, message: &[u8]) -> Result<(), SocketError> {
        let stream = self.stream.as_mut().ok_or(SocketError::ClosedConnection)?;
        match stream.write(message).await {
            Ok(written) if written == message.len() => Ok(()),
            Ok(written) => Err(SocketError::Send {
                expected: message.len(),
                written,
                reason: None,
            }),
            Err(e) => Err(SocketError::Send {
                expected: message.len(),
                written: 0,
                reason: Some(e.to_string()),
            }),
        }
    }

    /// Receive one complete message, waiting for it if necessary.
    ///
    /// Reads [`RECV_BUF_SIZE`] chunks until the stream has nothing more
    /// queued:
    /// - the first read may wait indefinitely, so `receive()` doubles as
    ///   "wait for the peer's next burst";
    /// - a chunk that comes back short ends the message;
    /// - a chunk that comes back exactly full triggers a non-blocking probe
    ///   for further queued bytes, distinguishing "burst ended on the chunk
    ///   boundary" from "more data pending"; drain reads after the first
    ///   never wait beyond what is already queued.
    ///
    /// A read error returns [`SocketError::Receive`]. A zero-byte first
    /// read means the peer closed without sending a message and returns
    /// [`SocketError::PeerClosed`]; a peer that closes after its burst does
    /// not invalidate the bytes already received, so end-of-stream during
    /// draining simply ends the message.
    ///
    /// Boundary semantics: one message per burst. Callers must drain between
    /// peer bursts; back-to-back sends with no intervening receive are
    /// coalesced into one message.
    pub async fn receive(&mut self) -> Result<Bytes, SocketError> {
        let stream = self.stream.as_mut().ok_or(SocketError::ClosedConnection)?;
        let fd = handle_id(stream);
        let mut message = BytesMut::new();
        let mut chunk = [0u8; RECV_BUF_SIZE];

        let mut n = stream
            .read(&mut chunk)
            .await
            .map_err(|e| SocketError::Receive {
                fd,
                reason: e.to_string(),
            })?;
        if n == 0 {
            return Err(SocketError::PeerClosed);
        }
        message.extend_from_slice(&chunk[..n]);

        while n == RECV_BUF_SIZE {
            // Exactly-full chunk: either the burst ended on the boundary or
            // more bytes are queued. try_read answers without waiting;
            // WouldBlock is the "zero bytes queued" case, and EOF means the
            // peer closed after the burst we already hold, which also ends
            // the message.
            match stream.try_read(&mut chunk) {
                Ok(0) => break,
                Ok(more) => {
                    message.extend_from_slice(&chunk[..more]);
                    n = more;
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) => {
                    return Err(SocketError::Receive {
                        fd,
                        reason: e.to_string(),
                    })
                }
            }
        }

        tracing::trace!("received {} byte burst from {}", message.len(), self.remote);
        Ok(message.freeze())
    }

    /// Close the connection and release the handle.
    ///
    /// Closing is not idempotent: calling `close()` on an already-closed
    /// connection is a contract violation and panics. An OS-level shutdown
    /// failure returns [`SocketError::Close`]; the handle is released in
    /// either case, exactly once.
    pub async fn close(&mut self) -> Result<(), SocketError> {
        let mut stream = self
            .stream
            .take()
            .expect("close() called on a connection that is already closed");
        stream
            .shutdown()
            .await
            .map_err(|e| SocketError::Close {
                reason: e.to_string(),
            })?;
        tracing::debug!("closed connection to {}", self.remote);
        Ok(())
    }
}
