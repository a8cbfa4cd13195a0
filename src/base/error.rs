use crate::socket::address::SocketAddress;
use thiserror::Error;

fn send_reason(reason: &Option<String>) -> String {
    match reason {
        Some(text) => format!(". Reason: {text}"),
        None => String::new(),
    }
}

/// Errors surfaced by socket operations.
///
/// Every variant is terminal for the operation that raised it: nothing in
/// this crate retries internally, and every failure propagates synchronously
/// to the immediate caller. Variants carry structured context rather than
/// pre-rendered prose so callers can branch on them exhaustively.
#[derive(Debug, Error)]
pub enum SocketError {
    /// Outbound connect failed at the OS level.
    #[error("failed to connect to {address}: {reason}")]
    Connect {
        address: SocketAddress,
        reason: String,
    },

    /// A send, receive, or close was attempted on a connection that is no
    /// longer open.
    #[error("connection is closed")]
    ClosedConnection,

    /// The OS accepted fewer bytes than the message length in a single send.
    ///
    /// `reason` holds the OS error text only when the OS actually reported
    /// an error condition; a short write without one is still a failure.
    #[error("unexpected send length: expected {expected}, actual {written}{}", send_reason(.reason))]
    Send {
        expected: usize,
        written: usize,
        reason: Option<String>,
    },

    /// The OS read call reported an error.
    #[error("receive failed (fd={fd}): {reason}")]
    Receive { fd: i32, reason: String },

    /// The peer closed its side of the connection (read returned zero bytes).
    #[error("receive failed: peer closed connection")]
    PeerClosed,

    /// The OS failed to shut the connection down cleanly.
    #[error("failed to close connection: {reason}")]
    Close { reason: String },

    /// An address string did not parse as an IPv4 literal (or `ip:port` pair).
    #[error("invalid IPv4 address: {input:?}")]
    AddressParse { input: String },

    /// The peer-identity query on an adopted connection failed, or the peer
    /// is not an IPv4 endpoint.
    #[error("failed to resolve peer address: {reason}")]
    PeerAddress { reason: String },

    /// A listener could not bind its local address.
    #[error("failed to bind {address}: {reason}")]
    Bind {
        address: SocketAddress,
        reason: String,
    },

    /// A listener failed to accept an incoming connection.
    #[error("accept failed: {reason}")]
    Accept { reason: String },
}
