//! # peerlink
//!
//! A message-oriented TCP connection library for peer-to-peer sessions.
//!
//! `peerlink` wraps a single TCP connection behind one [`socket::Connection`]
//! object: connect outbound or adopt an accepted stream, send a complete
//! message with one call, and receive a complete message with one call,
//! without the caller ever managing partial reads or buffer draining.
//!
//! Message boundaries are *bursts*: `receive()` drains everything the OS has
//! queued for the connection and returns it as one message. There is no
//! length prefix and no framing protocol. This works when each logical send
//! corresponds to one burst the receiver drains before the peer's next burst
//! arrives; peers that pipeline sends back-to-back without the receiver
//! draining in between will see their messages coalesced.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use peerlink::socket::{Connection, SocketAddress};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), peerlink::base::error::SocketError> {
//!     let address = SocketAddress::new("127.0.0.1", 9000)?;
//!     let mut conn = Connection::connect(&address).await?;
//!     conn.send(b"hello").await?;
//!     let reply = conn.receive().await?;
//!     println!("{} bytes from {}", reply.len(), conn.peer_address());
//!     conn.close().await
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Core error definitions
//! - [`socket`] - Connection, address, and listener types
//!
//! ## Concurrency
//!
//! A `Connection` is owned by one logical session flow: `send`, `receive`,
//! and `close` take `&mut self`, so the borrow checker enforces the
//! single-flow constraint without any internal locking. Both `send` and
//! `receive` complete fully before returning and carry no timeout; a
//! `receive()` with no pending data waits indefinitely for the next burst.

pub mod base;
pub mod socket;
