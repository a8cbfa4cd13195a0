//! Socket, address, and listener types.
//!
//! - [`address`]: the [`SocketAddress`] IPv4 + port value type
//! - [`connection`]: the [`Connection`] entity, the core of the crate
//! - [`listener`]: the [`Listener`] accept-loop collaborator

pub mod address;
pub mod connection;
pub mod listener;

pub use address::SocketAddress;
pub use connection::{Connection, RECV_BUF_SIZE};
pub use listener::Listener;
