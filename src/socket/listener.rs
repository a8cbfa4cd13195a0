//! Accept-loop collaborator.
//!
//! [`Listener`] is the inbound counterpart of [`Connection::connect`]: it
//! binds a local IPv4 address and turns each accepted stream into an adopted
//! [`Connection`]. It exists so applications never handle raw streams
//! themselves; ownership of each accepted handle moves straight into the
//! connection object.

use crate::base::error::SocketError;
use crate::socket::address::SocketAddress;
use crate::socket::connection::Connection;
use tokio::net::TcpListener;

/// A bound TCP listener producing adopted [`Connection`]s.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
    local: SocketAddress,
}

impl Listener {
    /// Bind `address`. Port 0 asks the OS for an ephemeral port; the
    /// resolved port is visible via [`local_address`](Listener::local_address).
    pub async fn bind(address: &SocketAddress) -> Result<Self, SocketError> {
        let inner = TcpListener::bind(address.to_socket_addr())
            .await
            .map_err(|e| {
                tracing::debug!("bind {} failed: {}", address, e);
                SocketError::Bind {
                    address: *address,
                    reason: e.to_string(),
                }
            })?;
        let local = match inner.local_addr() {
            Ok(addr) => SocketAddress::try_from(addr)?,
            Err(e) => {
                return Err(SocketError::Bind {
                    address: *address,
                    reason: e.to_string(),
                })
            }
        };
        tracing::debug!("listening on {}", local);
        Ok(Self { inner, local })
    }

    /// Wait for the next inbound connection and adopt it.
    pub async fn accept(&self) -> Result<Connection, SocketError> {
        let (stream, _) = self.inner.accept().await.map_err(|e| {
            tracing::debug!("accept on {} failed: {}", self.local, e);
            SocketError::Accept {
                reason: e.to_string(),
            }
        })?;
        Connection::from_accepted(stream)
    }

    /// The address this listener is bound to.
    pub fn local_address(&self) -> SocketAddress {
        self.local
    }
}
