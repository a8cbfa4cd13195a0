//! IPv4 socket address value type.
//!
//! [`SocketAddress`] is the immutable (IPv4 address, port) pair used both as
//! an outbound connect target and as the result of peer-address
//! introspection. Construction from strings is validated up front: a literal
//! that does not parse as dotted-decimal IPv4 fails with
//! [`SocketError::AddressParse`] instead of silently producing a garbage
//! address.

use crate::base::error::SocketError;
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;

/// An immutable IPv4 address and port pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SocketAddress {
    ip: Ipv4Addr,
    port: u16,
}

impl SocketAddress {
    /// Build an address from a dotted-decimal IPv4 literal and a port.
    ///
    /// Fails with [`SocketError::AddressParse`] if `ip` is not a
    /// well-formed IPv4 literal.
    pub fn new(ip: &str, port: u16) -> Result<Self, SocketError> {
        let ip = Ipv4Addr::from_str(ip).map_err(|_| SocketError::AddressParse {
            input: ip.to_string(),
        })?;
        Ok(Self { ip, port })
    }

    /// Build an address from an already-parsed IPv4 address and a port.
    pub fn from_ip(ip: Ipv4Addr, port: u16) -> Self {
        Self { ip, port }
    }

    /// The IPv4 address rendered as a dotted-decimal string.
    pub fn ip(&self) -> String {
        self.ip.to_string()
    }

    /// The port number.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub(crate) fn to_socket_addr(self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.ip, self.port))
    }
}

impl fmt::Display for SocketAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}

impl FromStr for SocketAddress {
    type Err = SocketError;

    /// Parse an `"ip:port"` pair, e.g. `"192.168.0.1:9000"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || SocketError::AddressParse {
            input: s.to_string(),
        };
        let (ip, port) = s.rsplit_once(':').ok_or_else(parse_err)?;
        let ip = Ipv4Addr::from_str(ip).map_err(|_| parse_err())?;
        let port = port.parse::<u16>().map_err(|_| parse_err())?;
        Ok(Self { ip, port })
    }
}

impl From<SocketAddrV4> for SocketAddress {
    fn from(addr: SocketAddrV4) -> Self {
        Self {
            ip: *addr.ip(),
            port: addr.port(),
        }
    }
}

impl TryFrom<SocketAddr> for SocketAddress {
    type Error = SocketError;

    /// IPv6 endpoints are rejected; this crate speaks IPv4 only.
    fn try_from(addr: SocketAddr) -> Result<Self, Self::Error> {
        match addr {
            SocketAddr::V4(v4) => Ok(Self::from(v4)),
            SocketAddr::V6(v6) => Err(SocketError::PeerAddress {
                reason: format!("peer {v6} is not an IPv4 endpoint"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_literal() {
        let addr = SocketAddress::new("192.168.0.1", 9000).unwrap();
        assert_eq!(addr.ip(), "192.168.0.1");
        assert_eq!(addr.port(), 9000);

        for bad in ["", "localhost", "256.0.0.1", "1.2.3", "1.2.3.4.5"] {
            let err = SocketAddress::new(bad, 9000).unwrap_err();
            assert!(matches!(err, SocketError::AddressParse { .. }), "{bad}");
        }
    }

    #[test]
    fn test_display_round_trip() {
        let addr = SocketAddress::new("10.0.0.7", 65535).unwrap();
        let parsed: SocketAddress = addr.to_string().parse().unwrap();
        assert_eq!(parsed, addr);
    }

    #[test]
    fn test_from_str_rejects_malformed_pairs() {
        for bad in ["1.2.3.4", "1.2.3.4:", "1.2.3.4:70000", ":9000", "a:b"] {
            let err = bad.parse::<SocketAddress>().unwrap_err();
            assert!(matches!(err, SocketError::AddressParse { .. }), "{bad}");
        }
    }

    #[test]
    fn test_packed_form_round_trip() {
        // string -> packed IPv4 -> string preserves ip and port
        let addr = SocketAddress::new("172.16.254.3", 4242).unwrap();
        let packed = match addr.to_socket_addr() {
            SocketAddr::V4(v4) => v4,
            SocketAddr::V6(_) => unreachable!(),
        };
        let back = SocketAddress::from(packed);
        assert_eq!(back.ip(), "172.16.254.3");
        assert_eq!(back.port(), 4242);
    }

    #[test]
    fn test_rejects_ipv6_peer() {
        let v6: SocketAddr = "[::1]:9000".parse().unwrap();
        let err = SocketAddress::try_from(v6).unwrap_err();
        assert!(matches!(err, SocketError::PeerAddress { .. }));
    }
}
