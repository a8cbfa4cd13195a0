//! SocketAddress parsing and round-trip tests.

use peerlink::base::error::SocketError;
use peerlink::socket::SocketAddress;

#[test]
fn test_literal_round_trip() {
    let addr = SocketAddress::new("192.0.2.17", 9000).unwrap();
    assert_eq!(addr.ip(), "192.0.2.17");
    assert_eq!(addr.port(), 9000);
    assert_eq!(addr.to_string(), "192.0.2.17:9000");

    let reparsed: SocketAddress = addr.to_string().parse().unwrap();
    assert_eq!(reparsed, addr);
}

#[test]
fn test_malformed_literals_are_rejected() {
    for bad in ["example.com", "10.0.0", "300.1.1.1", "1.2.3.4 ", ""] {
        let err = SocketAddress::new(bad, 80).unwrap_err();
        match err {
            SocketError::AddressParse { input } => assert_eq!(input, bad),
            other => panic!("expected AddressParse for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_pair_parsing() {
    let addr: SocketAddress = "10.1.2.3:65535".parse().unwrap();
    assert_eq!(addr.ip(), "10.1.2.3");
    assert_eq!(addr.port(), 65535);

    for bad in ["10.1.2.3", "10.1.2.3:99999", "10.1.2.3:port", ":80"] {
        assert!(bad.parse::<SocketAddress>().is_err(), "{bad}");
    }
}
