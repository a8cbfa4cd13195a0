//! Base types and error handling.
//!
//! Provides the foundational error taxonomy shared by every socket
//! operation:
//! - [`error::SocketError`]: one variant per failure kind, each carrying the
//!   context the caller needs to render or branch on it

pub mod error;
