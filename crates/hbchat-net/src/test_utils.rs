//! Test utilities for connection tests
//!
//! Provides a loopback server so tests can talk to a real socket.

use std::time::Duration;

use tokio::net::{TcpListener, TcpStream};

use super::Connection;

/// Connect a [`Connection`] to a fresh loopback listener.
///
/// Returns the client connection and the server side of the accepted socket.
pub async fn loopback() -> (Connection, TcpStream) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let port = listener.local_addr().expect("listener address").port();

    let (conn, accepted) = tokio::join!(
        Connection::connect("127.0.0.1", port, Duration::from_secs(2)),
        listener.accept()
    );

    let conn = conn.expect("connect to loopback listener");
    let (peer, _) = accepted.expect("accept loopback client");
    (conn, peer)
}
