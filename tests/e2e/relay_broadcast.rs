//! Two clients talking through a real relay

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hbchat::net::Connection;
use hbchat::relay::{Relay, RelaySettings, RelayStats};

use crate::{compose, poll_until_processed, test_app_state};

async fn start_relay() -> (SocketAddr, Arc<RelayStats>) {
    let relay = Relay::bind(RelaySettings {
        bind: "127.0.0.1".into(),
        port: 0,
        ..Default::default()
    })
    .await
    .unwrap();
    let addr = relay.local_addr().unwrap();
    let stats = relay.stats();
    tokio::spawn(relay.run());
    (addr, stats)
}

async fn connect(addr: SocketAddr) -> Connection {
    Connection::connect("127.0.0.1", addr.port(), Duration::from_secs(2))
        .await
        .unwrap()
}

async fn wait_for_clients(stats: &RelayStats, count: usize) {
    for _ in 0..200 {
        if stats.connected() == count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("relay never reached {} clients", count);
}

#[tokio::test]
async fn test_message_reaches_other_client() {
    let (addr, stats) = start_relay().await;
    let mut alice_conn = connect(addr).await;
    let mut bob_conn = connect(addr).await;
    wait_for_clients(&stats, 2).await;

    let mut alice = test_app_state();
    alice.username = "alice".into();
    let mut bob = test_app_state();

    compose(&mut alice, &mut alice_conn, "hi");
    assert_eq!(alice.messages_sent, 1);

    assert!(poll_until_processed(&mut bob, &mut bob_conn).await);
    assert_eq!(bob.transcript.content(), "-chat-\n[127.0.0.1]: <alice>: hi");
    assert_eq!(bob.view.offset, -10);

    // The sender does not get its own message back
    assert!(!hbchat::tui::runner::poll_network(&mut alice, &mut alice_conn, crate::POLL).await);
    assert_eq!(alice.transcript.content(), "-chat-");
}
