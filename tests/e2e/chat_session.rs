//! Client session against a loopback stand-in for the server

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use hbchat::app::{process_message, AppState, ConnectionStatus, Message, Settings};
use hbchat::core::{GROWN_CAPACITY_BYTES, INITIAL_CAPACITY_BYTES};
use hbchat::net::test_utils::loopback;

use crate::{compose, poll_until_processed, test_app_state};

#[tokio::test]
async fn test_server_message_lands_in_transcript() {
    let (mut conn, mut server) = loopback().await;
    let mut state = test_app_state();

    server.write_all(b"hello").await.unwrap();
    assert!(poll_until_processed(&mut state, &mut conn).await);

    assert_eq!(state.transcript.content(), "-chat-\nhello");
    assert_eq!(state.view.offset, -10);
}

#[tokio::test]
async fn test_compose_sends_username_prefixed_bytes() {
    let (mut conn, mut server) = loopback().await;
    let mut state = test_app_state();

    process_message(&mut state, Message::OpenUsernameEntry, &mut conn);
    for c in "alice".chars() {
        process_message(&mut state, Message::EntryInput(c), &mut conn);
    }
    process_message(&mut state, Message::EntryConfirm, &mut conn);
    compose(&mut state, &mut conn, "hi");

    let mut buf = [0u8; 11];
    server.read_exact(&mut buf).await.unwrap();
    assert_eq!(&buf, b"<alice>: hi");
    assert_eq!(state.messages_sent, 1);
}

#[tokio::test]
async fn test_crossing_initial_capacity_grows_once() {
    let (mut conn, mut server) = loopback().await;
    let mut state = test_app_state();

    let line = "x".repeat(99);
    let mut expected = String::from("-chat-");
    let mut before_growth = None;

    // Each record adds 100 bytes; 61 of them cross 6000 but stay under 8192
    for i in 0..61 {
        server.write_all(line.as_bytes()).await.unwrap();
        assert!(poll_until_processed(&mut state, &mut conn).await, "record {}", i);
        expected.push('\n');
        expected.push_str(&line);

        if state.transcript.growth_count() == 0 {
            before_growth = Some(state.transcript.content().to_string());
        }
    }

    assert!(expected.len() > INITIAL_CAPACITY_BYTES);
    assert_eq!(state.transcript.growth_count(), 1);
    assert_eq!(state.transcript.capacity(), GROWN_CAPACITY_BYTES);
    assert_eq!(state.transcript.content(), expected);

    let before = before_growth.unwrap();
    assert!(state.transcript.content().starts_with(&before));
}

#[tokio::test]
async fn test_server_close_marks_connection_closed() {
    let (mut conn, server) = loopback().await;
    let mut state = test_app_state();
    drop(server);

    assert!(poll_until_processed(&mut state, &mut conn).await);
    assert_eq!(state.connection, ConnectionStatus::Closed);
    assert!(!state.should_quit());
}

#[tokio::test]
async fn test_server_close_quits_when_configured() {
    let (mut conn, server): (_, TcpStream) = loopback().await;
    let mut settings = Settings::default();
    settings.behavior.quit_on_disconnect = true;
    let mut state = AppState::new(&settings).unwrap();
    drop(server);

    assert!(poll_until_processed(&mut state, &mut conn).await);
    assert!(state.should_quit());
}
