//! Broadcast relay: every chunk a client sends goes to every other client
//!
//! One task per client. Messages are fanned out through a broadcast channel
//! tagged with the sender id so the sender does not receive its own text.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::broadcast;

use hbchat_core::prelude::*;

use crate::censor::Censor;
use crate::config::RelaySettings;
use crate::preamble::{parse_preamble, MAX_PREAMBLE_BYTES};

/// Sent to banned clients before they are disconnected
pub const BANNED_MESSAGE: &[u8] = b"You are banned.\n";

const BROADCAST_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
struct Broadcast {
    from: u64,
    text: Arc<str>,
}

/// Live counters, shared with whoever started the relay
#[derive(Debug, Default)]
pub struct RelayStats {
    connected: AtomicUsize,
    relayed: AtomicU64,
}

impl RelayStats {
    /// Clients currently subscribed to broadcasts
    pub fn connected(&self) -> usize {
        self.connected.load(Ordering::SeqCst)
    }

    /// Messages accepted for broadcast since start
    pub fn relayed(&self) -> u64 {
        self.relayed.load(Ordering::SeqCst)
    }
}

struct Shared {
    settings: RelaySettings,
    censor: Censor,
    stats: Arc<RelayStats>,
    tx: broadcast::Sender<Broadcast>,
}

pub struct Relay {
    listener: TcpListener,
    shared: Arc<Shared>,
}

impl Relay {
    pub async fn bind(settings: RelaySettings) -> Result<Self> {
        settings.validate()?;
        let censor = Censor::new(&settings.censored_words)?;

        let addr = settings.listen_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::relay(format!("failed to listen on {}: {}", addr, e)))?;

        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Ok(Self {
            listener,
            shared: Arc::new(Shared {
                settings,
                censor,
                stats: Arc::new(RelayStats::default()),
                tx,
            }),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn stats(&self) -> Arc<RelayStats> {
        Arc::clone(&self.shared.stats)
    }

    /// Accept clients until the task is dropped or accepting fails
    pub async fn run(self) -> Result<()> {
        info!("hbchat relay listening on {}", self.local_addr()?);
        let mut next_id: u64 = 0;

        loop {
            let (stream, peer) = self.listener.accept().await?;
            next_id += 1;
            let id = next_id;

            let shared = Arc::clone(&self.shared);
            let ip = peer.ip().to_string();

            if shared.settings.is_banned(&ip) {
                info!("Refusing banned client {}", ip);
                tokio::spawn(turn_away(stream));
                continue;
            }

            // Subscribe before spawning so nothing sent after accept is missed
            let rx = shared.tx.subscribe();
            shared.stats.connected.fetch_add(1, Ordering::SeqCst);
            info!("Client {} connected from {}", id, peer);

            tokio::spawn(async move {
                let client = Client {
                    id,
                    ip,
                    shared: Arc::clone(&shared),
                };
                client.serve(stream, rx).await;
                shared.stats.connected.fetch_sub(1, Ordering::SeqCst);
            });
        }
    }
}

async fn turn_away(mut stream: TcpStream) {
    if let Err(e) = stream.write_all(BANNED_MESSAGE).await {
        debug!("Failed to notify banned client: {}", e);
    }
    let _ = stream.shutdown().await;
}

struct Client {
    id: u64,
    ip: String,
    shared: Arc<Shared>,
}

impl Client {
    async fn serve(mut self, stream: TcpStream, mut rx: broadcast::Receiver<Broadcast>) {
        let (mut reader, mut writer) = stream.into_split();
        let mut buf = vec![0u8; self.shared.settings.read_chunk_bytes];
        let mut pending: Vec<u8> = Vec::new();
        let mut identified = !self.shared.settings.expect_proxy_header;

        loop {
            tokio::select! {
                read = reader.read(&mut buf) => {
                    let n = match read {
                        Ok(0) => break,
                        Ok(n) => n,
                        Err(e) => {
                            warn!("Connection error from {}: {}", self.ip, e);
                            break;
                        }
                    };
                    pending.extend_from_slice(&buf[..n]);

                    if !identified {
                        let Some(preamble) = parse_preamble(&pending) else {
                            if pending.len() > MAX_PREAMBLE_BYTES {
                                warn!(
                                    "Dropping client {}: no preamble in {} bytes",
                                    self.id,
                                    pending.len()
                                );
                                break;
                            }
                            continue;
                        };
                        pending.drain(..preamble.consumed);
                        self.ip = preamble.ip;
                        identified = true;

                        if self.shared.settings.is_banned(&self.ip) {
                            info!("Dropping client {}: {} is banned", self.id, self.ip);
                            let _ = writer.write_all(BANNED_MESSAGE).await;
                            let _ = writer.shutdown().await;
                            return;
                        }
                        info!("Client {} identified as {}", self.id, self.ip);
                    }

                    if pending.is_empty() {
                        continue;
                    }
                    self.relay(&String::from_utf8_lossy(&pending));
                    pending.clear();
                }

                received = rx.recv() => match received {
                    Ok(msg) if msg.from == self.id => {}
                    Ok(msg) => {
                        if let Err(e) = writer.write_all(msg.text.as_bytes()).await {
                            warn!("Write failure to {}: {}", self.ip, e);
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!("Client {} missed {} messages", self.id, skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                },
            }
        }

        info!("Client disconnected: {}", self.ip);
    }

    fn relay(&self, raw: &str) {
        let msg = self.shared.censor.censor(raw);
        info!("[{}] Message received: {}", self.ip, msg.trim());

        let text: Arc<str> = format!("[{}]: {}", self.ip, msg).into();
        self.shared.stats.relayed.fetch_add(1, Ordering::SeqCst);
        // No receivers only means nobody else is connected
        let _ = self.shared.tx.send(Broadcast {
            from: self.id,
            text,
        });
    }
}
