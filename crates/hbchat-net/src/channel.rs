//! Connection to the chat server
//!
//! One TCP stream per process. Sending is a single non-blocking write that
//! either goes out whole or fails; receiving waits for readiness for a
//! bounded time and reads at most one chunk.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use hbchat_core::prelude::*;

/// Address of the public hbchat server
pub const DEFAULT_HOST: &str = "104.236.25.60";

/// Every hbchat server listens on this port
pub const DEFAULT_PORT: u16 = 3071;

/// Longest a receive poll may wait for data
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(10);

/// Largest chunk returned by one receive poll
pub const READ_CHUNK_BYTES: usize = 512;

/// Default bound on the TCP handshake
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of one receive poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Received {
    /// One chunk of server data
    Data(Vec<u8>),
    /// Nothing arrived within the timeout
    Idle,
    /// The peer closed its side (zero-length read)
    Closed,
}

/// The single long-lived connection to the chat server
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    read_buf: Vec<u8>,
    closed: bool,
}

impl Connection {
    /// Connect to `host:port`, giving up after `timeout`
    pub async fn connect(host: &str, port: u16, timeout: Duration) -> Result<Self> {
        let addr = format!("{}:{}", host, port);
        info!("Connecting to {}", addr);

        let stream = match tokio::time::timeout(timeout, TcpStream::connect(&addr)).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(e)) => return Err(Error::connect(addr, e.to_string())),
            Err(_) => {
                return Err(Error::connect(
                    addr,
                    format!("timed out after {}ms", timeout.as_millis()),
                ))
            }
        };

        if let Err(e) = stream.set_nodelay(true) {
            warn!("Failed to set TCP_NODELAY on {}: {}", addr, e);
        }

        let peer = stream
            .peer_addr()
            .map_err(|e| Error::connect(addr.clone(), e.to_string()))?;

        info!("Connected to {}", peer);
        Ok(Self::from_stream(stream, peer))
    }

    fn from_stream(stream: TcpStream, peer: SocketAddr) -> Self {
        Self {
            stream,
            peer,
            read_buf: vec![0; READ_CHUNK_BYTES],
            closed: false,
        }
    }

    /// Change the largest chunk a receive poll returns
    pub fn with_chunk_size(mut self, bytes: usize) -> Self {
        self.read_buf = vec![0; bytes.max(1)];
        self
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    /// True once a receive poll has seen the peer close
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Best-effort, non-blocking send of the whole buffer.
    ///
    /// Nothing is retried: a socket that is not ready, a partial write, or an
    /// OS error is reported as [`Error::Send`].
    pub fn try_send(&self, bytes: &[u8]) -> Result<usize> {
        match self.stream.try_write(bytes) {
            Ok(n) if n == bytes.len() => {
                trace!("Sent {} bytes to {}", n, self.peer);
                Ok(n)
            }
            Ok(n) => Err(Error::send(format!(
                "partial write ({} of {} bytes)",
                n,
                bytes.len()
            ))),
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                Err(Error::send("socket not ready for writing"))
            }
            Err(e) => Err(Error::send(e.to_string())),
        }
    }

    /// Wait at most `timeout` for data and read one chunk.
    ///
    /// Never waits longer than `timeout`. Once the peer has closed, every
    /// later poll returns [`Received::Closed`] immediately.
    pub async fn try_receive(&mut self, timeout: Duration) -> Result<Received> {
        if self.closed {
            return Ok(Received::Closed);
        }

        match tokio::time::timeout(timeout, self.stream.readable()).await {
            Err(_) => return Ok(Received::Idle),
            Ok(Err(e)) => return Err(e.into()),
            Ok(Ok(())) => {}
        }

        match self.stream.try_read(&mut self.read_buf) {
            Ok(0) => {
                info!("Server {} closed the connection", self.peer);
                self.closed = true;
                Ok(Received::Closed)
            }
            Ok(n) => {
                trace!("Received {} bytes from {}", n, self.peer);
                Ok(Received::Data(self.read_buf[..n].to_vec()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => Ok(Received::Idle),
            Err(e) => Err(e.into()),
        }
    }

    /// Close the write half and drop the socket
    pub async fn shutdown(mut self) {
        if let Err(e) = self.stream.shutdown().await {
            debug!("Socket shutdown for {} reported: {}", self.peer, e);
        }
        info!("Connection to {} closed", self.peer);
    }
}
