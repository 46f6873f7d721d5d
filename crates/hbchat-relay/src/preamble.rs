//! Proxy preamble: `IP\0PORT\0` written ahead of the chat data

/// Longest preamble waited for. An IPv6 address and a port take 52 bytes.
pub const MAX_PREAMBLE_BYTES: usize = 64;

/// Client address announced by a fronting proxy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyPreamble {
    pub ip: String,
    pub port: String,
    /// Bytes taken by the preamble, both terminators included
    pub consumed: usize,
}

/// Parse the preamble from the start of `buf`.
///
/// Returns `None` until both NUL terminators have arrived.
pub fn parse_preamble(buf: &[u8]) -> Option<ProxyPreamble> {
    let first = buf.iter().position(|&b| b == 0)?;
    let second = first + 1 + buf[first + 1..].iter().position(|&b| b == 0)?;

    Some(ProxyPreamble {
        ip: String::from_utf8_lossy(&buf[..first]).into_owned(),
        port: String::from_utf8_lossy(&buf[first + 1..second]).into_owned(),
        consumed: second + 1,
    })
}
