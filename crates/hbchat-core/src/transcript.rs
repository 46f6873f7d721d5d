//! Transcript buffer - the append-only chat history
//!
//! The transcript is one growing string of newline-joined records. Its
//! backing store follows a fixed two-tier capacity policy: it starts at
//! [`INITIAL_CAPACITY_BYTES`] and is bumped exactly once to
//! [`GROWN_CAPACITY_BYTES`] the first time an append does not fit. Content
//! that still does not fit after the bump is handled by the configured
//! [`OverflowPolicy`].
//!
//! Wire chunks are appended one record each. A multibyte character split
//! across two chunks is held back and completed by the next chunk, so it
//! lands at the start of the following record instead of becoming two
//! replacement characters.

use crate::error::{Error, Result};

/// Header the transcript starts with
pub const DEFAULT_SEED: &str = "-chat-";

/// Capacity of the backing store at startup
pub const INITIAL_CAPACITY_BYTES: usize = 6000;

/// Capacity after the one-shot bump
pub const GROWN_CAPACITY_BYTES: usize = 8192;

/// The two capacity tiers of the transcript store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityTiers {
    pub initial: usize,
    pub grown: usize,
}

impl Default for CapacityTiers {
    fn default() -> Self {
        Self {
            initial: INITIAL_CAPACITY_BYTES,
            grown: GROWN_CAPACITY_BYTES,
        }
    }
}

/// What happens when content exceeds even the grown capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Drop the oldest records until the content fits again
    #[default]
    DropOldest,
    /// Refuse the append with [`Error::BufferOverflow`]; content is unchanged
    Reject,
}

/// Result of a successful append
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppendOutcome {
    /// The one-shot capacity bump happened during this append
    pub grew: bool,
    /// Bytes of old history discarded to make room
    pub dropped_bytes: usize,
    /// Nothing was appended: the chunk was only the start of a character
    pub deferred: bool,
}

/// Append-only, growth-bounded chat history
#[derive(Debug, Clone)]
pub struct TranscriptBuffer {
    content: String,
    capacity: usize,
    tiers: CapacityTiers,
    overflow: OverflowPolicy,
    growth_count: u32,
    generation: u64,
    /// Leading bytes of a character cut off at the end of the last chunk
    carry: Vec<u8>,
}

impl Default for TranscriptBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl TranscriptBuffer {
    /// Create a transcript with the default tiers and overflow policy
    pub fn new(seed: &str) -> Self {
        let mut buffer = Self::empty(CapacityTiers::default(), OverflowPolicy::DropOldest);
        // DropOldest never refuses content.
        let _ = buffer.seed(seed);
        buffer
    }

    /// Create a transcript with explicit tiers and overflow policy
    ///
    /// Fails only with [`OverflowPolicy::Reject`] when the seed itself does
    /// not fit in the grown capacity.
    pub fn with_policy(seed: &str, tiers: CapacityTiers, overflow: OverflowPolicy) -> Result<Self> {
        let mut buffer = Self::empty(tiers, overflow);
        buffer.seed(seed)?;
        Ok(buffer)
    }

    fn empty(tiers: CapacityTiers, overflow: OverflowPolicy) -> Self {
        Self {
            content: String::with_capacity(tiers.initial),
            capacity: tiers.initial,
            tiers,
            overflow,
            growth_count: 0,
            generation: 0,
            carry: Vec::new(),
        }
    }

    fn seed(&mut self, seed: &str) -> Result<()> {
        if seed.len() > self.capacity {
            self.grow();
        }
        if seed.len() > self.capacity {
            match self.overflow {
                OverflowPolicy::Reject => {
                    return Err(Error::BufferOverflow {
                        needed: seed.len(),
                        capacity: self.capacity,
                    })
                }
                OverflowPolicy::DropOldest => {
                    let mut next = seed.to_string();
                    trim_front(&mut next, self.capacity);
                    self.content.push_str(&next);
                    return Ok(());
                }
            }
        }
        self.content.push_str(seed);
        Ok(())
    }

    /// Append one record: `content = content + "\n" + text`
    ///
    /// Never stores more than [`capacity`](Self::capacity) bytes.
    pub fn append(&mut self, text: &str) -> Result<AppendOutcome> {
        let needed = self.content.len() + 1 + text.len();
        let mut outcome = AppendOutcome::default();

        if needed > self.capacity {
            outcome.grew = self.grow();
        }

        if needed <= self.capacity {
            self.content.push('\n');
            self.content.push_str(text);
        } else {
            match self.overflow {
                OverflowPolicy::Reject => {
                    return Err(Error::BufferOverflow {
                        needed,
                        capacity: self.capacity,
                    });
                }
                OverflowPolicy::DropOldest => {
                    let mut next = String::with_capacity(self.capacity.max(needed));
                    next.push_str(&self.content);
                    next.push('\n');
                    next.push_str(text);
                    outcome.dropped_bytes = trim_front(&mut next, self.capacity);

                    let mut store = String::with_capacity(self.capacity);
                    store.push_str(&next);
                    self.content = store;
                    tracing::debug!(
                        "Transcript full at {} bytes, dropped {} bytes of history",
                        self.capacity,
                        outcome.dropped_bytes
                    );
                }
            }
        }

        self.generation += 1;
        Ok(outcome)
    }

    /// Append raw bytes from the wire, replacing invalid UTF-8
    ///
    /// An incomplete character at the end of `bytes` is kept back and
    /// prefixed to the next chunk.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> Result<AppendOutcome> {
        let mut chunk = std::mem::take(&mut self.carry);
        chunk.extend_from_slice(bytes);
        let split = chunk.len() - incomplete_tail(&chunk);
        self.carry = chunk.split_off(split);

        if chunk.is_empty() && !self.carry.is_empty() {
            return Ok(AppendOutcome {
                deferred: true,
                ..Default::default()
            });
        }
        self.append(&String::from_utf8_lossy(&chunk))
    }

    /// Perform the one-shot capacity bump, rewriting content into the new store.
    ///
    /// Returns `false` when the bump has already happened.
    fn grow(&mut self) -> bool {
        if self.growth_count > 0 || self.tiers.grown <= self.capacity {
            return false;
        }

        let mut store = String::with_capacity(self.tiers.grown);
        store.push_str(&self.content);
        self.content = store;
        self.capacity = self.tiers.grown;
        self.growth_count += 1;

        tracing::debug!(
            "Transcript capacity bumped {} -> {} bytes",
            self.tiers.initial,
            self.capacity
        );
        true
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Bytes currently used
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Current maximum storage size in bytes
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of capacity bumps performed (0 or 1)
    pub fn growth_count(&self) -> u32 {
        self.growth_count
    }

    /// Monotonic counter bumped by every append
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }
}

/// Drop whole leading records until `text` fits in `capacity` bytes.
///
/// A single record longer than `capacity` keeps only its tail, cut on a
/// char boundary. Returns the number of bytes removed.
/// Length of a truncated UTF-8 sequence at the end of `bytes`, or 0
fn incomplete_tail(bytes: &[u8]) -> usize {
    for back in 1..=bytes.len().min(3) {
        let byte = bytes[bytes.len() - back];
        if byte & 0xC0 == 0x80 {
            continue;
        }
        let width = match byte {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return 0,
        };
        return if width > back { back } else { 0 };
    }
    0
}

fn trim_front(text: &mut String, capacity: usize) -> usize {
    let original = text.len();

    while text.len() > capacity {
        match text.find('\n') {
            Some(pos) => text.replace_range(..=pos, ""),
            None => {
                let mut cut = text.len() - capacity;
                while !text.is_char_boundary(cut) {
                    cut += 1;
                }
                text.replace_range(..cut, "");
            }
        }
    }

    original - text.len()
}
