//! Byte framer: turns a demodulated bit stream into framed bytes, then
//! framed bytes into a locked 4-byte header.

use crate::bits;
use crate::constants::{FRAMED_BYTE_BITS, HEADER_MAGIC};

const REGISTER_BITS: usize = FRAMED_BYTE_BITS as usize;
const TOP_BIT: u32 = 1 << (REGISTER_BITS - 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Hunt,
    Aligned,
}

/// One outcome of feeding a single demodulated bit to the framer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramerEvent {
    /// No framed byte completed on this bit.
    None,
    /// A framed byte completed. Check [`ByteFramer::header_locked`] after
    /// this call: the byte that causes the lock to flip is the header's
    /// final byte, not payload.
    Byte(u8),
    /// Framing was lost while `Aligned`; the framer dropped back to `Hunt`.
    /// Never surfaced to callers of [`crate::Decoder`] as an error, since
    /// recovery is silent and automatic.
    BitSyncLost,
}

/// `HUNT`/`ALIGNED` state machine that recovers byte framing from a
/// demodulated bit stream and tracks whether the 4-byte header magic has
/// been seen.
///
/// In `Hunt`, every incoming bit is checked against the framing pattern
/// (leading `1`, trailing `0`) once 10 bits have accumulated, sliding the
/// window by one bit on each mismatch. In `Aligned`, framing is only
/// checked every 10th bit; a mismatch there drops back to `Hunt`.
#[derive(Debug)]
pub struct ByteFramer {
    state: State,
    bit_register: u32,
    bits_since_sync: u32,
    header_register: u32,
    header_locked: bool,
    strict: bool,
}

impl ByteFramer {
    /// `strict` additionally clears `header_locked` (forcing the header to
    /// be re-observed) whenever bit sync is lost, instead of letting the
    /// latch survive a transient dropout.
    pub fn new(strict: bool) -> Self {
        Self {
            state: State::Hunt,
            bit_register: 0,
            bits_since_sync: 0,
            header_register: 0,
            header_locked: false,
            strict,
        }
    }

    pub fn header_locked(&self) -> bool {
        self.header_locked
    }

    pub fn process_bit(&mut self, bit: bool) -> FramerEvent {
        self.bit_register = bits::insert_lsb(REGISTER_BITS, self.bit_register, bit as u32);
        self.bits_since_sync += 1;

        match self.state {
            State::Hunt => {
                if self.bits_since_sync >= FRAMED_BYTE_BITS as u32 && self.framing_matches() {
                    self.state = State::Aligned;
                    self.bits_since_sync = 0;
                } else {
                    self.header_register = 0;
                }
                FramerEvent::None
            }
            State::Aligned => {
                if self.bits_since_sync != FRAMED_BYTE_BITS as u32 {
                    return FramerEvent::None;
                }
                if self.framing_matches() {
                    self.bits_since_sync = 0;
                    self.extract_byte()
                } else {
                    self.state = State::Hunt;
                    self.bits_since_sync = 0;
                    if self.strict {
                        self.header_locked = false;
                        self.header_register = 0;
                    }
                    FramerEvent::BitSyncLost
                }
            }
        }
    }

    fn framing_matches(&self) -> bool {
        let top = self.bit_register & TOP_BIT != 0;
        let bottom = self.bit_register & 1 != 0;
        top && !bottom
    }

    fn extract_byte(&mut self) -> FramerEvent {
        let byte = ((self.bit_register >> 1) & 0xFF) as u8;
        if !self.header_locked {
            self.header_register = (self.header_register << 8) | byte as u32;
            if self.header_register == HEADER_MAGIC {
                self.header_locked = true;
            }
        }
        FramerEvent::Byte(byte)
    }
}
