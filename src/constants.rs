//! Authoritative wire-format constants.

/// Samples per half-cycle. One `0` bit is `2 * SAMPLES_PER_BIT` samples
/// total (one positive half, one negative half); one `1` bit is twice that.
pub const SAMPLES_PER_BIT: u32 = 16;

/// Number of positive half-cycles per polarity-sync preamble period.
pub const POLARITY_SYNC_PATTERN_POS: u32 = 1;

/// Number of negative half-cycles per polarity-sync preamble period.
pub const POLARITY_SYNC_PATTERN_NEG: u32 = 3;

/// Non-overlapping pattern matches required within the check window before
/// the locker declares a polarity.
pub const POLARITY_SYNC_DESIRED_COUNT: usize = 10;

/// Number of preamble periods the encoder writes.
pub const POLARITY_SYNC_WRITE_COUNT: u32 = 200;

/// Size (in `p`/`n` symbols) of the polarity locker's scan window.
pub const POLARITY_SYNC_CHECK_WINDOW: usize = 200;

/// Number of framed `0xFF` bytes in the lead-in.
pub const LEAD_IN_BYTES: usize = 16;

/// The fixed header magic, written/matched as four framed bytes.
pub const HEADER: [u8; 4] = [0x04, 0x20, 0x06, 0x09];

/// [`HEADER`] packed into the 32-bit accumulator the byte framer compares
/// `header_register` against.
pub const HEADER_MAGIC: u32 = 0x0420_0609;

/// A demodulated interval longer than `BIT_ONE_THRESHOLD * SAMPLES_PER_BIT`
/// samples is classified as bit `1`. Deliberately between the nominal
/// `2 * SAMPLES_PER_BIT` (bit 0) and `4 * SAMPLES_PER_BIT` (bit 1) lengths,
/// biased high to absorb tape echo that smears short cycles into long ones.
pub const BIT_ONE_THRESHOLD: u32 = 3;

/// Bits in one framed byte: leading `1`, eight data bits, trailing `0`.
pub const FRAMED_BYTE_BITS: u8 = 10;
