//! Polarity locker: recovers the recording's polarity from the asymmetric
//! preamble before any payload bits can be demodulated.

use crate::constants::{
    POLARITY_SYNC_CHECK_WINDOW, POLARITY_SYNC_DESIRED_COUNT, POLARITY_SYNC_PATTERN_NEG,
    POLARITY_SYNC_PATTERN_POS, SAMPLES_PER_BIT,
};

const SYMBOL_POS: u8 = b'p';
const SYMBOL_NEG: u8 = b'n';
const SYMBOL_UNSET: u8 = 0;

/// Consumes raw (pre-lock) samples until the asymmetric preamble pattern is
/// recognized in one of two polarities.
///
/// Uses the cruder `prev * sample < 0` zero-crossing test (either direction),
/// since sign direction is not yet known. The scan window is a fixed buffer
/// written at a wrapping cursor and re-scanned from index 0 on every update,
/// matching the original reference decoder exactly.
#[derive(Debug)]
pub struct PolarityLocker {
    window: [u8; POLARITY_SYNC_CHECK_WINDOW],
    window_pos: usize,
    prev_sample: i16,
    interval_len: u32,
}

impl Default for PolarityLocker {
    fn default() -> Self {
        Self {
            window: [SYMBOL_UNSET; POLARITY_SYNC_CHECK_WINDOW],
            window_pos: 0,
            prev_sample: 0,
            interval_len: 0,
        }
    }
}

impl PolarityLocker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw sample. Returns `Some(polarity)` once a threshold number
    /// of non-overlapping pattern matches have been found in either polarity.
    pub fn process(&mut self, sample: i16) -> Option<i8> {
        let crossed = (self.prev_sample as i32) * (sample as i32) < 0;
        self.interval_len += 1;

        if !crossed {
            self.prev_sample = sample;
            return None;
        }

        let symbol = if sample > 0 { SYMBOL_POS } else { SYMBOL_NEG };
        let copies = self.interval_len / SAMPLES_PER_BIT;
        for _ in 0..copies {
            self.window[self.window_pos] = symbol;
            self.window_pos = (self.window_pos + 1) % POLARITY_SYNC_CHECK_WINDOW;
        }

        let result = if copies > 0 {
            self.scan()
        } else {
            None
        };

        self.interval_len = 0;
        self.prev_sample = sample;
        result
    }

    fn scan(&self) -> Option<i8> {
        let normal_pattern = Self::pattern(SYMBOL_NEG, SYMBOL_POS);
        if Self::count_matches(&self.window, &normal_pattern) >= POLARITY_SYNC_DESIRED_COUNT {
            return Some(1);
        }

        let inverted_pattern = Self::pattern(SYMBOL_POS, SYMBOL_NEG);
        if Self::count_matches(&self.window, &inverted_pattern) >= POLARITY_SYNC_DESIRED_COUNT {
            return Some(-1);
        }

        None
    }

    /// Build the 4-symbol pattern `first * NEG_or_POS_count, second * the rest`.
    fn pattern(first: u8, second: u8) -> Vec<u8> {
        let mut pattern = Vec::with_capacity(
            (POLARITY_SYNC_PATTERN_NEG + POLARITY_SYNC_PATTERN_POS) as usize,
        );
        pattern.extend(std::iter::repeat(first).take(POLARITY_SYNC_PATTERN_NEG as usize));
        pattern.extend(std::iter::repeat(second).take(POLARITY_SYNC_PATTERN_POS as usize));
        pattern
    }

    /// Count non-overlapping occurrences of `pattern` in `window`, scanning
    /// linearly from index 0: on a full match, advance by `pattern.len()`;
    /// on mismatch, advance by one.
    fn count_matches(window: &[u8], pattern: &[u8]) -> usize {
        let mut matches = 0;
        let mut i = 0;
        while i + pattern.len() <= window.len() {
            if window[i..i + pattern.len()] == *pattern {
                matches += 1;
                i += pattern.len();
            } else {
                i += 1;
            }
        }
        matches
    }
}
