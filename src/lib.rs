//! Encode and decode arbitrary byte streams as signed 16-bit PCM audio
//! suitable for recording onto (and recovering from) consumer cassette tape.
//!
//! The core of this crate is [`Decoder`], a three-stage signal-recovery
//! pipeline (polarity lock -> bit-sync lock -> header lock -> byte stream)
//! that latches onto a noisy PCM stream of unknown polarity and start
//! position. [`Encoder`] is the symmetric, straightforward producer.

#![deny(missing_debug_implementations)]

mod bits;
mod constants;
mod decoder;
mod demod;
mod driver;
mod encoder;
mod error;
mod framer;
mod polarity;
mod sample;
mod zerocross;

pub use constants::{
    HEADER, HEADER_MAGIC, LEAD_IN_BYTES, POLARITY_SYNC_CHECK_WINDOW, POLARITY_SYNC_DESIRED_COUNT,
    POLARITY_SYNC_PATTERN_NEG, POLARITY_SYNC_PATTERN_POS, POLARITY_SYNC_WRITE_COUNT,
    SAMPLES_PER_BIT,
};
pub use decoder::{Decoder, SampleOutcome};
pub use driver::{print_documentation, run_read_mode, run_write_mode, DecodeOptions};
pub use encoder::Encoder;
pub use error::DecodeError;
