//! Decode-time error taxonomy.

use std::io;
use thiserror::Error;

/// Errors surfaced by [`crate::Decoder::finish`].
///
/// Transient bit-sync loss during decoding is never represented here: the
/// framer recovers from it on its own (see [`crate::framer::FramerEvent::BitSyncLost`]).
/// Only failures that leave the stream with no usable output reach this type.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The sample stream ended before the polarity locker ever found the
    /// preamble pattern in either polarity.
    #[error("polarity lock was never acquired: no preamble pattern found in the input")]
    PolarityLockLost,

    /// The sample stream ended before the 4-byte header magic was observed,
    /// even though polarity and bit sync were acquired.
    #[error("header magic was never observed after bit sync was acquired")]
    HeaderNotFound,

    /// Underlying I/O failure reading samples or writing decoded bytes.
    #[error(transparent)]
    Io(#[from] io::Error),
}
