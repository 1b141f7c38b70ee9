//! Little-endian signed 16-bit sample I/O.

use std::io::{self, Read, Write};

/// Read one little-endian `i16` sample.
///
/// Returns `Ok(None)` on a clean end of stream (zero bytes available).
/// A stream that ends after exactly one byte of a sample pair is reported
/// as an `UnexpectedEof` error rather than silently dropped.
pub fn read_sample<R: Read>(reader: &mut R) -> io::Result<Option<i16>> {
    let mut buf = [0u8; 2];
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 if filled == 0 => return Ok(None),
            0 => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "sample stream truncated mid-sample",
                ))
            }
            n => filled += n,
        }
    }
    Ok(Some(i16::from_le_bytes(buf)))
}

/// Write one little-endian `i16` sample.
pub fn write_sample<W: Write>(writer: &mut W, sample: i16) -> io::Result<()> {
    writer.write_all(&sample.to_le_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_write_then_read() {
        let mut buf = Vec::new();
        write_sample(&mut buf, 0x7FFF).unwrap();
        write_sample(&mut buf, -0x7FFF).unwrap();
        assert_eq!(buf, vec![0xFF, 0x7F, 0x01, 0x80]);

        let mut cursor = Cursor::new(buf);
        assert_eq!(read_sample(&mut cursor).unwrap(), Some(0x7FFF));
        assert_eq!(read_sample(&mut cursor).unwrap(), Some(-0x7FFF));
        assert_eq!(read_sample(&mut cursor).unwrap(), None);
    }

    #[test]
    fn test_truncated_sample_is_an_error() {
        let mut cursor = Cursor::new(vec![0x01u8]);
        assert!(read_sample(&mut cursor).is_err());
    }

    #[test]
    fn test_clean_eof_on_empty_stream() {
        let mut cursor = Cursor::new(Vec::<u8>::new());
        assert_eq!(read_sample(&mut cursor).unwrap(), None);
    }
}
