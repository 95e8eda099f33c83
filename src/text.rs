//! Whitespace-delimited token input for container stream reads.
//!
//! Container contents are written one token per element; reading scans
//! tokens back off any [`BufRead`] source, crossing line breaks and
//! buffer boundaries transparently.

use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while reading container contents from a text stream.
///
/// Kept separate from [`Error`](crate::Error): stream failures are not
/// shape violations, and wrapping `io::Error` would cost the core enum
/// its `Eq`.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The underlying stream failed, or ended before enough tokens were
    /// read (`ErrorKind::UnexpectedEof`).
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    /// A token was read but did not parse as the element type.
    #[error("cannot parse token `{token}`: {message}")]
    Parse {
        /// The offending token, verbatim.
        token: String,
        /// The element type's own parse diagnostic.
        message: String,
    },
}

/// Scans the next whitespace-delimited token off `reader`.
///
/// Leading whitespace is consumed; the terminating separator is left in
/// the stream. Fails with `UnexpectedEof` when the stream ends before a
/// token starts.
pub(crate) fn next_token<R: BufRead>(reader: &mut R) -> Result<String, ReadError> {
    let mut token: Vec<u8> = Vec::new();
    loop {
        let (used, done) = {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                (0, true)
            } else {
                scan_chunk(buf, &mut token)
            }
        };
        reader.consume(used);
        if done {
            break;
        }
    }
    if token.is_empty() {
        return Err(ReadError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stream ended before a token",
        )));
    }
    String::from_utf8(token).map_err(|err| ReadError::Parse {
        token: String::from_utf8_lossy(err.as_bytes()).into_owned(),
        message: "token is not valid UTF-8".into(),
    })
}

/// Consumes bytes of one buffered chunk into `token`.
///
/// Returns how many bytes were used and whether the token is complete.
fn scan_chunk(buf: &[u8], token: &mut Vec<u8>) -> (usize, bool) {
    let mut used = 0;
    for &byte in buf {
        if byte.is_ascii_whitespace() {
            if token.is_empty() {
                used += 1;
                continue;
            }
            return (used, true);
        }
        token.push(byte);
        used += 1;
    }
    // Chunk exhausted mid-token or mid-whitespace; caller refills.
    (used, false)
}

/// Reads one token and parses it as `T`.
pub(crate) fn parse_token<R, T>(reader: &mut R) -> Result<T, ReadError>
where
    R: BufRead,
    T: FromStr,
    T::Err: fmt::Display,
{
    let token = next_token(reader)?;
    token.parse().map_err(|err: T::Err| ReadError::Parse {
        message: err.to_string(),
        token,
    })
}
