//! Line framing for the TCP transport.
//!
//! Lines end in `\n` with an optional `\r`. Bytes are split off the read
//! buffer without copying and decoded lossily, so a client sending invalid
//! UTF-8 sees replacement characters rather than a dropped connection.

use bytes::{Bytes, BytesMut};
use memchr::memchr;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Reads `\n`-terminated lines from an async reader.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    buf: BytesMut,
    max_line_len: usize,
}

impl<R> LineReader<R> {
    /// Wraps `inner` with an 8 KiB line limit.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(8 * 1024),
            max_line_len: 8 * 1024,
        }
    }

    /// Sets the longest accepted line.
    #[must_use]
    pub fn max_line_len(mut self, max: usize) -> Self {
        self.max_line_len = max.max(1);
        self
    }
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    /// Reads one line without its terminator.
    ///
    /// Returns `Ok(None)` on a clean end of stream. A final line without a
    /// terminator is still returned.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidData` when a line exceeds the limit, or with the
    /// underlying read error.
    pub async fn read_line(&mut self) -> std::io::Result<Option<Bytes>> {
        loop {
            if let Some(i) = memchr(b'\n', &self.buf) {
                let len = if i > 0 && self.buf[i - 1] == b'\r' { i - 1 } else { i };
                if len > self.max_line_len {
                    return Err(too_long());
                }
                let raw = self.buf.split_to(i + 1).freeze();
                return Ok(Some(trim_crlf(raw)));
            }

            // One byte of slack for a `\r` whose `\n` has not arrived yet.
            if self.buf.len() > self.max_line_len + 1 {
                return Err(too_long());
            }

            let n = self.inner.read_buf(&mut self.buf).await?;
            if n == 0 {
                if self.buf.is_empty() {
                    return Ok(None);
                }
                let rest = self.buf.split().freeze();
                return Ok(Some(trim_crlf(rest)));
            }
        }
    }

    /// Reads one line and decodes it as lossy UTF-8.
    ///
    /// # Errors
    ///
    /// As [`LineReader::read_line`].
    pub async fn read_text(&mut self) -> std::io::Result<Option<String>> {
        Ok(self
            .read_line()
            .await?
            .map(|line| String::from_utf8_lossy(&line).into_owned()))
    }
}

fn too_long() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, "line too long")
}

fn trim_crlf(mut b: Bytes) -> Bytes {
    let mut end = b.len();
    if end > 0 && b[end - 1] == b'\n' {
        end -= 1;
    }
    if end > 0 && b[end - 1] == b'\r' {
        end -= 1;
    }
    b.truncate(end);
    b
}
