//! Line buffering for the generation streams.
//!
//! A network read may split an event line, a JSON object, or even a
//! multi-byte character across chunks, so bytes are accumulated and only
//! complete `\n`-terminated lines are decoded and matched against the
//! `data: ` prefix. A trailing unterminated line is flushed at end of
//! stream.

use bytes::BytesMut;

const DATA_PREFIX: &str = "data: ";

#[derive(Debug, Default)]
pub struct SseLineBuffer {
    buf: BytesMut,
}

impl SseLineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one chunk and returns the `data:` payloads of every line the
    /// chunk completed, in order. Non-data lines (comments, blank
    /// keep-alives, event names) are ignored.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);

        let mut payloads = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line = self.buf.split_to(pos + 1);
            if let Some(payload) = parse_line(&line[..pos]) {
                payloads.push(payload);
            }
        }
        payloads
    }

    /// Consumes the buffer, yielding the payload of a final line that never
    /// received its newline.
    pub fn finish(mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let line = self.buf.split();
        parse_line(&line)
    }
}

fn parse_line(raw: &[u8]) -> Option<String> {
    let raw = match raw.last() {
        Some(b'\r') => &raw[..raw.len() - 1],
        _ => raw,
    };
    String::from_utf8_lossy(raw)
        .strip_prefix(DATA_PREFIX)
        .map(str::to_string)
}
