//! Line-oriented console input.

use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Result of reading one value from the console.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Value(T),
    /// The line could not be parsed; holds the trimmed text.
    Malformed(String),
    /// End of input.
    Closed,
}

/// Reads trimmed lines from any async buffered reader.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// garbled line is just a line that matches nothing.
pub struct Console<R> {
    reader: R,
    line: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> Console<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
        }
    }

    /// Next trimmed line, or `None` at end of input.
    pub async fn read_line(&mut self) -> std::io::Result<Option<String>> {
        self.line.clear();
        let read = self.reader.read_until(b'\n', &mut self.line).await?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.line).trim().to_string()))
    }

    /// Reads a line and parses it as `T`.
    pub async fn read_parsed<T: FromStr>(&mut self) -> std::io::Result<Reply<T>> {
        Ok(match self.read_line().await? {
            None => Reply::Closed,
            Some(text) => match text.parse() {
                Ok(value) => Reply::Value(value),
                Err(_) => Reply::Malformed(text),
            },
        })
    }
}
