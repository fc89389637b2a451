//! Console input
//!
//! Reads whitespace-delimited tokens from a line-oriented async reader.
//! Tokens may span several lines or share one line.

use std::collections::VecDeque;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: AsyncBufRead + Unpin> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub async fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            self.line.clear();
            if self.reader.read_line(&mut self.line).await? == 0 {
                return Ok(None);
            }

            self.pending
                .extend(self.line.split_whitespace().map(str::to_string));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn splits_tokens_across_lines() {
        let input: &[u8] = b"1 alice\n\n   Secret1!  \r\n2\n";
        let mut tokens = TokenReader::new(input);

        assert_eq!(tokens.next_token().await.unwrap().as_deref(), Some("1"));
        assert_eq!(tokens.next_token().await.unwrap().as_deref(), Some("alice"));
        assert_eq!(tokens.next_token().await.unwrap().as_deref(), Some("Secret1!"));
        assert_eq!(tokens.next_token().await.unwrap().as_deref(), Some("2"));
        assert_eq!(tokens.next_token().await.unwrap(), None);
        assert_eq!(tokens.next_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn last_line_without_newline() {
        let input: &[u8] = b"4";
        let mut tokens = TokenReader::new(input);

        assert_eq!(tokens.next_token().await.unwrap().as_deref(), Some("4"));
        assert_eq!(tokens.next_token().await.unwrap(), None);
    }
}
