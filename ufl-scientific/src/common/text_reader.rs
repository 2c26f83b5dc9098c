#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::prelude::*;
use std::io::{BufReader, Read};
use std::str::FromStr;
use ufl_core::prelude::UflError;

pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> Result<usize, UflError> {
    buffer.clear();
    reader.read_line(buffer).map_err(|err| UflError::malformed(format!("cannot read line: '{err}'")))
}

/// Parses all whitespace separated values of the line.
pub(crate) fn parse_values<T>(line: &str, what: &str) -> Result<Vec<T>, UflError>
where
    T: FromStr,
    T::Err: Display,
{
    line.split_whitespace().map(|token| parse_value(token, what)).collect()
}

pub(crate) fn parse_value<T>(token: &str, what: &str) -> Result<T, UflError>
where
    T: FromStr,
    T::Err: Display,
{
    token.parse::<T>().map_err(|err| UflError::malformed(format!("cannot parse {what} from '{token}': '{err}'")))
}

/// Reads whitespace separated tokens regardless of how they are wrapped over lines.
pub(crate) struct TokenReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    tokens: VecDeque<String>,
}

impl<R: Read> TokenReader<R> {
    pub fn new(reader: BufReader<R>) -> Self {
        Self { buffer: String::new(), reader, tokens: VecDeque::new() }
    }

    pub fn next_token(&mut self, what: &str) -> Result<String, UflError> {
        while self.tokens.is_empty() {
            if read_line(&mut self.reader, &mut self.buffer)? == 0 {
                return Err(UflError::malformed(format!("unexpected end of file, expected {what}")));
            }

            self.tokens.extend(self.buffer.split_whitespace().map(|token| token.to_string()));
        }

        self.tokens.pop_front().ok_or_else(|| UflError::malformed(format!("expected {what}")))
    }

    pub fn next_value<T>(&mut self, what: &str) -> Result<T, UflError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let token = self.next_token(what)?;
        parse_value(token.as_str(), what)
    }
}
