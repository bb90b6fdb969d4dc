//! Line-oriented integer input.
//!
//! Files are memory-mapped and split into lines in place; stdin is buffered first. Every
//! line is parsed the way C `strtol` does with base 0, and lines that do not yield a value
//! fitting in an `i32` are skipped.

use crate::config::DEFAULT_DATA_SIZE;
use crate::error::{SortContext, SortError, SortResult};
use log::debug;
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Integers parsed from one input, with line bookkeeping
#[derive(Debug, Clone)]
pub struct InputBuffer {
    values: Vec<i32>,
    lines_read: usize,
    lines_skipped: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self {
            values: Vec::with_capacity(DEFAULT_DATA_SIZE),
            lines_read: 0,
            lines_skipped: 0,
        }
    }

    /// Parse one line and keep its value, if it has one
    pub fn push_line(&mut self, line: &[u8]) -> Option<i32> {
        self.lines_read += 1;
        match parse_value(line) {
            Some(value) => {
                self.values.push(value);
                Some(value)
            }
            None => {
                self.lines_skipped += 1;
                debug!(
                    "skipping line {}: {:?}",
                    self.lines_read,
                    String::from_utf8_lossy(line)
                );
                None
            }
        }
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [i32] {
        &mut self.values
    }

    pub fn into_values(self) -> Vec<i32> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    pub fn lines_skipped(&self) -> usize {
        self.lines_skipped
    }

    /// Bytes currently reserved for values.
    ///
    /// This is the `Vec` capacity, so it can differ from a buffer that doubles eagerly once
    /// it becomes full: 128 values still report 512 bytes here.
    pub fn allocated_bytes(&self) -> usize {
        self.values.capacity() * std::mem::size_of::<i32>()
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Read integers from the file at `path`
pub fn read_file(path: &Path) -> SortResult<InputBuffer> {
    let name = path.display().to_string();
    let file = File::open(path).with_file_context(&name)?;
    let metadata = file.metadata().with_file_context(&name)?;

    if metadata.is_dir() {
        return Err(SortError::is_directory(&name));
    }
    if metadata.len() == 0 {
        return Ok(InputBuffer::new());
    }

    // SAFETY: the map is read-only and dropped before this function returns; the input is
    // not expected to be modified concurrently while it is being parsed.
    let mmap = unsafe { Mmap::map(&file) }.with_file_context(&name)?;
    Ok(parse_bytes(&mmap))
}

/// Read integers from a stream such as stdin
pub fn read_from<R: Read>(mut reader: R) -> io::Result<InputBuffer> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(parse_bytes(&buffer))
}

/// Parse every newline-terminated line of `data`; a final unterminated line counts too
pub fn parse_bytes(data: &[u8]) -> InputBuffer {
    let mut input = InputBuffer::new();
    let mut start = 0;

    for (i, &byte) in data.iter().enumerate() {
        if byte == b'\n' {
            input.push_line(&data[start..i]);
            start = i + 1;
        }
    }

    if start < data.len() {
        input.push_line(&data[start..]);
    }

    input
}

/// Parse a line as an `i32`, rejecting values outside its range
pub fn parse_value(bytes: &[u8]) -> Option<i32> {
    parse_long(bytes).and_then(|value| i32::try_from(value).ok())
}

/// Parse the integer prefix of `bytes` like `strtol(s, &end, 0)`.
///
/// Leading whitespace and a sign are accepted, `0x`/`0X` selects hex and a leading `0`
/// selects octal. Anything after the digits is ignored. Returns `None` when no digits were
/// consumed or the value does not fit in an `i64`.
pub fn parse_long(bytes: &[u8]) -> Option<i64> {
    let (negative, rest) = extract_sign(skip_whitespace(bytes));

    let (radix, digits) = match rest {
        [b'0', b'x' | b'X', next, ..] if next.is_ascii_hexdigit() => (16, &rest[2..]),
        [b'0', ..] => (8, rest),
        _ => (10, rest),
    };

    let len = digits
        .iter()
        .take_while(|&&b| char::from(b).is_digit(radix))
        .count();
    if len == 0 {
        return None;
    }

    let limit = i64::MAX as i128 + 1;
    let mut magnitude: i128 = 0;
    for &byte in &digits[..len] {
        let digit = char::from(byte).to_digit(radix)?;
        magnitude = magnitude * radix as i128 + digit as i128;
        if magnitude > limit {
            return None;
        }
    }

    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

fn skip_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| !matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r'))
        .unwrap_or(bytes.len());
    &bytes[start..]
}

fn extract_sign(bytes: &[u8]) -> (bool, &[u8]) {
    match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    }
}
