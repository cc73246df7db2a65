/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple cursor over an in-memory byte slice
//!
//! Reads never panic, reading past the end returns zero and
//! callers are expected to check [`ByteReader::eof`] first.

pub struct ByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a> {
    pub const fn new(stream: &'a [u8]) -> ByteReader<'a> {
        ByteReader {
            stream,
            position: 0
        }
    }

    /// Return true if there are no more bytes to read
    #[inline(always)]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Return true if at least `num` bytes are left
    #[inline(always)]
    pub const fn has(&self, num: usize) -> bool {
        self.position.saturating_add(num) <= self.stream.len()
    }

    #[inline(always)]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[inline(always)]
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    /// Read a single byte, returning zero at end of stream
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    /// Look at the next byte without consuming it
    #[inline(always)]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }

    /// Move back `num` bytes, stopping at the start of the stream
    #[inline(always)]
    pub fn rewind(&mut self, num: usize) {
        self.position = self.position.saturating_sub(num);
    }

    /// Move forward `num` bytes, stopping at the end of the stream
    #[inline(always)]
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }

    /// Consume bytes while `func` returns true and return them
    pub fn take_while<F: Fn(u8) -> bool>(&mut self, func: F) -> &'a [u8] {
        let start = self.position;

        while let Some(byte) = self.peek_u8() {
            if !(func)(byte) {
                break;
            }
            self.position += 1;
        }
        &self.stream[start..self.position]
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::ByteReader;

    #[test]
    fn reads_then_hits_eof() {
        let mut reader = ByteReader::new(b"ab");

        assert_eq!(reader.get_u8(), b'a');
        assert_eq!(reader.get_u8(), b'b');
        assert!(reader.eof());
        assert_eq!(reader.get_u8(), 0);
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn take_while_stops_on_first_mismatch() {
        let mut reader = ByteReader::new(b"123 45");

        assert_eq!(reader.take_while(|x| x.is_ascii_digit()), b"123");
        assert_eq!(reader.peek_u8(), Some(b' '));
        reader.skip(1);
        assert_eq!(reader.take_while(|x| x.is_ascii_digit()), b"45");
        assert!(reader.eof());
    }

    #[test]
    fn rewind_saturates() {
        let mut reader = ByteReader::new(b"xyz");
        reader.skip(10);
        assert_eq!(reader.remaining(), 0);
        reader.rewind(1);
        assert_eq!(reader.get_u8(), b'z');
        reader.rewind(100);
        assert_eq!(reader.position(), 0);
    }
}
