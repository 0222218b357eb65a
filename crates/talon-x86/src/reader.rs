//! Bounded little-endian cursor over the fetch window.

use crate::Truncated;

/// Forward-only byte cursor. Every accessor checks the window bound and
/// reports [`Truncated`] instead of reading past it.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, pos: 0 }
    }

    /// Bytes consumed so far; becomes the instruction length at finalize.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// Next byte without consuming it. Used by the C4/C5/62/8F decoders to
    /// tell a VEX/EVEX/XOP prefix apart from the legacy instruction sharing
    /// its opcode byte.
    pub fn peek(&self) -> Result<u8, Truncated> {
        self.bytes.get(self.pos).copied().ok_or(Truncated)
    }

    pub fn u8(&mut self) -> Result<u8, Truncated> {
        let b = *self.bytes.get(self.pos).ok_or(Truncated)?;
        self.pos += 1;
        Ok(b)
    }

    pub fn u16(&mut self) -> Result<u16, Truncated> {
        let lo = self.u8()? as u16;
        let hi = self.u8()? as u16;
        Ok(lo | (hi << 8))
    }

    pub fn u32(&mut self) -> Result<u32, Truncated> {
        let lo = self.u16()? as u32;
        let hi = self.u16()? as u32;
        Ok(lo | (hi << 16))
    }

    pub fn u64(&mut self) -> Result<u64, Truncated> {
        let lo = self.u32()? as u64;
        let hi = self.u32()? as u64;
        Ok(lo | (hi << 32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian() {
        let mut rd = Reader::new(&[0x01, 0x02, 0x03, 0x04, 0x05]);
        assert_eq!(rd.u8().unwrap(), 0x01);
        assert_eq!(rd.u16().unwrap(), 0x0302);
        assert_eq!(rd.consumed(), 3);
        assert_eq!(rd.remaining(), 2);
    }

    #[test]
    fn short_window_fails_the_wide_read() {
        let mut rd = Reader::new(&[0xAA, 0xBB]);
        assert_eq!(rd.u8().unwrap(), 0xAA);
        // Only one byte left; a u32 read fails after consuming what it saw.
        assert_eq!(rd.u32(), Err(Truncated));
    }

    #[test]
    fn peek_never_advances() {
        let mut rd = Reader::new(&[0xC4]);
        assert_eq!(rd.peek().unwrap(), 0xC4);
        assert_eq!(rd.consumed(), 0);
        assert_eq!(rd.u8().unwrap(), 0xC4);
        assert_eq!(rd.peek(), Err(Truncated));
    }
}
