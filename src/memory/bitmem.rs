// Tue Jan 13 2026 - Alex

use crate::memory::{Attr, BitAddress, MemoryError};
use std::ops::Range;
use std::path::Path;

/// Guard words kept in front of the image so a read may straddle the origin.
const LEAD_GUARD: usize = 1;
/// Guard words kept behind the image so a read may run off the end.
const TAIL_GUARD: usize = 2;

/// A ROM image addressed in bits, with one attribute byte per bit.
///
/// The image is held as big-endian 32-bit words. Bit 0 of the image is the
/// most significant bit of the first byte, so bit address `origin + n`
/// names the `n`th bit of the image counting from the top of byte 0.
#[derive(Debug, Clone)]
pub struct BitMemory {
    words: Vec<u32>,
    attrs: Vec<u8>,
    origin: u32,
    size: u32,
    bits: u32,
}

impl BitMemory {
    pub fn create(origin: BitAddress, size_bits: u32) -> Result<Self, MemoryError> {
        if origin.as_u32() & 31 != 0 {
            return Err(MemoryError::BadAlignment(origin.as_u32()));
        }

        let size = size_bits.div_ceil(32);
        if origin.as_u32() as u64 + size as u64 * 32 > u32::MAX as u64 {
            return Err(MemoryError::OutOfRange {
                origin: origin.as_u32(),
                size_bits,
            });
        }
        log::debug!(
            "bitmem: {} words at {} ({} bits)",
            size,
            origin,
            size_bits
        );

        Ok(Self {
            words: vec![0; size as usize + LEAD_GUARD + TAIL_GUARD],
            attrs: vec![0; size as usize * 32],
            origin: origin.as_u32() >> 5,
            size,
            bits: size_bits,
        })
    }

    /// Packs `bytes` into the image, most significant byte first. Stops when
    /// the image is full; a trailing partial word is zero padded. Returns the
    /// number of bytes taken.
    pub fn load(&mut self, bytes: &[u8]) -> usize {
        let capacity = self.size as usize * 4;
        let taken = bytes.len().min(capacity);

        for (i, chunk) in bytes[..taken].chunks(4).enumerate() {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            self.words[LEAD_GUARD + i] = u32::from_be_bytes(word);
        }

        if taken < bytes.len() {
            log::warn!(
                "bitmem: image holds {} bytes, ignoring the last {}",
                capacity,
                bytes.len() - taken
            );
        }
        taken
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, MemoryError> {
        let bytes = std::fs::read(path.as_ref())?;
        Ok(self.load(&bytes))
    }

    /// Reads `width` bits starting at `addr`, right justified.
    pub fn read_fwd(&self, addr: BitAddress, width: u32) -> u32 {
        let width = width.min(32);
        if width == 0 {
            return 0;
        }
        self.window(addr) >> (32 - width)
    }

    /// Reads the same field as `read_fwd`, with its bit order reversed.
    pub fn read_rev(&self, addr: BitAddress, width: u32) -> u32 {
        let width = width.min(32);
        let mask = u32::MAX.checked_shl(32 - width).unwrap_or(0);
        (self.window(addr) & mask).reverse_bits()
    }

    pub fn set_attr(&mut self, addr: BitAddress, len: u32, mask: Attr) {
        let mask = (mask - Attr::LOCAL).bits();
        if let Some(range) = self.clip(addr, len) {
            self.attrs[range].iter_mut().for_each(|a| *a |= mask);
        }
    }

    pub fn clear_attr(&mut self, addr: BitAddress, len: u32, mask: Attr) {
        let mask = mask.bits();
        if let Some(range) = self.clip(addr, len) {
            self.attrs[range].iter_mut().for_each(|a| *a &= !mask);
        }
    }

    /// Merged attributes over `[addr, addr + len)`. Any overlap with the
    /// image adds `LOCAL`; no overlap yields the empty set.
    pub fn get_attr(&self, addr: BitAddress, len: u32) -> Attr {
        match self.clip(addr, len) {
            Some(range) => self.attrs[range]
                .iter()
                .fold(Attr::LOCAL, |acc, &a| acc | Attr::from_bits_retain(a)),
            None => Attr::empty(),
        }
    }

    pub fn has_attr(&self, addr: BitAddress, len: u32, mask: Attr) -> bool {
        self.get_attr(addr, len).intersects(mask)
    }

    pub fn origin(&self) -> BitAddress {
        BitAddress::new(self.origin << 5)
    }

    pub fn end(&self) -> BitAddress {
        BitAddress::new((self.origin + self.size) << 5)
    }

    pub fn size_bits(&self) -> u32 {
        self.bits
    }

    pub fn contains(&self, addr: BitAddress) -> bool {
        addr >= self.origin() && addr < self.end()
    }

    // The 32 bits starting at `addr`, left justified. Zero when the word
    // holding `addr` is neither in the image nor the leading guard.
    fn window(&self, addr: BitAddress) -> u32 {
        let offset = (addr.as_u32() >> 5) as i64 - self.origin as i64;
        if offset < -1 || offset >= self.size as i64 {
            return 0;
        }

        let index = (offset + LEAD_GUARD as i64) as usize;
        let shift = addr.as_u32() & 31;
        let hi = self.words[index].checked_shl(shift).unwrap_or(0);
        let lo = self.words[index + 1].checked_shr(32 - shift).unwrap_or(0);
        hi | lo
    }

    fn clip(&self, addr: BitAddress, len: u32) -> Option<Range<usize>> {
        let start = addr.as_u32() as i64 - self.origin().as_u32() as i64;
        let end = start + len as i64;
        let limit = self.size as i64 * 32;

        let start = start.max(0);
        let end = end.min(limit);
        if start >= end {
            return None;
        }
        Some(start as usize..end as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reversed(value: u32, width: u32) -> u32 {
        let mut out = 0;
        for i in 0..width {
            if value & (1 << i) != 0 {
                out |= 1 << (width - 1 - i);
            }
        }
        out
    }

    fn two_byte_image() -> BitMemory {
        let mut mem = BitMemory::create(BitAddress::zero(), 16).unwrap();
        assert_eq!(mem.load(&[0xA5, 0x3C]), 2);
        mem
    }

    #[test]
    fn test_bad_alignment() {
        let err = BitMemory::create(BitAddress::new(8), 64).unwrap_err();
        assert!(matches!(err, MemoryError::BadAlignment(8)));
    }

    #[test]
    fn test_end_must_fit_in_address_space() {
        let err = BitMemory::create(BitAddress::new(0xFFFF_FFE0), 64).unwrap_err();
        assert!(matches!(
            err,
            MemoryError::OutOfRange { origin: 0xFFFF_FFE0, size_bits: 64 }
        ));

        let mem = BitMemory::create(BitAddress::new(0xFFFF_FF00), 128).unwrap();
        assert_eq!(mem.end(), BitAddress::new(0xFFFF_FF80));
        assert!(mem.contains(mem.origin()));
    }

    #[test]
    fn test_two_byte_scenario() {
        let mem = two_byte_image();

        assert_eq!(mem.read_fwd(BitAddress::new(0), 8), 0xA5);
        assert_eq!(mem.read_fwd(BitAddress::new(8), 8), 0x3C);
        assert_eq!(mem.read_fwd(BitAddress::new(4), 8), 0x53);
        assert_eq!(mem.read_fwd(BitAddress::new(0), 16), 0xA53C);
        assert_eq!(mem.read_fwd(BitAddress::new(12), 8), 0xC0);

        assert_eq!(mem.read_rev(BitAddress::new(0), 8), reversed(0xA5, 8));
        assert_eq!(mem.read_rev(BitAddress::new(4), 8), reversed(0x53, 8));
        assert_eq!(mem.read_rev(BitAddress::new(4), 8), 0xCA);
        let field = mem.read_fwd(BitAddress::new(2), 3);
        assert_eq!(field, 0b100);
        assert_eq!(mem.read_rev(BitAddress::new(2), 3), reversed(field, 3));
    }

    #[test]
    fn test_width_edges() {
        let mem = two_byte_image();
        assert_eq!(mem.read_fwd(BitAddress::new(0), 0), 0);
        assert_eq!(mem.read_rev(BitAddress::new(0), 0), 0);
        assert_eq!(mem.read_fwd(BitAddress::new(0), 40), 0xA53C_0000);
    }

    #[test]
    fn test_out_of_range_reads_zero() {
        let mut mem = BitMemory::create(BitAddress::from_byte(0x1000), 64).unwrap();
        mem.load(&[0xA5, 0x3C, 0xFF, 0xFF, 0x12, 0x34, 0x56, 0x78]);

        assert_eq!(mem.read_fwd(BitAddress::new(0), 8), 0);
        assert_eq!(mem.read_fwd(BitAddress::from_byte(0x2000), 8), 0);
        assert_eq!(mem.read_fwd(BitAddress::from_byte(0x1008), 8), 0);
        assert_eq!(mem.read_fwd(BitAddress::from_byte(0x1007), 8), 0x78);
        // Straddling the origin picks up the top of the first byte.
        assert_eq!(mem.read_fwd(BitAddress::from_byte(0x1000) - 4, 8), 0x0A);
    }

    #[test]
    fn test_load_pads_and_truncates() {
        let mut mem = BitMemory::create(BitAddress::zero(), 48).unwrap();
        assert_eq!(mem.load(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), 8);
        assert_eq!(mem.read_fwd(BitAddress::from_byte(7), 8), 8);
        assert_eq!(mem.read_fwd(BitAddress::from_byte(8), 8), 0);

        let mut mem = BitMemory::create(BitAddress::zero(), 64).unwrap();
        assert_eq!(mem.load(&[0xFF, 0xEE, 0xDD, 0xCC, 0xBB]), 5);
        assert_eq!(mem.read_fwd(BitAddress::from_byte(4), 32), 0xBB00_0000);
    }

    #[test]
    fn test_attributes() {
        let mut mem = BitMemory::create(BitAddress::from_byte(0x1000), 64).unwrap();
        let base = mem.origin();

        mem.set_attr(base + 8, 8, Attr::CODE | Attr::LOCAL);
        assert_eq!(mem.get_attr(base + 8, 1), Attr::CODE | Attr::LOCAL);
        assert_eq!(mem.get_attr(base, 8), Attr::LOCAL);
        assert!(mem.has_attr(base, 16, Attr::CODE));

        mem.clear_attr(base + 8, 4, Attr::CODE);
        assert!(!mem.has_attr(base + 8, 4, Attr::CODE));
        assert!(mem.has_attr(base + 12, 4, Attr::CODE));

        assert_eq!(mem.get_attr(base + 8, 0), Attr::empty());
        assert_eq!(mem.get_attr(mem.end(), 8), Attr::empty());
        assert_eq!(mem.get_attr(BitAddress::zero(), 8), Attr::empty());
    }

    #[test]
    fn test_attribute_clipping() {
        let mut mem = BitMemory::create(BitAddress::from_byte(0x1000), 32).unwrap();
        let base = mem.origin();

        mem.set_attr(base - 4, 8, Attr::DATA);
        assert!(mem.has_attr(base, 4, Attr::DATA));
        assert!(!mem.has_attr(base + 4, 1, Attr::DATA));
        assert_eq!(mem.get_attr(base - 4, 8), Attr::DATA | Attr::LOCAL);

        mem.set_attr(mem.end() - 2, 16, Attr::OPER);
        assert!(mem.has_attr(mem.end() - 1, 1, Attr::OPER));
        mem.set_attr(mem.end() + 64, 16, Attr::OPER);
        assert!(mem.contains(base));
        assert!(!mem.contains(mem.end()));
    }

    proptest! {
        #[test]
        fn prop_bytes_read_back(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
            let mut mem = BitMemory::create(BitAddress::from_byte(0x1000), bytes.len() as u32 * 8).unwrap();
            mem.load(&bytes);
            for (i, byte) in bytes.iter().enumerate() {
                prop_assert_eq!(mem.read_fwd(BitAddress::from_byte(0x1000 + i as u32), 8), *byte as u32);
            }
        }

        #[test]
        fn prop_rev_is_reversed_fwd(
            bytes in proptest::collection::vec(any::<u8>(), 8..32),
            bit in 0u32..64,
            width in 1u32..=32,
        ) {
            let mut mem = BitMemory::create(BitAddress::zero(), bytes.len() as u32 * 8).unwrap();
            mem.load(&bytes);
            let addr = BitAddress::new(bit);
            let fwd = mem.read_fwd(addr, width);
            let rev = mem.read_rev(addr, width);
            prop_assert_eq!(rev, reversed(fwd, width));
            prop_assert_eq!(reversed(rev, width), fwd);
        }
    }
}
