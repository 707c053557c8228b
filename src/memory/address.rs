// Tue Jan 13 2026 - Alex

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// An address counted in bits. Byte `b` starts at bit `b << 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BitAddress {
    value: u32,
}

impl BitAddress {
    pub fn new(value: u32) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }

    pub fn from_byte(byte: u32) -> Self {
        Self { value: byte << 3 }
    }

    pub fn as_u32(&self) -> u32 {
        self.value
    }

    pub fn byte(&self) -> u32 {
        self.value >> 3
    }

    pub fn bit(&self) -> u32 {
        self.value & 7
    }

    pub fn is_byte_aligned(&self) -> bool {
        self.bit() == 0
    }

    /// Bits needed to reach the next byte boundary (0 when already aligned).
    pub fn bits_to_byte_boundary(&self) -> u32 {
        self.value.wrapping_neg() & 7
    }

    /// The upper nibble of the 16-bit byte address, placed in bits 4-7.
    pub fn page(&self) -> u8 {
        ((self.value >> 11) & 0xF0) as u8
    }

    pub fn distance(&self, other: Self) -> i64 {
        self.value as i64 - other.value as i64
    }
}

impl fmt::Display for BitAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:04X}.{:X}", self.byte(), self.bit())
    }
}

impl fmt::UpperHex for BitAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.value, f)
    }
}

impl Add<u32> for BitAddress {
    type Output = Self;
    fn add(self, rhs: u32) -> Self::Output {
        Self { value: self.value.wrapping_add(rhs) }
    }
}

impl AddAssign<u32> for BitAddress {
    fn add_assign(&mut self, rhs: u32) {
        self.value = self.value.wrapping_add(rhs);
    }
}

impl Sub<u32> for BitAddress {
    type Output = Self;
    fn sub(self, rhs: u32) -> Self::Output {
        Self { value: self.value.wrapping_sub(rhs) }
    }
}

impl Sub<BitAddress> for BitAddress {
    type Output = i64;
    fn sub(self, rhs: BitAddress) -> Self::Output {
        self.distance(rhs)
    }
}

impl From<u32> for BitAddress {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<BitAddress> for u32 {
    fn from(addr: BitAddress) -> Self {
        addr.value
    }
}
