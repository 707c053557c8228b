// Wed Jan 15 2026 - Alex

use crate::disasm::format::Format;
use crate::memory::BitAddress;
use std::fmt;

/// The decoder's persistent mode register.
///
/// Bits 0-1 select operand widths, bits 2-3 hold the repeat MSBs loaded by
/// SETMODE, and bits 4-7 hold the page used to extend branch targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mode(pub u8);

impl Mode {
    pub fn for_address(addr: BitAddress) -> Self {
        Self(addr.page())
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn operand_mode(&self) -> u8 {
        self.0 & 0x03
    }

    pub fn repeat_msbs(&self) -> u8 {
        self.0 & 0x0C
    }

    /// Page nibble in bits 4-7.
    pub fn page(&self) -> u8 {
        self.0 & 0xF0
    }

    pub fn set_page(&mut self, page: u8) {
        self.0 = (self.0 & 0x0F) | (page & 0xF0);
    }

    pub fn set_low_nibble(&mut self, value: u8) {
        self.0 = (self.0 & 0xF0) | (value & 0x0F);
    }

    pub fn clear_repeat_msbs(&mut self) {
        self.0 &= !0x0C;
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page={:X} rpt={:02b} mode={:02b}",
            self.page() >> 4,
            self.repeat_msbs() >> 2,
            self.operand_mode()
        )
    }
}

#[derive(Debug, Clone)]
pub struct Instruction {
    pub address: BitAddress,
    pub length: u32,
    pub opcode: u8,
    pub mnemonic: String,
    pub operand: String,
    pub format: Format,
    pub mode: Mode,
}

impl Instruction {
    pub fn end(&self) -> BitAddress {
        self.address + self.length
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {:<16}{}", self.address, self.mnemonic, self.operand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_fields() {
        let mut mode = Mode::for_address(BitAddress::from_byte(0x3456));
        assert_eq!(mode.page(), 0x30);

        mode.set_low_nibble(0xE);
        assert_eq!(mode.repeat_msbs(), 0x0C);
        assert_eq!(mode.operand_mode(), 2);

        mode.clear_repeat_msbs();
        mode.set_page(0x50);
        assert_eq!(mode, Mode(0x52));
        assert_eq!(mode.to_string(), "page=5 rpt=00 mode=10");
    }
}
