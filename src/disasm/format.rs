// Wed Jan 15 2026 - Alex

use crate::disasm::sp0256::SP0256_FORMATS;
use crate::disasm::DecodeError;
use crate::memory::BitAddress;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldFlags: u8 {
        /// Field is stored least significant bit first.
        const BITREV = 0x01;
        /// Field pads to the next byte boundary; its width is computed.
        const ALIGN_BYTE = 0x02;
        /// Field is the opcode and names the instruction.
        const MNEMONIC = 0x04;
    }
}

/// One bit field of an instruction encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDesc {
    pub width: u8,
    pub flags: FieldFlags,
    pub name: &'static str,
}

pub(crate) const fn plain(width: u8, name: &'static str) -> FieldDesc {
    FieldDesc {
        width,
        flags: FieldFlags::empty(),
        name,
    }
}

pub(crate) const fn rev(width: u8, name: &'static str) -> FieldDesc {
    FieldDesc {
        width,
        flags: FieldFlags::BITREV,
        name,
    }
}

pub(crate) const fn mnemonic(width: u8, name: &'static str) -> FieldDesc {
    FieldDesc {
        width,
        flags: FieldFlags::MNEMONIC,
        name,
    }
}

pub(crate) const fn align() -> FieldDesc {
    FieldDesc {
        width: 0,
        flags: FieldFlags::ALIGN_BYTE,
        name: "Align",
    }
}

impl FieldDesc {
    pub fn is_mnemonic(&self) -> bool {
        self.flags.contains(FieldFlags::MNEMONIC)
    }

    pub fn is_align(&self) -> bool {
        self.flags.contains(FieldFlags::ALIGN_BYTE)
    }

    pub fn is_bitrev(&self) -> bool {
        self.flags.contains(FieldFlags::BITREV)
    }

    /// Width of this field when it starts at `cursor`.
    pub fn width_at(&self, cursor: BitAddress) -> u32 {
        if self.is_align() {
            cursor.bits_to_byte_boundary()
        } else {
            self.width as u32
        }
    }
}

pub type Format = &'static [FieldDesc];

/// Encodings indexed by 4-bit opcode and 2-bit operand-width mode.
#[derive(Debug, Clone, Copy)]
pub struct FormatTable {
    formats: [[Format; 4]; 16],
}

impl FormatTable {
    pub fn new(formats: [[Format; 4]; 16]) -> Self {
        Self { formats }
    }

    pub fn sp0256() -> Self {
        Self::new(SP0256_FORMATS)
    }

    pub fn format(&self, opcode: u8, mode: u8) -> Format {
        self.formats[(opcode & 0xF) as usize][(mode & 3) as usize]
    }

    pub fn validate(&self) -> Result<(), DecodeError> {
        for (opcode, modes) in self.formats.iter().enumerate() {
            for (mode, format) in modes.iter().enumerate() {
                let slot = || format!("opcode {:X}, mode {}{}", opcode, mode >> 1, mode & 1);

                if format.is_empty() {
                    return Err(DecodeError::MalformedTable(format!("{} is empty", slot())));
                }

                let mnemonics = format.iter().filter(|f| f.is_mnemonic()).count();
                if mnemonics != 1 {
                    return Err(DecodeError::MalformedTable(format!(
                        "{} has {} mnemonic fields",
                        slot(),
                        mnemonics
                    )));
                }

                if let Some(wide) = format.iter().find(|f| f.width > 32) {
                    return Err(DecodeError::MalformedTable(format!(
                        "{} field '{}' is {} bits wide",
                        slot(),
                        wide.name,
                        wide.width
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for FormatTable {
    fn default() -> Self {
        Self::sp0256()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sp0256_table_is_valid() {
        let table = FormatTable::sp0256();
        assert!(table.validate().is_ok());

        let jsr = table.format(0xB, 2);
        assert_eq!(jsr.iter().find(|f| f.is_mnemonic()).map(|f| f.name), Some("JSR"));
        assert_eq!(table.format(0x1, 1)[1].name, "LOADALL.01");
    }

    #[test]
    fn test_width_at_alignment() {
        let field = align();
        assert_eq!(field.width_at(BitAddress::new(0x8000)), 0);
        assert_eq!(field.width_at(BitAddress::new(0x8001)), 7);
        assert_eq!(rev(5, "AmpMant").width_at(BitAddress::new(3)), 5);
    }

    #[test]
    fn test_validate_rejects_missing_mnemonic() {
        const NO_NAME: &[FieldDesc] = &[plain(4, "Repeat"), plain(4, "Op")];
        let mut formats = SP0256_FORMATS;
        formats[3][2] = NO_NAME;

        let err = FormatTable::new(formats).validate().unwrap_err();
        assert!(err.to_string().contains("opcode 3, mode 10"));
    }

    #[test]
    fn test_validate_rejects_wide_and_empty() {
        const WIDE: &[FieldDesc] = &[mnemonic(8, "WIDE"), rev(33, "Huge")];
        let mut formats = SP0256_FORMATS;
        formats[0][0] = WIDE;
        assert!(matches!(
            FormatTable::new(formats).validate(),
            Err(DecodeError::MalformedTable(_))
        ));

        let mut formats = SP0256_FORMATS;
        formats[15][3] = &[];
        assert!(FormatTable::new(formats).validate().is_err());
    }
}
