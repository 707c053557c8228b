// Wed Jan 15 2026 - Alex

use crate::disasm::{DecodeError, FormatTable, Instruction, Mode};
use crate::memory::{Attr, BitAddress, BitMemory};
use crate::symbol::SymbolTable;

/// Repeat counts are stored bit reversed; this undoes it a nibble at a time.
const NIBBLE_REVERSE: [u8; 16] = [
    0x0, 0x8, 0x4, 0xC, 0x2, 0xA, 0x6, 0xE, 0x1, 0x9, 0x5, 0xD, 0x3, 0xB, 0x7, 0xF,
];

const OP_RTS_SETPAGE: u8 = 0x0;
const OP_JMP: u8 = 0x7;
const OP_SETMODE: u8 = 0x8;
const OP_JSR: u8 = 0xB;

pub struct DisassemblyEngine {
    table: FormatTable,
}

impl DisassemblyEngine {
    pub fn new(table: FormatTable) -> Result<Self, DecodeError> {
        table.validate()?;
        Ok(Self { table })
    }

    pub fn sp0256() -> Result<Self, DecodeError> {
        Self::new(FormatTable::sp0256())
    }

    pub fn table(&self) -> &FormatTable {
        &self.table
    }

    /// Decodes one instruction at `addr`.
    ///
    /// Tags the instruction's bits in `mem`, registers branch targets in
    /// `symbols`, and leaves `mode` as the next instruction will see it.
    pub fn decode(
        &self,
        addr: BitAddress,
        mode: &mut Mode,
        mem: &mut BitMemory,
        symbols: &mut SymbolTable,
    ) -> Result<Instruction, DecodeError> {
        let immed4 = mem.read_fwd(addr, 4) as u8;
        mem.set_attr(addr, 4, Attr::OPER);
        let opcode = mem.read_fwd(addr + 4, 4) as u8;
        mem.set_attr(addr + 4, 4, Attr::CODE);

        let entry_mode = *mode;
        let format = self.table.format(opcode, mode.operand_mode());

        let mut length = 0u32;
        let mut mnemonic = "";
        for field in format {
            let cursor = addr + length;
            let width = field.width_at(cursor);
            if field.is_mnemonic() {
                mnemonic = field.name;
            } else {
                mem.set_attr(cursor, width, Attr::OPER);
            }
            length += width;
        }

        let mut mnemonic = mnemonic.to_string();
        let mut operand = String::new();

        match opcode {
            OP_RTS_SETPAGE if immed4 != 0 => {
                mode.set_page(immed4 << 4);
                mnemonic = "SETPAGE".to_string();
                operand = format!("${:X}", immed4);
                // Not a control transfer, so no alignment padding.
                length = 8;
            }
            OP_RTS_SETPAGE => {
                mnemonic = "RTS".to_string();
                let next = addr + length;
                if mem.read_fwd(next, 8) != 0 {
                    mem.set_attr(next, 1, Attr::BRANCH_TARGET);
                }
                mode.set_page((addr + 8).page());
            }
            OP_SETMODE => {
                operand = format!(
                    "RPT=${:X}?, MODE={}{}",
                    NIBBLE_REVERSE[(immed4 & 0xC) as usize],
                    (immed4 >> 1) & 1,
                    immed4 & 1
                );
                mode.set_low_nibble(immed4);
            }
            OP_JMP | OP_JSR => {
                if opcode == OP_JMP {
                    mem.set_attr(addr + length, 1, Attr::BRANCH_TARGET);
                }
                operand = self.resolve_branch(addr, immed4, mode, mem, symbols)?;
            }
            _ => {
                operand = format!(
                    "RPT=${:X}{:X}",
                    NIBBLE_REVERSE[mode.repeat_msbs() as usize],
                    NIBBLE_REVERSE[(immed4 & 0xF) as usize]
                );
            }
        }

        if opcode != OP_SETMODE {
            mode.clear_repeat_msbs();
        }
        if opcode != OP_RTS_SETPAGE {
            mode.set_page((addr + length).page());
        }

        if length < 8 {
            return Err(DecodeError::ZeroLength(addr));
        }

        log::trace!("decode: {} {} {} ({} bits)", addr, mnemonic, operand, length);

        Ok(Instruction {
            address: addr,
            length,
            opcode,
            mnemonic,
            operand,
            format,
            mode: entry_mode,
        })
    }

    // Branch target is a byte address: page from the mode register, then
    // the 4-bit immediate, then the 8-bit field after the opcode.
    fn resolve_branch(
        &self,
        addr: BitAddress,
        immed4: u8,
        mode: &Mode,
        mem: &mut BitMemory,
        symbols: &mut SymbolTable,
    ) -> Result<String, DecodeError> {
        let byte = ((mode.page() as u32) << 8) | ((immed4 as u32) << 8) | mem.read_fwd(addr + 8, 8);
        let target = BitAddress::from_byte(byte);

        mem.set_attr(target, 1, Attr::BRANCH_TARGET);
        let prefix = if mem.get_attr(target, 8).is_local() { 'L' } else { 'G' };
        let label = symbols.get_symbol(target, Some(prefix), 0)?.unwrap_or_default();
        symbols.add_xref(target, addr)?;

        Ok(label)
    }
}
