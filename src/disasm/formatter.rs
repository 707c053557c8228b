// Wed Jan 15 2026 - Alex

use crate::disasm::{DecodeError, Instruction};
use crate::memory::{Attr, BitAddress, BitMemory};
use crate::symbol::dump::rule;
use crate::symbol::SymbolTable;
use itertools::Itertools;
use std::io::Write;

/// Bits shown per row of the field breakdown.
const ROW_BITS: u32 = 24;
const GROUP_BITS: u32 = 4;

pub struct ListingFormatter {
    comment_char: char,
}

impl ListingFormatter {
    pub fn new(comment_char: char) -> Self {
        Self { comment_char }
    }

    pub fn comment_char(&self) -> char {
        self.comment_char
    }

    pub fn write_banner<W: Write>(&self, w: &mut W) -> Result<(), DecodeError> {
        let c = self.comment_char;
        write!(w, "{c}{c}{}\n{c}{c} Disassembled output\n{c}{c}{}\n\n", rule(), rule())?;
        Ok(())
    }

    /// Writes the label block, the instruction line and its field breakdown.
    ///
    /// Branch targets without a name get an `L_xxxx` label here, so labels
    /// can appear that pass 1 never created.
    pub fn write_instruction<W: Write>(
        &self,
        w: &mut W,
        insn: &Instruction,
        mem: &BitMemory,
        symbols: &mut SymbolTable,
    ) -> Result<(), DecodeError> {
        let c = self.comment_char;
        let synth = mem
            .has_attr(insn.address, 1, Attr::BRANCH_TARGET)
            .then_some('L');

        match symbols.get_symbol(insn.address, synth, 0)? {
            Some(first) => {
                symbols.mark_direct_reference(insn.address)?;
                writeln!(w, "{c}{c}{}", rule())?;

                let mut label = Some(first);
                let mut seq = 1;
                while let Some(name) = label {
                    writeln!(w, "{c}{c} {}:", name)?;
                    label = symbols.get_symbol(insn.address, None, seq)?;
                    seq += 1;
                }
            }
            None => writeln!(w)?,
        }

        writeln!(
            w,
            "{c} ${:04X}.{:X}  {:<16}{:<16}",
            insn.address.byte(),
            insn.address.bit(),
            insn.mnemonic,
            insn.operand
        )?;

        self.write_fields(w, insn, mem)
    }

    fn write_fields<W: Write>(
        &self,
        w: &mut W,
        insn: &Instruction,
        mem: &BitMemory,
    ) -> Result<(), DecodeError> {
        let mut cursor = insn.address;
        let mut total = 0u32;

        for field in insn.format {
            if total >= insn.length {
                break;
            }
            let mut width = field.width_at(cursor);
            total += width;
            if total > insn.length {
                width -= total - insn.length;
            }

            for row in (0..width).step_by(ROW_BITS as usize) {
                let start = cursor;
                let groups = (0..ROW_BITS)
                    .step_by(GROUP_BITS as usize)
                    .map(|offset| {
                        let bits = width.saturating_sub(row + offset).min(GROUP_BITS);
                        let text = bit_string(mem, cursor, bits);
                        cursor += bits;
                        format!(" {:<4.4}", text)
                    })
                    .join("");
                let last = cursor - 1;

                writeln!(
                    w,
                    "    {}  {} ${:04X}.{:X} .. ${:04X}.{:X}:  {}{}{}",
                    groups,
                    self.comment_char,
                    start.byte(),
                    start.bit(),
                    last.byte(),
                    last.bit(),
                    field.name,
                    if field.is_bitrev() { " (br)" } else { "" },
                    if row > 0 { " (cont)" } else { "" }
                )?;
            }
        }
        Ok(())
    }
}

impl Default for ListingFormatter {
    fn default() -> Self {
        Self::new('#')
    }
}

fn bit_string(mem: &BitMemory, addr: BitAddress, bits: u32) -> String {
    if bits == 0 {
        return String::new();
    }
    format!("{:0width$b}", mem.read_fwd(addr, bits), width = bits as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disasm::format::{mnemonic, plain, FieldDesc};
    use crate::disasm::{DisassemblyEngine, Mode};

    fn render(bytes: &[u8], count: usize) -> String {
        let origin = BitAddress::from_byte(0x1000);
        let mut mem = BitMemory::create(origin, 64 * 8).unwrap();
        mem.load(bytes);
        let mut symbols = SymbolTable::new();
        let mut mode = Mode::for_address(origin);
        let engine = DisassemblyEngine::sp0256().unwrap();

        let mut insns = Vec::new();
        let mut addr = origin;
        for _ in 0..count {
            let insn = engine.decode(addr, &mut mode, &mut mem, &mut symbols).unwrap();
            addr = insn.end();
            insns.push(insn);
        }

        let formatter = ListingFormatter::default();
        let mut out = Vec::new();
        for insn in &insns {
            formatter.write_instruction(&mut out, insn, &mem, &mut symbols).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rts_then_labelled_pause() {
        let out = render(&[0x00, 0x5F], 2);
        let lines: Vec<&str> = out.lines().collect();
        let blank = "     ";

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], format!("# $1000.0  {:<16}{:<16}", "RTS", ""));
        assert_eq!(
            lines[2],
            format!("     0000 0000{}  # $1000.0 .. $1000.7:  RTS/PAGE", blank.repeat(4))
        );
        assert_eq!(lines[3], format!("##{}", "-".repeat(76)));
        assert_eq!(lines[4], "## L_1001:");
        assert_eq!(lines[5], format!("# $1001.0  {:<16}{:<16}", "PAUSE", "RPT=$0A"));
        assert_eq!(
            lines[6],
            format!("     0101{}  # $1001.0 .. $1001.3:  Repeat (br)", blank.repeat(5))
        );
        assert_eq!(
            lines[7],
            format!("     1111{}  # $1001.4 .. $1001.7:  PAUSE", blank.repeat(5))
        );
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_wide_field_continues_on_next_row() {
        const WIDE: &[FieldDesc] = &[mnemonic(8, "BLOB"), plain(32, "Payload")];
        let origin = BitAddress::from_byte(0x1000);
        let mut mem = BitMemory::create(origin, 64).unwrap();
        mem.load(&[0x0F, 0xFF, 0x00, 0xFF, 0x0A]);
        let insn = Instruction {
            address: origin,
            length: 40,
            opcode: 0xF,
            mnemonic: "BLOB".to_string(),
            operand: String::new(),
            format: WIDE,
            mode: Mode::default(),
        };

        let mut out = Vec::new();
        ListingFormatter::default()
            .write_fields(&mut out, &insn, &mem)
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("# $1000.0 .. $1000.7:  BLOB"));
        assert!(lines[1].starts_with("     1111 1111 0000 0000 1111 1111  #"));
        assert!(lines[1].ends_with("# $1001.0 .. $1003.7:  Payload"));
        assert!(lines[2].starts_with("     0000 1010      "));
        assert!(lines[2].ends_with("# $1004.0 .. $1004.7:  Payload (cont)"));
    }

    #[test]
    fn test_aliases_listed_under_one_separator() {
        let origin = BitAddress::from_byte(0x1000);
        let mut mem = BitMemory::create(origin, 32).unwrap();
        mem.load(&[0x5F]);
        let mut symbols = SymbolTable::new();
        symbols.define("START", origin).unwrap();
        symbols.define("ENTRY", origin).unwrap();
        let mut mode = Mode::for_address(origin);

        let engine = DisassemblyEngine::sp0256().unwrap();
        let insn = engine.decode(origin, &mut mode, &mut mem, &mut symbols).unwrap();
        let mut out = Vec::new();
        ListingFormatter::new(';')
            .write_instruction(&mut out, &insn, &mem, &mut symbols)
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], format!(";;{}", "-".repeat(76)));
        assert_eq!(lines[1], ";; START:");
        assert_eq!(lines[2], ";; ENTRY:");
        assert!(lines[3].starts_with("; $1000.0  PAUSE"));
        assert_eq!(symbols.entries().next().unwrap().direct_refs(), 1);
    }
}
