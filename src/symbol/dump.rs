// Tue Jan 13 2026 - Alex

use crate::symbol::{SymbolEntry, SymbolError, SymbolTable};
use std::io::Write;

pub const RULE_WIDTH: usize = 76;

pub(crate) fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

impl SymbolTable {
    pub fn dump_by_symbol<W: Write>(&self, w: &mut W) -> Result<(), SymbolError> {
        let entries: Vec<&SymbolEntry> = self.names().collect();
        self.dump_columns(w, "Symbol", &entries)
    }

    pub fn dump_by_address<W: Write>(&self, w: &mut W) -> Result<(), SymbolError> {
        let entries: Vec<&SymbolEntry> = self.entries().collect();
        self.dump_columns(w, "Address", &entries)
    }

    /// One block per symbol that something refers to, eight referring
    /// addresses per line.
    pub fn dump_xrefs<W: Write>(&self, w: &mut W) -> Result<(), SymbolError> {
        let c = self.comment_char();
        write_banner(w, c, "Cross Reference Table")?;

        for entry in self.entries() {
            let xrefs = entry.xrefs();
            for (line, chunk) in xrefs.chunks(8).enumerate() {
                if line == 0 {
                    write!(w, "{}# {:>14}:{}", c, entry.name(), entry.flag())?;
                } else {
                    write!(w, "\n{}#{:17}", c, "")?;
                }
                for from in chunk {
                    write!(w, " {:04X}.{:X}", from.byte(), from.bit())?;
                }
            }
            if !xrefs.is_empty() {
                writeln!(w)?;
            }
        }

        writeln!(w, "{}#{}", c, rule())?;
        Ok(())
    }

    // Three columns, filled top to bottom then left to right.
    fn dump_columns<W: Write>(
        &self,
        w: &mut W,
        sort: &str,
        entries: &[&SymbolEntry],
    ) -> Result<(), SymbolError> {
        let c = self.comment_char();
        write_banner(w, c, &format!("Symbol Table, sorted by {}", sort))?;

        let n = entries.len();
        let rows = (n + 2) / 3;

        for row in 0..rows {
            let mut full = true;
            for col in 0..3 {
                let Some(entry) = entries.get(row + col * rows) else {
                    full = false;
                    break;
                };
                write_cell(w, c, entry, col)?;
            }
            if !full {
                writeln!(w)?;
            }
        }
        if n == 0 {
            writeln!(w)?;
        }

        writeln!(w, "{}#{}", c, rule())?;
        Ok(())
    }
}

fn write_banner<W: Write>(w: &mut W, c: char, title: &str) -> std::io::Result<()> {
    write!(w, "\n{}#{}\n{}# {}\n{}#{}\n", c, rule(), c, title, c, rule())
}

fn write_cell<W: Write>(w: &mut W, c: char, entry: &SymbolEntry, col: usize) -> std::io::Result<()> {
    if col == 0 {
        write!(w, "{}# ", c)?;
    } else {
        write!(w, "  ")?;
    }
    let addr = entry.address();
    write!(
        w,
        "{:>14}:{} {:04X}.{:X}",
        entry.name(),
        entry.flag(),
        addr.byte(),
        addr.bit()
    )?;
    if col == 2 {
        writeln!(w)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::BitAddress;

    fn render<F>(table: &SymbolTable, dump: F) -> String
    where
        F: Fn(&SymbolTable, &mut Vec<u8>) -> Result<(), SymbolError>,
    {
        let mut out = Vec::new();
        dump(table, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_dump_by_symbol_layout() {
        let mut table = SymbolTable::new();
        for (name, byte) in [("A", 0x1000), ("B", 0x1001), ("C", 0x1002), ("D", 0x1003)] {
            table.define(name, BitAddress::from_byte(byte)).unwrap();
        }
        table.mark_direct_reference(BitAddress::from_byte(0x1001)).unwrap();

        let out = render(&table, |t, w| t.dump_by_symbol(w));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], format!("##{}", "-".repeat(76)));
        assert_eq!(lines[2], "## Symbol Table, sorted by Symbol");
        assert_eq!(
            lines[4],
            format!("## {:>14}:! 1000.0  {:>14}:! 1002.0", "A", "C")
        );
        assert_eq!(
            lines[5],
            format!("## {:>14}:  1001.0  {:>14}:! 1003.0", "B", "D")
        );
        assert_eq!(lines[6], lines[1]);
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_dump_by_address_full_rows_and_alias_flag() {
        let mut table = SymbolTable::new().with_comment_char(';');
        table.define("ZED", BitAddress::from_byte(0x1000)).unwrap();
        table.define("ALT", BitAddress::from_byte(0x1000)).unwrap();
        table.define("END", BitAddress::from_byte(0x1010) + 4).unwrap();

        let out = render(&table, |t, w| t.dump_by_address(w));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[2], ";# Symbol Table, sorted by Address");
        assert_eq!(
            lines[4],
            format!(
                ";# {:>14}:! 1000.0  {:>14}:a 1000.0  {:>14}:! 1010.4",
                "ZED", "ALT", "END"
            )
        );
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_dump_empty_table() {
        let table = SymbolTable::new();
        let out = render(&table, |t, w| t.dump_by_symbol(w));
        assert_eq!(out.lines().count(), 6);
    }

    #[test]
    fn test_dump_xrefs_wraps_after_eight() {
        let mut table = SymbolTable::new();
        let target = BitAddress::from_byte(0x1100);
        table.define("LOOP", target).unwrap();
        table.define("IDLE", BitAddress::from_byte(0x1200)).unwrap();
        for i in 0..9 {
            table.add_xref(target, BitAddress::from_byte(0x1000 + i)).unwrap();
        }

        let out = render(&table, |t, w| t.dump_xrefs(w));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[2], "## Cross Reference Table");
        assert!(lines[4].starts_with(&format!("## {:>14}:!", "LOOP")));
        assert!(lines[4].ends_with(" 1006.0 1007.0"));
        assert_eq!(lines[5], format!("##{} 1008.0", " ".repeat(17)));
        assert_eq!(lines[6], lines[1]);
        assert!(!out.contains("IDLE"));
    }
}
