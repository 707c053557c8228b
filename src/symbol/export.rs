// Tue Jan 13 2026 - Alex

use crate::symbol::{SymbolEntry, SymbolError, SymbolTable};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedSymbol {
    pub name: String,
    pub address: String,
    pub byte: u32,
    pub bit: u32,
    pub sequence: u32,
    pub direct_references: u32,
    pub cross_references: Vec<String>,
}

impl From<&SymbolEntry> for ExportedSymbol {
    fn from(entry: &SymbolEntry) -> Self {
        let addr = entry.address();
        Self {
            name: entry.name().to_string(),
            address: addr.to_string(),
            byte: addr.byte(),
            bit: addr.bit(),
            sequence: entry.sequence(),
            direct_references: entry.direct_refs(),
            cross_references: entry.xrefs().iter().map(|x| x.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolExport {
    pub count: usize,
    pub symbols: Vec<ExportedSymbol>,
}

impl SymbolTable {
    pub fn to_export(&self) -> SymbolExport {
        let symbols: Vec<ExportedSymbol> = self.entries().map(ExportedSymbol::from).collect();
        SymbolExport {
            count: symbols.len(),
            symbols,
        }
    }

    pub fn export_json<W: Write>(&self, w: W) -> Result<(), SymbolError> {
        serde_json::to_writer_pretty(w, &self.to_export())?;
        Ok(())
    }

    pub fn export_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SymbolError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.export_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::BitAddress;

    #[test]
    fn test_export_round_trips_through_json() {
        let mut table = SymbolTable::new();
        let target = BitAddress::from_byte(0x1100) + 2;
        table.define("LOOP", target).unwrap();
        table.define("AGAIN", target).unwrap();
        table.add_xref(target, BitAddress::from_byte(0x1000)).unwrap();

        let mut out = Vec::new();
        table.export_json(&mut out).unwrap();
        let parsed: SymbolExport = serde_json::from_slice(&out).unwrap();

        assert_eq!(parsed.count, 2);
        assert_eq!(parsed.symbols[0].name, "LOOP");
        assert_eq!(parsed.symbols[0].address, "$1100.2");
        assert_eq!(parsed.symbols[0].cross_references, vec!["$1000.0".to_string()]);
        assert_eq!(parsed.symbols[1].sequence, 1);
    }
}
