// Tue Jan 13 2026 - Alex

use crate::avl::{AvlError, AvlTree};
use crate::memory::BitAddress;
use crate::symbol::{SymbolEntry, SymbolError};
use std::rc::Rc;

pub const DEFAULT_COMMENT_CHAR: char = '#';

/// Symbols indexed both by name and by `(address, sequence)`.
///
/// Several names may share an address. The first one defined keeps
/// sequence 0 and the rest count upwards, so the address index stays
/// strictly ordered and lookups for sequence 0 find the primary name.
pub struct SymbolTable {
    by_name: AvlTree<Rc<SymbolEntry>>,
    by_address: AvlTree<Rc<SymbolEntry>>,
    num_symbols: usize,
    comment_char: char,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            by_name: AvlTree::with_comparator(|a: &Rc<SymbolEntry>, b: &Rc<SymbolEntry>| {
                a.name().cmp(b.name())
            }),
            by_address: AvlTree::with_comparator(|a: &Rc<SymbolEntry>, b: &Rc<SymbolEntry>| {
                a.address_key().cmp(&b.address_key())
            }),
            num_symbols: 0,
            comment_char: DEFAULT_COMMENT_CHAR,
        }
    }

    pub fn with_comment_char(mut self, comment_char: char) -> Self {
        self.comment_char = comment_char;
        self
    }

    /// Defines `name` at `addr`. Defining the same pair twice is a no-op.
    pub fn define(&mut self, name: &str, addr: BitAddress) -> Result<String, SymbolError> {
        if let Some(existing) = self.lookup_name(name)? {
            if existing.address() == addr {
                return Ok(existing.name().to_string());
            }
            return Err(SymbolError::Redefined {
                name: name.to_string(),
                existing: existing.address(),
                requested: addr,
            });
        }

        let entry = Rc::new(SymbolEntry::new(name.to_string(), addr));
        self.by_name.insert(Rc::clone(&entry))?;

        loop {
            match self.by_address.insert(Rc::clone(&entry)) {
                Ok(()) => break,
                Err(AvlError::DuplicateKey) => entry.bump_sequence(),
                Err(e) => return Err(e.into()),
            }
        }

        if entry.is_alias() {
            log::debug!("symtab: {} aliases {} (sequence {})", name, addr, entry.sequence());
        } else {
            log::trace!("symtab: defined {} at {}", name, addr);
        }

        self.num_symbols += 1;
        Ok(entry.name().to_string())
    }

    /// Name at `(addr, seq)`. When there is none, `seq` is 0 and `synth` is
    /// given, a label `{synth}_{byte:04X}` is defined and returned.
    pub fn get_symbol(
        &mut self,
        addr: BitAddress,
        synth: Option<char>,
        seq: u32,
    ) -> Result<Option<String>, SymbolError> {
        if let Some(entry) = self.lookup_address(addr, seq)? {
            return Ok(Some(entry.name().to_string()));
        }

        match synth {
            Some(prefix) if seq == 0 => {
                let name = format!("{}_{:04X}", prefix, addr.byte());
                self.define(&name, addr).map(Some)
            }
            _ => Ok(None),
        }
    }

    pub fn get_address(&self, name: &str) -> Result<BitAddress, SymbolError> {
        self.lookup_name(name)?
            .map(|entry| entry.address())
            .ok_or_else(|| SymbolError::NotFound(name.to_string()))
    }

    /// Notes that the instruction at `from` refers to `target`. Returns
    /// false when no primary symbol exists at `target` or `from` was
    /// already recorded.
    pub fn add_xref(&mut self, target: BitAddress, from: BitAddress) -> Result<bool, SymbolError> {
        Ok(self
            .lookup_address(target, 0)?
            .is_some_and(|entry| entry.add_xref(from)))
    }

    /// Counts a direct reference to the primary symbol at `addr`, if any.
    pub fn mark_direct_reference(&mut self, addr: BitAddress) -> Result<bool, SymbolError> {
        match self.lookup_address(addr, 0)? {
            Some(entry) => {
                entry.add_direct_ref();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Calls `found(name, address, sequence)` for every symbol whose name
    /// contains `pattern`, in name order.
    pub fn grep<F>(&self, pattern: &str, mut found: F)
    where
        F: FnMut(&str, BitAddress, u32),
    {
        self.by_name
            .iter()
            .filter(|entry| entry.name().contains(pattern))
            .for_each(|entry| found(entry.name(), entry.address(), entry.sequence()));
    }

    /// Entries in `(address, sequence)` order.
    pub fn entries(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.by_address.iter().map(|entry| &**entry)
    }

    /// Entries in name order.
    pub fn names(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.by_name.iter().map(|entry| &**entry)
    }

    pub fn aliases(&self, addr: BitAddress) -> impl Iterator<Item = &SymbolEntry> {
        self.entries()
            .skip_while(move |entry| entry.address() < addr)
            .take_while(move |entry| entry.address() == addr)
    }

    pub fn len(&self) -> usize {
        self.num_symbols
    }

    pub fn is_empty(&self) -> bool {
        self.num_symbols == 0
    }

    pub fn comment_char(&self) -> char {
        self.comment_char
    }

    pub fn set_comment_char(&mut self, comment_char: char) {
        self.comment_char = comment_char;
    }

    fn lookup_name(&self, name: &str) -> Result<Option<&SymbolEntry>, SymbolError> {
        not_found_as_none(self.by_name.search_by(|entry| entry.name().cmp(name)))
    }

    fn lookup_address(&self, addr: BitAddress, seq: u32) -> Result<Option<&SymbolEntry>, SymbolError> {
        not_found_as_none(
            self.by_address
                .search_by(|entry| entry.address_key().cmp(&(addr, seq))),
        )
    }
}

fn not_found_as_none(found: Result<&Rc<SymbolEntry>, AvlError>) -> Result<Option<&SymbolEntry>, SymbolError> {
    match found {
        Ok(entry) => Ok(Some(&**entry)),
        Err(AvlError::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_is_idempotent() {
        let mut table = SymbolTable::new();
        let addr = BitAddress::from_byte(0x1000);

        assert_eq!(table.define("START", addr).unwrap(), "START");
        assert_eq!(table.define("START", addr).unwrap(), "START");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get_address("START").unwrap(), addr);
    }

    #[test]
    fn test_redefinition_is_an_error() {
        let mut table = SymbolTable::new();
        table.define("START", BitAddress::from_byte(0x1000)).unwrap();

        let err = table.define("START", BitAddress::from_byte(0x1002)).unwrap_err();
        match err {
            SymbolError::Redefined { name, existing, requested } => {
                assert_eq!(name, "START");
                assert_eq!(existing, BitAddress::from_byte(0x1000));
                assert_eq!(requested, BitAddress::from_byte(0x1002));
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_aliases_get_sequence_numbers() {
        let mut table = SymbolTable::new();
        let addr = BitAddress::from_byte(0x1234);

        table.define("FIRST", addr).unwrap();
        table.define("SECOND", addr).unwrap();
        table.define("THIRD", addr).unwrap();

        assert_eq!(table.get_symbol(addr, None, 0).unwrap().as_deref(), Some("FIRST"));
        assert_eq!(table.get_symbol(addr, None, 1).unwrap().as_deref(), Some("SECOND"));
        assert_eq!(table.get_symbol(addr, None, 2).unwrap().as_deref(), Some("THIRD"));
        assert_eq!(table.get_symbol(addr, None, 3).unwrap(), None);

        let names: Vec<&str> = table.aliases(addr).map(|e| e.name()).collect();
        assert_eq!(names, vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_synthesised_labels() {
        let mut table = SymbolTable::new();
        let addr = BitAddress::from_byte(0x10AB) + 3;

        assert_eq!(table.get_symbol(addr, None, 0).unwrap(), None);
        assert_eq!(table.get_symbol(addr, Some('L'), 1).unwrap(), None);
        assert_eq!(table.get_symbol(addr, Some('L'), 0).unwrap().as_deref(), Some("L_10AB"));
        assert_eq!(table.get_symbol(addr, Some('G'), 0).unwrap().as_deref(), Some("L_10AB"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_xrefs_and_direct_refs() {
        let mut table = SymbolTable::new();
        let target = BitAddress::from_byte(0x1100);
        table.define("LOOP", target).unwrap();

        assert!(table.add_xref(target, BitAddress::from_byte(0x1000)).unwrap());
        assert!(!table.add_xref(target, BitAddress::from_byte(0x1000)).unwrap());
        assert!(table.add_xref(target, BitAddress::from_byte(0x1004)).unwrap());
        assert!(!table.add_xref(BitAddress::from_byte(0x2000), target).unwrap());

        assert!(table.mark_direct_reference(target).unwrap());
        assert!(!table.mark_direct_reference(BitAddress::from_byte(0x2000)).unwrap());

        let entry = table.entries().next().unwrap();
        assert_eq!(entry.xrefs().len(), 2);
        assert_eq!(entry.direct_refs(), 1);
    }

    #[test]
    fn test_grep_in_name_order() {
        let mut table = SymbolTable::new();
        table.define("L_1010", BitAddress::from_byte(0x1010)).unwrap();
        table.define("MAIN", BitAddress::from_byte(0x1000)).unwrap();
        table.define("L_1004", BitAddress::from_byte(0x1004)).unwrap();

        let mut hits = Vec::new();
        table.grep("L_", |name, addr, seq| hits.push((name.to_string(), addr.byte(), seq)));
        assert_eq!(
            hits,
            vec![("L_1004".to_string(), 0x1004, 0), ("L_1010".to_string(), 0x1010, 0)]
        );
    }

    #[test]
    fn test_missing_name() {
        let table = SymbolTable::new();
        assert!(matches!(table.get_address("NOPE"), Err(SymbolError::NotFound(_))));
        assert!(table.is_empty());
    }
}
