// Tue Jan 13 2026 - Alex

use crate::memory::BitAddress;
use std::cell::{Cell, Ref, RefCell};
use std::fmt;

/// One symbol, shared by the name index and the address index.
///
/// The address index orders entries by `(address, sequence)`, so the
/// sequence number is assigned while the entry is being indexed and never
/// changes afterwards. Cross references and the direct reference count are
/// updated in place through the shared handle.
#[derive(Debug)]
pub struct SymbolEntry {
    name: String,
    address: BitAddress,
    sequence: Cell<u32>,
    xrefs: RefCell<Vec<BitAddress>>,
    direct_refs: Cell<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolFlag {
    /// Primary name that nothing branches to directly.
    Unused,
    /// Secondary name for an address that already had one.
    Alias,
    Normal,
}

impl SymbolFlag {
    pub fn as_char(self) -> char {
        match self {
            Self::Unused => '!',
            Self::Alias => 'a',
            Self::Normal => ' ',
        }
    }
}

impl fmt::Display for SymbolFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl SymbolEntry {
    pub fn new(name: String, address: BitAddress) -> Self {
        Self {
            name,
            address,
            sequence: Cell::new(0),
            xrefs: RefCell::new(Vec::new()),
            direct_refs: Cell::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> BitAddress {
        self.address
    }

    pub fn sequence(&self) -> u32 {
        self.sequence.get()
    }

    pub(crate) fn bump_sequence(&self) {
        self.sequence.set(self.sequence.get() + 1);
    }

    pub fn address_key(&self) -> (BitAddress, u32) {
        (self.address, self.sequence.get())
    }

    pub fn direct_refs(&self) -> u32 {
        self.direct_refs.get()
    }

    pub(crate) fn add_direct_ref(&self) {
        self.direct_refs.set(self.direct_refs.get() + 1);
    }

    pub fn xrefs(&self) -> Ref<'_, Vec<BitAddress>> {
        self.xrefs.borrow()
    }

    /// Records `from` once. Returns false if it was already present.
    pub(crate) fn add_xref(&self, from: BitAddress) -> bool {
        let mut xrefs = self.xrefs.borrow_mut();
        if xrefs.contains(&from) {
            return false;
        }
        if xrefs.len() == xrefs.capacity() {
            let grow = xrefs.capacity().max(4);
            xrefs.reserve_exact(grow);
        }
        xrefs.push(from);
        true
    }

    pub fn flag(&self) -> SymbolFlag {
        if self.sequence() != 0 {
            SymbolFlag::Alias
        } else if self.direct_refs() == 0 {
            SymbolFlag::Unused
        } else {
            SymbolFlag::Normal
        }
    }

    pub fn is_alias(&self) -> bool {
        self.sequence() != 0
    }
}

impl fmt::Display for SymbolEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_alias() {
            write!(f, "{} @ {} (alias {})", self.name, self.address, self.sequence())
        } else {
            write!(f, "{} @ {}", self.name, self.address)
        }
    }
}
