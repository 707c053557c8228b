// Tue Jan 15 2026 - Alex

pub mod avl;
pub mod config;
pub mod disasm;
pub mod memory;
pub mod symbol;
pub mod utils;

pub use avl::AvlTree;
pub use config::Config;
pub use disasm::{AnnotationFile, DecodeError, Disassembler, DisassemblyEngine};
pub use memory::{Attr, BitAddress, BitMemory};
pub use symbol::{SymbolEntry, SymbolError, SymbolTable};
