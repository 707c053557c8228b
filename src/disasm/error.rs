// Wed Jan 15 2026 - Alex

use crate::memory::{BitAddress, MemoryError};
use crate::symbol::SymbolError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed format table: {0}")]
    MalformedTable(String),
    #[error("Line {line}: {command} {message}")]
    BadArgument {
        line: usize,
        command: String,
        message: String,
    },
    #[error("ROM image of {0} bytes does not fit the bit address space")]
    ImageTooLarge(usize),
    #[error("Instruction at {0} decoded to less than a byte")]
    ZeroLength(BitAddress),
    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),
    #[error("Symbol error: {0}")]
    Symbol(#[from] SymbolError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
