// Tue Jan 13 2026 - Alex

pub mod dump;
pub mod entry;
pub mod error;
pub mod export;
pub mod table;

pub use entry::{SymbolEntry, SymbolFlag};
pub use error::SymbolError;
pub use export::{ExportedSymbol, SymbolExport};
pub use table::SymbolTable;
