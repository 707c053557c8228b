// Tue Jan 13 2026 - Alex

pub mod address;
pub mod attr;
pub mod bitmem;
pub mod error;

pub use address::BitAddress;
pub use attr::Attr;
pub use bitmem::BitMemory;
pub use error::MemoryError;
