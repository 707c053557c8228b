// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Bit memory origin {0:#x} is not a multiple of 32")]
    BadAlignment(u32),
    #[error("Bit memory of {size_bits} bits at {origin:#x} runs past the 32-bit address space")]
    OutOfRange { origin: u32, size_bits: u32 },
}
