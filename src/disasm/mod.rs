// Wed Jan 15 2026 - Alex

pub mod annotate;
pub mod engine;
pub mod error;
pub mod format;
pub mod formatter;
pub mod instruction;
pub mod sp0256;

pub use annotate::{Annotation, AnnotationFile, ByteRange};
pub use engine::DisassemblyEngine;
pub use error::DecodeError;
pub use format::{FieldDesc, FieldFlags, Format, FormatTable};
pub use formatter::ListingFormatter;
pub use instruction::{Instruction, Mode};

use crate::config::{Config, DEFAULT_ORIGIN};
use crate::memory::{BitAddress, BitMemory};
use crate::symbol::SymbolTable;
use crate::utils::ScopedTimer;
use std::io::Write;

/// Two-pass disassembly of one ROM image.
///
/// Pass 1 (`decode_all`) walks the image front to back, tagging bits and
/// collecting branch targets. Pass 2 (`render`) prints the listing, by which
/// point every branch target is known and can carry a label.
pub struct Disassembler {
    engine: DisassemblyEngine,
    memory: BitMemory,
    symbols: SymbolTable,
    formatter: ListingFormatter,
    instructions: Vec<Instruction>,
    dump_symbols: bool,
    dump_xrefs: bool,
}

impl Disassembler {
    pub fn new(
        rom: &[u8],
        annotations: Option<&AnnotationFile>,
        config: &Config,
    ) -> Result<Self, DecodeError> {
        let origin = BitAddress::from_byte(resolve_origin(annotations, config));
        let mut memory = BitMemory::create(origin, image_bits(rom.len())?)?;
        memory.load(rom);

        let mut symbols = SymbolTable::new().with_comment_char(config.comment_char);
        if let Some(annotations) = annotations {
            annotations.define_symbols(&mut symbols)?;
            annotations.apply_attributes(&mut memory);
        }

        log::info!(
            "Loaded {} bytes at {}, {} predefined symbols",
            rom.len(),
            origin,
            symbols.len()
        );

        Ok(Self {
            engine: DisassemblyEngine::sp0256()?,
            memory,
            symbols,
            formatter: ListingFormatter::new(config.comment_char),
            instructions: Vec::new(),
            dump_symbols: config.dump_symbols,
            dump_xrefs: config.dump_xrefs,
        })
    }

    pub fn decode_all(&mut self) -> Result<usize, DecodeError> {
        self.decode_all_with(|_| {})
    }

    /// Pass 1. `on_decoded` sees each instruction as it is decoded.
    pub fn decode_all_with<F>(&mut self, mut on_decoded: F) -> Result<usize, DecodeError>
    where
        F: FnMut(&Instruction),
    {
        log::info!("Pass 1: decoding instructions");
        let _timer = ScopedTimer::new("pass 1");

        let origin = self.memory.origin();
        let end = origin + self.memory.size_bits();
        let mut mode = Mode::for_address(origin);
        let mut addr = origin;

        self.instructions.clear();
        while addr < end {
            let insn = self
                .engine
                .decode(addr, &mut mode, &mut self.memory, &mut self.symbols)?;
            addr = insn.end();
            on_decoded(&insn);
            self.instructions.push(insn);
        }

        log::debug!(
            "Pass 1: {} instructions, {} symbols",
            self.instructions.len(),
            self.symbols.len()
        );
        Ok(self.instructions.len())
    }

    /// Pass 2: the listing, one block per instruction.
    pub fn render<W: Write>(&mut self, w: &mut W) -> Result<(), DecodeError> {
        log::info!("Pass 2: displaying output");
        let _timer = ScopedTimer::new("pass 2");

        self.formatter.write_banner(w)?;
        for insn in &self.instructions {
            self.formatter
                .write_instruction(w, insn, &self.memory, &mut self.symbols)?;
        }
        Ok(())
    }

    pub fn render_symbols<W: Write>(&self, w: &mut W) -> Result<(), DecodeError> {
        if self.dump_symbols {
            self.symbols.dump_by_symbol(w)?;
            self.symbols.dump_by_address(w)?;
        }
        if self.dump_xrefs {
            self.symbols.dump_xrefs(w)?;
        }
        Ok(())
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn memory(&self) -> &BitMemory {
        &self.memory
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn origin(&self) -> BitAddress {
        self.memory.origin()
    }
}

fn image_bits(len: usize) -> Result<u32, DecodeError> {
    u32::try_from(len)
        .ok()
        .and_then(|bytes| bytes.checked_mul(8))
        .ok_or(DecodeError::ImageTooLarge(len))
}

/// The command line wins, then the annotation file's `org`. An annotation
/// file without `org` means the image starts at `$0000`.
fn resolve_origin(annotations: Option<&AnnotationFile>, config: &Config) -> u32 {
    config.origin.unwrap_or_else(|| match annotations {
        Some(file) => file.origin().unwrap_or(0),
        None => DEFAULT_ORIGIN,
    })
}
