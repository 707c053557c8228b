// Wed Jan 15 2026 - Alex

use crate::disasm::DecodeError;
use crate::memory::{Attr, BitAddress, BitMemory};
use crate::symbol::SymbolTable;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::Path;

static HEX_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\$|0[xX])?([0-9A-Fa-f]+)$").expect("valid hex pattern"));
static HEX_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^-]+)-([^-]+)$").expect("valid range pattern"));

/// Inclusive range of byte addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub first: u32,
    pub last: u32,
}

impl ByteRange {
    pub fn single(byte: u32) -> Self {
        Self { first: byte, last: byte }
    }

    pub fn start(&self) -> BitAddress {
        BitAddress::from_byte(self.first)
    }

    pub fn len_bits(&self) -> u32 {
        (self.last - self.first + 1) * 8
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "${:04X}", self.first)
        } else {
            write!(f, "${:04X}-${:04X}", self.first, self.last)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    Code(ByteRange),
    Data(ByteRange),
    Oper(ByteRange),
    Org(u32),
    Sym { name: String, byte: u32 },
}

/// Hints read from a symbol/annotation file.
///
/// ```text
/// ; comment
/// org   1000
/// sym   START  $1000
/// code  1000-10FF
/// data  1100 11FF
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnnotationFile {
    annotations: Vec<Annotation>,
}

impl AnnotationFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DecodeError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        let mut annotations = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.split(';').next().unwrap_or("");
            let mut words = content.split_whitespace();
            let Some(keyword) = words.next() else {
                continue;
            };
            let keyword = keyword.to_lowercase();
            let args: Vec<&str> = words.collect();

            let annotation = match keyword.as_str() {
                "code" => Annotation::Code(parse_range(line, &keyword, &args)?),
                "data" => Annotation::Data(parse_range(line, &keyword, &args)?),
                "oper" => Annotation::Oper(parse_range(line, &keyword, &args)?),
                "org" => match args.as_slice() {
                    [value, rest @ ..] => {
                        warn_extra(line, &keyword, rest);
                        Annotation::Org(parse_hex(line, &keyword, value)?)
                    }
                    _ => return Err(bad_argument(line, &keyword, "requires 1 numeric arg")),
                },
                "sym" => match args.as_slice() {
                    [name, value, rest @ ..] => {
                        warn_extra(line, &keyword, rest);
                        Annotation::Sym {
                            name: name.to_string(),
                            byte: parse_hex(line, &keyword, value)?,
                        }
                    }
                    _ => {
                        return Err(bad_argument(
                            line,
                            &keyword,
                            "requires 2 args, and the second must be numeric",
                        ))
                    }
                },
                _ => {
                    log::warn!("annotations: line {}: unknown command '{}'", line, keyword);
                    continue;
                }
            };
            annotations.push(annotation);
        }

        log::debug!("annotations: {} commands", annotations.len());
        Ok(Self { annotations })
    }

    pub fn push(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Origin byte address; the last `org` wins.
    pub fn origin(&self) -> Option<u32> {
        self.annotations.iter().rev().find_map(|a| match a {
            Annotation::Org(byte) => Some(*byte),
            _ => None,
        })
    }

    pub fn define_symbols(&self, symbols: &mut SymbolTable) -> Result<(), DecodeError> {
        for annotation in &self.annotations {
            if let Annotation::Sym { name, byte } = annotation {
                symbols.define(name, BitAddress::from_byte(*byte))?;
            }
        }
        Ok(())
    }

    pub fn apply_attributes(&self, mem: &mut BitMemory) {
        for annotation in &self.annotations {
            match annotation {
                Annotation::Code(range) => mem.set_attr(range.start(), range.len_bits(), Attr::CODE),
                Annotation::Oper(range) => mem.set_attr(range.start(), range.len_bits(), Attr::OPER),
                Annotation::Data(range) => {
                    mem.set_attr(range.start(), range.len_bits(), Attr::DATA);
                    mem.set_attr(range.start(), 1, Attr::DATA_BOUNDARY);
                }
                Annotation::Sym { byte, .. } => {
                    mem.set_attr(BitAddress::from_byte(*byte), 1, Attr::BRANCH_TARGET)
                }
                Annotation::Org(_) => {}
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

fn bad_argument(line: usize, command: &str, message: &str) -> DecodeError {
    DecodeError::BadArgument {
        line,
        command: command.to_string(),
        message: message.to_string(),
    }
}

fn warn_extra(line: usize, command: &str, rest: &[&str]) {
    if !rest.is_empty() {
        log::warn!(
            "annotations: line {}: ignoring extra arguments to {}: {}",
            line,
            command,
            rest.join(" ")
        );
    }
}

fn parse_hex(line: usize, command: &str, token: &str) -> Result<u32, DecodeError> {
    HEX_NUMBER
        .captures(token)
        .and_then(|caps| u32::from_str_radix(&caps[1], 16).ok())
        .filter(|value| *value <= 0xFFFF)
        .ok_or_else(|| bad_argument(line, command, &format!("'{}' is not a 16-bit hex number", token)))
}

fn parse_range(line: usize, command: &str, args: &[&str]) -> Result<ByteRange, DecodeError> {
    let (first, last) = match args {
        [single] => match HEX_RANGE.captures(single) {
            Some(caps) => (
                parse_hex(line, command, &caps[1])?,
                parse_hex(line, command, &caps[2])?,
            ),
            None => {
                let byte = parse_hex(line, command, single)?;
                (byte, byte)
            }
        },
        [first, last, rest @ ..] => {
            warn_extra(line, command, rest);
            (parse_hex(line, command, first)?, parse_hex(line, command, last)?)
        }
        [] => return Err(bad_argument(line, command, "requires 1 or 2 numeric args")),
    };

    if last < first {
        return Err(bad_argument(line, command, "range ends before it starts"));
    }
    Ok(ByteRange { first, last })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
; SP0256 resident ROM
ORG   1000
sym   START   $1000
Sym   Loop2   0x1010   ; second entry

code  1000-1003
data  1004 1005
oper  1006
bogus 1 2 3
";

    #[test]
    fn test_parse_sample() {
        let file = AnnotationFile::parse(SAMPLE).unwrap();
        let all: Vec<&Annotation> = file.iter().collect();

        assert_eq!(file.len(), 6);
        assert_eq!(*all[0], Annotation::Org(0x1000));
        assert_eq!(
            *all[2],
            Annotation::Sym { name: "Loop2".to_string(), byte: 0x1010 }
        );
        assert_eq!(*all[3], Annotation::Code(ByteRange { first: 0x1000, last: 0x1003 }));
        assert_eq!(*all[4], Annotation::Data(ByteRange { first: 0x1004, last: 0x1005 }));
        assert_eq!(*all[5], Annotation::Oper(ByteRange::single(0x1006)));
        assert_eq!(file.origin(), Some(0x1000));
    }

    #[test]
    fn test_bad_arguments_are_fatal() {
        let err = AnnotationFile::parse("org\n").unwrap_err();
        assert!(matches!(err, DecodeError::BadArgument { line: 1, .. }));

        let err = AnnotationFile::parse("\n\nsym START zz\n").unwrap_err();
        assert!(matches!(err, DecodeError::BadArgument { line: 3, .. }));

        assert!(AnnotationFile::parse("data 1010-1000").is_err());
        assert!(AnnotationFile::parse("org 10000").is_err());
    }

    #[test]
    fn test_apply_to_memory_and_symbols() {
        let file = AnnotationFile::parse(SAMPLE).unwrap();
        let origin = BitAddress::from_byte(0x1000);
        let mut mem = BitMemory::create(origin, 32 * 8).unwrap();
        let mut symbols = SymbolTable::new();

        file.define_symbols(&mut symbols).unwrap();
        file.apply_attributes(&mut mem);

        assert_eq!(symbols.get_address("START").unwrap(), origin);
        assert!(mem.has_attr(BitAddress::from_byte(0x1003), 8, Attr::CODE));
        assert!(!mem.has_attr(BitAddress::from_byte(0x1004), 8, Attr::CODE));
        assert!(mem.has_attr(BitAddress::from_byte(0x1004), 1, Attr::DATA_BOUNDARY));
        assert!(!mem.has_attr(BitAddress::from_byte(0x1005), 8, Attr::DATA_BOUNDARY));
        assert!(mem.has_attr(BitAddress::from_byte(0x1005), 8, Attr::DATA));
        assert!(mem.has_attr(BitAddress::from_byte(0x1006), 8, Attr::OPER));
        assert!(mem.has_attr(BitAddress::from_byte(0x1010), 1, Attr::BRANCH_TARGET));
    }

    #[test]
    fn test_trailing_words_are_ignored() {
        let file = AnnotationFile::parse("sym A 1000 extra\ncode 1000 1001 1002\norg 1000 2000\n").unwrap();
        let all: Vec<&Annotation> = file.iter().collect();

        assert_eq!(*all[0], Annotation::Sym { name: "A".to_string(), byte: 0x1000 });
        assert_eq!(*all[1], Annotation::Code(ByteRange { first: 0x1000, last: 0x1001 }));
        assert_eq!(file.origin(), Some(0x1000));

        assert!(AnnotationFile::parse("code\n").is_err());
        assert!(AnnotationFile::parse("sym A\n").is_err());
    }

    #[test]
    fn test_no_org() {
        let file = AnnotationFile::parse("sym A 1000\n").unwrap();
        assert_eq!(file.origin(), None);
        assert!(AnnotationFile::new().is_empty());
    }
}
