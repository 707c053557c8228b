// Tue Jan 13 2026 - Alex

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Per-bit annotations kept alongside the memory image.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attr: u8 {
        const CODE = 0x01;
        const OPER = 0x02;
        const DATA = 0x04;
        const DATA_BOUNDARY = 0x08;
        const BRANCH_TARGET = 0x10;
        const ALIGN = 0x20;
        const BITREV = 0x40;
        /// Reported by queries that touch the memory; never stored.
        const LOCAL = 0x80;
    }
}

impl Attr {
    pub fn is_code(self) -> bool {
        self.contains(Self::CODE)
    }

    pub fn is_branch_target(self) -> bool {
        self.contains(Self::BRANCH_TARGET)
    }

    pub fn is_local(self) -> bool {
        self.contains(Self::LOCAL)
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LETTERS: [(Attr, char); 8] = [
            (Attr::CODE, 'c'),
            (Attr::OPER, 'o'),
            (Attr::DATA, 'd'),
            (Attr::DATA_BOUNDARY, 'D'),
            (Attr::BRANCH_TARGET, 'b'),
            (Attr::ALIGN, 'a'),
            (Attr::BITREV, 'r'),
            (Attr::LOCAL, 'l'),
        ];
        for (flag, letter) in LETTERS {
            let c = if self.contains(flag) { letter } else { '-' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Attr::empty().to_string(), "--------");
        assert_eq!((Attr::CODE | Attr::LOCAL).to_string(), "c------l");
    }

    #[test]
    fn test_queries() {
        let attr = Attr::BRANCH_TARGET | Attr::LOCAL;
        assert!(attr.is_branch_target());
        assert!(attr.is_local());
        assert!(!attr.is_code());
    }
}
