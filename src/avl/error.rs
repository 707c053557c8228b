// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvlError {
    #[error("Key already in tree")]
    DuplicateKey,
    #[error("Key not found in tree")]
    NotFound,
    #[error("No comparison function set")]
    NoComparator,
    #[error("Comparison function changed on non-empty tree")]
    ComparatorChanged,
}

impl AvlError {
    /// `ComparatorChanged` is reported but the new comparator is still installed.
    pub fn is_warning(&self) -> bool {
        matches!(self, AvlError::ComparatorChanged)
    }
}
