// Tue Jan 13 2026 - Alex

pub mod error;
pub mod iter;
pub mod node;
pub mod tree;

pub use error::AvlError;
pub use iter::Iter;
pub use node::Balance;
pub use tree::{AvlTree, Comparator, TraversalOrder, TreeState};
