// Tue Jan 13 2026 - Alex

use crate::avl::iter::Iter;
use crate::avl::node::{self, Balance, Link, Node};
use crate::avl::AvlError;
use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::ControlFlow;

pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    PreOrder,
    InOrder,
    PostOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeState {
    Empty,
    NonEmpty,
}

/// Height-balanced binary search tree ordered by a caller supplied comparator.
///
/// The tree never inspects its records except through the comparator, so the
/// same record type can be indexed several ways by several trees. Records are
/// dropped by [`AvlTree::delete`] and [`AvlTree::clear`]; [`AvlTree::detach`]
/// and [`AvlTree::into_records`] hand them back instead, which is what a
/// secondary index over records owned elsewhere wants.
pub struct AvlTree<T> {
    root: Link<T>,
    comparator: Option<Comparator<T>>,
    len: usize,
}

impl<T> AvlTree<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            comparator: None,
            len: 0,
        }
    }

    pub fn with_comparator<F>(comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self {
            root: None,
            comparator: Some(Box::new(comparator)),
            len: 0,
        }
    }

    /// Installs `comparator`. On a non-empty tree the comparator is still
    /// replaced, but `ComparatorChanged` is returned since the existing
    /// order is not re-validated.
    pub fn set_comparator<F>(&mut self, comparator: F) -> Result<(), AvlError>
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        self.comparator = Some(Box::new(comparator));
        if self.root.is_some() {
            log::warn!("avl: comparator changed on a tree holding {} records", self.len);
            return Err(AvlError::ComparatorChanged);
        }
        Ok(())
    }

    pub fn has_comparator(&self) -> bool {
        self.comparator.is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn state(&self) -> TreeState {
        if self.root.is_none() {
            TreeState::Empty
        } else {
            TreeState::NonEmpty
        }
    }

    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    pub fn insert(&mut self, record: T) -> Result<(), AvlError> {
        let cmp = self.comparator.as_deref().ok_or(AvlError::NoComparator)?;
        insert_node(&mut self.root, record, cmp)?;
        self.len += 1;
        Ok(())
    }

    /// Removes the record equal to `probe` and drops it.
    pub fn delete(&mut self, probe: &T) -> Result<(), AvlError> {
        self.detach(probe).map(drop)
    }

    /// Removes the record equal to `probe` and returns it to the caller.
    pub fn detach(&mut self, probe: &T) -> Result<T, AvlError> {
        let cmp = self.comparator.as_deref().ok_or(AvlError::NoComparator)?;
        let (record, _) = remove_node(&mut self.root, &|rec: &T| cmp(rec, probe))
            .ok_or(AvlError::NotFound)?;
        self.len -= 1;
        Ok(record)
    }

    pub fn search(&self, probe: &T) -> Result<&T, AvlError> {
        let cmp = self.comparator.as_deref().ok_or(AvlError::NoComparator)?;
        self.descend(|rec| cmp(rec, probe))
    }

    /// Binary search with a key of a different shape than `T`.
    ///
    /// `locate(record)` must report how `record` orders against the key, and
    /// must agree with the tree's comparator.
    pub fn search_by<F>(&self, locate: F) -> Result<&T, AvlError>
    where
        F: Fn(&T) -> Ordering,
    {
        if self.comparator.is_none() {
            return Err(AvlError::NoComparator);
        }
        self.descend(locate)
    }

    /// Visits the whole tree in order and returns the first record that
    /// `cmp` reports equal to `key`. The tree's own ordering is not used.
    pub fn search_linear<K, F>(&self, key: &K, cmp: F) -> Result<&T, AvlError>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> Ordering,
    {
        self.iter()
            .find(|rec| cmp(*rec, key) == Ordering::Equal)
            .ok_or(AvlError::NotFound)
    }

    /// Calls `visit` on every record in `order`. A `Break` from the visitor
    /// stops the walk and is returned as-is.
    pub fn traverse<B, F>(&self, order: TraversalOrder, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(&T) -> ControlFlow<B>,
    {
        traverse_node(&self.root, order, &mut visit)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }

    /// Tears down every node and drops every record.
    pub fn clear(&mut self) {
        // Unlinked iteratively so a degenerate drop cannot recurse deeply.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Tears down the nodes only, returning the records in order.
    pub fn into_records(mut self) -> Vec<T> {
        let mut records = Vec::with_capacity(self.len);
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        let mut current = self.root.take();

        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            let Some(mut node) = stack.pop() else {
                break;
            };
            current = node.right.take();
            records.push(node.record);
        }

        self.len = 0;
        records
    }

    /// Checks height balance, stored balance factors and comparator order.
    pub fn check_invariants(&self) -> bool {
        let balanced = check_node(&self.root).is_some();
        let ordered = match self.comparator.as_deref() {
            Some(cmp) => {
                let records: Vec<&T> = self.iter().collect();
                records.windows(2).all(|w| cmp(w[0], w[1]) == Ordering::Less)
            }
            None => self.is_empty(),
        };
        balanced && ordered && self.iter().count() == self.len
    }

    fn descend<F>(&self, locate: F) -> Result<&T, AvlError>
    where
        F: Fn(&T) -> Ordering,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match locate(&node.record) {
                Ordering::Equal => return Ok(&node.record),
                Ordering::Greater => node.left.as_deref(),
                Ordering::Less => node.right.as_deref(),
            };
        }
        Err(AvlError::NotFound)
    }
}

impl<T: fmt::Debug> AvlTree<T> {
    /// Writes the tree sideways, one node per line, indented by depth.
    pub fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "--start dump ({} records, height {})", self.len, self.height())?;
        dump_node(&self.root, 0, out)?;
        writeln!(out, "--end dump")
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for AvlTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn insert_node<T>(
    link: &mut Link<T>,
    record: T,
    cmp: &dyn Fn(&T, &T) -> Ordering,
) -> Result<bool, AvlError> {
    let Some(node) = link.as_mut() else {
        *link = Some(Node::leaf(record));
        return Ok(true);
    };

    match cmp(&record, &node.record) {
        Ordering::Equal => Err(AvlError::DuplicateKey),
        Ordering::Less => {
            let grew = insert_node(&mut node.left, record, cmp)?;
            Ok(grew && node::left_grew(link))
        }
        Ordering::Greater => {
            let grew = insert_node(&mut node.right, record, cmp)?;
            Ok(grew && node::right_grew(link))
        }
    }
}

// `locate(record)` orders the record against the key being removed.
fn remove_node<T>(link: &mut Link<T>, locate: &dyn Fn(&T) -> Ordering) -> Option<(T, bool)> {
    let node = link.as_mut()?;

    match locate(&node.record) {
        Ordering::Greater => {
            let (record, shrunk) = remove_node(&mut node.left, locate)?;
            Some((record, shrunk && node::left_shrunk(link)))
        }
        Ordering::Less => {
            let (record, shrunk) = remove_node(&mut node.right, locate)?;
            Some((record, shrunk && node::right_shrunk(link)))
        }
        Ordering::Equal => unlink(link),
    }
}

fn unlink<T>(link: &mut Link<T>) -> Option<(T, bool)> {
    let mut node = link.take()?;

    match (node.left.is_some(), node.right.is_some()) {
        (false, _) => {
            *link = node.right.take();
            Some((node.record, true))
        }
        (true, false) => {
            *link = node.left.take();
            Some((node.record, true))
        }
        (true, true) => {
            // Pull the neighbour out of the taller side so the swap itself
            // is least likely to need a rotation.
            let from_left = node.balance == Balance::LeftHigh;
            let (neighbour, shrunk) = if from_left {
                remove_max(&mut node.left)?
            } else {
                remove_min(&mut node.right)?
            };
            let record = mem::replace(&mut node.record, neighbour);
            *link = Some(node);
            let shrunk = shrunk
                && if from_left {
                    node::left_shrunk(link)
                } else {
                    node::right_shrunk(link)
                };
            Some((record, shrunk))
        }
    }
}

fn remove_max<T>(link: &mut Link<T>) -> Option<(T, bool)> {
    let node = link.as_mut()?;
    if node.right.is_some() {
        let (record, shrunk) = remove_max(&mut node.right)?;
        return Some((record, shrunk && node::right_shrunk(link)));
    }
    let mut node = link.take()?;
    *link = node.left.take();
    Some((node.record, true))
}

fn remove_min<T>(link: &mut Link<T>) -> Option<(T, bool)> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        let (record, shrunk) = remove_min(&mut node.left)?;
        return Some((record, shrunk && node::left_shrunk(link)));
    }
    let mut node = link.take()?;
    *link = node.right.take();
    Some((node.record, true))
}

fn traverse_node<T, B, F>(link: &Link<T>, order: TraversalOrder, visit: &mut F) -> ControlFlow<B>
where
    F: FnMut(&T) -> ControlFlow<B>,
{
    let Some(node) = link else {
        return ControlFlow::Continue(());
    };

    match order {
        TraversalOrder::PreOrder => {
            visit(&node.record)?;
            traverse_node(&node.left, order, visit)?;
            traverse_node(&node.right, order, visit)
        }
        TraversalOrder::InOrder => {
            traverse_node(&node.left, order, visit)?;
            visit(&node.record)?;
            traverse_node(&node.right, order, visit)
        }
        TraversalOrder::PostOrder => {
            traverse_node(&node.left, order, visit)?;
            traverse_node(&node.right, order, visit)?;
            visit(&node.record)
        }
    }
}

// Returns the subtree height, or None if any node is out of balance or
// carries a balance factor that disagrees with its subtrees.
fn check_node<T>(link: &Link<T>) -> Option<usize> {
    let Some(node) = link else {
        return Some(0);
    };
    let left = check_node(&node.left)?;
    let right = check_node(&node.right)?;
    let expected = match left.cmp(&right) {
        Ordering::Greater => Balance::LeftHigh,
        Ordering::Equal => Balance::Balanced,
        Ordering::Less => Balance::RightHigh,
    };
    if left.abs_diff(right) > 1 || node.balance != expected {
        return None;
    }
    Some(1 + left.max(right))
}

fn dump_node<T: fmt::Debug, W: fmt::Write>(link: &Link<T>, depth: usize, out: &mut W) -> fmt::Result {
    let Some(node) = link else {
        return Ok(());
    };
    dump_node(&node.left, depth + 1, out)?;
    writeln!(out, "{}({}) {:?}", "  .".repeat(depth), node.balance, node.record)?;
    dump_node(&node.right, depth + 1, out)
}
