// Tue Jan 13 2026 - Alex

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    LeftHigh,
    Balanced,
    RightHigh,
}

impl Balance {
    pub fn letter(&self) -> char {
        match self {
            Balance::LeftHigh => 'L',
            Balance::Balanced => 'B',
            Balance::RightHigh => 'R',
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) record: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) balance: Balance,
}

impl<T> Node<T> {
    pub(crate) fn leaf(record: T) -> Box<Self> {
        Box::new(Self {
            record,
            left: None,
            right: None,
            balance: Balance::Balanced,
        })
    }
}

pub(crate) fn height<T>(link: &Link<T>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
    }
}

// Restores a node whose left subtree is two levels taller than its right.
// Returns the new subtree root and whether the subtree got shorter.
pub(crate) fn fix_left_heavy<T>(mut p: Box<Node<T>>) -> (Box<Node<T>>, bool) {
    let Some(mut c) = p.left.take() else {
        return (p, false);
    };

    match c.balance {
        Balance::LeftHigh => {
            p.left = c.right.take();
            p.balance = Balance::Balanced;
            c.right = Some(p);
            c.balance = Balance::Balanced;
            (c, true)
        }
        // Only reachable from delete.
        Balance::Balanced => {
            p.left = c.right.take();
            p.balance = Balance::LeftHigh;
            c.right = Some(p);
            c.balance = Balance::RightHigh;
            (c, false)
        }
        Balance::RightHigh => {
            let Some(mut g) = c.right.take() else {
                p.left = Some(c);
                return (p, false);
            };
            c.right = g.left.take();
            p.left = g.right.take();
            match g.balance {
                Balance::LeftHigh => {
                    c.balance = Balance::Balanced;
                    p.balance = Balance::RightHigh;
                }
                Balance::Balanced => {
                    c.balance = Balance::Balanced;
                    p.balance = Balance::Balanced;
                }
                Balance::RightHigh => {
                    c.balance = Balance::LeftHigh;
                    p.balance = Balance::Balanced;
                }
            }
            g.left = Some(c);
            g.right = Some(p);
            g.balance = Balance::Balanced;
            (g, true)
        }
    }
}

pub(crate) fn fix_right_heavy<T>(mut p: Box<Node<T>>) -> (Box<Node<T>>, bool) {
    let Some(mut c) = p.right.take() else {
        return (p, false);
    };

    match c.balance {
        Balance::RightHigh => {
            p.right = c.left.take();
            p.balance = Balance::Balanced;
            c.left = Some(p);
            c.balance = Balance::Balanced;
            (c, true)
        }
        Balance::Balanced => {
            p.right = c.left.take();
            p.balance = Balance::RightHigh;
            c.left = Some(p);
            c.balance = Balance::LeftHigh;
            (c, false)
        }
        Balance::LeftHigh => {
            let Some(mut g) = c.left.take() else {
                p.right = Some(c);
                return (p, false);
            };
            c.left = g.right.take();
            p.right = g.left.take();
            match g.balance {
                Balance::RightHigh => {
                    c.balance = Balance::Balanced;
                    p.balance = Balance::LeftHigh;
                }
                Balance::Balanced => {
                    c.balance = Balance::Balanced;
                    p.balance = Balance::Balanced;
                }
                Balance::LeftHigh => {
                    c.balance = Balance::RightHigh;
                    p.balance = Balance::Balanced;
                }
            }
            g.right = Some(c);
            g.left = Some(p);
            g.balance = Balance::Balanced;
            (g, true)
        }
    }
}

/// Left subtree grew by one level. Returns whether this subtree grew.
pub(crate) fn left_grew<T>(link: &mut Link<T>) -> bool {
    let Some(mut node) = link.take() else {
        return false;
    };
    let grew = match node.balance {
        Balance::RightHigh => {
            node.balance = Balance::Balanced;
            false
        }
        Balance::Balanced => {
            node.balance = Balance::LeftHigh;
            true
        }
        Balance::LeftHigh => {
            let (root, _) = fix_left_heavy(node);
            *link = Some(root);
            return false;
        }
    };
    *link = Some(node);
    grew
}

pub(crate) fn right_grew<T>(link: &mut Link<T>) -> bool {
    let Some(mut node) = link.take() else {
        return false;
    };
    let grew = match node.balance {
        Balance::LeftHigh => {
            node.balance = Balance::Balanced;
            false
        }
        Balance::Balanced => {
            node.balance = Balance::RightHigh;
            true
        }
        Balance::RightHigh => {
            let (root, _) = fix_right_heavy(node);
            *link = Some(root);
            return false;
        }
    };
    *link = Some(node);
    grew
}

/// Left subtree shrank by one level. Returns whether this subtree shrank.
pub(crate) fn left_shrunk<T>(link: &mut Link<T>) -> bool {
    let Some(mut node) = link.take() else {
        return false;
    };
    let shrunk = match node.balance {
        Balance::LeftHigh => {
            node.balance = Balance::Balanced;
            true
        }
        Balance::Balanced => {
            node.balance = Balance::RightHigh;
            false
        }
        Balance::RightHigh => {
            let (root, shrunk) = fix_right_heavy(node);
            *link = Some(root);
            return shrunk;
        }
    };
    *link = Some(node);
    shrunk
}

pub(crate) fn right_shrunk<T>(link: &mut Link<T>) -> bool {
    let Some(mut node) = link.take() else {
        return false;
    };
    let shrunk = match node.balance {
        Balance::RightHigh => {
            node.balance = Balance::Balanced;
            true
        }
        Balance::Balanced => {
            node.balance = Balance::LeftHigh;
            false
        }
        Balance::LeftHigh => {
            let (root, shrunk) = fix_left_heavy(node);
            *link = Some(root);
            return shrunk;
        }
    };
    *link = Some(node);
    shrunk
}
