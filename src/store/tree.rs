//! Height-balanced (AVL) binary search tree keyed by primary text
//!
//! Each parent exclusively owns its children, so rotations move boxed
//! subtrees between links instead of patching shared pointers. Entries are
//! held as `Arc<Entry>` because the word indices reference the same values.
//!
//! Keys compare with `str` ordering (byte-lexicographic). Equal keys descend
//! right, so duplicates are stored as distinct nodes.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::trace;

use crate::models::Entry;

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    entry: Arc<Entry>,
    left: Link,
    right: Link,
    /// Leaf = 1, empty link = 0
    height: usize,
}

impl Node {
    fn leaf(entry: Arc<Entry>) -> Box<Self> {
        Box::new(Self {
            entry,
            left: None,
            right: None,
            height: 1,
        })
    }

    fn key(&self) -> &str {
        self.entry.primary_text()
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

fn height(link: &Link) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Right rotation around `y`; its left child becomes the subtree root.
fn rotate_right(mut y: Box<Node>) -> Box<Node> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    trace!(pivot = y.key(), new_root = x.key(), "rotate right");
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Left rotation around `x`; its right child becomes the subtree root.
fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    trace!(pivot = x.key(), new_root = y.key(), "rotate left");
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

fn insert_at(link: Link, entry: Arc<Entry>, key: &str) -> Box<Node> {
    let Some(mut node) = link else {
        return Node::leaf(entry);
    };

    if key < node.key() {
        node.left = Some(insert_at(node.left.take(), entry, key));
    } else {
        node.right = Some(insert_at(node.right.take(), entry, key));
    }

    node.update_height();
    rebalance(node, key)
}

/// Restore the AVL bound at `node` after inserting `key` below it.
///
/// The rotation case is chosen by comparing the inserted key with the
/// heavy child's key. Ties count as "right" because that is where insert
/// routed them.
fn rebalance(mut node: Box<Node>, key: &str) -> Box<Node> {
    let balance = node.balance_factor();

    if balance > 1 {
        let went_left = node.left.as_ref().map_or(false, |left| key < left.key());
        if !went_left {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        let went_left = node.right.as_ref().map_or(false, |right| key < right.key());
        if went_left {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

/// Ordered entry store
#[derive(Debug, Default)]
pub struct BalancedTree {
    root: Link,
    len: usize,
}

impl BalancedTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, keeping the tree height-balanced
    pub fn insert(&mut self, entry: Arc<Entry>) {
        let key_holder = Arc::clone(&entry);
        let key = key_holder.primary_text();
        self.root = Some(insert_at(self.root.take(), entry, key));
        self.len += 1;
    }

    /// Single-path search for an entry with exactly this primary text
    pub fn get(&self, key: &str) -> Option<&Arc<Entry>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key()) {
                Ordering::Equal => return Some(&node.entry),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Check whether an entry with this primary text is on the search path
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All entries, ascending by primary text
    pub fn all_entries(&self) -> Vec<&Arc<Entry>> {
        self.iter().collect()
    }

    /// In-order iterator over the entries
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Number of stored entries, duplicates included
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root (0 when empty)
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Verify cached heights and the AVL bound at every node
    pub fn is_balanced(&self) -> bool {
        fn check(link: &Link) -> Option<usize> {
            let Some(node) = link else {
                return Some(0);
            };
            let left = check(&node.left)?;
            let right = check(&node.right)?;
            let actual = 1 + left.max(right);
            (left.abs_diff(right) <= 1 && node.height == actual).then_some(actual)
        }
        check(&self.root).is_some()
    }
}

impl<'a> IntoIterator for &'a BalancedTree {
    type Item = &'a Arc<Entry>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order traversal with an explicit stack of pending ancestors
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Arc<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
