//! # Ordered Tree Index
//!
//! An unbalanced binary search tree over string-keyed entries. This is the
//! ordered half of coindb's index pair: the primary tree keys coins by name,
//! the secondary tree keys them by algorithm.
//!
//! ## Shape
//!
//! No rebalancing is performed. Tree shape is determined purely by insertion
//! order, so adversarial (sorted) input degrades to a linked list. That is a
//! deliberate trade-off, not a defect: the store targets small datasets and
//! callers that care about depth can shuffle their input before loading.
//!
//! ## Duplicate Keys
//!
//! Inserting an entry whose key is already present never fails. The first
//! entry for a key becomes the node's *representative*; later entries with
//! the same key are chained on that node in arrival order:
//!
//! ```text
//!            [SHA256]──chain──> [Litecoin] -> [Peercoin]
//!            /      \
//!       [PoS]      [Scrypt]
//! ```
//!
//! This is what makes the same structure usable as a one-to-many secondary
//! index: `get_all("SHA256")` visits the representative and every chained
//! entry, in the order they arrived.
//!
//! ## Removal
//!
//! [`OrderedTree::remove`] takes out the representative. When the node still
//! carries chained duplicates, the first of them is promoted in place and the
//! tree structure is untouched. Only when the chain is empty does structural
//! deletion happen: leaves are dropped, single-child nodes spliced, and
//! two-child nodes replaced by their in-order successor (the leftmost node of
//! the right subtree), which brings its own duplicate chain along.
//!
//! ## Ownership
//!
//! Every node exclusively owns its children through `Option<Box<Node>>`;
//! dropping a subtree drops everything beneath it. Deep trees built from
//! sorted input can in principle overflow the stack on drop, which is
//! acceptable at the dataset sizes this store targets.
//!
//! ## Failure Semantics
//!
//! Lookups and removals on absent keys return `None`/`false`; nothing in
//! this module panics on user input.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::mem;

use smallvec::SmallVec;

use crate::record::Keyed;

struct Node<E> {
    entry: E,
    /// Same-key entries chained off the representative, in arrival order.
    /// Two inline slots cover the common "a few coins share an algorithm"
    /// case without a heap allocation.
    dupes: SmallVec<[E; 2]>,
    left: Option<Box<Node<E>>>,
    right: Option<Box<Node<E>>>,
}

impl<E> Node<E> {
    fn new(entry: E) -> Self {
        Self {
            entry,
            dupes: SmallVec::new(),
            left: None,
            right: None,
        }
    }
}

/// Unbalanced binary search tree with duplicate-key chaining.
pub struct OrderedTree<E: Keyed> {
    root: Option<Box<Node<E>>>,
    len: usize,
}

impl<E: Keyed> Default for OrderedTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Keyed> OrderedTree<E> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of stored entries, chained duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Places `entry` by key comparison. An equal key chains the entry on the
    /// existing node instead of rejecting it.
    pub fn insert(&mut self, entry: E) {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            match entry.key().cmp(node.entry.key()) {
                Ordering::Less => cur = &mut node.left,
                Ordering::Greater => cur = &mut node.right,
                Ordering::Equal => {
                    node.dupes.push(entry);
                    self.len += 1;
                    return;
                }
            }
        }
        *cur = Some(Box::new(Node::new(entry)));
        self.len += 1;
    }

    /// Representative entry for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&E> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(node.entry.key()) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(&node.entry),
            }
        }
        None
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Visits every entry stored under `key`, representative first, then
    /// chained duplicates in arrival order. Returns `false` when the key is
    /// absent.
    pub fn get_all<F: FnMut(&E)>(&self, key: &str, mut visit: F) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(node.entry.key()) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => {
                    visit(&node.entry);
                    for dupe in &node.dupes {
                        visit(dupe);
                    }
                    return true;
                }
            }
        }
        false
    }

    /// Removes and returns the representative entry for `key`. A chained
    /// duplicate, if any, is promoted in place; otherwise the node is
    /// structurally deleted.
    pub fn remove(&mut self, key: &str) -> Option<E> {
        let removed = Self::remove_in(&mut self.root, key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Removes the one entry under `key` (representative or chained) matched
    /// by `pred`. Needed by the secondary index, where many records share a
    /// key and only one of them is being deleted.
    pub fn remove_entry<P: Fn(&E) -> bool>(&mut self, key: &str, pred: P) -> Option<E> {
        let removed = Self::remove_entry_in(&mut self.root, key, &pred);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Left-root-right traversal: entries in ascending key order.
    pub fn in_order<F: FnMut(&E)>(&self, mut visit: F) {
        Self::walk_in_order(&self.root, &mut visit);
    }

    /// Root-left-right traversal.
    pub fn pre_order<F: FnMut(&E)>(&self, mut visit: F) {
        Self::walk_pre_order(&self.root, &mut visit);
    }

    /// Level-by-level traversal using an explicit queue.
    pub fn breadth<F: FnMut(&E)>(&self, mut visit: F) {
        let mut queue = VecDeque::new();
        if let Some(root) = &self.root {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            visit(&node.entry);
            for dupe in &node.dupes {
                visit(dupe);
            }
            if let Some(left) = &node.left {
                queue.push_back(left);
            }
            if let Some(right) = &node.right {
                queue.push_back(right);
            }
        }
    }

    fn walk_in_order<F: FnMut(&E)>(node: &Option<Box<Node<E>>>, visit: &mut F) {
        if let Some(node) = node {
            Self::walk_in_order(&node.left, visit);
            visit(&node.entry);
            for dupe in &node.dupes {
                visit(dupe);
            }
            Self::walk_in_order(&node.right, visit);
        }
    }

    fn walk_pre_order<F: FnMut(&E)>(node: &Option<Box<Node<E>>>, visit: &mut F) {
        if let Some(node) = node {
            visit(&node.entry);
            for dupe in &node.dupes {
                visit(dupe);
            }
            Self::walk_pre_order(&node.left, visit);
            Self::walk_pre_order(&node.right, visit);
        }
    }

    fn remove_in(slot: &mut Option<Box<Node<E>>>, key: &str) -> Option<E> {
        let ord = key.cmp(slot.as_ref()?.entry.key());
        match ord {
            Ordering::Less => Self::remove_in(&mut slot.as_mut()?.left, key),
            Ordering::Greater => Self::remove_in(&mut slot.as_mut()?.right, key),
            Ordering::Equal => {
                let node = slot.as_mut()?;
                if !node.dupes.is_empty() {
                    let promoted = node.dupes.remove(0);
                    return Some(mem::replace(&mut node.entry, promoted));
                }
                Self::unlink(slot)
            }
        }
    }

    fn remove_entry_in<P: Fn(&E) -> bool>(
        slot: &mut Option<Box<Node<E>>>,
        key: &str,
        pred: &P,
    ) -> Option<E> {
        let ord = key.cmp(slot.as_ref()?.entry.key());
        match ord {
            Ordering::Less => Self::remove_entry_in(&mut slot.as_mut()?.left, key, pred),
            Ordering::Greater => Self::remove_entry_in(&mut slot.as_mut()?.right, key, pred),
            Ordering::Equal => {
                let node = slot.as_mut()?;
                if let Some(pos) = node.dupes.iter().position(|e| pred(e)) {
                    return Some(node.dupes.remove(pos));
                }
                if !pred(&node.entry) {
                    return None;
                }
                if !node.dupes.is_empty() {
                    let promoted = node.dupes.remove(0);
                    return Some(mem::replace(&mut node.entry, promoted));
                }
                Self::unlink(slot)
            }
        }
    }

    /// Structural deletion of the node in `slot`. Precondition: the slot is
    /// occupied and its duplicate chain is empty.
    fn unlink(slot: &mut Option<Box<Node<E>>>) -> Option<E> {
        let mut node = slot.take()?;
        match (node.left.take(), node.right.take()) {
            (None, None) => {}
            (Some(child), None) | (None, Some(child)) => *slot = Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                // The successor is the leftmost node of the right subtree; it
                // keeps its own duplicate chain when it takes this position.
                if let Some(mut successor) = Self::pop_leftmost(&mut right) {
                    successor.left = Some(left);
                    successor.right = right;
                    *slot = Some(successor);
                }
            }
        }
        Some(node.entry)
    }

    fn pop_leftmost(slot: &mut Option<Box<Node<E>>>) -> Option<Box<Node<E>>> {
        match slot {
            None => None,
            Some(node) if node.left.is_some() => Self::pop_leftmost(&mut node.left),
            Some(_) => {
                let mut node = slot.take()?;
                *slot = node.right.take();
                Some(node)
            }
        }
    }
}
