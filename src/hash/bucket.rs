//! # Bucket Collision Chains
//!
//! The singly linked list used as the hash index's per-bucket collision
//! chain. The hash function in [`super`] is deliberately collision-prone for
//! short keys; this list is what absorbs those collisions.
//!
//! A singly linked list is sufficient here: chain lookup is unordered
//! equality on the key, so position within the chain carries no meaning.
//! Entries are appended so that a bucket dump shows arrival order, but
//! nothing relies on that.
//!
//! Each node exclusively owns its successor through `Option<Box<Node>>`;
//! dropping the list drops the whole chain. Chains stay short (single digits
//! even on pathological input), so recursion-free iterative drops are not
//! needed.

use crate::record::Keyed;

struct BucketNode<E> {
    entry: E,
    next: Option<Box<BucketNode<E>>>,
}

/// Singly linked collision chain owning its entries.
pub struct BucketList<E> {
    head: Option<Box<BucketNode<E>>>,
    len: usize,
}

impl<E> Default for BucketList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> BucketList<E> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends at the tail, preserving arrival order for bucket dumps.
    pub fn push_back(&mut self, entry: E) {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        *cur = Some(Box::new(BucketNode { entry, next: None }));
        self.len += 1;
    }

    /// Detaches and returns the head entry. Used by the rehash drain.
    pub fn pop_front(&mut self) -> Option<E> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.entry)
    }

    /// Entry at chain position `i`, head first.
    pub fn get(&self, i: usize) -> Option<&E> {
        self.iter().nth(i)
    }

    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<E: Keyed> BucketList<E> {
    /// Linear scan for an equal-key entry.
    pub fn find(&self, key: &str) -> Option<&E> {
        self.iter().find(|entry| entry.key() == key)
    }

    /// Unlinks and returns the first entry matching `key`.
    pub fn remove(&mut self, key: &str) -> Option<E> {
        let mut cur = &mut self.head;
        while cur.is_some() {
            if cur.as_ref()?.entry.key() == key {
                let node = cur.take()?;
                *cur = node.next;
                self.len -= 1;
                return Some(node.entry);
            }
            cur = &mut cur.as_mut()?.next;
        }
        None
    }
}

/// Forward traversal over a chain.
pub struct Iter<'a, E> {
    next: Option<&'a BucketNode<E>>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.entry)
    }
}
