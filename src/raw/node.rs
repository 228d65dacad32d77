use smallvec::SmallVec;

use super::arena::Handle;
use crate::compare::Comparator;

/// Half-limit capacity parameter. A node holds at most `2 * CAPACITY - 1`
/// keys/entries and a non-root node at least `CAPACITY - 1`. The test value
/// keeps trees shallow enough to hit every split/borrow/merge shape with a
/// handful of keys.
#[cfg(test)]
pub(crate) const CAPACITY: usize = 5;
#[cfg(not(test))]
pub(crate) const CAPACITY: usize = 32;

pub(crate) const MAX_ENTRIES: usize = 2 * CAPACITY - 1;
pub(crate) const MIN_ENTRIES: usize = CAPACITY - 1;
pub(crate) const MAX_CHILDREN: usize = 2 * CAPACITY;

#[allow(clippy::large_enum_variant)]
pub(crate) enum Node<K, V> {
    Internal(InternalNode<K>),
    Leaf(LeafNode<K, V>),
}

/// Routing-only node: `keys[i]` equals the smallest key in the subtree of
/// `children[i + 1]`, so there is always one more child than keys.
pub(crate) struct InternalNode<K> {
    keys: SmallVec<[K; MAX_ENTRIES]>,
    children: SmallVec<[Handle; MAX_CHILDREN]>,
}

/// Storage node: all key/value pairs live here, kept strictly sorted.
/// `prev`/`next` thread the leaves into a doubly linked chain in ascending
/// key order; they are back references only, never followed for ownership.
pub(crate) struct LeafNode<K, V> {
    prev: Option<Handle>,
    next: Option<Handle>,
    entries: SmallVec<[(K, V); MAX_ENTRIES]>,
}

/// Result of searching for a key in a leaf.
pub(crate) enum SearchResult {
    /// Key was found at the given index.
    Found(usize),
    /// Key was not found; index is where it would be inserted.
    NotFound(usize),
}

impl<K, V> Node<K, V> {
    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub(crate) fn as_leaf(&self) -> &LeafNode<K, V> {
        match self {
            Node::Leaf(leaf) => leaf,
            Node::Internal(_) => panic!("expected leaf node"),
        }
    }

    pub(crate) fn as_leaf_mut(&mut self) -> &mut LeafNode<K, V> {
        match self {
            Node::Leaf(leaf) => leaf,
            Node::Internal(_) => panic!("expected leaf node"),
        }
    }

    pub(crate) fn as_internal(&self) -> &InternalNode<K> {
        match self {
            Node::Internal(internal) => internal,
            Node::Leaf(_) => panic!("expected internal node"),
        }
    }

    pub(crate) fn as_internal_mut(&mut self) -> &mut InternalNode<K> {
        match self {
            Node::Internal(internal) => internal,
            Node::Leaf(_) => panic!("expected internal node"),
        }
    }

    /// Number of keys (internal) or entries (leaf) — the quantity the
    /// occupancy limits are stated in.
    pub(crate) fn key_count(&self) -> usize {
        match self {
            Node::Internal(internal) => internal.key_count(),
            Node::Leaf(leaf) => leaf.entry_count(),
        }
    }
}

impl<K> InternalNode<K> {
    pub(crate) fn new() -> Self {
        Self {
            keys: SmallVec::new(),
            children: SmallVec::new(),
        }
    }

    /// Creates a node whose only child is `child`, ready to become a new
    /// root right before its child is split.
    pub(crate) fn with_child(child: Handle) -> Self {
        let mut node = Self::new();
        node.children.push(child);
        node
    }

    pub(crate) fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn child_count(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub(crate) fn key(&self, index: usize) -> &K {
        &self.keys[index]
    }

    #[inline]
    pub(crate) fn child(&self, index: usize) -> Handle {
        self.children[index]
    }

    pub(crate) fn set_key(&mut self, index: usize, key: K) {
        self.keys[index] = key;
    }

    pub(crate) fn replace_key(&mut self, index: usize, key: K) -> K {
        core::mem::replace(&mut self.keys[index], key)
    }

    /// Index of the child to descend into for `key`. Keys equal to a
    /// separator route right, since a separator is the smallest key of the
    /// subtree to its right.
    #[inline]
    pub(crate) fn route<C>(&self, key: &K, cmp: &C) -> usize
    where
        C: Comparator<K>,
    {
        match self.keys.binary_search_by(|k| cmp.compare(k, key)) {
            Ok(index) => index + 1,
            Err(index) => index,
        }
    }

    /// Like [`route`](Self::route), but reports whether `key` matches a
    /// separator exactly: `(index, true)` on a hit, otherwise the child
    /// index to descend into.
    #[inline]
    pub(crate) fn locate<C>(&self, key: &K, cmp: &C) -> (usize, bool)
    where
        C: Comparator<K>,
    {
        match self.keys.binary_search_by(|k| cmp.compare(k, key)) {
            Ok(index) => (index, true),
            Err(index) => (index, false),
        }
    }

    /// Inserts `key` at `index` and `child` at `index + 1`, the layout a
    /// split of `children[index]` produces.
    pub(crate) fn insert_child(&mut self, index: usize, key: K, child: Handle) {
        self.keys.insert(index, key);
        self.children.insert(index + 1, child);
    }

    /// Removes `keys[index]` and `children[index + 1]`; the inverse of
    /// [`insert_child`](Self::insert_child), used when merging.
    pub(crate) fn remove_child(&mut self, index: usize) -> (K, Handle) {
        let key = self.keys.remove(index);
        let child = self.children.remove(index + 1);
        (key, child)
    }

    pub(crate) fn push_back(&mut self, key: K, child: Handle) {
        self.keys.push(key);
        self.children.push(child);
    }

    pub(crate) fn push_front(&mut self, key: K, child: Handle) {
        self.keys.insert(0, key);
        self.children.insert(0, child);
    }

    pub(crate) fn pop_back(&mut self) -> (K, Handle) {
        let key = self.keys.pop().expect("pop_back on internal node without keys");
        let child = self.children.pop().expect("pop_back on internal node without children");
        (key, child)
    }

    pub(crate) fn pop_front(&mut self) -> (K, Handle) {
        let key = self.keys.remove(0);
        let child = self.children.remove(0);
        (key, child)
    }

    /// Splits a full node: keys `[CAPACITY..]` and children `[CAPACITY..]`
    /// move to a new right sibling, and the median key (left behind at the
    /// end of this node) is removed and returned for promotion.
    pub(crate) fn split(&mut self) -> (K, InternalNode<K>) {
        debug_assert_eq!(self.keys.len(), MAX_ENTRIES);

        let mut right = InternalNode::new();
        right.keys = self.keys.drain(CAPACITY..).collect();
        right.children = self.children.drain(CAPACITY..).collect();
        let median = self.keys.pop().expect("split on internal node without keys");

        (median, right)
    }

    /// Folds a right sibling into this node, pulling the parent's separator
    /// down between the two key runs.
    pub(crate) fn absorb(&mut self, separator: K, mut right: InternalNode<K>) {
        self.keys.push(separator);
        self.keys.append(&mut right.keys);
        self.children.append(&mut right.children);
    }
}

impl<K, V> LeafNode<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            prev: None,
            next: None,
            entries: SmallVec::new(),
        }
    }

    pub(crate) fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn prev(&self) -> Option<Handle> {
        self.prev
    }

    pub(crate) fn set_prev(&mut self, prev: Option<Handle>) {
        self.prev = prev;
    }

    pub(crate) fn next(&self) -> Option<Handle> {
        self.next
    }

    pub(crate) fn set_next(&mut self, next: Option<Handle>) {
        self.next = next;
    }

    #[inline]
    pub(crate) fn key(&self, index: usize) -> &K {
        &self.entries[index].0
    }

    #[inline]
    pub(crate) fn value(&self, index: usize) -> &V {
        &self.entries[index].1
    }

    #[inline]
    pub(crate) fn value_mut(&mut self, index: usize) -> &mut V {
        &mut self.entries[index].1
    }

    #[inline]
    pub(crate) fn entry(&self, index: usize) -> (&K, &V) {
        let (key, value) = &self.entries[index];
        (key, value)
    }

    #[inline]
    pub(crate) fn search<C>(&self, key: &K, cmp: &C) -> SearchResult
    where
        C: Comparator<K>,
    {
        match self.entries.binary_search_by(|(k, _)| cmp.compare(k, key)) {
            Ok(index) => SearchResult::Found(index),
            Err(index) => SearchResult::NotFound(index),
        }
    }

    pub(crate) fn insert(&mut self, index: usize, key: K, value: V) {
        self.entries.insert(index, (key, value));
    }

    pub(crate) fn remove(&mut self, index: usize) -> (K, V) {
        self.entries.remove(index)
    }

    pub(crate) fn push_back(&mut self, entry: (K, V)) {
        self.entries.push(entry);
    }

    pub(crate) fn push_front(&mut self, entry: (K, V)) {
        self.entries.insert(0, entry);
    }

    pub(crate) fn pop_back(&mut self) -> (K, V) {
        self.entries.pop().expect("pop_back on empty leaf")
    }

    pub(crate) fn pop_front(&mut self) -> (K, V) {
        self.entries.remove(0)
    }

    /// Splits a full leaf: entries `[CAPACITY..]` move to a new right
    /// sibling. The promoted separator is a copy of the sibling's first key;
    /// the entry itself stays in the sibling. Chain links are left for the
    /// caller, which knows the handles involved.
    pub(crate) fn split(&mut self) -> (K, LeafNode<K, V>)
    where
        K: Clone,
    {
        debug_assert_eq!(self.entries.len(), MAX_ENTRIES);

        let mut right = LeafNode::new();
        right.entries = self.entries.drain(CAPACITY..).collect();
        let separator = right.entries[0].0.clone();

        (separator, right)
    }

    /// Folds a right sibling's entries into this leaf and takes over its
    /// forward link. The backward link of the leaf after `right` is the
    /// caller's to fix, as is dropping `right` itself.
    pub(crate) fn absorb(&mut self, mut right: LeafNode<K, V>) {
        self.entries.append(&mut right.entries);
        self.next = right.next;
    }

    /// Takes ownership of all entries, leaving the leaf empty.
    pub(crate) fn take_entries(&mut self) -> SmallVec<[(K, V); MAX_ENTRIES]> {
        core::mem::take(&mut self.entries)
    }
}
