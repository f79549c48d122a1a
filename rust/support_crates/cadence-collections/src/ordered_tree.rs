//! Unbalanced binary search tree ordered by a caller-supplied comparator.
//!
//! The tree does not remember its comparator. Every ordered operation takes one, and
//! the caller is responsible for passing the comparator that shaped the tree. Ties
//! descend to the left on insertion, and searches stop at the first equal node met on
//! the way down, so among values that compare equal the one closest to the root wins.
//!
//! Height is whatever the insertion order produces; only [`OrderedTree::from_sorted`]
//! guarantees a minimal height. Descent, traversal and drop are iterative, so even a
//! tree degenerated into a list of any length can be used and dropped safely.

use std::{cmp::Ordering, fmt, mem};

use cadence_common::{Result, error::Error};

use crate::{comparator::Comparator, queue::Queue};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Node<T>> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

/// Comparator-ordered binary tree owning its values.
///
/// # Examples
///
/// ```
/// use cadence_collections::{OrderedTree, comparator::NaturalOrder};
///
/// let tree = OrderedTree::from_sorted(vec![1, 2, 3, 4, 5], &NaturalOrder).unwrap();
/// assert_eq!(tree.height(), 2);
/// assert_eq!(*tree.find_min().unwrap(), 1);
/// assert_eq!(*tree.find_max().unwrap(), 5);
/// assert_eq!(tree.in_order(), vec![&1, &2, &3, &4, &5]);
/// ```
pub struct OrderedTree<T> {
    root: Link<T>,
}

impl<T> OrderedTree<T> {
    /// Creates an empty tree.
    pub fn new() -> OrderedTree<T> {
        OrderedTree { root: None }
    }

    /// Builds a tree of minimal height from `values`, which must already be sorted
    /// in non-decreasing order under `cmp`.
    ///
    /// The middle element of each range becomes the root of the corresponding
    /// subtree, which yields a height of `ceil(log2(n + 1)) - 1`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-precondition error when `values` is not sorted.
    pub fn from_sorted(values: Vec<T>, cmp: &impl Comparator<T>) -> Result<OrderedTree<T>> {
        if !Self::is_sorted(&values, cmp) {
            return Err(Error::invalid_precondition(
                "values",
                "input of the minimal-height constructor is not sorted",
            ));
        }
        let mut slots: Vec<Option<T>> = values.into_iter().map(Some).collect();
        let len = slots.len();
        Ok(OrderedTree {
            root: Self::build_balanced(&mut slots, 0, len),
        })
    }

    /// Returns `true` when `values` is sorted in non-decreasing order under `cmp`.
    pub fn is_sorted(values: &[T], cmp: &impl Comparator<T>) -> bool {
        values
            .windows(2)
            .all(|pair| cmp.compare(&pair[0], &pair[1]) != Ordering::Greater)
    }

    /// Builds the subtree for the half-open range `begin..end`. Recursion depth is
    /// logarithmic in the range length.
    fn build_balanced(slots: &mut [Option<T>], begin: usize, end: usize) -> Link<T> {
        if begin >= end {
            return None;
        }
        let mid = begin + (end - 1 - begin) / 2;
        let value = slots[mid].take()?;
        let left = Self::build_balanced(slots, begin, mid);
        let right = Self::build_balanced(slots, mid + 1, end);
        Some(Box::new(Node { value, left, right }))
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of values in the tree, counted by walking every node.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        count
    }

    /// Height of the tree: `-1` when empty, `0` for a single node, otherwise one
    /// more than the height of the taller subtree. Computed level by level.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        height
    }

    /// Returns the value stored in the root.
    ///
    /// # Errors
    ///
    /// Returns an empty-container error when the tree is empty.
    pub fn root(&self) -> Result<&T> {
        self.root
            .as_deref()
            .map(|node| &node.value)
            .ok_or_else(|| Error::empty_container("root"))
    }

    /// Returns the leftmost value.
    ///
    /// # Errors
    ///
    /// Returns an empty-container error when the tree is empty.
    pub fn find_min(&self) -> Result<&T> {
        let mut node = self
            .root
            .as_deref()
            .ok_or_else(|| Error::empty_container("find_min"))?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// Returns the rightmost value.
    ///
    /// # Errors
    ///
    /// Returns an empty-container error when the tree is empty.
    pub fn find_max(&self) -> Result<&T> {
        let mut node = self
            .root
            .as_deref()
            .ok_or_else(|| Error::empty_container("find_max"))?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Inserts `value`. Values comparing equal to a node descend into its left subtree.
    pub fn insert(&mut self, value: T, cmp: &impl Comparator<T>) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if cmp.compare(&value, &node.value) == Ordering::Greater {
                &mut node.right
            } else {
                &mut node.left
            };
        }
        *link = Some(Node::leaf(value));
    }

    /// Returns the first value found equal to `value` while descending from the root.
    pub fn search(&self, value: &T, cmp: &impl Comparator<T>) -> Option<&T> {
        self.search_by(value, |key, stored| cmp.compare(key, stored))
    }

    /// Descends by comparing `key` against stored values with `compare`, which must
    /// agree with the ordering that shaped the tree.
    pub fn search_by<K: ?Sized>(
        &self,
        key: &K,
        compare: impl Fn(&K, &T) -> Ordering,
    ) -> Option<&T> {
        let mut link = &self.root;
        while let Some(node) = link.as_deref() {
            link = match compare(key, &node.value) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
            };
        }
        None
    }

    /// Removes the first value found equal to `value` and returns it.
    ///
    /// A node with two children takes over the minimum of its right subtree, and that
    /// minimum node is detached in its place. Returns `Ok(None)` and leaves the tree
    /// untouched when no value is equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns an empty-container error when the tree is empty.
    pub fn remove(&mut self, value: &T, cmp: &impl Comparator<T>) -> Result<Option<T>> {
        self.remove_by(value, |key, stored| cmp.compare(key, stored))
    }

    /// Key-based form of [`OrderedTree::remove`].
    ///
    /// # Errors
    ///
    /// Returns an empty-container error when the tree is empty.
    pub fn remove_by<K: ?Sized>(
        &mut self,
        key: &K,
        compare: impl Fn(&K, &T) -> Ordering,
    ) -> Result<Option<T>> {
        if self.root.is_none() {
            return Err(Error::empty_container("remove"));
        }

        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                None => return Ok(None),
                Some(node) => compare(key, &node.value),
            };
            if ordering == Ordering::Equal {
                break;
            }
            let Some(node) = link else {
                return Ok(None);
            };
            link = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let Some(mut target) = link.take() else {
            return Ok(None);
        };
        match (target.left.take(), target.right.take()) {
            (None, None) => Ok(Some(target.value)),
            (Some(child), None) | (None, Some(child)) => {
                *link = Some(child);
                Ok(Some(target.value))
            }
            (Some(left), Some(right)) => {
                let (successor, rest) = Self::detach_min(right);
                let removed = mem::replace(&mut target.value, successor);
                target.left = Some(left);
                target.right = rest;
                *link = Some(target);
                Ok(Some(removed))
            }
        }
    }

    /// Splits the leftmost node off `subtree`. Returns its value and the rest of the
    /// subtree, with the node's right child spliced into its place.
    fn detach_min(subtree: Box<Node<T>>) -> (T, Link<T>) {
        let mut spine = Vec::new();
        let mut min = subtree;
        while let Some(left) = min.left.take() {
            spine.push(min);
            min = left;
        }
        let Node { value, right, .. } = *min;
        let mut rest = right;
        while let Some(mut parent) = spine.pop() {
            parent.left = rest;
            rest = Some(parent);
        }
        (value, rest)
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        Self::dismantle(self.root.take());
    }

    /// Values in pre-order (node, left, right).
    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.value);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    /// Values in in-order (left, node, right). This is the only traversal whose
    /// output is sorted under the comparator that shaped the tree.
    pub fn in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Values in post-order (left, right, node).
    pub fn post_order(&self) -> Vec<&T> {
        // Reverse of a node-right-left pre-order walk.
        let mut out = Vec::new();
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.value);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        out.reverse();
        out
    }

    /// Values level by level from the root down, left to right within a level.
    ///
    /// Both children of every visited node are enqueued, absent ones included, and
    /// absent entries are skipped when dequeued.
    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        let mut queue: Queue<Option<&Node<T>>> = Queue::new();
        queue.enqueue(self.root.as_deref());
        while let Ok(entry) = queue.dequeue() {
            if let Some(node) = entry {
                out.push(&node.value);
                queue.enqueue(node.left.as_deref());
                queue.enqueue(node.right.as_deref());
            }
        }
        out
    }

    /// Borrowing in-order iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Creates an independent tree holding clones of every value, re-inserted in
    /// pre-order under `cmp`. The copy takes whatever shape `cmp` gives it, which
    /// can differ from the shape of `self`.
    pub fn copy_with(&self, cmp: &impl Comparator<T>) -> OrderedTree<T>
    where
        T: Clone,
    {
        let mut copy = OrderedTree::new();
        for value in self.pre_order() {
            copy.insert(value.clone(), cmp);
        }
        copy
    }

    /// Consumes the tree and returns its values in in-order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::new();
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
            out.push(node.value);
        }
        out
    }

    /// Frees a subtree without recursion.
    fn dismantle(link: Link<T>) {
        let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        Self::dismantle(self.root.take());
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over an [`OrderedTree`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}
