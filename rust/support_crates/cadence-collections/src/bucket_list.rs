//! Doubly linked list backing a single [`ChainedMap`](crate::ChainedMap) bucket.
//!
//! Entries live in a slot arena and link to each other by slot index, so the list
//! needs no raw pointers and no shared ownership. Two addressing modes exist:
//!
//! - A single movable **cursor**, positioned by index and advanced or retreated one
//!   entry at a time. Moving it past either end is an out-of-bounds error.
//! - Opaque [`EntryHandle`]s returned by [`BucketList::find_handle`]. A handle carries
//!   the generation of its slot, so it stops resolving once its entry is removed,
//!   even if the slot is reused later.

use std::fmt;

use cadence_common::{Result, error::Error};

/// Opaque reference to one entry of a [`BucketList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryHandle {
    slot: u32,
    generation: u32,
}

#[derive(Clone)]
struct Slot<T> {
    generation: u32,
    entry: Option<Entry<T>>,
}

#[derive(Clone)]
struct Entry<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly linked list with a cursor and handle-based removal.
#[derive(Clone)]
pub struct BucketList<T> {
    slots: Vec<Slot<T>>,
    /// Vacant slot indices available for reuse.
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    /// Slot index of the cursor entry; `None` means the cursor is off end.
    cursor: Option<usize>,
}

impl<T> BucketList<T> {
    pub fn new() -> BucketList<T> {
        BucketList {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            cursor: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first value.
    ///
    /// # Errors
    ///
    /// Returns an empty-container error when the list is empty.
    pub fn first(&self) -> Result<&T> {
        self.head
            .map(|slot| &self.entry(slot).value)
            .ok_or_else(|| Error::empty_container("first"))
    }

    /// Returns the last value.
    ///
    /// # Errors
    ///
    /// Returns an empty-container error when the list is empty.
    pub fn last(&self) -> Result<&T> {
        self.tail
            .map(|slot| &self.entry(slot).value)
            .ok_or_else(|| Error::empty_container("last"))
    }

    pub fn push_front(&mut self, value: T) {
        let slot = self.allocate(value, None, self.head);
        match self.head {
            Some(head) => self.entry_mut(head).prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
    }

    pub fn push_back(&mut self, value: T) {
        let slot = self.allocate(value, self.tail, None);
        match self.tail {
            Some(tail) => self.entry_mut(tail).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    /// Removes and returns the first value.
    ///
    /// # Errors
    ///
    /// Returns an empty-container error when the list is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        let head = self
            .head
            .ok_or_else(|| Error::empty_container("pop_front"))?;
        Ok(self.unlink(head))
    }

    /// Removes and returns the last value.
    ///
    /// # Errors
    ///
    /// Returns an empty-container error when the list is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        let tail = self
            .tail
            .ok_or_else(|| Error::empty_container("pop_back"))?;
        Ok(self.unlink(tail))
    }

    /// Returns `true` when the cursor does not reference any entry.
    pub fn is_off_end(&self) -> bool {
        self.cursor.is_none()
    }

    /// Places the cursor on the first entry (off end for an empty list).
    pub fn reset_cursor(&mut self) {
        self.cursor = self.head;
    }

    /// Moves the cursor to the next entry. Advancing from the last entry leaves the
    /// cursor off end.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error when the cursor is already off end.
    pub fn advance_cursor(&mut self) -> Result<()> {
        let slot = self.cursor_slot("advance_cursor")?;
        self.cursor = self.entry(slot).next;
        Ok(())
    }

    /// Moves the cursor to the previous entry. Retreating from the first entry leaves
    /// the cursor off end.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error when the cursor is already off end.
    pub fn retreat_cursor(&mut self) -> Result<()> {
        let slot = self.cursor_slot("retreat_cursor")?;
        self.cursor = self.entry(slot).prev;
        Ok(())
    }

    /// Places the cursor on the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error when `index >= len`; the cursor is left as is.
    pub fn seek(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::out_of_bounds("seek", index, self.len));
        }
        self.cursor = self.slot_at(index);
        Ok(())
    }

    /// Returns the value under the cursor.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error when the cursor is off end.
    pub fn current(&self) -> Result<&T> {
        let slot = self.cursor_slot("current")?;
        Ok(&self.entry(slot).value)
    }

    /// Inserts `value` right after the cursor entry. The cursor does not move.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error when the cursor is off end.
    pub fn insert_after_cursor(&mut self, value: T) -> Result<()> {
        let slot = self.cursor_slot("insert_after_cursor")?;
        let next = self.entry(slot).next;
        let inserted = self.allocate(value, Some(slot), next);
        self.entry_mut(slot).next = Some(inserted);
        match next {
            Some(next) => self.entry_mut(next).prev = Some(inserted),
            None => self.tail = Some(inserted),
        }
        Ok(())
    }

    /// Removes and returns the value under the cursor; the cursor ends up off end.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error when the cursor is off end.
    pub fn remove_at_cursor(&mut self) -> Result<T> {
        let slot = self.cursor_slot("remove_at_cursor")?;
        Ok(self.unlink(slot))
    }

    /// Returns the position of the first entry equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Returns a handle to the first entry matching `value`.
    pub fn find_handle(&self, value: &T) -> Option<EntryHandle>
    where
        T: PartialEq,
    {
        self.find_handle_by(|v| v == value)
    }

    /// Returns a handle to the first entry satisfying `predicate`.
    pub fn find_handle_by(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<EntryHandle> {
        self.slot_iter()
            .find(|&slot| predicate(&self.entry(slot).value))
            .map(|slot| EntryHandle {
                slot: slot as u32,
                generation: self.slots[slot].generation,
            })
    }

    /// Resolves `handle`, or `None` when its entry has been removed.
    pub fn get(&self, handle: EntryHandle) -> Option<&T> {
        self.resolve(handle).map(|slot| &self.entry(slot).value)
    }

    /// Removes the entry referenced by `handle`.
    ///
    /// Returns `None` when the handle is stale. If the cursor referenced the removed
    /// entry it ends up off end.
    pub fn remove(&mut self, handle: EntryHandle) -> Option<T> {
        let slot = self.resolve(handle)?;
        Some(self.unlink(slot))
    }

    /// Removes every entry. Handles issued before the call stop resolving.
    pub fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.entry.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index);
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.cursor = None;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    fn slot_iter(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.head, |&slot| self.entry(slot).next)
    }

    fn slot_at(&self, index: usize) -> Option<usize> {
        self.slot_iter().nth(index)
    }

    fn cursor_slot(&self, operation: &str) -> Result<usize> {
        self.cursor
            .ok_or_else(|| Error::out_of_bounds(operation, self.len, self.len))
    }

    fn resolve(&self, handle: EntryHandle) -> Option<usize> {
        let slot = handle.slot as usize;
        self.slots
            .get(slot)
            .filter(|s| s.generation == handle.generation && s.entry.is_some())
            .map(|_| slot)
    }

    fn allocate(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let entry = Entry { value, prev, next };
        self.len += 1;
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot].entry = Some(entry);
                slot
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(entry),
                });
                self.slots.len() - 1
            }
        }
    }

    /// Detaches the entry in `slot` from its neighbours and releases the slot.
    fn unlink(&mut self, slot: usize) -> T {
        let Slot { generation, entry } = &mut self.slots[slot];
        let entry = entry.take().expect("linked slot must be occupied");
        *generation = generation.wrapping_add(1);
        self.free.push(slot);
        self.len -= 1;

        match entry.prev {
            Some(prev) => self.entry_mut(prev).next = entry.next,
            None => self.head = entry.next,
        }
        match entry.next {
            Some(next) => self.entry_mut(next).prev = entry.prev,
            None => self.tail = entry.prev,
        }
        if self.cursor == Some(slot) {
            self.cursor = None;
        }
        entry.value
    }

    fn entry(&self, slot: usize) -> &Entry<T> {
        self.slots[slot]
            .entry
            .as_ref()
            .expect("linked slot must be occupied")
    }

    fn entry_mut(&mut self, slot: usize) -> &mut Entry<T> {
        self.slots[slot]
            .entry
            .as_mut()
            .expect("linked slot must be occupied")
    }
}

impl<T> Default for BucketList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for BucketList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BucketList<T> {}

impl<T: fmt::Debug> fmt::Debug for BucketList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for BucketList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = BucketList::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a BucketList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over a [`BucketList`].
pub struct Iter<'a, T> {
    list: &'a BucketList<T>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.next?;
        let entry = self.list.entry(slot);
        self.next = entry.next;
        self.remaining -= 1;
        Some(&entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
