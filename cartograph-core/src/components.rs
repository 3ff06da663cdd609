//! Connected-component tracking over named locations.
//!
//! The spanning forest builder processes roads in ascending length and needs
//! to know whether a road would close a cycle. [`ComponentTracker`] answers
//! that with a disjoint-set union keyed by location name, using union by size
//! and path compression.

use std::{collections::HashMap, sync::Arc};

/// Opaque identifier of a component at the time it was queried.
///
/// Identifiers are only comparable between queries with no intervening
/// [`ComponentTracker::union`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GroupId(usize);

/// Partition of locations into groups connected by accepted roads.
///
/// # Examples
/// ```
/// use cartograph_core::ComponentTracker;
///
/// let mut tracker = ComponentTracker::new();
/// assert!(tracker.union("A", "B"));
/// assert!(tracker.union("B", "C"));
/// assert!(tracker.same_group("A", "C"));
/// assert!(!tracker.union("C", "A"));
/// assert_eq!(tracker.group_count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ComponentTracker {
    slots: HashMap<Arc<str>, usize>,
    parent: Vec<usize>,
    size: Vec<usize>,
    groups: usize,
}

impl ComponentTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the group containing `vertex`, creating a singleton group on
    /// first sight.
    pub fn find_group(&mut self, vertex: &str) -> GroupId {
        let slot = self.slot(vertex);
        GroupId(self.find(slot))
    }

    /// Merges the groups containing `left` and `right`.
    ///
    /// Returns `false` when both already share a group.
    pub fn union(&mut self, left: &str, right: &str) -> bool {
        let left = self.slot(left);
        let right = self.slot(right);
        self.union_slots(left, right)
    }

    /// Returns `true` when `left` and `right` are in the same group.
    ///
    /// Unknown vertices are registered as singletons, so an unseen vertex is
    /// only in the same group as itself.
    pub fn same_group(&mut self, left: &str, right: &str) -> bool {
        self.find_group(left) == self.find_group(right)
    }

    /// Returns the number of distinct groups.
    #[must_use]
    #[rustfmt::skip]
    pub fn group_count(&self) -> usize { self.groups }

    /// Returns the number of vertices seen so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.parent.len()
    }

    pub(crate) fn slot_shared(&mut self, vertex: &Arc<str>) -> usize {
        if let Some(&slot) = self.slots.get(vertex) {
            return slot;
        }
        self.register(Arc::clone(vertex))
    }

    fn slot(&mut self, vertex: &str) -> usize {
        if let Some(&slot) = self.slots.get(vertex) {
            return slot;
        }
        self.register(Arc::from(vertex))
    }

    fn register(&mut self, vertex: Arc<str>) -> usize {
        let slot = self.parent.len();
        self.parent.push(slot);
        self.size.push(1);
        self.slots.insert(vertex, slot);
        self.groups = self.groups.saturating_add(1);
        slot
    }

    fn find(&mut self, mut slot: usize) -> usize {
        let mut root = slot;
        while let Some(&parent) = self.parent.get(root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        while let Some(parent) = self.parent.get_mut(slot) {
            if *parent == root {
                break;
            }
            let next = std::mem::replace(parent, root);
            slot = next;
        }

        root
    }

    pub(crate) fn union_slots(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }

        let left_size = self.size.get(left).copied().unwrap_or(1);
        let right_size = self.size.get(right).copied().unwrap_or(1);
        if left_size < right_size {
            std::mem::swap(&mut left, &mut right);
        }

        if let Some(parent) = self.parent.get_mut(right) {
            *parent = left;
        }
        if let Some(size) = self.size.get_mut(left) {
            *size = left_size.saturating_add(right_size);
        }
        self.groups = self.groups.saturating_sub(1);
        true
    }
}
