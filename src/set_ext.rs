use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

pub trait SetExt<T> {
    /// Insert `value` if absent, remove it if present. Returns whether it is now a member.
    fn toggle(&mut self, value: T) -> bool;
    fn non_empty(&self) -> bool;
}

impl<T: Eq + Hash, S: BuildHasher> SetExt<T> for HashSet<T, S> {
    fn toggle(&mut self, value: T) -> bool {
        if self.remove(&value) {
            false
        } else {
            self.insert(value)
        }
    }
    fn non_empty(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Ord> SetExt<T> for BTreeSet<T> {
    fn toggle(&mut self, value: T) -> bool {
        if self.remove(&value) {
            false
        } else {
            self.insert(value)
        }
    }
    fn non_empty(&self) -> bool {
        !self.is_empty()
    }
}
