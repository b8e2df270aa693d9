//! Convenience methods on slices and vectors: accessors, arithmetic aggregates, slicing helpers
//! and in-place edits.
use num_traits::{One, Zero};
use std::collections::HashSet;
use std::hash::Hash;
use std::ops::{Add, Sub};

pub trait SliceExt<T> {
    fn second(&self) -> Option<&T>;
    /// Overwrite the first element; `false` (and no change) when empty.
    fn set_first(&mut self, value: T) -> bool;
    /// Overwrite the last element; `false` (and no change) when empty.
    fn set_last(&mut self, value: T) -> bool;
    fn non_empty(&self) -> bool;

    /// Zero for an empty slice.
    fn sum_all(&self) -> T
    where
        T: Copy + Zero;
    /// One for an empty slice.
    fn prod_all(&self) -> T
    where
        T: Copy + One;
    fn cumsum(&self) -> Vec<T>
    where
        T: Copy + Zero;
    /// Pairwise sum over the shorter of the two lengths.
    fn elementwise_add(&self, other: &[T]) -> Vec<T>
    where
        T: Copy + Add<Output = T>;
    /// Pairwise difference over the shorter of the two lengths.
    fn elementwise_sub(&self, other: &[T]) -> Vec<T>
    where
        T: Copy + Sub<Output = T>;

    fn max_value(&self) -> Option<&T>
    where
        T: PartialOrd;
    fn min_value(&self) -> Option<&T>
    where
        T: PartialOrd;
    /// Index of the first maximum; incomparable values (NaN) never win.
    fn argmax(&self) -> Option<usize>
    where
        T: PartialOrd;
    /// Index of the first minimum; incomparable values (NaN) never win.
    fn argmin(&self) -> Option<usize>
    where
        T: PartialOrd;

    fn take_first(&self, n: usize) -> &[T];
    fn skip_first(&self, n: usize) -> &[T];
    fn take_last(&self, n: usize) -> &[T];

    fn count_of(&self, value: &T) -> usize
    where
        T: PartialEq;
    /// Distinct values in order of first occurrence.
    fn unique(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash;
    /// (matching, not matching), each in original order.
    fn binary_split<F>(&self, predicate: F) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
        F: FnMut(&T) -> bool;
}

fn arg_best<T: PartialOrd, F: Fn(&T, &T) -> bool>(data: &[T], better: F) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, x) in data.iter().enumerate() {
        best = match best {
            None if x.partial_cmp(x).is_some() => Some(i),
            Some(b) if better(x, &data[b]) => Some(i),
            other => other,
        };
    }
    best
}

impl<T> SliceExt<T> for [T] {
    fn second(&self) -> Option<&T> {
        self.get(1)
    }
    fn set_first(&mut self, value: T) -> bool {
        match self.first_mut() {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
    fn set_last(&mut self, value: T) -> bool {
        match self.last_mut() {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
    fn non_empty(&self) -> bool {
        !self.is_empty()
    }

    fn sum_all(&self) -> T
    where
        T: Copy + Zero,
    {
        self.iter().fold(T::zero(), |acc, &x| acc + x)
    }
    fn prod_all(&self) -> T
    where
        T: Copy + One,
    {
        self.iter().fold(T::one(), |acc, &x| acc * x)
    }
    fn cumsum(&self) -> Vec<T>
    where
        T: Copy + Zero,
    {
        let mut total = T::zero();
        self.iter()
            .map(|&x| {
                total = total + x;
                total
            })
            .collect()
    }
    fn elementwise_add(&self, other: &[T]) -> Vec<T>
    where
        T: Copy + Add<Output = T>,
    {
        self.iter().zip(other).map(|(&a, &b)| a + b).collect()
    }
    fn elementwise_sub(&self, other: &[T]) -> Vec<T>
    where
        T: Copy + Sub<Output = T>,
    {
        self.iter().zip(other).map(|(&a, &b)| a - b).collect()
    }

    fn max_value(&self) -> Option<&T>
    where
        T: PartialOrd,
    {
        self.argmax().map(|i| &self[i])
    }
    fn min_value(&self) -> Option<&T>
    where
        T: PartialOrd,
    {
        self.argmin().map(|i| &self[i])
    }
    fn argmax(&self) -> Option<usize>
    where
        T: PartialOrd,
    {
        arg_best(self, |x, best| x > best)
    }
    fn argmin(&self) -> Option<usize>
    where
        T: PartialOrd,
    {
        arg_best(self, |x, best| x < best)
    }

    fn take_first(&self, n: usize) -> &[T] {
        &self[..n.min(self.len())]
    }
    fn skip_first(&self, n: usize) -> &[T] {
        &self[n.min(self.len())..]
    }
    fn take_last(&self, n: usize) -> &[T] {
        &self[self.len().saturating_sub(n)..]
    }

    fn count_of(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|x| *x == value).count()
    }
    fn unique(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        let mut seen: HashSet<&T> = HashSet::with_capacity(self.len());
        self.iter()
            .filter(|x| seen.insert(*x))
            .cloned()
            .collect()
    }
    fn binary_split<F>(&self, mut predicate: F) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let mut matching = Vec::new();
        let mut rest = Vec::new();
        for x in self {
            if predicate(x) {
                matching.push(x.clone());
            } else {
                rest.push(x.clone());
            }
        }
        (matching, rest)
    }
}

pub trait VecExt<T> {
    /// Drop every occurrence of each of `values`; absent values are ignored.
    fn remove_values(&mut self, values: &[T])
    where
        T: PartialEq;
    /// Negative indices count from the end. Out of range is `None` and leaves the vector alone.
    fn remove_at(&mut self, index: isize) -> Option<T>;
    /// `index` past the end appends.
    fn insert_at(&mut self, value: T, index: usize);
    /// Remove `value` if present (all occurrences), otherwise push it. Returns whether it is
    /// now present.
    fn toggle(&mut self, value: T) -> bool
    where
        T: PartialEq;
}

impl<T> VecExt<T> for Vec<T> {
    fn remove_values(&mut self, values: &[T])
    where
        T: PartialEq,
    {
        self.retain(|x| !values.contains(x));
    }
    fn remove_at(&mut self, index: isize) -> Option<T> {
        let len = self.len() as isize;
        let resolved = if index < 0 { len + index } else { index };
        if resolved < 0 || resolved >= len {
            return None;
        }
        Some(self.remove(resolved as usize))
    }
    fn insert_at(&mut self, value: T, index: usize) {
        let index = index.min(self.len());
        self.insert(index, value);
    }
    fn toggle(&mut self, value: T) -> bool
    where
        T: PartialEq,
    {
        if self.contains(&value) {
            self.retain(|x| *x != value);
            false
        } else {
            self.push(value);
            true
        }
    }
}
