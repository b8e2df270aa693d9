//! Uniform random selection and permutation over slices.
//!
//! Every operation takes its random source as an argument; none of them keep state between
//! calls. Only [`SequenceSampler::shuffle`] mutates the collection.
use crate::randutil::RandomSource;
use std::collections::HashMap;
use std::iter::FusedIterator;
use std::vec;
use thiserror::Error;

/// Below this ratio of `count / len` we track displaced indices in a map instead of
/// materializing the whole index permutation.
const SPARSE_SAMPLE_RATIO: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    #[error("cannot pick from an empty collection")]
    EmptyCollection,
    #[error("cannot pick {requested} distinct elements from a collection of {available}")]
    InsufficientElements { requested: usize, available: usize },
    #[error("invalid count {count}: must not be negative")]
    InvalidArgument { count: i64 },
}

pub type Result<T> = std::result::Result<T, SampleError>;

/// Whether a multi-pick may reuse a source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleOptions {
    pub repeat: bool,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self { repeat: true }
    }
}

impl SampleOptions {
    pub fn with_repeats() -> Self {
        Self { repeat: true }
    }
    pub fn without_repeats() -> Self {
        Self { repeat: false }
    }
}

/// One element for a plain pick, or `k` elements in the order they were drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SampleResult<T> {
    Single(T),
    Sequence(Vec<T>),
}

impl<T> SampleResult<T> {
    pub fn len(&self) -> usize {
        match self {
            SampleResult::Single(_) => 1,
            SampleResult::Sequence(items) => items.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn into_vec(self) -> Vec<T> {
        match self {
            SampleResult::Single(item) => vec![item],
            SampleResult::Sequence(items) => items,
        }
    }
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> SampleResult<U> {
        match self {
            SampleResult::Single(item) => SampleResult::Single(f(item)),
            SampleResult::Sequence(items) => {
                SampleResult::Sequence(items.into_iter().map(f).collect())
            }
        }
    }
}

/// Convert a signed count from an untrusted source (e.g. JSON) into a usable one.
pub fn checked_count(count: i64) -> Result<usize> {
    if count < 0 {
        log::debug!("rejecting negative sample count {}", count);
        return Err(SampleError::InvalidArgument { count });
    }
    usize::try_from(count).map_err(|_| {
        log::debug!("sample count {} does not fit in usize", count);
        SampleError::InvalidArgument { count }
    })
}

/// Choose `count` source positions out of `len`.
///
/// With repeats every draw is independent; without repeats this is a partial Fisher-Yates over
/// the index permutation, so the result is uniform over all ordered selections.
pub fn pick_indices<R: RandomSource + ?Sized>(
    len: usize,
    count: usize,
    options: SampleOptions,
    rand: &mut R,
) -> Result<Vec<usize>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if options.repeat {
        if len == 0 {
            log::debug!("cannot draw {} with repeats from an empty collection", count);
            return Err(SampleError::EmptyCollection);
        }
        return Ok((0..count).map(|_| rand.next_below(len)).collect());
    }
    if count > len {
        log::debug!("cannot draw {} distinct positions out of {}", count, len);
        return Err(SampleError::InsufficientElements {
            requested: count,
            available: len,
        });
    }
    if prefers_sparse(len, count) {
        Ok(sparse_partial_shuffle(len, count, rand))
    } else {
        Ok(dense_partial_shuffle(len, count, rand))
    }
}

/// `count <= len` already holds here, so divide rather than multiply to stay in range.
fn prefers_sparse(len: usize, count: usize) -> bool {
    count < len / SPARSE_SAMPLE_RATIO
}

fn dense_partial_shuffle<R: RandomSource + ?Sized>(
    len: usize,
    count: usize,
    rand: &mut R,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    for i in 0..count {
        let j = i + rand.next_below(len - i);
        indices.swap(i, j);
    }
    indices.truncate(count);
    indices
}

/// Same draws and output as `dense_partial_shuffle`, but only remembers positions that have
/// been swapped away from the identity.
fn sparse_partial_shuffle<R: RandomSource + ?Sized>(
    len: usize,
    count: usize,
    rand: &mut R,
) -> Vec<usize> {
    let mut displaced: HashMap<usize, usize> = HashMap::with_capacity(count * 2);
    let mut output = Vec::with_capacity(count);
    for i in 0..count {
        let j = i + rand.next_below(len - i);
        let at_i = displaced.get(&i).cloned().unwrap_or(i);
        let at_j = displaced.get(&j).cloned().unwrap_or(j);
        displaced.insert(j, at_i);
        output.push(at_j);
    }
    output
}

/// Random selection and permutation over an indexable collection.
pub trait SequenceSampler<T> {
    /// One element chosen uniformly at random; fails on an empty collection.
    fn pick<R: RandomSource + ?Sized>(&self, rand: &mut R) -> Result<&T>;

    /// `count` elements in draw order. With `repeat: false`, no source position is used twice.
    fn pick_many<R: RandomSource + ?Sized>(
        &self,
        count: usize,
        options: SampleOptions,
        rand: &mut R,
    ) -> Result<Vec<&T>>;

    /// `None` behaves like [`pick`](Self::pick), `Some(k)` like [`pick_many`](Self::pick_many).
    fn sample<R: RandomSource + ?Sized>(
        &self,
        count: Option<usize>,
        options: SampleOptions,
        rand: &mut R,
    ) -> Result<SampleResult<&T>> {
        Ok(match count {
            None => SampleResult::Single(self.pick(rand)?),
            Some(k) => SampleResult::Sequence(self.pick_many(k, options, rand)?),
        })
    }

    /// Fisher-Yates, in place.
    fn shuffle<R: RandomSource + ?Sized>(&mut self, rand: &mut R);

    /// A freshly shuffled copy, handed out as a single-use iterator.
    fn shuffled<R: RandomSource + ?Sized>(&self, rand: &mut R) -> Shuffled<T>
    where
        T: Clone;
}

impl<T> SequenceSampler<T> for [T] {
    fn pick<R: RandomSource + ?Sized>(&self, rand: &mut R) -> Result<&T> {
        if self.is_empty() {
            log::debug!("pick() on an empty collection");
            return Err(SampleError::EmptyCollection);
        }
        let idx = rand.next_below(self.len());
        log::trace!("pick: index {} of {}", idx, self.len());
        Ok(&self[idx])
    }

    fn pick_many<R: RandomSource + ?Sized>(
        &self,
        count: usize,
        options: SampleOptions,
        rand: &mut R,
    ) -> Result<Vec<&T>> {
        let indices = pick_indices(self.len(), count, options, rand)?;
        log::trace!(
            "pick_many: {} of {} (repeat={})",
            count,
            self.len(),
            options.repeat
        );
        Ok(indices.into_iter().map(|idx| &self[idx]).collect())
    }

    fn shuffle<R: RandomSource + ?Sized>(&mut self, rand: &mut R) {
        let n = self.len();
        log::trace!("shuffle: {} elements", n);
        for i in (1..n).rev() {
            let j = rand.next_below(i + 1);
            self.swap(i, j);
        }
    }

    fn shuffled<R: RandomSource + ?Sized>(&self, rand: &mut R) -> Shuffled<T>
    where
        T: Clone,
    {
        let mut copy = self.to_vec();
        copy.shuffle(rand);
        Shuffled {
            inner: copy.into_iter(),
        }
    }
}

/// Iterator returned by [`SequenceSampler::shuffled`].
#[derive(Debug, Clone)]
pub struct Shuffled<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Iterator for Shuffled<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Shuffled<T> {}
impl<T> FusedIterator for Shuffled<T> {}
