//! Finite families of group elements indexed by labels.
//!
//! A [`Family`] is the result of evaluating a per-index lookup over a
//! whole index set: an immutable mapping whose iteration order follows
//! the index set it was built from. Families are what the generic
//! reflection group algorithms hand out for `simple_reflections()`,
//! `distinguished_reflections()` and `reflections()`.

use core::fmt;
use core::hash::Hash;
use core::ops;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::algebra::reflection::ReflectionError;

/// An immutable family of elements indexed by labels.
///
/// Iteration follows the order of the index set the family was built
/// from, and lookups are O(1). The payload sits behind an `Rc`, so
/// cloning a family is cheap and a family memoized by a group and
/// handed out twice is the identical object (see [`Family::ptr_eq`]).
///
/// # Example
///
/// ```
/// use shephard::Family;
///
/// let squares: Family<u32, u32> =
///     Family::generate(&[1, 2, 3], |i| Ok(i * i)).unwrap();
///
/// assert_eq!(squares.len(), 3);
/// assert_eq!(squares[&2], 4);
/// assert_eq!(squares.get(&7), None);
/// ```
#[derive(Clone)]
pub struct Family<I, E> {
    inner: Rc<IndexMap<I, E>>,
}

impl<I, E> Family<I, E>
where
    I: Clone + Eq + Hash,
{
    /// Build a family by applying `lookup` to every label of
    /// `index_set`, in order.
    ///
    /// The lookup must be total over the index set; its first error
    /// aborts the construction and is returned as-is.
    pub fn generate<F>(index_set: &[I], mut lookup: F) -> Result<Self, ReflectionError<I>>
    where
        F: FnMut(&I) -> Result<E, ReflectionError<I>>,
    {
        let mut map = IndexMap::with_capacity(index_set.len());
        for i in index_set {
            let elem = lookup(i)?;
            map.insert(i.clone(), elem);
        }
        Ok(Self {
            inner: Rc::new(map),
        })
    }

    /// Element stored under `i`, or `None` if `i` is not a key.
    pub fn get(&self, i: &I) -> Option<&E> {
        self.inner.get(i)
    }

    /// Like [`Family::get`], but an absent label is a domain error
    /// naming the label and the index set it was checked against.
    pub fn lookup(&self, i: &I, expected: &'static str) -> Result<&E, ReflectionError<I>> {
        self.inner.get(i).ok_or_else(|| ReflectionError::InvalidIndex {
            index: i.clone(),
            expected,
        })
    }

    /// Whether `i` is a key of the family.
    pub fn contains(&self, i: &I) -> bool {
        self.inner.contains_key(i)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the family is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Keys in index-set order.
    pub fn keys(&self) -> impl Iterator<Item = &I> {
        self.inner.keys()
    }

    /// Elements in index-set order.
    pub fn values(&self) -> impl Iterator<Item = &E> {
        self.inner.values()
    }

    /// `(key, element)` pairs in index-set order.
    pub fn iter(&self) -> impl Iterator<Item = (&I, &E)> {
        self.inner.iter()
    }

    /// Whether two families are the same memoized object, not merely
    /// equal as mappings.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }
}

impl<'a, I, E> ops::Index<&'a I> for Family<I, E>
where
    I: Clone + Eq + Hash + fmt::Debug,
{
    type Output = E;

    /// # Panics
    ///
    /// Panics if `i` is not a key of the family. Use [`Family::get`]
    /// or [`Family::lookup`] for a fallible lookup.
    fn index(&self, i: &'a I) -> &E {
        match self.inner.get(i) {
            Some(elem) => elem,
            None => panic!("no element indexed by {i:?}"),
        }
    }
}

impl<I, E> PartialEq for Family<I, E>
where
    I: Eq + Hash,
    E: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<I, E> Eq for Family<I, E>
where
    I: Eq + Hash,
    E: Eq,
{
}

impl<I, E> fmt::Debug for Family<I, E>
where
    I: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.iter()).finish()
    }
}
