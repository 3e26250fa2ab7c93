//! Complex reflection groups as composable capabilities.
//!
//! A *reflection group* is a group generated by reflections: linear
//! maps fixing a hyperplane pointwise and acting by a root of unity on
//! its complement. This module captures the structure shared by all
//! such groups as traits:
//!
//! - [`ReflectionGroup`]: a [`Group`](crate::Group) carrying an index
//!   set of simple reflections, plus optional hyperplane and general
//!   reflection indexings. Everything else (generator families, word
//!   evaluation, structural queries) is derived generically.
//! - [`ReflectionElement`]: the element side; left/right generator
//!   application with defaults through the owning group, so a concrete
//!   type only overrides the side it can do faster.
//! - [`Irreducible`] and [`WellGenerated`]: structural axioms layered
//!   on top as separate traits.
//!
//! Optional capabilities default to `Err(NotImplemented)` rather than
//! silently producing anything; a group supplies what it can and the
//! derived operations that need more fail loudly.

use core::fmt;
use core::hash::Hash;

use crate::algebra::family::Family;
use crate::algebra::group::Group;

/// Error type for reflection group operations.
///
/// Both variants are programming-contract violations: nothing here is
/// transient, and there is no recovery path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReflectionError<I> {
    /// An optional primitive was not supplied by the concrete group.
    NotImplemented {
        /// Name of the missing capability, e.g. `"reflection_index_set"`.
        capability: &'static str,
    },
    /// A label was looked up in an index set that does not contain it.
    InvalidIndex {
        /// The offending label.
        index: I,
        /// Name of the index set the label was checked against.
        expected: &'static str,
    },
}

impl<I: fmt::Debug> fmt::Display for ReflectionError<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReflectionError::NotImplemented { capability } => {
                write!(f, "`{capability}` is not implemented by this group")
            }
            ReflectionError::InvalidIndex { index, expected } => {
                write!(f, "the index {index:?} is not in the {expected} of the group")
            }
        }
    }
}

impl<I: fmt::Debug> std::error::Error for ReflectionError<I> {}

/// Which side a generator is multiplied on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// `g * self`
    Left,
    /// `self * g`
    #[default]
    Right,
}

/// Which generator family a word is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordType {
    /// Simple reflections, indexed by `index_set()`.
    #[default]
    Simple,
    /// Distinguished reflections, indexed by `hyperplane_index_set()`.
    Distinguished,
    /// All reflections, indexed by `reflection_index_set()`.
    All,
}

/// A group generated by reflections, with its generators addressable
/// through index sets.
///
/// A concrete group supplies the primitives (an index set and a
/// per-index lookup for each kind of reflection it knows about) and
/// inherits generic algorithms for generator families, word
/// evaluation and structural queries.
///
/// Only `index_set` and `simple_reflection` are required. The
/// hyperplane and general-reflection indexings, and the decomposition
/// into irreducible components, default to
/// [`ReflectionError::NotImplemented`].
///
/// # Example
///
/// ```
/// use shephard::{ColoredPermutations, Group, ReflectionGroup, WordType};
///
/// // The symmetric group S4 as 1-colored permutations of size 4.
/// let w = ColoredPermutations::new(1, 4);
/// assert_eq!(w.index_set(), &[1, 2, 3]);
/// assert_eq!(w.nr_simple_reflections(), 3);
///
/// // (s1 s2) has order 3, so this word multiplies out to the identity.
/// let e = w.from_word(&[1, 2, 1, 2, 1, 2], WordType::Simple).unwrap();
/// assert_eq!(e, w.one());
/// ```
pub trait ReflectionGroup: Group {
    /// Label type indexing the reflections of the group.
    type Index: Clone + Eq + Hash + fmt::Debug;

    /// The index set of the simple reflections.
    fn index_set(&self) -> &[Self::Index];

    /// The `i`-th simple reflection.
    ///
    /// Fails with [`ReflectionError::InvalidIndex`] when `i` is not in
    /// [`ReflectionGroup::index_set`].
    fn simple_reflection(&self, i: &Self::Index)
        -> Result<Self::Elem, ReflectionError<Self::Index>>;

    /// The index set of the reflecting hyperplanes. Optional.
    fn hyperplane_index_set(&self) -> Result<&[Self::Index], ReflectionError<Self::Index>> {
        Err(ReflectionError::NotImplemented {
            capability: "hyperplane_index_set",
        })
    }

    /// The distinguished reflection fixing the `i`-th hyperplane: the
    /// one acting as `exp(2 pi i / n)` on the complement, where `n` is
    /// the order of the subgroup fixing the hyperplane. Optional.
    fn distinguished_reflection(
        &self,
        i: &Self::Index,
    ) -> Result<Self::Elem, ReflectionError<Self::Index>> {
        let _ = i;
        Err(ReflectionError::NotImplemented {
            capability: "distinguished_reflection",
        })
    }

    /// The index set of all reflections of the group. Optional.
    fn reflection_index_set(&self) -> Result<&[Self::Index], ReflectionError<Self::Index>> {
        Err(ReflectionError::NotImplemented {
            capability: "reflection_index_set",
        })
    }

    /// The `i`-th reflection. Optional.
    fn reflection(&self, i: &Self::Index) -> Result<Self::Elem, ReflectionError<Self::Index>> {
        let _ = i;
        Err(ReflectionError::NotImplemented {
            capability: "reflection",
        })
    }

    /// All irreducible components of the group. Optional; groups
    /// carrying the [`Irreducible`] marker override this to return
    /// `[self]`.
    fn irreducible_components(&self) -> Result<Vec<Self>, ReflectionError<Self::Index>>
    where
        Self: Sized,
    {
        Err(ReflectionError::NotImplemented {
            capability: "irreducible_components",
        })
    }

    /// The simple reflections as a family indexed by
    /// [`ReflectionGroup::index_set`].
    ///
    /// The default rebuilds the family on every call; groups that hand
    /// out families repeatedly should memoize per instance (build the
    /// family eagerly at construction, or lazily through a once-cell)
    /// and override this to return the cached clone.
    fn simple_reflections(
        &self,
    ) -> Result<Family<Self::Index, Self::Elem>, ReflectionError<Self::Index>> {
        Family::generate(self.index_set(), |i| self.simple_reflection(i))
    }

    /// The distinguished reflections as a family indexed by
    /// [`ReflectionGroup::hyperplane_index_set`].
    fn distinguished_reflections(
        &self,
    ) -> Result<Family<Self::Index, Self::Elem>, ReflectionError<Self::Index>> {
        Family::generate(self.hyperplane_index_set()?, |i| {
            self.distinguished_reflection(i)
        })
    }

    /// All reflections as a family indexed by
    /// [`ReflectionGroup::reflection_index_set`].
    fn reflections(&self) -> Result<Family<Self::Index, Self::Elem>, ReflectionError<Self::Index>> {
        Family::generate(self.reflection_index_set()?, |i| self.reflection(i))
    }

    /// Number of simple reflections; equals
    /// `simple_reflections().len()`.
    fn nr_simple_reflections(&self) -> usize {
        self.index_set().len()
    }

    /// The element `t_{i_1} t_{i_2} ... t_{i_k}` for a word
    /// `[i_1, ..., i_k]` over the index set selected by `word_type`.
    ///
    /// The fold starts from the identity and multiplies on the right,
    /// so an empty word yields the identity. A label outside the
    /// selected index set fails with
    /// [`ReflectionError::InvalidIndex`] before any multiplication.
    fn from_word(
        &self,
        word: &[Self::Index],
        word_type: WordType,
    ) -> Result<Self::Elem, ReflectionError<Self::Index>>
    where
        Self: Sized,
        Self::Elem: ReflectionElement<Self>,
    {
        let one = self.one();
        match word_type {
            WordType::Simple => one.apply_simple_reflections(self, word, Side::Right),
            WordType::Distinguished => {
                one.apply_distinguished_reflections(self, word, Side::Right)
            }
            WordType::All => one.apply_reflections(self, word, Side::Right),
        }
    }

    /// A typical element: the product over the simple index set of the
    /// *general* reflections carrying those labels.
    ///
    /// Note the asymmetry: the loop runs over
    /// [`ReflectionGroup::index_set`] but consults
    /// [`ReflectionGroup::reflection`], so the labels must also be
    /// valid reflection indices. This matches the classical behavior
    /// and is deliberate; see `some_elements` for the same product.
    fn an_element(&self) -> Result<Self::Elem, ReflectionError<Self::Index>> {
        let mut w = self.one();
        for i in self.index_set() {
            w = self.mul(&w, &self.reflection(i)?);
        }
        Ok(w)
    }

    /// A list of representative elements: the simple reflections, the
    /// identity, [`ReflectionGroup::an_element`], and the product of
    /// the general reflections over the simple index set.
    ///
    /// Meant for test-suite coverage, not for algorithmic use.
    fn some_elements(&self) -> Result<Vec<Self::Elem>, ReflectionError<Self::Index>> {
        let mut elems: Vec<Self::Elem> =
            self.simple_reflections()?.values().cloned().collect();
        let mut prod_ref = self.one();
        for i in self.index_set() {
            prod_ref = self.mul(&prod_ref, &self.reflection(i)?);
        }
        elems.push(self.one());
        elems.push(self.an_element()?);
        elems.push(prod_ref);
        Ok(elems)
    }

    /// The simple reflections in a canonical sorted order.
    fn group_generators(&self) -> Result<Vec<Self::Elem>, ReflectionError<Self::Index>>
    where
        Self::Elem: Ord,
    {
        let mut gens: Vec<Self::Elem> =
            self.simple_reflections()?.values().cloned().collect();
        gens.sort();
        Ok(gens)
    }

    /// Reflection groups generate themselves as semigroups with the
    /// same generators.
    fn semigroup_generators(&self) -> Result<Vec<Self::Elem>, ReflectionError<Self::Index>>
    where
        Self::Elem: Ord,
    {
        self.group_generators()
    }

    /// Number of irreducible components.
    fn nr_irreducible_components(&self) -> Result<usize, ReflectionError<Self::Index>>
    where
        Self: Sized,
    {
        Ok(self.irreducible_components()?.len())
    }

    /// Whether the group has exactly one irreducible component.
    fn is_irreducible(&self) -> Result<bool, ReflectionError<Self::Index>>
    where
        Self: Sized,
    {
        Ok(self.nr_irreducible_components()? == 1)
    }

    /// Whether the group has more than one irreducible component.
    fn is_reducible(&self) -> Result<bool, ReflectionError<Self::Index>>
    where
        Self: Sized,
    {
        Ok(!self.is_irreducible()?)
    }
}

/// Marker trait for reflection groups known to be irreducible.
///
/// Declaring the marker is a promise that the group is its own single
/// component; implementors should override
/// [`ReflectionGroup::irreducible_components`] to return `[self]`.
pub trait Irreducible: ReflectionGroup {}

/// Structural axiom: a well-generated reflection group is generated by
/// as many reflections as its rank.
pub trait WellGenerated: ReflectionGroup {
    /// Dimension of the complex vector space the group acts on.
    fn rank(&self) -> usize;

    /// Always true for implementors of this trait.
    fn is_well_generated(&self) -> bool {
        true
    }

    /// Diagnostic for the axiom: the number of simple reflections must
    /// equal the rank. Intended for test suites, never enforced at
    /// construction.
    fn check_well_generated(&self) -> bool {
        self.nr_simple_reflections() == self.rank()
    }
}

/// Element-side operations of a reflection group.
///
/// The owning group is passed explicitly to every method; elements
/// stay plain data. Both application sides default to a multiplication
/// by the generator obtained from the group, so an empty impl is
/// already complete; a concrete type overrides whichever side it can
/// do faster than a full group multiplication.
pub trait ReflectionElement<W>: Sized + Clone + Eq
where
    W: ReflectionGroup<Elem = Self>,
{
    /// `s[i] * self`.
    fn apply_simple_reflection_left(
        &self,
        group: &W,
        i: &W::Index,
    ) -> Result<Self, ReflectionError<W::Index>> {
        Ok(group.mul(&group.simple_reflection(i)?, self))
    }

    /// `self * s[i]`.
    fn apply_simple_reflection_right(
        &self,
        group: &W,
        i: &W::Index,
    ) -> Result<Self, ReflectionError<W::Index>> {
        Ok(group.mul(self, &group.simple_reflection(i)?))
    }

    /// `self * s[i]` or `s[i] * self`, per `side`.
    fn apply_simple_reflection(
        &self,
        group: &W,
        i: &W::Index,
        side: Side,
    ) -> Result<Self, ReflectionError<W::Index>> {
        match side {
            Side::Right => self.apply_simple_reflection_right(group, i),
            Side::Left => self.apply_simple_reflection_left(group, i),
        }
    }

    /// Apply a word of simple reflection labels to `self`, scanning
    /// the word left to right.
    ///
    /// With `Side::Right` the result is `self * s[i_1] * ... * s[i_k]`.
    /// With `Side::Left` each generator lands on the left of the
    /// accumulator, so the *last* label of the word ends up leftmost:
    /// `s[i_k] * ... * s[i_1] * self`. This asymmetry is inherent to
    /// the sequential fold and is relied upon by callers.
    fn apply_simple_reflections(
        &self,
        group: &W,
        word: &[W::Index],
        side: Side,
    ) -> Result<Self, ReflectionError<W::Index>> {
        let mut w = self.clone();
        for i in word {
            w = w.apply_simple_reflection(group, i, side)?;
        }
        Ok(w)
    }

    /// Apply the distinguished reflection indexed by `i`, after
    /// checking that `i` is a hyperplane index.
    fn apply_distinguished_reflection(
        &self,
        group: &W,
        i: &W::Index,
        side: Side,
    ) -> Result<Self, ReflectionError<W::Index>> {
        if !group.hyperplane_index_set()?.contains(i) {
            return Err(ReflectionError::InvalidIndex {
                index: i.clone(),
                expected: "hyperplane_index_set",
            });
        }
        let t = group.distinguished_reflection(i)?;
        Ok(match side {
            Side::Right => group.mul(self, &t),
            Side::Left => group.mul(&t, self),
        })
    }

    /// Apply a word of hyperplane labels to `self`, scanning left to
    /// right; same fold semantics as
    /// [`ReflectionElement::apply_simple_reflections`].
    fn apply_distinguished_reflections(
        &self,
        group: &W,
        word: &[W::Index],
        side: Side,
    ) -> Result<Self, ReflectionError<W::Index>> {
        let mut w = self.clone();
        for i in word {
            w = w.apply_distinguished_reflection(group, i, side)?;
        }
        Ok(w)
    }

    /// Apply the reflection indexed by `i`, after checking that `i` is
    /// a reflection index.
    fn apply_reflection(
        &self,
        group: &W,
        i: &W::Index,
        side: Side,
    ) -> Result<Self, ReflectionError<W::Index>> {
        if !group.reflection_index_set()?.contains(i) {
            return Err(ReflectionError::InvalidIndex {
                index: i.clone(),
                expected: "reflection_index_set",
            });
        }
        let t = group.reflection(i)?;
        Ok(match side {
            Side::Right => group.mul(self, &t),
            Side::Left => group.mul(&t, self),
        })
    }

    /// Apply a word of reflection labels to `self`, scanning left to
    /// right; same fold semantics as
    /// [`ReflectionElement::apply_simple_reflections`].
    fn apply_reflections(
        &self,
        group: &W,
        word: &[W::Index],
        side: Side,
    ) -> Result<Self, ReflectionError<W::Index>> {
        let mut w = self.clone();
        for i in word {
            w = w.apply_reflection(group, i, side)?;
        }
        Ok(w)
    }

    /// Minimal number of reflections (of any kind) whose product is
    /// `self`. Optional.
    fn reflection_length(&self, group: &W) -> Result<usize, ReflectionError<W::Index>> {
        let _ = group;
        Err(ReflectionError::NotImplemented {
            capability: "reflection_length",
        })
    }

    /// Whether `self` is a reflection, i.e. has reflection length 1.
    fn is_reflection(&self, group: &W) -> Result<bool, ReflectionError<W::Index>> {
        Ok(self.reflection_length(group)? == 1)
    }
}
