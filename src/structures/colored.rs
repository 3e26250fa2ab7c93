//! Colored permutations: the wreath products `G(m, 1, n)`.
//!
//! An `m`-colored permutation of size `n` is a permutation of `n`
//! points together with a color in `Z/m` attached to each point. As
//! monomial matrices (one nonzero entry `zeta^c` per row and column,
//! `zeta` a primitive `m`-th root of unity) these form the complex
//! reflection group `G(m, 1, n)`: the symmetric group for `m = 1`,
//! the hyperoctahedral group for `m = 2`, cyclic groups for `n = 1`.
//!
//! This is the standard concrete model exercising every generic
//! algorithm of [`ReflectionGroup`]: it supplies all optional
//! capabilities, satisfies the [`Irreducible`] and [`WellGenerated`]
//! axioms, and its elements know their reflection length.

use core::fmt;
use core::ops::Mul;

use once_cell::unsync::OnceCell;

use crate::algebra::family::Family;
use crate::algebra::group::Group;
use crate::algebra::reflection::{
    Irreducible, ReflectionElement, ReflectionError, ReflectionGroup, WellGenerated,
};

/// An `m`-colored permutation of `n` points.
///
/// The element is the monomial matrix sending the basis vector `e_j`
/// to `zeta^{colors[j]} e_{perm[j]}` (0-based positions). The color
/// modulus `m` travels with the element so that elements multiply
/// without a reference to their group.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColoredPermutation {
    colors: Vec<u64>,
    perm: Vec<usize>,
    modulus: u64,
}

impl ColoredPermutation {
    fn identity(modulus: u64, size: usize) -> Self {
        ColoredPermutation {
            colors: vec![0; size],
            perm: (0..size).collect(),
            modulus,
        }
    }

    /// The color attached to each source position.
    pub fn colors(&self) -> &[u64] {
        &self.colors
    }

    /// The underlying permutation as 0-based images: position `j` maps
    /// to `self.images()[j]`.
    pub fn images(&self) -> &[usize] {
        &self.perm
    }

    /// The color modulus `m` the element lives under.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Group inverse.
    ///
    /// # Example
    ///
    /// ```
    /// use shephard::{ColoredPermutations, Group, ReflectionGroup};
    ///
    /// let w = ColoredPermutations::new(3, 2);
    /// let x = w.an_element().unwrap();
    /// assert_eq!(w.mul(&x, &x.inverse()), w.one());
    /// ```
    pub fn inverse(&self) -> Self {
        let n = self.perm.len();
        let mut perm = vec![0usize; n];
        for j in 0..n {
            perm[self.perm[j]] = j;
        }
        let mut colors = vec![0u64; n];
        for (k, c) in colors.iter_mut().enumerate() {
            *c = (self.modulus - self.colors[perm[k]]) % self.modulus;
        }
        ColoredPermutation {
            colors,
            perm,
            modulus: self.modulus,
        }
    }
}

impl Mul for &ColoredPermutation {
    type Output = ColoredPermutation;

    /// Matrix product: `(self * rhs)` first applies `rhs`, then `self`.
    fn mul(self, rhs: &ColoredPermutation) -> ColoredPermutation {
        debug_assert_eq!(self.modulus, rhs.modulus);
        debug_assert_eq!(self.perm.len(), rhs.perm.len());
        let n = self.perm.len();
        let mut perm = vec![0usize; n];
        let mut colors = vec![0u64; n];
        for j in 0..n {
            let s = rhs.perm[j];
            perm[j] = self.perm[s];
            colors[j] = (self.colors[s] + rhs.colors[j]) % self.modulus;
        }
        ColoredPermutation {
            colors,
            perm,
            modulus: self.modulus,
        }
    }
}

impl Mul for ColoredPermutation {
    type Output = ColoredPermutation;

    fn mul(self, rhs: ColoredPermutation) -> ColoredPermutation {
        &self * &rhs
    }
}

impl fmt::Display for ColoredPermutation {
    /// Renders as `[[colors], [one-based images]]`, e.g.
    /// `[[1, 0, 0], [3, 1, 2]]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[[")?;
        for (j, c) in self.colors.iter().enumerate() {
            if j > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "], [")?;
        for (j, p) in self.perm.iter().enumerate() {
            if j > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p + 1)?;
        }
        write!(f, "]]")
    }
}

/// The group of `m`-colored permutations of size `n`, i.e. the
/// complex reflection group `G(m, 1, n)`.
///
/// Simple reflections are indexed `1..n` (adjacent transpositions),
/// plus the index `n` for the color rotation at the last point when
/// `m > 1`. Hyperplane and reflection index sets are `0..N*` and
/// `0..N` in a fixed enumeration order (transposition-type first,
/// diagonal-type last).
///
/// The three generator families are memoized per instance: they are
/// built on first request and re-querying returns the identical
/// object.
///
/// # Example
///
/// ```
/// use shephard::{ColoredPermutations, Group, ReflectionGroup, WordType};
///
/// let w = ColoredPermutations::new(2, 2);
/// assert_eq!(w.index_set(), &[1, 2]);
///
/// // The color rotation s2 has order 2 here.
/// let e = w.from_word(&[2, 2], WordType::Simple).unwrap();
/// assert_eq!(e, w.one());
///
/// // G(2,1,2) has 2 + 2 = 4 reflections.
/// assert_eq!(w.reflections().unwrap().len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct ColoredPermutations {
    modulus: u64,
    size: usize,
    index_set: Vec<usize>,
    hyperplane_index_set: Vec<usize>,
    reflection_index_set: Vec<usize>,
    /// Pairs `(a, b)` with `a < b`, in lexicographic order; the
    /// transposition-type indexings decode through this table.
    pairs: Vec<(usize, usize)>,
    simple: OnceCell<Family<usize, ColoredPermutation>>,
    distinguished: OnceCell<Family<usize, ColoredPermutation>>,
    all: OnceCell<Family<usize, ColoredPermutation>>,
}

impl ColoredPermutations {
    /// The group `G(m, 1, n)` of `m`-colored permutations of size `n`.
    ///
    /// # Panics
    ///
    /// Panics if `m` or `n` is zero.
    pub fn new(m: u64, n: usize) -> Self {
        assert!(m >= 1, "the number of colors must be positive");
        assert!(n >= 1, "the number of points must be positive");
        let index_set: Vec<usize> = if m == 1 {
            (1..n).collect()
        } else {
            (1..=n).collect()
        };
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|a| (a + 1..n).map(move |b| (a, b)))
            .collect();
        let m_us = m as usize;
        let nr_hyperplanes = pairs.len() * m_us + if m > 1 { n } else { 0 };
        let nr_reflections = pairs.len() * m_us + n * (m_us - 1);
        ColoredPermutations {
            modulus: m,
            size: n,
            index_set,
            hyperplane_index_set: (0..nr_hyperplanes).collect(),
            reflection_index_set: (0..nr_reflections).collect(),
            pairs,
            simple: OnceCell::new(),
            distinguished: OnceCell::new(),
            all: OnceCell::new(),
        }
    }

    /// The number of colors `m`.
    pub fn nr_colors(&self) -> u64 {
        self.modulus
    }

    /// The number of points `n`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Group order `m^n * n!`.
    pub fn order(&self) -> u64 {
        let mut order = self.modulus.pow(self.size as u32);
        for k in 2..=self.size as u64 {
            order *= k;
        }
        order
    }

    /// Every element of the group, colors varying fastest.
    ///
    /// Meant for small groups; the result has [`order`](Self::order)
    /// entries.
    pub fn elements(&self) -> Vec<ColoredPermutation> {
        let mut out = Vec::with_capacity(self.order() as usize);
        for perm in permutations(self.size) {
            let mut colors = vec![0u64; self.size];
            loop {
                out.push(ColoredPermutation {
                    colors: colors.clone(),
                    perm: perm.clone(),
                    modulus: self.modulus,
                });
                let mut pos = 0;
                while pos < self.size {
                    colors[pos] += 1;
                    if colors[pos] < self.modulus {
                        break;
                    }
                    colors[pos] = 0;
                    pos += 1;
                }
                if pos == self.size {
                    break;
                }
            }
        }
        out
    }

    /// The reflection swapping `e_a` and `e_b` with colors `-k` and
    /// `k`: it fixes the hyperplane `x_a = zeta^k x_b` and has order 2.
    fn transposition(&self, a: usize, b: usize, k: u64) -> ColoredPermutation {
        let mut perm: Vec<usize> = (0..self.size).collect();
        perm.swap(a, b);
        let mut colors = vec![0u64; self.size];
        colors[a] = (self.modulus - k) % self.modulus;
        colors[b] = k;
        ColoredPermutation {
            colors,
            perm,
            modulus: self.modulus,
        }
    }

    /// The diagonal reflection acting as `zeta^k` on `e_a`.
    fn diagonal(&self, a: usize, k: u64) -> ColoredPermutation {
        let mut colors = vec![0u64; self.size];
        colors[a] = k % self.modulus;
        ColoredPermutation {
            colors,
            perm: (0..self.size).collect(),
            modulus: self.modulus,
        }
    }
}

impl Group for ColoredPermutations {
    type Elem = ColoredPermutation;

    fn one(&self) -> ColoredPermutation {
        ColoredPermutation::identity(self.modulus, self.size)
    }

    fn mul(&self, a: &ColoredPermutation, b: &ColoredPermutation) -> ColoredPermutation {
        a * b
    }
}

impl ReflectionGroup for ColoredPermutations {
    type Index = usize;

    fn index_set(&self) -> &[usize] {
        &self.index_set
    }

    fn simple_reflection(
        &self,
        i: &usize,
    ) -> Result<ColoredPermutation, ReflectionError<usize>> {
        if !self.index_set.contains(i) {
            return Err(ReflectionError::InvalidIndex {
                index: *i,
                expected: "index_set",
            });
        }
        if *i < self.size {
            Ok(self.transposition(*i - 1, *i, 0))
        } else {
            Ok(self.diagonal(self.size - 1, 1))
        }
    }

    fn hyperplane_index_set(&self) -> Result<&[usize], ReflectionError<usize>> {
        Ok(&self.hyperplane_index_set)
    }

    /// Hyperplanes `x_a = zeta^k x_b` come first (pair-major, then
    /// color), the coordinate hyperplanes `x_a = 0` last (`m > 1`
    /// only). The distinguished reflection of a coordinate hyperplane
    /// is the one acting as `zeta` itself.
    fn distinguished_reflection(
        &self,
        i: &usize,
    ) -> Result<ColoredPermutation, ReflectionError<usize>> {
        if !self.hyperplane_index_set.contains(i) {
            return Err(ReflectionError::InvalidIndex {
                index: *i,
                expected: "hyperplane_index_set",
            });
        }
        let m = self.modulus as usize;
        let transposition_type = self.pairs.len() * m;
        if *i < transposition_type {
            let (a, b) = self.pairs[*i / m];
            Ok(self.transposition(a, b, (*i % m) as u64))
        } else {
            Ok(self.diagonal(*i - transposition_type, 1))
        }
    }

    fn reflection_index_set(&self) -> Result<&[usize], ReflectionError<usize>> {
        Ok(&self.reflection_index_set)
    }

    /// Same enumeration as the hyperplanes, except that each
    /// coordinate position carries `m - 1` diagonal reflections
    /// `zeta^k`, `k = 1..m`.
    fn reflection(&self, i: &usize) -> Result<ColoredPermutation, ReflectionError<usize>> {
        if !self.reflection_index_set.contains(i) {
            return Err(ReflectionError::InvalidIndex {
                index: *i,
                expected: "reflection_index_set",
            });
        }
        let m = self.modulus as usize;
        let transposition_type = self.pairs.len() * m;
        if *i < transposition_type {
            let (a, b) = self.pairs[*i / m];
            Ok(self.transposition(a, b, (*i % m) as u64))
        } else {
            let rem = *i - transposition_type;
            let a = rem / (m - 1);
            let k = (rem % (m - 1)) as u64 + 1;
            Ok(self.diagonal(a, k))
        }
    }

    // The `Irreducible` marker: the group is its own single component.
    fn irreducible_components(&self) -> Result<Vec<Self>, ReflectionError<usize>> {
        Ok(vec![self.clone()])
    }

    fn simple_reflections(
        &self,
    ) -> Result<Family<usize, ColoredPermutation>, ReflectionError<usize>> {
        self.simple
            .get_or_try_init(|| Family::generate(&self.index_set, |i| self.simple_reflection(i)))
            .cloned()
    }

    fn distinguished_reflections(
        &self,
    ) -> Result<Family<usize, ColoredPermutation>, ReflectionError<usize>> {
        self.distinguished
            .get_or_try_init(|| {
                Family::generate(&self.hyperplane_index_set, |i| {
                    self.distinguished_reflection(i)
                })
            })
            .cloned()
    }

    fn reflections(&self) -> Result<Family<usize, ColoredPermutation>, ReflectionError<usize>> {
        self.all
            .get_or_try_init(|| {
                Family::generate(&self.reflection_index_set, |i| self.reflection(i))
            })
            .cloned()
    }
}

impl Irreducible for ColoredPermutations {}

impl WellGenerated for ColoredPermutations {
    fn rank(&self) -> usize {
        // G(1,1,n) is the symmetric group acting on the sum-zero
        // subspace; every other G(m,1,n) acts irreducibly on all of
        // C^n.
        if self.modulus == 1 {
            self.size - 1
        } else {
            self.size
        }
    }
}

impl ReflectionElement<ColoredPermutations> for ColoredPermutation {
    /// Right application touches only the entries the generator
    /// moves: a swap of two slots, or one color bump.
    fn apply_simple_reflection_right(
        &self,
        group: &ColoredPermutations,
        i: &usize,
    ) -> Result<Self, ReflectionError<usize>> {
        if !group.index_set().contains(i) {
            return Err(ReflectionError::InvalidIndex {
                index: *i,
                expected: "index_set",
            });
        }
        let mut w = self.clone();
        if *i < group.size() {
            w.perm.swap(*i - 1, *i);
            w.colors.swap(*i - 1, *i);
        } else {
            let last = group.size() - 1;
            w.colors[last] = (w.colors[last] + 1) % group.nr_colors();
        }
        Ok(w)
    }

    /// `n` minus the number of cycles whose colors sum to zero mod `m`.
    fn reflection_length(
        &self,
        group: &ColoredPermutations,
    ) -> Result<usize, ReflectionError<usize>> {
        debug_assert_eq!(self.perm.len(), group.size());
        let n = self.perm.len();
        let mut seen = vec![false; n];
        let mut zero_cycles = 0;
        for start in 0..n {
            if seen[start] {
                continue;
            }
            let mut sum = 0u64;
            let mut j = start;
            while !seen[j] {
                seen[j] = true;
                sum = (sum + self.colors[j]) % self.modulus;
                j = self.perm[j];
            }
            if sum == 0 {
                zero_cycles += 1;
            }
        }
        Ok(n - zero_cycles)
    }
}

/// All permutations of `0..n`, by repeated insertion.
fn permutations(n: usize) -> Vec<Vec<usize>> {
    let mut perms: Vec<Vec<usize>> = vec![Vec::new()];
    for k in 0..n {
        let mut next = Vec::with_capacity(perms.len() * (k + 1));
        for p in &perms {
            for pos in 0..=p.len() {
                let mut q = p.clone();
                q.insert(pos, k);
                next.push(q);
            }
        }
        perms = next;
    }
    perms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::reflection::{Side, WordType};

    #[test]
    fn generators_have_the_right_orders() {
        let w = ColoredPermutations::new(3, 3);
        for i in 1..w.size() {
            let s = w.simple_reflection(&i).unwrap();
            assert_eq!(&s * &s, w.one());
        }
        let s3 = w.simple_reflection(&3).unwrap();
        let cubed = &(&s3 * &s3) * &s3;
        assert_eq!(cubed, w.one());
        assert_ne!(&s3 * &s3, w.one());
    }

    #[test]
    fn symmetric_group_has_no_color_generator() {
        let w = ColoredPermutations::new(1, 4);
        assert_eq!(w.index_set(), &[1, 2, 3]);
        assert!(matches!(
            w.simple_reflection(&4),
            Err(ReflectionError::InvalidIndex { index: 4, .. })
        ));
    }

    #[test]
    fn braid_word_closes_up() {
        let w = ColoredPermutations::new(1, 4);
        let e = w.from_word(&[1, 2, 1, 2, 1, 2], WordType::Simple).unwrap();
        assert_eq!(e, w.one());
    }

    #[test]
    fn reflection_counts() {
        // G(1,1,4): the 6 transpositions of S4.
        let w = ColoredPermutations::new(1, 4);
        assert_eq!(w.hyperplane_index_set().unwrap().len(), 6);
        assert_eq!(w.reflections().unwrap().len(), 6);

        // G(3,1,2): 3 transposition-type, 4 diagonal.
        let w = ColoredPermutations::new(3, 2);
        assert_eq!(w.hyperplane_index_set().unwrap().len(), 5);
        assert_eq!(w.reflections().unwrap().len(), 7);

        // G(3,1,1) = Z/3: one hyperplane, two reflections.
        let w = ColoredPermutations::new(3, 1);
        assert_eq!(w.distinguished_reflections().unwrap().len(), 1);
        assert_eq!(w.reflections().unwrap().len(), 2);
    }

    #[test]
    fn reflections_square_or_power_to_identity() {
        let w = ColoredPermutations::new(3, 2);
        for (_, t) in w.distinguished_reflections().unwrap().iter() {
            // Distinguished reflections of transposition type have
            // order 2; diagonal ones have order m.
            let mut power = t.clone();
            let mut order = 1;
            while power != w.one() {
                power = &power * t;
                order += 1;
            }
            assert!(order == 2 || order == 3, "unexpected order {order}");
        }
    }

    #[test]
    fn every_enumerated_reflection_has_length_one() {
        for (m, n) in [(1, 3), (2, 2), (3, 2), (2, 3)] {
            let w = ColoredPermutations::new(m, n);
            for (_, t) in w.reflections().unwrap().iter() {
                assert!(t.is_reflection(&w).unwrap());
            }
        }
    }

    #[test]
    fn reflection_length_multisets() {
        // Multisets of reflection lengths over whole small groups.
        let expect: [(u64, usize, &[usize]); 3] = [
            (1, 2, &[0, 1]),
            (2, 2, &[0, 1, 1, 1, 1, 2, 2, 2]),
            (3, 2, &[0, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2]),
        ];
        for (m, n, lengths) in expect {
            let w = ColoredPermutations::new(m, n);
            let mut got: Vec<usize> = w
                .elements()
                .iter()
                .map(|t| t.reflection_length(&w).unwrap())
                .collect();
            got.sort();
            assert_eq!(got, lengths, "G({m},1,{n})");
        }
    }

    #[test]
    fn elements_enumerates_the_whole_group() {
        let w = ColoredPermutations::new(2, 3);
        let elems = w.elements();
        assert_eq!(elems.len() as u64, w.order());
        assert_eq!(w.order(), 48);
        // No duplicates.
        let mut sorted = elems.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), elems.len());
    }

    #[test]
    fn families_are_memoized_per_instance() {
        let w = ColoredPermutations::new(2, 3);
        let f1 = w.simple_reflections().unwrap();
        let f2 = w.simple_reflections().unwrap();
        assert!(Family::ptr_eq(&f1, &f2));

        let other = ColoredPermutations::new(2, 3);
        let g = other.simple_reflections().unwrap();
        assert_eq!(f1, g);
        assert!(!Family::ptr_eq(&f1, &g));
    }

    #[test]
    fn fast_right_application_agrees_with_group_mul() {
        let w = ColoredPermutations::new(3, 3);
        let x = w.an_element().unwrap();
        for i in w.index_set() {
            let s = w.simple_reflection(i).unwrap();
            assert_eq!(
                x.apply_simple_reflection_right(&w, i).unwrap(),
                w.mul(&x, &s)
            );
            assert_eq!(
                x.apply_simple_reflection(&w, i, Side::Left).unwrap(),
                w.mul(&s, &x)
            );
        }
    }

    #[test]
    fn well_generated_diagnostic() {
        // S3: three hyperplanes, rank 2, two simple reflections.
        let w = ColoredPermutations::new(1, 3);
        assert_eq!(w.hyperplane_index_set().unwrap().len(), 3);
        assert_eq!(w.rank(), 2);
        assert_eq!(w.nr_simple_reflections(), 2);
        assert!(w.is_well_generated());
        assert!(w.check_well_generated());

        for (m, n) in [(1, 4), (2, 2), (3, 3), (4, 1)] {
            assert!(ColoredPermutations::new(m, n).check_well_generated());
        }
    }

    #[test]
    fn irreducibility() {
        let w = ColoredPermutations::new(4, 3);
        assert_eq!(w.nr_irreducible_components().unwrap(), 1);
        assert!(w.is_irreducible().unwrap());
        assert!(!w.is_reducible().unwrap());
    }

    #[test]
    fn group_generators_are_sorted_simple_reflections() {
        let w = ColoredPermutations::new(3, 2);
        let gens = w.group_generators().unwrap();
        assert_eq!(gens.len(), w.nr_simple_reflections());
        assert!(gens.windows(2).all(|p| p[0] <= p[1]));
        let s = w.simple_reflections().unwrap();
        for g in &gens {
            assert!(s.values().any(|t| t == g));
        }
        assert_eq!(w.semigroup_generators().unwrap(), gens);
    }

    #[test]
    fn some_elements_shape() {
        let w = ColoredPermutations::new(2, 3);
        let elems = w.some_elements().unwrap();
        assert_eq!(elems.len(), w.nr_simple_reflections() + 3);
        assert!(elems.contains(&w.one()));
        assert!(elems.contains(&w.an_element().unwrap()));
    }

    #[test]
    fn display_matches_colored_one_line_notation() {
        let w = ColoredPermutations::new(3, 3);
        assert_eq!(w.one().to_string(), "[[0, 0, 0], [1, 2, 3]]");
        let s1 = w.simple_reflection(&1).unwrap();
        assert_eq!(s1.to_string(), "[[0, 0, 0], [2, 1, 3]]");
        let s3 = w.simple_reflection(&3).unwrap();
        assert_eq!(s3.to_string(), "[[0, 0, 1], [1, 2, 3]]");
    }

    #[test]
    fn inverse_law_over_a_whole_small_group() {
        let w = ColoredPermutations::new(2, 2);
        for t in w.elements() {
            assert_eq!(&t * &t.inverse(), w.one());
            assert_eq!(&t.inverse() * &t, w.one());
        }
    }
}
