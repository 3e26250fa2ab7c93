/// An abstract group, given as an ambient carrier object.
///
/// The carrier object knows how to build the identity and how to
/// multiply two elements; elements themselves carry no reference back
/// to it. Every operation that needs group context takes the group
/// explicitly, which keeps element types small and lets one element
/// type serve a whole parametric family of groups.
///
/// Laws (you should test these for concrete types):
/// - associativity: (ab)c = a(bc)
/// - identity: e * a = a * e = a
pub trait Group {
    /// The element type of the group.
    type Elem: Clone + Eq;

    /// Identity element `e`.
    fn one(&self) -> Self::Elem;

    /// Group operation `a * b`.
    fn mul(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Product of the elements yielded by `iter`, multiplied left to
    /// right. An empty iterator yields the identity.
    ///
    /// # Example
    ///
    /// ```
    /// use shephard::{ColoredPermutations, Group, ReflectionGroup};
    ///
    /// let w = ColoredPermutations::new(1, 3);
    /// let s1 = w.simple_reflection(&1).unwrap();
    ///
    /// // s1 * s1 = e
    /// assert_eq!(w.prod([s1.clone(), s1]), w.one());
    /// assert_eq!(w.prod([]), w.one());
    /// ```
    fn prod<It>(&self, iter: It) -> Self::Elem
    where
        It: IntoIterator<Item = Self::Elem>,
    {
        iter.into_iter()
            .fold(self.one(), |acc, x| self.mul(&acc, &x))
    }
}
