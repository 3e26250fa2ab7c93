pub mod algebra;
pub mod structures;

pub use algebra::family::Family;
pub use algebra::group::Group;
pub use algebra::reflection::{
    Irreducible, ReflectionElement, ReflectionError, ReflectionGroup, Side, WellGenerated,
    WordType,
};
pub use structures::colored::{ColoredPermutation, ColoredPermutations};
