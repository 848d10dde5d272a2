//! The navigation contract between the caller's hierarchy and the walkers.
//!
//! The module is home to the following items:
//! - [`ParentSelector`] — *the parent edge* of the hierarchy, one lookup from a node to its optional parent
//! - [`ChildSelector`] — *the child edge* of the hierarchy, one lookup from a node to a sequence of optional children
//!
//! Both traits are blanket-implemented for closures, which is how they are expected to be supplied in the vast majority of cases — a hand-written implementation is only ever needed when the selector has to carry named state.
//!
//! # Absence
//! "No value" is always an [`Option`]: a parent lookup returns `None` for a root, a children lookup returns an empty sequence for a leaf, and individual child entries may themselves be `None` — every walker in the crate silently skips such entries. No sentinel node values are ever interpreted.
//!
//! # Equality
//! The only place where nodes are compared is sibling resolution, which excludes the start node from its own sibling set via the node type's [`PartialEq`]. If exclusion-of-self matters, the node type's equality has to be meaningful — the crate has no other notion of node identity.
//!
//! [`ParentSelector`]: trait.ParentSelector.html " "
//! [`ChildSelector`]: trait.ChildSelector.html " "
//! [`Option`]: https://doc.rust-lang.org/std/option/enum.Option.html " "
//! [`PartialEq`]: https://doc.rust-lang.org/std/cmp/trait.PartialEq.html " "

/// Types which can look up the parent of a node in a caller-owned hierarchy.
///
/// `None` marks a root node. Walkers call the selector only as elements are pulled — never at construction — and only as many times as positioning the walk on the demanded elements requires.
///
/// Implemented for every `FnMut(&T) -> Option<T>`, which is the intended way to supply one.
pub trait ParentSelector<T> {
    /// Returns the parent of the specified node, or `None` if it's a root node.
    fn parent_of(&mut self, node: &T) -> Option<T>;
}
impl<T, F> ParentSelector<T> for F
where
    F: FnMut(&T) -> Option<T>,
{
    #[inline(always)]
    fn parent_of(&mut self, node: &T) -> Option<T> {
        self(node)
    }
}

/// Types which can look up the children of a node in a caller-owned hierarchy.
///
/// An empty sequence marks a leaf node. Individual entries of the sequence may be `None` — absent children are a first-class part of the contract and are skipped by every consumer in the crate, in order, without disturbing the position of the present entries around them.
///
/// Implemented for every `FnMut(&T) -> I` where `I: IntoIterator<Item = Option<T>>`, which is the intended way to supply one.
pub trait ChildSelector<T> {
    /// The sequence of optional child nodes produced by a single lookup.
    type Children: IntoIterator<Item = Option<T>>;

    /// Returns the children of the specified node, empty if it's a leaf node.
    fn children_of(&mut self, node: &T) -> Self::Children;
}
impl<T, I, F> ChildSelector<T> for F
where
    I: IntoIterator<Item = Option<T>>,
    F: FnMut(&T) -> I,
{
    type Children = I;

    #[inline(always)]
    fn children_of(&mut self, node: &T) -> Self::Children {
        self(node)
    }
}
