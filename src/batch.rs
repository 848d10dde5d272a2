//! Applying a walk to a whole sequence of start nodes.
//!
//! The module is home to the following items:
//! - [`BatchWalk`] — *an extension trait for iterators over nodes*, blanket-implemented, whose methods mirror the free functions of the [`traversal`] module
//! - [`BatchAncestors`], [`BatchDescendants`] and [`BatchSiblings`] — the concatenating adapters those methods return
//!
//! A batch walk runs the corresponding single-node walker for each start node, in input order, and concatenates the result sequences: all of one start node's results are yielded before any of the next one's, never interleaved. The navigation selectors are required to be [`Clone`] so that every start node gets its own walker; closures are `Clone` whenever their captures are.
//!
//! Laziness carries over from the single-node walkers: start nodes are consumed one at a time, and a walker for a start node is only constructed once every result of the previous start node has been pulled.
//!
//! [`BatchWalk`]: trait.BatchWalk.html " "
//! [`BatchAncestors`]: struct.BatchAncestors.html " "
//! [`BatchDescendants`]: struct.BatchDescendants.html " "
//! [`BatchSiblings`]: struct.BatchSiblings.html " "
//! [`traversal`]: ../traversal/index.html " "
//! [`Clone`]: https://doc.rust-lang.org/std/clone/trait.Clone.html " "

use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
};
use crate::select::{ParentSelector, ChildSelector};
use crate::traversal::{Ancestors, Siblings};
#[cfg(feature = "alloc")]
use crate::traversal::{Descendants, DescendStrategy, FailurePolicy};

/// An extension trait for iterators over nodes, walking the hierarchy from each of them in turn.
///
/// Blanket-implemented for every [`Iterator`]; bring it into scope and call the walk methods directly on a collection's iterator:
///
/// ```rust
/// use hierwalk::BatchWalk;
///
/// let parent_of = |node: &u32| match *node {
///     11 | 12 => Some(1),
///     111 => Some(11),
///     _ => None,
/// };
///
/// let chains: Vec<u32> = vec![111, 12].into_iter().ancestors(parent_of).collect();
/// // All of 111's ancestors precede all of 12's.
/// assert_eq!(chains, [11, 1, 1]);
/// ```
///
/// [`Iterator`]: https://doc.rust-lang.org/std/iter/trait.Iterator.html " "
pub trait BatchWalk: Iterator + Sized {
    /// Walks the ancestors of each node of this iterator, in input order, excluding the nodes themselves.
    #[inline]
    fn ancestors<P>(self, parent_of: P) -> BatchAncestors<Self, P>
    where
        P: ParentSelector<Self::Item> + Clone,
    {
        BatchAncestors::new(self, parent_of, false)
    }
    /// Walks each node of this iterator and then its ancestors, in input order.
    #[inline]
    fn ancestors_and_self<P>(self, parent_of: P) -> BatchAncestors<Self, P>
    where
        P: ParentSelector<Self::Item> + Clone,
    {
        BatchAncestors::new(self, parent_of, true)
    }
    /// Walks the descendants of each node of this iterator, in input order, excluding the nodes themselves.
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    #[inline]
    fn descendants<C>(self, children_of: C) -> BatchDescendants<Self, C>
    where
        C: ChildSelector<Self::Item> + Clone,
    {
        BatchDescendants::new(self, children_of, false)
    }
    /// Walks each node of this iterator and then its descendants, in input order.
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    #[inline]
    fn descendants_and_self<C>(self, children_of: C) -> BatchDescendants<Self, C>
    where
        C: ChildSelector<Self::Item> + Clone,
    {
        BatchDescendants::new(self, children_of, true)
    }
    /// Yields the siblings of each node of this iterator, in input order, excluding the nodes themselves.
    #[inline]
    fn siblings<P, C>(self, parent_of: P, children_of: C) -> BatchSiblings<Self, P, C>
    where
        P: ParentSelector<Self::Item> + Clone,
        C: ChildSelector<Self::Item> + Clone,
    {
        BatchSiblings::new(self, parent_of, children_of, false)
    }
    /// Yields the siblings of each node of this iterator including the node itself, in input order.
    #[inline]
    fn siblings_and_self<P, C>(self, parent_of: P, children_of: C) -> BatchSiblings<Self, P, C>
    where
        P: ParentSelector<Self::Item> + Clone,
        C: ChildSelector<Self::Item> + Clone,
    {
        BatchSiblings::new(self, parent_of, children_of, true)
    }
}
impl<I: Iterator> BatchWalk for I {}

/// An iterator concatenating ancestor walks from a sequence of start nodes.
pub struct BatchAncestors<I, P>
where
    I: Iterator,
    P: ParentSelector<I::Item> + Clone,
{
    starts: I,
    parent_of: P,
    include_self: bool,
    current: Option<Ancestors<I::Item, P>>,
}
impl<I, P> BatchAncestors<I, P>
where
    I: Iterator,
    P: ParentSelector<I::Item> + Clone,
{
    /// Creates a batch ancestor walk over the specified start nodes, yielding each start node itself first if `include_self` is `true`.
    #[inline]
    pub fn new(starts: I, parent_of: P, include_self: bool) -> Self {
        Self {
            starts,
            parent_of,
            include_self,
            current: None,
        }
    }
}
impl<I, P> Iterator for BatchAncestors<I, P>
where
    I: Iterator,
    P: ParentSelector<I::Item> + Clone,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(walker) = self.current.as_mut() {
                if let Some(node) = walker.next() {
                    return Some(node);
                }
                self.current = None;
            }
            let start = self.starts.next()?;
            self.current = Some(Ancestors::new(
                start,
                self.parent_of.clone(),
                self.include_self,
            ));
        }
    }
}
impl<I, P> FusedIterator for BatchAncestors<I, P>
where
    I: FusedIterator,
    P: ParentSelector<I::Item> + Clone,
{
}
impl<I, P> Debug for BatchAncestors<I, P>
where
    I: Iterator,
    I::Item: Debug,
    P: ParentSelector<I::Item> + Clone,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchAncestors")
            .field("include_self", &self.include_self)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

/// An iterator concatenating descendant walks from a sequence of start nodes.
///
/// The strategy and failure policy set with [`with_strategy`]/[`with_failure_policy`] apply to every per-node walk.
///
/// [`with_strategy`]: #method.with_strategy " "
/// [`with_failure_policy`]: #method.with_failure_policy " "
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub struct BatchDescendants<I, C>
where
    I: Iterator,
    C: ChildSelector<I::Item> + Clone,
{
    starts: I,
    children_of: C,
    strategy: DescendStrategy,
    failure_policy: FailurePolicy,
    include_self: bool,
    current: Option<Descendants<I::Item, C>>,
}
#[cfg(feature = "alloc")]
impl<I, C> BatchDescendants<I, C>
where
    I: Iterator,
    C: ChildSelector<I::Item> + Clone,
{
    /// Creates a batch descendant walk over the specified start nodes, yielding each start node itself first if `include_self` is `true`, with the default strategy and failure policy.
    #[inline]
    pub fn new(starts: I, children_of: C, include_self: bool) -> Self {
        Self {
            starts,
            children_of,
            strategy: DescendStrategy::default(),
            failure_policy: FailurePolicy::default(),
            include_self,
            current: None,
        }
    }
    /// Sets the visit order of every per-node walk. Only meaningful before the first pull.
    #[inline]
    #[must_use]
    pub fn with_strategy(mut self, strategy: DescendStrategy) -> Self {
        self.strategy = strategy;
        self
    }
    /// Sets the reaction to children selector panics of every per-node walk. Only meaningful before the first pull.
    #[inline]
    #[must_use]
    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }
}
#[cfg(feature = "alloc")]
impl<I, C> Iterator for BatchDescendants<I, C>
where
    I: Iterator,
    C: ChildSelector<I::Item> + Clone,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(walker) = self.current.as_mut() {
                if let Some(node) = walker.next() {
                    return Some(node);
                }
                self.current = None;
            }
            let start = self.starts.next()?;
            self.current = Some(
                Descendants::new(start, self.children_of.clone(), self.include_self)
                    .with_strategy(self.strategy)
                    .with_failure_policy(self.failure_policy),
            );
        }
    }
}
#[cfg(feature = "alloc")]
impl<I, C> FusedIterator for BatchDescendants<I, C>
where
    I: FusedIterator,
    C: ChildSelector<I::Item> + Clone,
{
}
#[cfg(feature = "alloc")]
impl<I, C> Debug for BatchDescendants<I, C>
where
    I: Iterator,
    I::Item: Debug,
    C: ChildSelector<I::Item> + Clone,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchDescendants")
            .field("strategy", &self.strategy)
            .field("failure_policy", &self.failure_policy)
            .field("include_self", &self.include_self)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

/// An iterator concatenating sibling walks from a sequence of start nodes.
pub struct BatchSiblings<I, P, C>
where
    I: Iterator,
    P: ParentSelector<I::Item> + Clone,
    C: ChildSelector<I::Item> + Clone,
{
    starts: I,
    parent_of: P,
    children_of: C,
    include_self: bool,
    current: Option<Siblings<I::Item, P, C>>,
}
impl<I, P, C> BatchSiblings<I, P, C>
where
    I: Iterator,
    P: ParentSelector<I::Item> + Clone,
    C: ChildSelector<I::Item> + Clone,
{
    /// Creates a batch sibling walk over the specified start nodes, yielding each start node's equals as well if `include_self` is `true`.
    #[inline]
    pub fn new(starts: I, parent_of: P, children_of: C, include_self: bool) -> Self {
        Self {
            starts,
            parent_of,
            children_of,
            include_self,
            current: None,
        }
    }
}
impl<I, P, C> Iterator for BatchSiblings<I, P, C>
where
    I: Iterator,
    I::Item: PartialEq,
    P: ParentSelector<I::Item> + Clone,
    C: ChildSelector<I::Item> + Clone,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(walker) = self.current.as_mut() {
                if let Some(node) = walker.next() {
                    return Some(node);
                }
                self.current = None;
            }
            let start = self.starts.next()?;
            self.current = Some(Siblings::new(
                start,
                self.parent_of.clone(),
                self.children_of.clone(),
                self.include_self,
            ));
        }
    }
}
impl<I, P, C> FusedIterator for BatchSiblings<I, P, C>
where
    I: FusedIterator,
    I::Item: PartialEq,
    P: ParentSelector<I::Item> + Clone,
    C: ChildSelector<I::Item> + Clone,
{
}
impl<I, P, C> Debug for BatchSiblings<I, P, C>
where
    I: Iterator,
    I::Item: Debug,
    P: ParentSelector<I::Item> + Clone,
    C: ChildSelector<I::Item> + Clone,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchSiblings")
            .field("include_self", &self.include_self)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
