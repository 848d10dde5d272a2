//! The walks themselves: ancestor chains, descendant walks and sibling sets.
//!
//! The module is home to the following items:
//! - [`Ancestors`], [`Descendants`] and [`Siblings`] — *the three walker iterators*, each driven purely by the navigation functions from the [`select`] module
//! - [`DescendStrategy`] and [`FailurePolicy`] — configuration for descendant walks
//! - [`UnknownStrategyError`] — the failure of parsing a strategy name
//! - Free functions ([`ancestors`], [`descendants`], [`siblings`] and their `_and_self` counterparts) constructing the walkers with the usual defaults
//!
//! The `_and_self` functions are aliases which include the start node itself in the walk; they are otherwise identical to their plain counterparts.
//!
//! All walkers share the same laziness contract: constructing one calls no navigation function at all, and each pulled element costs the bounded number of lookups documented on its walker. A walker which is dropped early never looks at the rest of the hierarchy.
//!
//! [`Ancestors`]: struct.Ancestors.html " "
//! [`Descendants`]: struct.Descendants.html " "
//! [`Siblings`]: struct.Siblings.html " "
//! [`DescendStrategy`]: enum.DescendStrategy.html " "
//! [`FailurePolicy`]: enum.FailurePolicy.html " "
//! [`UnknownStrategyError`]: struct.UnknownStrategyError.html " "
//! [`ancestors`]: fn.ancestors.html " "
//! [`descendants`]: fn.descendants.html " "
//! [`siblings`]: fn.siblings.html " "
//! [`select`]: ../select/index.html " "

mod ancestors;
#[cfg(feature = "alloc")]
mod descendants;
mod siblings;

pub use self::ancestors::Ancestors;
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub use self::descendants::{Descendants, DescendStrategy, FailurePolicy, UnknownStrategyError};
pub use self::siblings::Siblings;

#[cfg(test)]
mod tests;

use crate::select::{ParentSelector, ChildSelector};

/// Walks from the specified node towards the root, yielding each ancestor in order, excluding the node itself.
///
/// A start node whose parent lookup returns `None` produces an empty walk.
#[inline]
pub fn ancestors<T, P>(start: T, parent_of: P) -> Ancestors<T, P>
where
    P: ParentSelector<T>,
{
    Ancestors::new(start, parent_of, false)
}
/// Walks from the specified node towards the root, yielding the node itself first and then each ancestor in order.
///
/// A start node whose parent lookup returns `None` produces a walk of exactly one element — the node itself.
#[inline]
pub fn ancestors_and_self<T, P>(start: T, parent_of: P) -> Ancestors<T, P>
where
    P: ParentSelector<T>,
{
    Ancestors::new(start, parent_of, true)
}

/// Walks the subtree below the specified node, excluding the node itself, in depth-first pre-order with the strict failure policy.
///
/// Use [`with_strategy`] and [`with_failure_policy`] on the returned walker to configure it before iterating.
///
/// [`with_strategy`]: struct.Descendants.html#method.with_strategy " "
/// [`with_failure_policy`]: struct.Descendants.html#method.with_failure_policy " "
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
#[inline]
pub fn descendants<T, C>(start: T, children_of: C) -> Descendants<T, C>
where
    C: ChildSelector<T>,
{
    Descendants::new(start, children_of, false)
}
/// Walks the specified node and the subtree below it, the node itself first, in depth-first pre-order with the strict failure policy.
///
/// Use [`with_strategy`] and [`with_failure_policy`] on the returned walker to configure it before iterating.
///
/// [`with_strategy`]: struct.Descendants.html#method.with_strategy " "
/// [`with_failure_policy`]: struct.Descendants.html#method.with_failure_policy " "
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
#[inline]
pub fn descendants_and_self<T, C>(start: T, children_of: C) -> Descendants<T, C>
where
    C: ChildSelector<T>,
{
    Descendants::new(start, children_of, true)
}

/// Yields the other children of the specified node's parent, in the children selector's order, excluding every child equal to the node itself.
///
/// A start node whose parent lookup returns `None` produces an empty walk.
#[inline]
pub fn siblings<T, P, C>(start: T, parent_of: P, children_of: C) -> Siblings<T, P, C>
where
    P: ParentSelector<T>,
    C: ChildSelector<T>,
{
    Siblings::new(start, parent_of, children_of, false)
}
/// Yields all children of the specified node's parent, in the children selector's order, including the node itself.
///
/// A start node whose parent lookup returns `None` produces a walk of exactly one element — the node itself.
#[inline]
pub fn siblings_and_self<T, P, C>(start: T, parent_of: P, children_of: C) -> Siblings<T, P, C>
where
    P: ParentSelector<T>,
    C: ChildSelector<T>,
{
    Siblings::new(start, parent_of, children_of, true)
}
