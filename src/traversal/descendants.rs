use core::{
    fmt::{self, Formatter, Debug, Display},
    iter::FusedIterator,
    str::FromStr,
};
use alloc::{collections::VecDeque, string::String, vec::Vec};
use crate::select::ChildSelector;

/// The order in which a descendant walk visits the subtree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DescendStrategy {
    /// Pre-order: a node is yielded before any of its descendants, and a child's entire subtree is exhausted before its next sibling is yielded.
    DepthFirst,
    /// Level-order: every node at a given depth is yielded before any node one level deeper, each node exactly once.
    BreadthFirst,
}
impl Default for DescendStrategy {
    /// Returns [`DepthFirst`].
    ///
    /// [`DepthFirst`]: #variant.DepthFirst " "
    #[inline(always)]
    fn default() -> Self {
        Self::DepthFirst
    }
}
impl Display for DescendStrategy {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::DepthFirst => "depth-first",
            Self::BreadthFirst => "breadth-first",
        })
    }
}
impl FromStr for DescendStrategy {
    type Err = UnknownStrategyError;
    /// Parses `"depth-first"` or `"breadth-first"`, the exact strings produced by the `Display` implementation.
    ///
    /// # Errors
    /// Any other input fails with [`UnknownStrategyError`], carrying the offending string.
    ///
    /// [`UnknownStrategyError`]: struct.UnknownStrategyError.html " "
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "depth-first" => Ok(Self::DepthFirst),
            "breadth-first" => Ok(Self::BreadthFirst),
            _ => Err(UnknownStrategyError { name: s.into() }),
        }
    }
}

/// The error type returned when parsing a string which names no known descend strategy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnknownStrategyError {
    /// The string which was supplied as a strategy name.
    pub name: String,
}
impl Display for UnknownStrategyError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized descend strategy `{}`", self.name)
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for UnknownStrategyError {}

/// How a descendant walk reacts to the children selector panicking.
///
/// The policy exists for descendant walks only: ancestor and sibling walks always propagate selector panics. The asymmetry is inherited deliberately — a children selector commonly dereferences through optional links where a single absent hop poisons the whole lookup, while parent lookups are a single hop to begin with, so papering over their failures would hide genuine caller bugs rather than absent data.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
    /// A panic raised while evaluating the children selector unwinds to the consumer of the walk.
    Strict,
    /// A panic raised while evaluating the children selector is caught and the node is treated as having no children.
    ///
    /// The walk itself stays coherent: everything yielded before the failure is unaffected, and the walk continues past the offending node's siblings.
    #[cfg(feature = "unwind_safety")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "unwind_safety")))]
    Defensive,
}
impl Default for FailurePolicy {
    /// Returns [`Strict`].
    ///
    /// [`Strict`]: #variant.Strict " "
    #[inline(always)]
    fn default() -> Self {
        Self::Strict
    }
}

/// An iterator over the descendants of a node, in depth-first or breadth-first order.
///
/// Construct with [`descendants`]/[`descendants_and_self`], or with [`new`] if the `include_self` flag is only known at runtime; configure with [`with_strategy`] and [`with_failure_policy`] before the first pull.
///
/// The walk performs no children lookup before the first pull. The children of a node are looked up at the moment that node is yielded (or, for a start node excluded from the walk, on the first pull), one lookup per pulled element — a consumer which stops pulling leaves the rest of the subtree untouched. If the children relation is cyclic, the walk never terminates.
///
/// [`descendants`]: fn.descendants.html " "
/// [`descendants_and_self`]: fn.descendants_and_self.html " "
/// [`new`]: #method.new " "
/// [`with_strategy`]: #method.with_strategy " "
/// [`with_failure_policy`]: #method.with_failure_policy " "
pub struct Descendants<T, C>
where
    C: ChildSelector<T>,
{
    children_of: C,
    strategy: DescendStrategy,
    failure_policy: FailurePolicy,
    include_self: bool,
    start: Option<T>,
    // Doubles as the depth-first stack (worked from the front) and the
    // breadth-first queue (pushed to the back).
    work: VecDeque<T>,
}
impl<T, C> Descendants<T, C>
where
    C: ChildSelector<T>,
{
    /// Creates a descendant walk from the specified node, yielding the node itself first if `include_self` is `true`, with the default strategy and failure policy.
    #[inline]
    pub fn new(start: T, children_of: C, include_self: bool) -> Self {
        Self {
            children_of,
            strategy: DescendStrategy::default(),
            failure_policy: FailurePolicy::default(),
            include_self,
            start: Some(start),
            work: VecDeque::new(),
        }
    }
    /// Sets the visit order of the walk. Only meaningful before the first pull.
    #[inline]
    #[must_use]
    pub fn with_strategy(mut self, strategy: DescendStrategy) -> Self {
        self.strategy = strategy;
        self
    }
    /// Sets the reaction to children selector panics. Only meaningful before the first pull.
    #[inline]
    #[must_use]
    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    /// Evaluates the children selector under the configured failure policy, dropping absent entries.
    fn fetch_children(&mut self, node: &T) -> Vec<T> {
        let children_of = &mut self.children_of;
        match self.failure_policy {
            FailurePolicy::Strict => collect_present(children_of, node),
            #[cfg(feature = "unwind_safety")]
            FailurePolicy::Defensive => std::panic::catch_unwind(
                std::panic::AssertUnwindSafe(|| collect_present(children_of, node)),
            )
            .unwrap_or_default(),
        }
    }
}
fn collect_present<T, C>(children_of: &mut C, node: &T) -> Vec<T>
where
    C: ChildSelector<T>,
{
    children_of.children_of(node).into_iter().flatten().collect()
}
impl<T, C> Iterator for Descendants<T, C>
where
    C: ChildSelector<T>,
{
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            if self.include_self {
                self.work.push_back(start);
            } else {
                let children = self.fetch_children(&start);
                self.work.extend(children);
            }
        }
        let node = self.work.pop_front()?;
        let children = self.fetch_children(&node);
        match self.strategy {
            DescendStrategy::DepthFirst => {
                for child in children.into_iter().rev() {
                    self.work.push_front(child);
                }
            }
            DescendStrategy::BreadthFirst => self.work.extend(children),
        }
        Some(node)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.start.is_some() {
            (self.work.len() + usize::from(self.include_self), None)
        } else if self.work.is_empty() {
            (0, Some(0))
        } else {
            (self.work.len(), None)
        }
    }
}
impl<T, C> FusedIterator for Descendants<T, C> where C: ChildSelector<T> {}
impl<T, C> Debug for Descendants<T, C>
where
    T: Debug,
    C: ChildSelector<T>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descendants")
            .field("strategy", &self.strategy)
            .field("failure_policy", &self.failure_policy)
            .field("include_self", &self.include_self)
            .field("start", &self.start)
            .field("work", &self.work)
            .finish_non_exhaustive()
    }
}
