use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
    mem,
};
use crate::select::ParentSelector;

/// An iterator over the ancestors of a node, from its parent up to the root.
///
/// Construct with [`ancestors`]/[`ancestors_and_self`], or with [`new`] if the `include_self` flag is only known at runtime.
///
/// The walk performs no parent lookup before the first pull. Pulling an element performs the lookup which positions the walk on the following ancestor (the first pull additionally locates the starting ancestor when the start node is excluded), so stopping early leaves the rest of the chain untouched. If the parent relation is cyclic, the walk never terminates.
///
/// [`ancestors`]: fn.ancestors.html " "
/// [`ancestors_and_self`]: fn.ancestors_and_self.html " "
/// [`new`]: #method.new " "
pub struct Ancestors<T, P>
where
    P: ParentSelector<T>,
{
    parent_of: P,
    state: State<T>,
}
#[derive(Clone, Debug)]
enum State<T> {
    Unstarted { start: T, include_self: bool },
    Walking(Option<T>),
}
impl<T, P> Ancestors<T, P>
where
    P: ParentSelector<T>,
{
    /// Creates an ancestor walk from the specified node, yielding the node itself first if `include_self` is `true`.
    #[inline]
    pub fn new(start: T, parent_of: P, include_self: bool) -> Self {
        Self {
            parent_of,
            state: State::Unstarted {
                start,
                include_self,
            },
        }
    }
}
impl<T, P> Iterator for Ancestors<T, P>
where
    P: ParentSelector<T>,
{
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        let current = match mem::replace(&mut self.state, State::Walking(None)) {
            State::Unstarted {
                start,
                include_self,
            } => {
                if include_self {
                    Some(start)
                } else {
                    self.parent_of.parent_of(&start)
                }
            }
            State::Walking(node) => node,
        };
        let current = current?;
        // The lookup for the next element has to happen while the current one
        // is still borrowable, since it's moved out to the consumer below.
        self.state = State::Walking(self.parent_of.parent_of(&current));
        Some(current)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Unstarted {
                include_self: true, ..
            }
            | State::Walking(Some(..)) => (1, None),
            State::Unstarted {
                include_self: false,
                ..
            } => (0, None),
            State::Walking(None) => (0, Some(0)),
        }
    }
}
impl<T, P> FusedIterator for Ancestors<T, P> where P: ParentSelector<T> {}
impl<T, P> Debug for Ancestors<T, P>
where
    T: Debug,
    P: ParentSelector<T>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ancestors")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
