use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
    mem,
};
use crate::select::{ParentSelector, ChildSelector};

/// An iterator over the siblings of a node — the children of its parent, in the children selector's order.
///
/// Construct with [`siblings`]/[`siblings_and_self`], or with [`new`] if the `include_self` flag is only known at runtime.
///
/// The walk performs no lookup before the first pull. The first pull performs the single parent lookup and, unless the start node is a root, the single children lookup on the parent; subsequent pulls only advance through the already-obtained children sequence. When the start node is excluded, *every* child which compares equal to it is skipped, not just the first occurrence — exclusion is by equality, not by position.
///
/// [`siblings`]: fn.siblings.html " "
/// [`siblings_and_self`]: fn.siblings_and_self.html " "
/// [`new`]: #method.new " "
pub struct Siblings<T, P, C>
where
    P: ParentSelector<T>,
    C: ChildSelector<T>,
{
    parent_of: P,
    children_of: C,
    state: State<T, <C::Children as IntoIterator>::IntoIter>,
}
enum State<T, I> {
    Unstarted { start: T, include_self: bool },
    Walking { children: I, exclude: Option<T> },
    Finished,
}
impl<T, P, C> Siblings<T, P, C>
where
    P: ParentSelector<T>,
    C: ChildSelector<T>,
{
    /// Creates a sibling walk for the specified node, yielding children of its parent equal to the node itself as well if `include_self` is `true`.
    #[inline]
    pub fn new(start: T, parent_of: P, children_of: C, include_self: bool) -> Self {
        Self {
            parent_of,
            children_of,
            state: State::Unstarted {
                start,
                include_self,
            },
        }
    }
}
impl<T, P, C> Iterator for Siblings<T, P, C>
where
    T: PartialEq,
    P: ParentSelector<T>,
    C: ChildSelector<T>,
{
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match mem::replace(&mut self.state, State::Finished) {
                State::Unstarted {
                    start,
                    include_self,
                } => match self.parent_of.parent_of(&start) {
                    None => {
                        // A root keeps no company: it is its own entire
                        // sibling set, or nothing at all.
                        return if include_self { Some(start) } else { None };
                    }
                    Some(parent) => {
                        let children = self.children_of.children_of(&parent).into_iter();
                        let exclude = if include_self { None } else { Some(start) };
                        self.state = State::Walking { children, exclude };
                    }
                },
                State::Walking {
                    mut children,
                    exclude,
                } => {
                    while let Some(entry) = children.next() {
                        let node = match entry {
                            Some(node) => node,
                            None => continue,
                        };
                        if exclude.as_ref() == Some(&node) {
                            continue;
                        }
                        self.state = State::Walking { children, exclude };
                        return Some(node);
                    }
                    return None;
                }
                State::Finished => return None,
            }
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Unstarted { .. } => (0, None),
            State::Walking { children, .. } => (0, children.size_hint().1),
            State::Finished => (0, Some(0)),
        }
    }
}
impl<T, P, C> FusedIterator for Siblings<T, P, C>
where
    T: PartialEq,
    P: ParentSelector<T>,
    C: ChildSelector<T>,
{
}
impl<T, P, C> Debug for Siblings<T, P, C>
where
    T: Debug,
    P: ParentSelector<T>,
    C: ChildSelector<T>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Siblings")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
impl<T: Debug, I> Debug for State<T, I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unstarted {
                start,
                include_self,
            } => f
                .debug_struct("Unstarted")
                .field("start", start)
                .field("include_self", include_self)
                .finish(),
            Self::Walking { exclude, .. } => f
                .debug_struct("Walking")
                .field("exclude", exclude)
                .finish_non_exhaustive(),
            Self::Finished => f.pad("Finished"),
        }
    }
}
