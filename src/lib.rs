//! Implements lazy traversal of caller-defined hierarchies and interfaces to work with them.
//!
//! ------------------------
//!
//! # Overview
//! Hierwalk does not own, store or construct any tree — the shape of the hierarchy is entirely opaque to it. Callers hand over *navigation functions*: a parent selector (`&T -> Option<T>`) and/or a children selector (`&T -> IntoIterator<Item = Option<T>>`) over their own node type, and the crate derives the interesting walks from those two edges alone:
//! - [`ancestors`] — the chain from a node's parent up to the root,
//! - [`descendants`] — the subtree below a node, in pre-order ([`DepthFirst`]) or level-order ([`BreadthFirst`]),
//! - [`siblings`] — the other children of a node's parent,
//! - [`BatchWalk`] — any of the above applied to a whole sequence of start nodes, concatenated in input order.
//!
//! Every walk is a plain pull-based [`Iterator`]: no part of the hierarchy is visited until the consumer asks for the next element, which makes early termination free even on very large or unbounded structures. Nothing is cached — iterating a second time means constructing the walker again and re-runs the navigation functions, side effects included.
//!
//! ```rust
//! use hierwalk::{ancestors, descendants, DescendStrategy};
//!
//! // Navigation over a tiny fixed hierarchy; any caller-owned structure works
//! // the same way, the crate only ever sees these two functions.
//! let parent_of = |node: &u32| match *node {
//!     11 | 12 => Some(1),
//!     111 => Some(11),
//!     _ => None,
//! };
//! let children_of = |node: &u32| -> Vec<Option<u32>> {
//!     match *node {
//!         1 => vec![Some(11), Some(12)],
//!         11 => vec![Some(111)],
//!         _ => Vec::new(),
//!     }
//! };
//!
//! let chain: Vec<u32> = ancestors(111, parent_of).collect();
//! assert_eq!(chain, [11, 1]);
//!
//! let pre_order: Vec<u32> = descendants(1, children_of.clone()).collect();
//! assert_eq!(pre_order, [11, 111, 12]);
//!
//! let level_order: Vec<u32> = descendants(1, children_of)
//!     .with_strategy(DescendStrategy::BreadthFirst)
//!     .collect();
//! assert_eq!(level_order, [11, 12, 111]);
//! ```
//!
//! # Well-formedness
//! The crate performs no validation of the structure it is pointed at. The parent and children selectors are never cross-checked for consistency, and cycles are not detected — walking the ancestors or descendants of a node inside a cycle simply never terminates. Cycle detection would require node identity tracking the crate does not own, so well-formed input is the caller's contract to uphold.
//!
//! # Failure policy
//! Descendant walks take an explicit [`FailurePolicy`]: under [`Strict`] (the default), a panic raised by the children selector unwinds to the consumer; under [`Defensive`], it is caught and the offending node is treated as having no children. The policy deliberately exists for descendant walks only — see the documentation on [`FailurePolicy`] for the reasoning.
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for some types.
//! - `alloc` (**enabled by default**) — enables descendant walks (which need heap-allocated queue storage) and strategy parsing. *This does not require standard library support and will only panic at runtime in `no_std` environments without an allocator.*
//! - `unwind_safety` (**enabled by default**, implies `std`) — enables the [`Defensive`] failure policy, which is implemented in terms of [`catch_unwind`].
//!
//! [`ancestors`]: traversal/fn.ancestors.html " "
//! [`descendants`]: traversal/fn.descendants.html " "
//! [`siblings`]: traversal/fn.siblings.html " "
//! [`BatchWalk`]: batch/trait.BatchWalk.html " "
//! [`DepthFirst`]: traversal/enum.DescendStrategy.html#variant.DepthFirst " "
//! [`BreadthFirst`]: traversal/enum.DescendStrategy.html#variant.BreadthFirst " "
//! [`FailurePolicy`]: traversal/enum.FailurePolicy.html " "
//! [`Strict`]: traversal/enum.FailurePolicy.html#variant.Strict " "
//! [`Defensive`]: traversal/enum.FailurePolicy.html#variant.Defensive " "
//! [`Iterator`]: https://doc.rust-lang.org/std/iter/trait.Iterator.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`catch_unwind`]: https://doc.rust-lang.org/std/panic/fn.catch_unwind.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod select;
#[doc(no_inline)]
pub use select::{ParentSelector, ChildSelector};

pub mod traversal;
#[doc(no_inline)]
pub use traversal::{
    ancestors, ancestors_and_self, Ancestors,
    siblings, siblings_and_self, Siblings,
};
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
#[doc(no_inline)]
pub use traversal::{
    descendants, descendants_and_self, Descendants,
    DescendStrategy, FailurePolicy, UnknownStrategyError,
};

pub mod batch;
#[doc(no_inline)]
pub use batch::BatchWalk;

/// A prelude for using Hierwalk, containing the most used items in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::select::{ParentSelector, ChildSelector};
    #[doc(no_inline)]
    pub use crate::traversal::{
        ancestors, ancestors_and_self,
        siblings, siblings_and_self,
        Ancestors as AncestorsIter,
        Siblings as SiblingsIter,
    };
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    #[doc(no_inline)]
    pub use crate::traversal::{
        descendants, descendants_and_self,
        Descendants as DescendantsIter,
        DescendStrategy, FailurePolicy,
    };
    #[doc(no_inline)]
    pub use crate::batch::BatchWalk;
}
