use super::*;
use core::cell::Cell;
use std::collections::BTreeMap;

/// The node ids of the fixture tree. A node's parent is the node with the last
/// decimal digit dropped, so `1` is the root and `11121` sits under `1112`.
const NODES: &[u32] = &[
    1, 11, 111, 1111, 11111, 111111, 111112, 11112, 11113, 1112, 11121, 11122, 11123, 1113, 11131,
    11132, 112, 1121, 1122, 1123, 12, 121, 1211, 1212, 1213, 1214, 1215, 12151, 12152, 12153, 122,
    123, 1231, 1232, 13, 131, 1311, 1312, 132, 1321, 1322, 133, 1331, 13311, 133111, 133112, 1332,
];

struct Fixture {
    parents: BTreeMap<u32, u32>,
    children: BTreeMap<u32, Vec<u32>>,
}
impl Fixture {
    fn new() -> Self {
        let mut parents = BTreeMap::new();
        let mut children: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
        for &node in NODES {
            let parent = node / 10;
            if parent != 0 {
                parents.insert(node, parent);
                children.entry(parent).or_default().push(node);
            }
        }
        Self { parents, children }
    }
    fn parent_of(&self) -> impl Fn(&u32) -> Option<u32> + Clone + '_ {
        move |node| self.parents.get(node).copied()
    }
    fn children_of(&self) -> impl Fn(&u32) -> Vec<Option<u32>> + Clone + '_ {
        move |node| {
            self.children
                .get(node)
                .map(|c| c.iter().copied().map(Some).collect())
                .unwrap_or_default()
        }
    }
}

#[test]
fn ancestors_walk_the_parent_chain() {
    let fixture = Fixture::new();
    let chain: Vec<u32> = ancestors(1111, fixture.parent_of()).collect();
    assert_eq!(chain, [111, 11, 1]);
}
#[test]
fn ancestors_of_root_are_empty() {
    let fixture = Fixture::new();
    assert_eq!(ancestors(1, fixture.parent_of()).count(), 0);
    let just_root: Vec<u32> = ancestors_and_self(1, fixture.parent_of()).collect();
    assert_eq!(just_root, [1]);
}
#[test]
fn ancestors_and_self_yields_the_start_node_first() {
    let fixture = Fixture::new();
    let chain: Vec<u32> = ancestors_and_self(1111, fixture.parent_of()).collect();
    assert_eq!(chain, [1111, 111, 11, 1]);
}

#[test]
fn depth_first_descendants_are_pre_order() {
    let fixture = Fixture::new();
    let walk: Vec<u32> = descendants(1111, fixture.children_of()).collect();
    assert_eq!(walk, [11111, 111111, 111112, 11112, 11113]);
}
#[test]
fn breadth_first_descendants_are_level_order() {
    let fixture = Fixture::new();
    let walk: Vec<u32> = descendants(1111, fixture.children_of())
        .with_strategy(DescendStrategy::BreadthFirst)
        .collect();
    assert_eq!(walk, [11111, 11112, 11113, 111111, 111112]);
}
#[test]
fn descendants_and_self_yields_the_start_node_first() {
    let fixture = Fixture::new();
    let walk: Vec<u32> = descendants_and_self(1111, fixture.children_of()).collect();
    assert_eq!(walk, [1111, 11111, 111111, 111112, 11112, 11113]);

    let level_order: Vec<u32> = descendants_and_self(1111, fixture.children_of())
        .with_strategy(DescendStrategy::BreadthFirst)
        .collect();
    // No node may appear twice, in particular not the first level below the start.
    assert_eq!(level_order, [1111, 11111, 11112, 11113, 111111, 111112]);
}
#[test]
fn descendants_of_leaf_are_empty() {
    let fixture = Fixture::new();
    assert_eq!(descendants(111112, fixture.children_of()).count(), 0);
}
#[test]
fn strategies_visit_the_same_set() {
    let fixture = Fixture::new();
    let mut depth_first: Vec<u32> = descendants(1, fixture.children_of()).collect();
    let mut breadth_first: Vec<u32> = descendants(1, fixture.children_of())
        .with_strategy(DescendStrategy::BreadthFirst)
        .collect();
    assert_eq!(depth_first.len(), NODES.len() - 1);
    depth_first.sort_unstable();
    breadth_first.sort_unstable();
    assert_eq!(depth_first, breadth_first);
}
#[test]
fn absent_child_entries_are_skipped() {
    let children_of = |node: &u32| -> Vec<Option<u32>> {
        match *node {
            1 => vec![None, Some(11), None, Some(12), None],
            11 => vec![Some(111), None],
            _ => Vec::new(),
        }
    };
    let depth_first: Vec<u32> = descendants(1, children_of).collect();
    assert_eq!(depth_first, [11, 111, 12]);
    let breadth_first: Vec<u32> = descendants(1, children_of)
        .with_strategy(DescendStrategy::BreadthFirst)
        .collect();
    assert_eq!(breadth_first, [11, 12, 111]);
}

#[test]
fn early_termination_stops_children_lookups() {
    let fixture = Fixture::new();
    let lookups = Cell::new(0_usize);
    let children_of = fixture.children_of();
    let counted = |node: &u32| {
        lookups.set(lookups.get() + 1);
        children_of(node)
    };
    let prefix: Vec<u32> = descendants_and_self(1, counted).take(3).collect();
    assert_eq!(prefix, [1, 11, 111]);
    // One lookup per pulled element, nothing beyond the demanded prefix.
    assert_eq!(lookups.get(), 3);
}
#[test]
fn reiteration_repeats_selector_side_effects() {
    let fixture = Fixture::new();
    let lookups = Cell::new(0_usize);
    let children_of = fixture.children_of();
    let counted = |node: &u32| {
        lookups.set(lookups.get() + 1);
        children_of(node)
    };
    let first_run = descendants_and_self(1, counted.clone()).count();
    let second_run = descendants_and_self(1, counted).count();
    assert_eq!(first_run, NODES.len());
    assert_eq!(second_run, NODES.len());
    assert_eq!(lookups.get(), NODES.len() * 2);
}

#[test]
#[should_panic(expected = "children lookup failed")]
fn strict_policy_propagates_selector_panics() {
    let children_of = |node: &u32| -> Vec<Option<u32>> {
        match *node {
            1 => vec![Some(11), Some(12)],
            11 => panic!("children lookup failed"),
            _ => Vec::new(),
        }
    };
    let _: Vec<u32> = descendants(1, children_of).collect();
}
#[cfg(feature = "unwind_safety")]
#[test]
fn defensive_policy_treats_failing_nodes_as_leaves() {
    let children_of = |node: &u32| -> Vec<Option<u32>> {
        match *node {
            1 => vec![Some(11), Some(12)],
            11 => panic!("children lookup failed"),
            12 => vec![Some(121)],
            _ => Vec::new(),
        }
    };
    let walk: Vec<u32> = descendants(1, children_of)
        .with_failure_policy(FailurePolicy::Defensive)
        .collect();
    // 11's subtree is sealed off, its siblings are unaffected.
    assert_eq!(walk, [11, 12, 121]);
}

#[test]
fn siblings_exclude_the_start_node() {
    let fixture = Fixture::new();
    let set: Vec<u32> = siblings(11112, fixture.parent_of(), fixture.children_of()).collect();
    assert_eq!(set, [11111, 11113]);
}
#[test]
fn siblings_and_self_yield_the_whole_brood() {
    let fixture = Fixture::new();
    let set: Vec<u32> =
        siblings_and_self(11112, fixture.parent_of(), fixture.children_of()).collect();
    assert_eq!(set, [11111, 11112, 11113]);
}
#[test]
fn siblings_of_root() {
    let fixture = Fixture::new();
    assert_eq!(
        siblings(1, fixture.parent_of(), fixture.children_of()).count(),
        0,
    );
    let just_root: Vec<u32> =
        siblings_and_self(1, fixture.parent_of(), fixture.children_of()).collect();
    assert_eq!(just_root, [1]);
}
#[test]
fn sibling_exclusion_is_by_equality_not_position() {
    let parent_of = |node: &u32| if *node == 1 { None } else { Some(1) };
    // 2 appears among its parent's children twice; excluding it must drop
    // both occurrences, and absent entries must vanish as usual.
    let children_of = |node: &u32| -> Vec<Option<u32>> {
        if *node == 1 {
            vec![Some(2), None, Some(3), Some(2)]
        } else {
            Vec::new()
        }
    };
    let set: Vec<u32> = siblings(2, parent_of, children_of).collect();
    assert_eq!(set, [3]);
    let full: Vec<u32> = siblings_and_self(2, parent_of, children_of).collect();
    assert_eq!(full, [2, 3, 2]);
}

#[test]
fn walkers_are_fused() {
    let fixture = Fixture::new();
    let mut chain = ancestors(1, fixture.parent_of());
    assert_eq!(chain.next(), None);
    assert_eq!(chain.next(), None);

    let mut walk = descendants(111112, fixture.children_of());
    assert_eq!(walk.next(), None);
    assert_eq!(walk.next(), None);
    assert_eq!(walk.size_hint(), (0, Some(0)));

    let mut set = siblings(1, fixture.parent_of(), fixture.children_of());
    assert_eq!(set.next(), None);
    assert_eq!(set.next(), None);
    assert_eq!(set.size_hint(), (0, Some(0)));
}

#[test]
fn strategy_names_parse_and_display() {
    assert_eq!(
        "depth-first".parse::<DescendStrategy>(),
        Ok(DescendStrategy::DepthFirst),
    );
    assert_eq!(
        "breadth-first".parse::<DescendStrategy>(),
        Ok(DescendStrategy::BreadthFirst),
    );
    assert_eq!(DescendStrategy::BreadthFirst.to_string(), "breadth-first");

    let error = "sideways"
        .parse::<DescendStrategy>()
        .expect_err("parsing an unknown strategy name must fail");
    assert_eq!(error.name, "sideways");
    assert_eq!(
        error.to_string(),
        "unrecognized descend strategy `sideways`",
    );
}
