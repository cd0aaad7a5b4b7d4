//! IAI-Callgrind benchmark for slabtree operations.
//!
//! Measures instruction counts for traversal and edits on fixed trees, so
//! regressions show up independently of machine noise.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use slabtree::{NodeArena, NodeIndex};
use std::hint::black_box;

fn balanced_tree(depth: u32) -> (NodeArena, NodeIndex) {
    let mut arena = NodeArena::new();
    let mut level: Vec<NodeIndex> = (0..1_u32 << depth)
        .map(|leaf| arena.add_leaf(leaf * 16, 16).unwrap())
        .collect();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| arena.add_branch(pair[0], pair[1]).unwrap())
            .collect();
    }
    (arena, level[0])
}

fn setup_tree_256() -> (NodeArena, NodeIndex) {
    balanced_tree(8)
}

fn setup_tree_4096() -> (NodeArena, NodeIndex) {
    balanced_tree(12)
}

#[library_benchmark]
#[bench::tree_256(setup_tree_256())]
#[bench::tree_4096(setup_tree_4096())]
fn positions_sum(tree: (NodeArena, NodeIndex)) -> u64 {
    let (arena, root) = tree;
    black_box(arena.positions(root).unwrap().map(u64::from).sum())
}

#[library_benchmark]
#[bench::tree_256(setup_tree_256())]
#[bench::tree_4096(setup_tree_4096())]
fn insert_middle(tree: (NodeArena, NodeIndex)) -> NodeIndex {
    let (mut arena, root) = tree;
    let length = arena.length(root).unwrap();
    let new_leaf = arena.add_leaf(length, 8).unwrap();
    black_box(arena.insert_into_node(root, length / 2 + 1, new_leaf).unwrap())
}

#[library_benchmark]
#[bench::tree_256(setup_tree_256())]
#[bench::tree_4096(setup_tree_4096())]
fn remove_middle(tree: (NodeArena, NodeIndex)) -> Option<NodeIndex> {
    let (mut arena, root) = tree;
    let length = arena.length(root).unwrap();
    black_box(arena.remove_from_node(root, length / 3, length / 3).unwrap())
}

library_benchmark_group!(
    name = slab_tree_group;
    benchmarks = positions_sum, insert_middle, remove_middle
);

main!(library_benchmark_groups = slab_tree_group);
