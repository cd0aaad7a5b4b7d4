//! Shared helpers for the integration tests: tree generators and logging.
#![allow(dead_code)]

use slabtree::{NodeArena, NodeIndex};

/// Installs a `tracing` subscriber that writes through the test harness.
///
/// Set `RUST_LOG=slabtree=trace` to see arena growth and sequence edits.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds a balanced tree of `2^depth` leaves, each `2^width` items long,
/// covering content positions `0..2^(depth + width)` in order.
pub fn balanced_tree(depth: u32, width: u32) -> (NodeArena, NodeIndex) {
    let leaf_count = 1_u32 << depth;
    let leaf_length = 1_u32 << width;
    let mut arena = NodeArena::new();
    let mut level: Vec<NodeIndex> = (0..leaf_count)
        .map(|leaf| arena.add_leaf(leaf * leaf_length, leaf_length).unwrap())
        .collect();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| arena.add_branch(pair[0], pair[1]).unwrap())
            .collect();
    }
    (arena, level[0])
}

/// Builds a tree of `2^depth` leaves, each `2^width` items long, joined
/// bottom-up in an order driven by `picks`.
///
/// While more than `1 + |skew|` subtrees remain, two of them (chosen by the
/// next picks) are joined and the result goes back into the pool. The last
/// `|skew|` joins always put the shorter subtree on the left for a positive
/// skew and on the right for a negative one, which gives a lopsided top.
/// The leaves end up in a pick-dependent order.
pub fn unbalanced_tree(depth: u32, width: u32, picks: &[usize], skew: i32) -> (NodeArena, NodeIndex) {
    let leaf_count = 1_u32 << depth;
    let leaf_length = 1_u32 << width;
    let mut arena = NodeArena::new();
    let mut pool: Vec<NodeIndex> = (0..leaf_count)
        .map(|leaf| arena.add_leaf(leaf * leaf_length, leaf_length).unwrap())
        .collect();
    let mut next_pick = picks.iter().copied().cycle();
    let mut pick = |bound: usize| next_pick.next().unwrap_or(0) % bound;

    let settled = 1 + skew.unsigned_abs() as usize;
    while pool.len() > settled {
        let left = pool.swap_remove(pick(pool.len()));
        let right = pool.swap_remove(pick(pool.len()));
        pool.push(arena.add_branch(left, right).unwrap());
    }
    while pool.len() > 1 {
        let first = pool.remove(0);
        let second = pool.remove(0);
        let first_is_shorter = arena.length(first).unwrap() < arena.length(second).unwrap();
        let (left, right) = if first_is_shorter == (skew > 0) {
            (first, second)
        } else {
            (second, first)
        };
        pool.insert(0, arena.add_branch(left, right).unwrap());
    }
    (arena, pool[0])
}

/// Builds a tree over consecutive leaves with the given lengths, covering
/// content positions `0..sum(lengths)` in order. `picks` choose where each
/// run of leaves is split into a left and a right subtree.
pub fn shaped_tree(lengths: &[u32], picks: &[usize]) -> (NodeArena, NodeIndex) {
    let mut arena = NodeArena::new();
    let mut content_start = 0;
    let leaves: Vec<NodeIndex> = lengths
        .iter()
        .map(|&length| {
            let leaf = arena.add_leaf(content_start, length).unwrap();
            content_start += length;
            leaf
        })
        .collect();
    let root = join(&mut arena, &leaves, picks, 0);
    (arena, root)
}

fn join(arena: &mut NodeArena, leaves: &[NodeIndex], picks: &[usize], depth: usize) -> NodeIndex {
    if leaves.len() == 1 {
        return leaves[0];
    }
    let pick = if picks.is_empty() { 0 } else { picks[depth % picks.len()] };
    let split = 1 + pick % (leaves.len() - 1);
    let left = join(arena, &leaves[..split], picks, depth + 1);
    let right = join(arena, &leaves[split..], picks, depth + 1);
    arena.add_branch(left, right).unwrap()
}

/// Builds a fully left-leaning tree over consecutive leaves.
pub fn left_skewed_tree(lengths: &[u32]) -> (NodeArena, NodeIndex) {
    let mut arena = NodeArena::new();
    let mut content_start = 0;
    let mut root = None;
    for &length in lengths {
        let leaf = arena.add_leaf(content_start, length).unwrap();
        content_start += length;
        root = Some(match root {
            Some(previous) => arena.add_branch(previous, leaf).unwrap(),
            None => leaf,
        });
    }
    (arena, root.unwrap())
}

/// Flattens a subtree into `(content_start, length)` pairs.
pub fn flatten(arena: &NodeArena, root: NodeIndex) -> Vec<(u32, u32)> {
    arena
        .leaves(root)
        .unwrap()
        .map(|leaf| (leaf.content_start(), leaf.length()))
        .collect()
}
