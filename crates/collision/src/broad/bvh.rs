//! Median-split bounding-volume hierarchy over a tick snapshot.
//!
//! [`Bvh::build`] consumes a flat entry array and partitions it in place;
//! no entry is ever copied out of the array. A tree over `N` entries
//! allocates exactly `2N - 1` nodes up front. Rebuilding from scratch each
//! tick is a deliberate tradeoff: O(N log N) per tick buys a simple,
//! reproducible structure with no refit bookkeeping, acceptable while N
//! stays small.

use glam::Vec3;

use crate::bounds::Aabb;

/// Nudge added to the median so the in-place partition terminates even
/// when every position shares the split coordinate.
const SPLIT_EPSILON: f32 = 1e-6;

/// Sentinel child index for leaves.
pub const NO_CHILD: usize = usize::MAX;

/// One snapshot entry: a position, its bounds, and the caller's payload
/// (typically a shape index).
#[derive(Debug, Clone, Copy)]
pub struct BvhEntry {
    pub position: Vec3,
    pub bounds: Aabb<Vec3>,
    pub payload: usize,
}

/// Tree node. A leaf covers the contiguous entry run
/// `start..start + count`; an internal node holds two children whose
/// bounds it encloses. `start`/`count` stay valid for internal nodes too
/// (the union of both children's runs).
#[derive(Debug, Clone, Copy)]
pub struct BvhNode {
    pub bounds: Aabb<Vec3>,
    pub left: usize,
    pub right: usize,
    pub start: usize,
    pub count: usize,
}

impl BvhNode {
    pub fn is_leaf(&self) -> bool {
        self.left == NO_CHILD
    }
}

/// Static bounding-volume hierarchy; see the module docs.
#[derive(Debug, Default)]
pub struct Bvh {
    pub nodes: Vec<BvhNode>,
    pub entries: Vec<BvhEntry>,
}

impl Bvh {
    /// Build an index over `entries`. An empty slice builds an empty tree;
    /// querying it returns nothing.
    pub fn build(entries: Vec<BvhEntry>) -> Self {
        let n = entries.len();
        let mut bvh = Self {
            nodes: Vec::with_capacity(if n == 0 { 0 } else { 2 * n - 1 }),
            entries,
        };
        if n > 0 {
            bvh.build_node(0, n);
        }
        tracing::trace!(entries = n, nodes = bvh.nodes.len(), "bvh rebuilt");
        bvh
    }

    fn build_node(&mut self, start: usize, count: usize) -> usize {
        let mut bounds = Aabb::inverted();
        for entry in &self.entries[start..start + count] {
            bounds = bounds.union(entry.bounds);
        }

        let index = self.nodes.len();
        self.nodes.push(BvhNode {
            bounds,
            left: NO_CHILD,
            right: NO_CHILD,
            start,
            count,
        });
        if count == 1 {
            return index;
        }

        // Two entries split into singleton leaves unconditionally; larger
        // runs split at the position median of the widest axis.
        let left_count = if count == 2 {
            1
        } else {
            let axis = bounds.largest_axis();
            let mut axis_values: Vec<f32> = self.entries[start..start + count]
                .iter()
                .map(|e| e.position[axis])
                .collect();
            axis_values.sort_by(f32::total_cmp);
            let split_pos = axis_values[count / 2] + SPLIT_EPSILON;

            let mut i = start;
            let mut j = start + count - 1;
            while i < j {
                if self.entries[i].position[axis] < split_pos {
                    i += 1;
                } else {
                    self.entries.swap(i, j);
                    j -= 1;
                }
            }
            let mut left = i - start;
            if self.entries[i].position[axis] < split_pos {
                left += 1;
            }
            // Neither child may be empty.
            left.clamp(1, count - 1)
        };

        let left = self.build_node(start, left_count);
        let right = self.build_node(start + left_count, count - left_count);
        self.nodes[index].left = left;
        self.nodes[index].right = right;
        index
    }

    /// Payloads of every entry whose bounds might intersect `region`.
    /// Conservative: false positives allowed, false negatives never.
    pub fn query(&self, region: &Aabb<Vec3>) -> Vec<usize> {
        let mut out = Vec::new();
        self.query_callback(region, |payload| out.push(payload));
        out
    }

    /// Allocation-light query variant.
    pub fn query_callback<F: FnMut(usize)>(&self, region: &Aabb<Vec3>, mut visit: F) {
        if !self.nodes.is_empty() {
            self.query_node(0, region, &mut visit);
        }
    }

    fn query_node<F: FnMut(usize)>(&self, node: usize, region: &Aabb<Vec3>, visit: &mut F) {
        let node = &self.nodes[node];
        if !node.bounds.intersects(region) {
            return;
        }
        if node.is_leaf() {
            for entry in &self.entries[node.start..node.start + node.count] {
                if entry.bounds.intersects(region) {
                    visit(entry.payload);
                }
            }
        } else {
            self.query_node(node.left, region, visit);
            self.query_node(node.right, region, visit);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> BvhStats {
        let mut stats = BvhStats {
            node_count: self.nodes.len(),
            entry_count: self.entries.len(),
            ..BvhStats::default()
        };
        for node in &self.nodes {
            if node.is_leaf() {
                stats.leaf_count += 1;
                stats.max_leaf_entries = stats.max_leaf_entries.max(node.count);
            }
        }
        stats
    }
}

/// Structure counters, mostly for diagnostics and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct BvhStats {
    pub node_count: usize,
    pub leaf_count: usize,
    pub entry_count: usize,
    pub max_leaf_entries: usize,
}
