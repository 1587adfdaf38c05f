// Copyright 2025 the Touchdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target resolution: point-to-interactive-element and draggable-ancestor
//! walks over the host's tree.

use kurbo::Point;

use crate::host::HitTestTree;

/// Hit-test `point` to the topmost pointer-interactive element.
///
/// Elements whose computed style rejects pointer input are skipped by
/// walking to their parents and retrying. Returns the first interactive
/// ancestor, or the tree's root fallback when the walk exhausts (or the hit
/// test misses entirely).
pub fn resolve_target<K: Copy + Eq>(tree: &impl HitTestTree<K>, point: Point) -> Option<K> {
    let mut element = tree.element_at_point(point);
    while let Some(node) = element {
        if tree.is_pointer_interactive(&node) {
            return Some(node);
        }
        element = tree.parent_of(&node);
    }
    tree.root_fallback()
}

/// Walk from `element` up through its ancestors to the first one carrying
/// the host's draggable marker, or `None` if the chain is exhausted.
pub fn closest_draggable<K: Copy + Eq>(tree: &impl HitTestTree<K>, element: K) -> Option<K> {
    let mut current = Some(element);
    while let Some(node) = current {
        if tree.is_draggable(&node) {
            return Some(node);
        }
        current = tree.parent_of(&node);
    }
    None
}

/// Manhattan distance between two points.
///
/// The drag-initiation threshold is compared against this, not Euclidean
/// distance.
pub fn manhattan_distance(a: Point, b: Point) -> f64 {
    abs(b.x - a.x) + abs(b.y - a.y)
}

// f64::abs is not available in core; max against the negation is equivalent
// for the finite inputs we handle.
fn abs(v: f64) -> f64 {
    v.max(-v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    // A three-deep chain: 1 (root) ← 2 ← 3. Node 3 is hit but not
    // interactive; node 2 is interactive and draggable.
    struct Chain {
        hit: Option<u32>,
    }

    impl HitTestTree<u32> for Chain {
        fn element_at_point(&self, _point: Point) -> Option<u32> {
            self.hit
        }
        fn parent_of(&self, node: &u32) -> Option<u32> {
            match node {
                3 => Some(2),
                2 => Some(1),
                _ => None,
            }
        }
        fn is_pointer_interactive(&self, node: &u32) -> bool {
            *node == 2
        }
        fn is_draggable(&self, node: &u32) -> bool {
            *node == 2
        }
        fn bounds_of(&self, _node: &u32) -> Rect {
            Rect::ZERO
        }
        fn root_fallback(&self) -> Option<u32> {
            Some(1)
        }
    }

    #[test]
    fn resolve_skips_non_interactive_elements() {
        let tree = Chain { hit: Some(3) };
        assert_eq!(resolve_target(&tree, Point::ZERO), Some(2));
    }

    #[test]
    fn resolve_returns_hit_when_interactive() {
        let tree = Chain { hit: Some(2) };
        assert_eq!(resolve_target(&tree, Point::ZERO), Some(2));
    }

    #[test]
    fn resolve_falls_back_to_root_on_miss() {
        let tree = Chain { hit: None };
        assert_eq!(resolve_target(&tree, Point::ZERO), Some(1));
    }

    // Node 1 is the hit and nothing in its chain is interactive.
    #[test]
    fn resolve_falls_back_when_walk_exhausts() {
        let tree = Chain { hit: Some(1) };
        assert_eq!(resolve_target(&tree, Point::ZERO), Some(1));
    }

    #[test]
    fn closest_draggable_walks_ancestors() {
        let tree = Chain { hit: None };
        assert_eq!(closest_draggable(&tree, 3), Some(2));
        assert_eq!(closest_draggable(&tree, 2), Some(2));
        assert_eq!(closest_draggable(&tree, 1), None);
    }

    #[test]
    fn manhattan_distance_sums_axis_deltas() {
        let a = Point::new(10.0, 10.0);
        let b = Point::new(13.0, 6.0);
        assert_eq!(manhattan_distance(a, b), 7.0);
        assert_eq!(manhattan_distance(b, a), 7.0);
        assert_eq!(manhattan_distance(a, a), 0.0);
    }
}
