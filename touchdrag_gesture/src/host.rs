// Copyright 2025 the Touchdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host environment seams.
//!
//! The recognizer does not own a document, a scene graph, or a render loop.
//! Hosts implement these two traits, over whatever node key `K` they use
//! for element identity, and inject them into every recognizer call. Tests
//! substitute deterministic fakes.

use kurbo::{Point, Rect, Vec2};

/// Read-only queries against the host's element tree.
///
/// Covers the native hit-test primitive, ancestry walks, and the
/// computed-style reads the gesture layer needs. All queries are expected to
/// be cheap; the recognizer calls them per touch sample.
pub trait HitTestTree<K> {
    /// The topmost element under `point` (client coordinates), if any.
    fn element_at_point(&self, point: Point) -> Option<K>;

    /// The parent of `node`, or `None` for a root.
    fn parent_of(&self, node: &K) -> Option<K>;

    /// Whether `node`'s computed style accepts pointer input.
    fn is_pointer_interactive(&self, node: &K) -> bool;

    /// Whether `node` carries the host's draggable marker.
    fn is_draggable(&self, node: &K) -> bool;

    /// `node`'s bounding box in client coordinates.
    fn bounds_of(&self, node: &K) -> Rect;

    /// The fallback target when no interactive element is under a point
    /// (typically the document root). Defaults to none.
    fn root_fallback(&self) -> Option<K> {
        None
    }
}

/// Mutating operations on the host's overlay layer for the drag preview.
///
/// The visual-clone service behind
/// [`clone_with_computed_style`](DragSurface::clone_with_computed_style)
/// is expected to deep-clone the
/// subtree, copy each node's computed style, strip identity attributes from
/// the top-level clone, suppress pointer interactivity on it, and
/// special-case canvas-like elements by copying pixel content. None of that
/// is visible to the gesture layer; it only holds the returned key.
pub trait DragSurface<K> {
    /// Clone `source` with its computed styles; returns the clone's key.
    fn clone_with_computed_style(&mut self, source: &K) -> K;

    /// Attach `node` to the overlay: fixed positioning, top-left origin,
    /// stacked above page content.
    fn mount_overlay(&mut self, node: &K);

    /// Detach and discard `node`.
    fn remove(&mut self, node: &K);

    /// Set `node`'s translate transform, in page coordinates.
    fn set_translation(&mut self, node: &K, translation: Vec2);

    /// Set `node`'s opacity (0..1).
    fn set_opacity(&mut self, node: &K, opacity: f64);

    /// Ask the host to deliver one animation-frame callback
    /// ([`GestureRecognizer::on_frame`](crate::machine::GestureRecognizer::on_frame)).
    fn request_frame(&mut self);
}
