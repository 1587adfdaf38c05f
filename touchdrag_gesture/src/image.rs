// Copyright 2025 the Touchdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating drag-preview controller.
//!
//! ## Overview
//!
//! During a native drag the user expects a visual of the dragged element to
//! track the touch point. [`DragImageController`] owns that single preview:
//! it clones the drag source (or the carrier's custom image) through the
//! host's visual-clone service, mounts it on the overlay, and repositions it
//! as the touch moves.
//!
//! Repositioning is frame-paced: [`DragImageController::schedule_move`]
//! stores the latest page-space position in a single pending slot and asks
//! the host for one animation frame only when the slot was empty, so moves
//! arriving faster than frames coalesce to the most recent position and at
//! most one repaint is ever in flight. Visual smoothness is not a
//! correctness property; skipped intermediate frames are acceptable.

use kurbo::{Point, Vec2};

use touchdrag_carrier::DataTransfer;
use touchdrag_synth::touch::CoordinateSet;

use crate::host::{DragSurface, HitTestTree};

#[derive(Clone, Debug)]
struct ActiveImage<K> {
    node: K,
    /// Cursor-to-image offset; the image's top-left sits at point − offset.
    offset: Vec2,
    /// Latest scheduled page-space position; applied on the next frame.
    pending: Option<Point>,
}

/// Owns the at-most-one live drag preview.
#[derive(Clone, Debug, Default)]
pub struct DragImageController<K> {
    active: Option<ActiveImage<K>>,
}

impl<K: Copy + Eq> DragImageController<K> {
    /// Create a controller with no live preview.
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Whether a preview is currently live.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The live preview's node key, if any.
    pub fn node(&self) -> Option<&K> {
        self.active.as_ref().map(|img| &img.node)
    }

    /// Create the preview for a drag starting at `anchor`.
    ///
    /// Destroys any existing preview first. The carrier's custom image is
    /// preferred over cloning `source`; custom images keep their stored
    /// cursor offset and full opacity, generated clones get an offset
    /// computed from the anchor and `opacity` applied. The clone is mounted
    /// on the overlay and positioned immediately.
    pub fn create(
        &mut self,
        tree: &impl HitTestTree<K>,
        surface: &mut impl DragSurface<K>,
        source: &K,
        data: &DataTransfer<K>,
        anchor: CoordinateSet,
        opacity: f64,
    ) {
        self.destroy(surface);

        let custom = data.drag_image().map(|(img, off)| (*img, off));
        let image_source = custom.map(|(img, _)| img).unwrap_or(*source);
        let node = surface.clone_with_computed_style(&image_source);

        let offset = match custom {
            Some((_, off)) => off,
            None => {
                // Cursor-to-image offset from the anchor event, measured
                // against the image source's client-space bounds.
                let bounds = tree.bounds_of(&image_source);
                anchor.client - bounds.origin()
            }
        };
        if custom.is_none() {
            surface.set_opacity(&node, opacity);
        }
        surface.mount_overlay(&node);
        surface.set_translation(&node, translation(anchor.page, offset));

        self.active = Some(ActiveImage {
            node,
            offset,
            pending: None,
        });
    }

    /// Schedule a reposition to `page_point` on the next animation frame.
    ///
    /// Multiple calls before the frame renders coalesce to the latest
    /// position; a frame is requested only when none is already in flight.
    /// No-op without a live preview.
    pub fn schedule_move(&mut self, surface: &mut impl DragSurface<K>, page_point: Point) {
        if let Some(img) = &mut self.active {
            let in_flight = img.pending.is_some();
            img.pending = Some(page_point);
            if !in_flight {
                surface.request_frame();
            }
        }
    }

    /// Apply the pending reposition, if any. Called by the host's
    /// animation-frame callback.
    pub fn on_frame(&mut self, surface: &mut impl DragSurface<K>) {
        if let Some(img) = &mut self.active
            && let Some(point) = img.pending.take()
        {
            surface.set_translation(&img.node, translation(point, img.offset));
        }
    }

    /// Detach and discard the preview. Idempotent.
    pub fn destroy(&mut self, surface: &mut impl DragSurface<K>) {
        if let Some(img) = self.active.take() {
            surface.remove(&img.node);
        }
    }
}

/// Image top-left for a cursor at `point`, rounded to whole pixels.
fn translation(point: Point, offset: Vec2) -> Vec2 {
    (point - offset).round().to_vec2()
}
