// Copyright 2025 the Touchdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw touch input model: samples, points, coordinate sets, modifier flags.
//!
//! A host translates its platform touch events into [`TouchSample`] values
//! and feeds them to the gesture layer. Samples carry the full coordinate
//! set per touch point (page, client, screen) because synthetic events must
//! reproduce all three, plus the modifier flags and button mask the platform
//! reported.

use alloc::vec::Vec;

use kurbo::Point;

bitflags::bitflags! {
    /// Keyboard modifier flags active while a touch sample was produced.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        /// The alt (option) key.
        const ALT = 1 << 0;
        /// The control key.
        const CTRL = 1 << 1;
        /// The meta (command/windows) key.
        const META = 1 << 2;
        /// The shift key.
        const SHIFT = 1 << 3;
    }
}

/// The three coordinate spaces a pointer event reports.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CoordinateSet {
    /// Document-relative coordinates (include scroll).
    pub page: Point,
    /// Viewport-relative coordinates.
    pub client: Point,
    /// Screen-relative coordinates.
    pub screen: Point,
}

impl CoordinateSet {
    /// A coordinate set with the same point in all three spaces.
    ///
    /// Convenient for hosts (and tests) with no scroll offset or window
    /// origin to account for.
    pub fn splat(p: Point) -> Self {
        Self {
            page: p,
            client: p,
            screen: p,
        }
    }
}

/// A single active touch point within a sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchPoint {
    /// Where this touch point is, in all three coordinate spaces.
    pub coords: CoordinateSet,
}

impl TouchPoint {
    /// Create a touch point at the given coordinates.
    pub fn new(coords: CoordinateSet) -> Self {
        Self { coords }
    }
}

/// The lifecycle phase of a touch sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// A finger went down.
    Start,
    /// A finger moved.
    Move,
    /// A finger lifted normally.
    End,
    /// The platform aborted the touch sequence.
    Cancel,
}

impl TouchPhase {
    /// Whether this phase ends a gesture abnormally.
    pub fn is_cancel(self) -> bool {
        matches!(self, Self::Cancel)
    }
}

/// One platform touch event, normalized for the gesture layer.
///
/// `target` is the node the platform delivered the event to (not the
/// hit-test result; the gesture layer re-resolves targets as it needs).
/// `coords` is the sample-level fallback used when `touches` is empty, so
/// end/cancel samples (whose active-touch list no longer contains the lifted
/// finger) still carry a usable position.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchSample<K> {
    /// Lifecycle phase of this sample.
    pub phase: TouchPhase,
    /// The node the platform delivered the event to.
    pub target: K,
    /// Currently active touch points.
    pub touches: Vec<TouchPoint>,
    /// Sample-level coordinates, used when no touch list is present.
    pub coords: CoordinateSet,
    /// Modifier flags at the time of the sample.
    pub modifiers: Modifiers,
    /// Platform button mask, if the source event carried one.
    pub buttons: u32,
    /// Whether the platform event already had its default prevented.
    pub default_prevented: bool,
}

impl<K> TouchSample<K> {
    /// Create a sample with no modifiers, no button mask, and the first
    /// touch point (if any) as the sample-level coordinate fallback.
    pub fn new(phase: TouchPhase, target: K, touches: Vec<TouchPoint>) -> Self {
        let coords = touches.first().map(|t| t.coords).unwrap_or_default();
        Self {
            phase,
            target,
            touches,
            coords,
            modifiers: Modifiers::empty(),
            buttons: 0,
            default_prevented: false,
        }
    }

    /// Number of active touch points.
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    /// The primary (first) touch point, if any.
    pub fn primary(&self) -> Option<&TouchPoint> {
        self.touches.first()
    }

    /// The coordinates synthetic events should copy: the primary touch
    /// point, or the sample's own coordinates when no touch list is present.
    pub fn coordinate_source(&self) -> CoordinateSet {
        self.primary().map(|t| t.coords).unwrap_or(self.coords)
    }

    /// Viewport-relative position of the coordinate source.
    pub fn client_point(&self) -> Point {
        self.coordinate_source().client
    }

    /// Document-relative position of the coordinate source.
    pub fn page_point(&self) -> Point {
        self.coordinate_source().page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn coords(x: f64, y: f64) -> CoordinateSet {
        CoordinateSet::splat(Point::new(x, y))
    }

    #[test]
    fn sample_coordinate_source_prefers_primary_touch() {
        let mut sample: TouchSample<u32> = TouchSample::new(
            TouchPhase::Move,
            1,
            vec![
                TouchPoint::new(coords(5.0, 6.0)),
                TouchPoint::new(coords(50.0, 60.0)),
            ],
        );
        sample.coords = coords(99.0, 99.0);
        assert_eq!(sample.coordinate_source(), coords(5.0, 6.0));
        assert_eq!(sample.client_point(), Point::new(5.0, 6.0));
    }

    // End samples have an empty touch list; the sample-level fallback applies.
    #[test]
    fn empty_touch_list_falls_back_to_sample_coords() {
        let mut sample: TouchSample<u32> = TouchSample::new(TouchPhase::End, 1, vec![]);
        sample.coords = coords(12.0, 34.0);
        assert!(sample.primary().is_none());
        assert_eq!(sample.coordinate_source(), coords(12.0, 34.0));
        assert_eq!(sample.page_point(), Point::new(12.0, 34.0));
    }

    #[test]
    fn new_seeds_fallback_coords_from_first_touch() {
        let sample: TouchSample<u32> =
            TouchSample::new(TouchPhase::Start, 1, vec![TouchPoint::new(coords(7.0, 8.0))]);
        assert_eq!(sample.coords, coords(7.0, 8.0));
    }

    #[test]
    fn cancel_phase_is_cancel() {
        assert!(TouchPhase::Cancel.is_cancel());
        assert!(!TouchPhase::End.is_cancel());
        assert!(!TouchPhase::Start.is_cancel());
        assert!(!TouchPhase::Move.is_cancel());
    }

    #[test]
    fn splat_fills_all_three_spaces() {
        let c = CoordinateSet::splat(Point::new(1.0, 2.0));
        assert_eq!(c.page, c.client);
        assert_eq!(c.client, c.screen);
    }

    #[test]
    fn modifier_flags_compose() {
        let m = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(m.contains(Modifiers::CTRL));
        assert!(m.contains(Modifiers::SHIFT));
        assert!(!m.contains(Modifiers::ALT));
    }
}
