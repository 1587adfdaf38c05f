// Copyright 2025 the Touchdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine.
//!
//! ## Overview
//!
//! [`GestureRecognizer`] owns all per-gesture state and orchestrates the
//! other pieces: it consumes touch samples and timer firings, resolves
//! targets through the host's [`HitTestTree`], emits synthetic events
//! through the host's [`EventSink`], and drives the drag payload and
//! preview lifecycles.
//!
//! A gesture moves through: idle → pending (touching) → drag candidate or
//! long-press → dragging (native drag-and-drop, or plain mouse emulation
//! when no draggable ancestor exists) → idle. Which branch it takes is
//! decided by timing/motion windows (the drag-initiation delay and the
//! long-press delay) against the Manhattan distance moved from the anchor
//! point.
//!
//! ## Cancellation
//!
//! Every synthetic event is cancelable; a listener preventing its default
//! aborts the remainder of that step's sequence. A canceled `mousedown`
//! aborts the drag attempt entirely (the gesture degrades to plain mouse
//! emulation); a canceled `mousemove` hands the gesture to the consumer for
//! that sample without resetting the session; a canceled `dblclick` closes
//! the session before a new tap can begin.
//!
//! Stale timers are dropped by generation comparison, never canceled; see
//! [`timer`](crate::timer).

use kurbo::Point;

use touchdrag_carrier::DataTransfer;
use touchdrag_synth::event::{EventSink, SyntheticEvent, SyntheticKind};
use touchdrag_synth::touch::{TouchPhase, TouchSample};

use crate::config::Config;
use crate::host::{DragSurface, HitTestTree};
use crate::image::DragImageController;
use crate::resolve::{closest_draggable, manhattan_distance, resolve_target};
use crate::timer::{TimerKind, TimerQueue};

/// What the recognizer did with a sample, and what the host should do with
/// the native event that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Handling {
    /// The sample failed a guard; no state was touched. Let the native
    /// event proceed untouched.
    Ignored,
    /// The sample advanced the recognizer; the native event may proceed.
    Observed,
    /// The sample advanced the recognizer and the host should suppress the
    /// native event's default behavior.
    PreventDefault,
}

/// Touch gesture recognizer synthesizing pointer and drag-and-drop events.
///
/// One live instance exists per listener installation, not per tap; the
/// session state inside it is reused and reset across gestures.
///
/// ## Usage
///
/// - Construct with [`GestureRecognizer::new`]; call
///   [`initialize`](GestureRecognizer::initialize) once and attach platform
///   listeners only when it returns `true`.
/// - Feed every platform touch event to the matching `on_touch_*` handler
///   with the current time in milliseconds; honor the returned [`Handling`].
/// - Whenever [`next_deadline`](GestureRecognizer::next_deadline) has
///   passed, call [`on_timers`](GestureRecognizer::on_timers).
/// - After the surface's `request_frame` fires, call
///   [`on_frame`](GestureRecognizer::on_frame).
#[derive(Clone, Debug)]
pub struct GestureRecognizer<K> {
    config: Config,
    installed: bool,
    generation: u64,
    drag_can_start: bool,
    dragging: bool,
    native_dnd: bool,
    context_menu_shown: bool,
    drag_source: Option<K>,
    last_target: Option<K>,
    last_touch: Option<TouchSample<K>>,
    press: Option<TouchSample<K>>,
    anchor: Option<Point>,
    last_click: Option<u64>,
    data: DataTransfer<K>,
    timers: TimerQueue,
    image: DragImageController<K>,
}

impl<K: Copy + Eq> GestureRecognizer<K> {
    /// Create an idle recognizer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            installed: false,
            generation: 0,
            drag_can_start: false,
            dragging: false,
            native_dnd: false,
            context_menu_shown: false,
            drag_source: None,
            last_target: None,
            last_touch: None,
            press: None,
            anchor: None,
            last_click: None,
            data: DataTransfer::new(),
            timers: TimerQueue::new(),
            image: DragImageController::new(),
        }
    }

    /// Idempotent installation check-and-set.
    ///
    /// Returns `true` exactly once; the host attaches its platform touch
    /// listeners on that call and never again, so repeated initialization
    /// cannot attach duplicates.
    pub fn initialize(&mut self) -> bool {
        if self.installed {
            false
        } else {
            self.installed = true;
            true
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether a drag (native or plain) is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the current drag emits the full drag-and-drop event family.
    pub fn using_native_dnd(&self) -> bool {
        self.native_dnd
    }

    /// The current session generation (epoch token).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current drag payload.
    pub fn data(&self) -> &DataTransfer<K> {
        &self.data
    }

    /// The live drag preview's node, if one exists.
    pub fn drag_image_node(&self) -> Option<&K> {
        self.image.node()
    }

    /// The earliest pending timer deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// A finger went down.
    ///
    /// Checks the double-click window against the previous tap first (a
    /// canceled synthetic `dblclick` closes the session and stops), then
    /// resets the session, records the anchor, and arms the drag-initiation
    /// and long-press timers (or enables dragging immediately for a
    /// two-finger start).
    pub fn on_touch_start(
        &mut self,
        now: u64,
        sample: &TouchSample<K>,
        tree: &impl HitTestTree<K>,
        surface: &mut impl DragSurface<K>,
        sink: &mut impl EventSink<K>,
    ) -> Handling {
        if sample.phase != TouchPhase::Start || !self.should_handle(sample) {
            return Handling::Ignored;
        }

        if let Some(last_click) = self.last_click
            && now.saturating_sub(last_click) < self.config.double_click_interval
            && self.emit(tree, sink, Some(sample), SyntheticKind::DblClick, Some(sample.target))
        {
            self.reset(surface);
            return Handling::PreventDefault;
        }

        self.reset(surface);
        self.anchor = Some(sample.client_point());
        self.last_touch = Some(sample.clone());
        self.press = Some(sample.clone());

        match sample.touch_count() {
            // A second finger skips the hold requirement.
            2 => self.drag_can_start = true,
            1 => {
                self.timers.schedule(
                    TimerKind::DragInit,
                    now + self.config.drag_init_delay,
                    self.generation,
                );
                self.timers.schedule(
                    TimerKind::ContextMenu,
                    now + self.config.context_menu_delay,
                    self.generation,
                );
            }
            _ => {}
        }
        Handling::PreventDefault
    }

    /// A finger moved.
    ///
    /// Emits `mousemove` first; if a listener cancels it the consumer owns
    /// this sample. Otherwise classifies the motion against the anchor:
    /// early movement invalidates the tap, movement after the drag window
    /// promotes to a drag, and motion during a native drag produces the
    /// dragleave/dragenter/dragover sequence and repositions the preview.
    pub fn on_touch_move(
        &mut self,
        sample: &TouchSample<K>,
        tree: &impl HitTestTree<K>,
        surface: &mut impl DragSurface<K>,
        sink: &mut impl EventSink<K>,
    ) -> Handling {
        if sample.phase != TouchPhase::Move || !self.should_handle(sample) {
            return Handling::Ignored;
        }

        let target = resolve_target(tree, sample.client_point());

        if self.emit(tree, sink, Some(sample), SyntheticKind::MouseMove, target) {
            self.last_touch = Some(sample.clone());
            return Handling::PreventDefault;
        }

        let Some(anchor) = self.anchor else {
            // No gesture in flight (no touch-start was accepted).
            return Handling::Observed;
        };

        let delta = manhattan_distance(anchor, sample.client_point());
        if !self.dragging && !self.drag_can_start && delta > self.config.drag_init_threshold {
            // Movement before the drag-enable delay: a failed tap, not a
            // drag. Invalidate the gesture's timers.
            self.generation += 1;
        } else if !self.dragging && delta > self.config.drag_init_threshold {
            // Promote using the last-seen sample so dragstart carries
            // pre-movement coordinates.
            if let Some(press) = self.last_touch.clone() {
                self.start_drag(&press, tree, surface, sink);
            }
        }

        if self.dragging && self.native_dnd {
            self.last_touch = Some(sample.clone());

            if target != self.last_target {
                let old = self.last_target;
                self.emit(tree, sink, Some(sample), SyntheticKind::DragLeave, old);
                self.emit(tree, sink, Some(sample), SyntheticKind::DragEnter, target);
                self.last_target = target;
            }
            self.emit(tree, sink, Some(sample), SyntheticKind::DragOver, target);

            self.image.schedule_move(surface, sample.page_point());
            return Handling::PreventDefault;
        }

        Handling::Observed
    }

    /// A finger lifted, or the platform canceled the touch sequence.
    ///
    /// Three cases in order: a plain tap (synthetic `mousedown` + `click`,
    /// double-click window opens), the end of a native drag (`drop` unless
    /// canceled, then `dragend`, then reset), or the end of a plain
    /// emulated drag (`mouseup`, then reset).
    pub fn on_touch_end(
        &mut self,
        now: u64,
        sample: &TouchSample<K>,
        tree: &impl HitTestTree<K>,
        surface: &mut impl DragSurface<K>,
        sink: &mut impl EventSink<K>,
    ) -> Handling {
        if !matches!(sample.phase, TouchPhase::End | TouchPhase::Cancel)
            || !self.should_handle(sample)
        {
            return Handling::Ignored;
        }

        let last = self.last_touch.clone();
        if !self.dragging && !self.context_menu_shown {
            self.drag_source = None;
            // A tap emulates the full press sequence; a canceled mousedown
            // suppresses the click, as a consumer owning the press would.
            if !self.emit(
                tree,
                sink,
                last.as_ref(),
                SyntheticKind::MouseDown,
                Some(sample.target),
            ) {
                self.emit(tree, sink, last.as_ref(), SyntheticKind::Click, Some(sample.target));
            }
            self.last_click = Some(now);
            // Invalidate this tap's pending drag-enable/long-press timers.
            self.generation += 1;
        } else if self.native_dnd {
            if !sample.phase.is_cancel() {
                self.emit(tree, sink, last.as_ref(), SyntheticKind::Drop, self.last_target);
            }
            self.emit(tree, sink, last.as_ref(), SyntheticKind::DragEnd, self.drag_source);
            self.reset(surface);
        } else {
            self.emit(tree, sink, last.as_ref(), SyntheticKind::MouseUp, Some(sample.target));
            self.reset(surface);
        }
        Handling::Observed
    }

    /// Drain timers due at or before `now`.
    ///
    /// Entries whose generation no longer matches the session are dropped
    /// silently. A live drag-initiation timer opens the drag window; a live
    /// long-press timer with no drag in progress marks the context menu
    /// shown and synthesizes `contextmenu` at the press target.
    pub fn on_timers(
        &mut self,
        now: u64,
        tree: &impl HitTestTree<K>,
        sink: &mut impl EventSink<K>,
    ) {
        while let Some(timer) = self.timers.pop_due(now) {
            if timer.generation != self.generation {
                continue;
            }
            match timer.kind {
                TimerKind::DragInit => self.drag_can_start = true,
                TimerKind::ContextMenu => {
                    if !self.dragging {
                        self.context_menu_shown = true;
                        let press = self.press.clone();
                        let target = press.as_ref().map(|p| p.target);
                        self.emit(tree, sink, press.as_ref(), SyntheticKind::ContextMenu, target);
                    }
                }
            }
        }
    }

    /// Animation-frame callback; applies the pending drag-image position.
    pub fn on_frame(&mut self, surface: &mut impl DragSurface<K>) {
        self.image.on_frame(surface);
    }

    /// Close the session: tear down the drag image, replace the payload,
    /// clear source/target/sample refs, and bump the generation so stale
    /// timers die at fire time.
    pub fn reset(&mut self, surface: &mut impl DragSurface<K>) {
        self.image.destroy(surface);
        self.drag_source = None;
        self.last_target = None;
        self.last_touch = None;
        self.press = None;
        self.anchor = None;
        self.data = DataTransfer::new();
        self.dragging = false;
        self.native_dnd = false;
        self.drag_can_start = false;
        self.context_menu_shown = false;
        self.generation += 1;
    }

    /// Promote the gesture to a drag, using `sample` (the last-seen touch
    /// before the promoting motion) as the event source.
    ///
    /// A canceled `mousedown` aborts: the consumer intercepted the press,
    /// and the gesture stays a plain mouse interaction. Otherwise the
    /// nearest draggable ancestor decides between the native drag-and-drop
    /// family (fresh payload, `dragstart` at the source, `dragenter` at the
    /// resolved target, preview creation) and plain mouse emulation.
    fn start_drag(
        &mut self,
        sample: &TouchSample<K>,
        tree: &impl HitTestTree<K>,
        surface: &mut impl DragSurface<K>,
        sink: &mut impl EventSink<K>,
    ) {
        self.dragging = true;
        if self.emit(tree, sink, Some(sample), SyntheticKind::MouseDown, Some(sample.target)) {
            return;
        }

        self.drag_source = closest_draggable(tree, sample.target);
        self.last_touch = Some(sample.clone());

        if let Some(source) = self.drag_source {
            self.native_dnd = true;
            self.data = DataTransfer::new();
            self.emit(tree, sink, Some(sample), SyntheticKind::DragStart, Some(source));
            let target = resolve_target(tree, sample.client_point());
            self.emit(tree, sink, Some(sample), SyntheticKind::DragEnter, target);

            // A custom preview set during dragstart is honored even when
            // generated previews are disabled.
            if self.config.generate_drag_image || self.data.drag_image().is_some() {
                self.image.create(
                    tree,
                    surface,
                    &source,
                    &self.data,
                    sample.coordinate_source(),
                    self.config.drag_image_opacity,
                );
            }
        }
    }

    /// Multi-touch/default-prevented guard; rejected samples mutate nothing.
    fn should_handle(&self, sample: &TouchSample<K>) -> bool {
        !sample.default_prevented
            && (sample.touch_count() < 2 || self.config.handle_multi_touch)
    }

    /// Build and dispatch one synthetic event; no-op returning `false` when
    /// the source sample or target is absent.
    fn emit(
        &mut self,
        tree: &impl HitTestTree<K>,
        sink: &mut impl EventSink<K>,
        sample: Option<&TouchSample<K>>,
        kind: SyntheticKind,
        target: Option<K>,
    ) -> bool {
        let (Some(sample), Some(target)) = (sample, target) else {
            return false;
        };
        let event = SyntheticEvent::from_sample(sample, kind, target, tree.bounds_of(&target));
        sink.dispatch(&event, &mut self.data)
    }
}
