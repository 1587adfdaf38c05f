// Copyright 2025 the Touchdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchdrag Gesture: touch gesture recognition that synthesizes pointer and
//! drag-and-drop event sequences.
//!
//! ## Overview
//!
//! Some platforms expose touch input but no native drag-and-drop gesture
//! recognition. This crate decides, from a stream of touch start/move/end/
//! cancel samples, whether the user is tapping, double-tapping, long-pressing,
//! or dragging, and synthesizes the corresponding event sequence (with the
//! correct target, coordinates, modifier keys, and drag payload) at the
//! right moments. Applications listening for standard pointer/drag events
//! receive behaviorally faithful synthetic events without knowing the input
//! came from touch.
//!
//! The crate is host-agnostic: it performs no hit testing, DOM manipulation,
//! timing, or painting of its own. The host injects those capabilities
//! through two seams:
//!
//! - [`host::HitTestTree`]: point-to-element queries, ancestry walks, and
//!   computed-style reads (pointer interactivity, draggable markers, bounds).
//! - [`host::DragSurface`]: the visual-clone service and overlay operations
//!   for the floating drag preview, plus the animation-frame signal.
//!
//! Synthetic events leave through the
//! [`EventSink`](touchdrag_synth::event::EventSink) seam; a listener
//! canceling an event (preventing its default) aborts the remainder of that
//! step's synthetic sequence, which is the application's only control
//! channel.
//!
//! ## Driving the recognizer
//!
//! The host owns the event loop and the clock. It feeds the recognizer:
//!
//! - touch samples via [`GestureRecognizer::on_touch_start`] /
//!   [`on_touch_move`](GestureRecognizer::on_touch_move) /
//!   [`on_touch_end`](GestureRecognizer::on_touch_end), each returning a
//!   [`Handling`] that says whether to suppress the native event;
//! - the current time via [`GestureRecognizer::on_timers`] whenever
//!   [`GestureRecognizer::next_deadline`] has passed (drag-initiation,
//!   double-tap, and long-press windows are all plain `u64` millisecond
//!   deadlines; no clock is consulted internally);
//! - frame callbacks via [`GestureRecognizer::on_frame`] after the surface's
//!   `request_frame` fires, which applies the latest pending drag-image
//!   position (intermediate positions coalesce; at most one repaint is in
//!   flight).
//!
//! Stale timers are never canceled explicitly: every scheduled timer carries
//! the session generation at schedule time and is silently dropped when the
//! generation has moved on (see [`timer`]).
//!
//! All touch callbacks, timer drains, and frame callbacks are expected to
//! interleave on one logical thread; the recognizer holds no locks and runs
//! every step to completion synchronously.
//!
//! ## Modules
//!
//! - [`config`]: recognized options and their defaults.
//! - [`host`]: the injected environment seams.
//! - [`resolve`]: point-to-interactive-target and draggable-ancestor walks.
//! - [`timer`]: the generation-tagged timer queue.
//! - [`image`]: the floating drag-preview controller.
//! - [`machine`]: the gesture state machine itself.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod host;
pub mod image;
pub mod machine;
pub mod resolve;
pub mod timer;

pub use config::Config;
pub use machine::{GestureRecognizer, Handling};
