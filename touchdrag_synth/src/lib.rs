// Copyright 2025 the Touchdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchdrag Synth: the synthetic pointer/drag event model and dispatch seam.
//!
//! ## Overview
//!
//! Applications listening for standard pointer and drag-and-drop events must
//! receive behaviorally faithful synthetic events without knowing the input
//! came from touch. This crate defines both halves of that contract:
//!
//! - [`touch`]: the raw input side: touch samples with per-point page,
//!   client, and screen coordinates, modifier flags, and a button mask.
//! - [`event`]: the output side: [`SyntheticEvent`](event::SyntheticEvent)
//!   values built from a source sample, and the [`EventSink`](event::EventSink)
//!   seam through which a host dispatches them and reports cancellation.
//!
//! The gesture layer (`touchdrag_gesture`) consumes samples and produces
//! events; this crate is the vocabulary between the two and the host.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use touchdrag_synth::event::{SyntheticEvent, SyntheticKind};
//! use touchdrag_synth::touch::{CoordinateSet, TouchPhase, TouchPoint, TouchSample};
//!
//! let sample: TouchSample<u32> = TouchSample::new(
//!     TouchPhase::Start,
//!     7,
//!     vec![TouchPoint::new(CoordinateSet::splat(Point::new(30.0, 40.0)))],
//! );
//! let ev = SyntheticEvent::from_sample(
//!     &sample,
//!     SyntheticKind::MouseDown,
//!     7,
//!     Rect::new(10.0, 10.0, 110.0, 110.0),
//! );
//! assert_eq!(ev.kind.name(), "mousedown");
//! // One active touch: buttons/which report the touch count.
//! assert_eq!(ev.buttons, 1);
//! // Offset is the page coordinate relative to the target's bounds origin.
//! assert_eq!(ev.offset.x, 20.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod event;
pub mod touch;
