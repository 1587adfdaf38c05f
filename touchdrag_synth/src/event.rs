// Copyright 2025 the Touchdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic event construction and the host dispatch seam.
//!
//! ## Overview
//!
//! [`SyntheticEvent::from_sample`] builds a bubbling, cancelable event from a
//! source touch sample: it copies the modifier flags and the full coordinate
//! set from the primary touch point (or the sample itself when no touch list
//! is present), derives `buttons`/`which` from the active touch count with a
//! fallback to the source's button mask, forces `button` to 0, and computes
//! the target-relative offset from the target's bounding box. Caller-supplied
//! [`Overrides`] are applied last and take precedence over every copied
//! field.
//!
//! Dispatch itself belongs to the host: implement [`EventSink`] to deliver
//! events to listeners (bubbling through whatever tree the host owns) and
//! report back whether any listener canceled the event. Cancellation is the
//! application's signal to the gesture layer, which aborts the remainder of
//! the step's synthetic sequence in response.

use kurbo::{Rect, Vec2};

use touchdrag_carrier::DataTransfer;

use crate::touch::{CoordinateSet, Modifiers, TouchSample};

/// The synthetic event types this system emits.
///
/// All are dispatched bubbling and cancelable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SyntheticKind {
    /// Primary button press emulation.
    MouseDown,
    /// Pointer motion emulation.
    MouseMove,
    /// Primary button release emulation.
    MouseUp,
    /// Tap completion.
    Click,
    /// Two taps within the double-click interval.
    DblClick,
    /// A drag was recognized on a draggable source.
    DragStart,
    /// The drag entered a new target.
    DragEnter,
    /// The drag left the previous target.
    DragLeave,
    /// The drag is over its current target.
    DragOver,
    /// The drag ended over a target, not canceled.
    Drop,
    /// The drag sequence finished (always emitted, canceled or not).
    DragEnd,
    /// Long-press context menu request.
    ContextMenu,
}

impl SyntheticKind {
    /// The conventional event name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
            Self::Click => "click",
            Self::DblClick => "dblclick",
            Self::DragStart => "dragstart",
            Self::DragEnter => "dragenter",
            Self::DragLeave => "dragleave",
            Self::DragOver => "dragover",
            Self::Drop => "drop",
            Self::DragEnd => "dragend",
            Self::ContextMenu => "contextmenu",
        }
    }

    /// Whether listeners expect this kind to carry the drag payload.
    pub fn is_drag_family(self) -> bool {
        matches!(
            self,
            Self::DragStart
                | Self::DragEnter
                | Self::DragLeave
                | Self::DragOver
                | Self::Drop
                | Self::DragEnd
        )
    }
}

/// Caller-supplied field overrides, applied last when building an event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Replace the derived `buttons` mask.
    pub buttons: Option<u32>,
    /// Replace the derived `which` value.
    pub which: Option<u32>,
    /// Replace the default `button` value.
    pub button: Option<u8>,
    /// Replace the copied modifier flags.
    pub modifiers: Option<Modifiers>,
}

/// A programmatically constructed event mimicking a native pointer/drag
/// event's shape.
///
/// The live [`DataTransfer`] carrier is not stored on the event; it is
/// passed alongside to [`EventSink::dispatch`] so listeners can mutate it.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticEvent<K> {
    /// Which event this is.
    pub kind: SyntheticKind,
    /// The node the event is dispatched against.
    pub target: K,
    /// Synthetic events always bubble.
    pub bubbles: bool,
    /// Synthetic events are always cancelable.
    pub cancelable: bool,
    /// Coordinates copied from the source sample.
    pub coords: CoordinateSet,
    /// Page coordinate relative to the target's bounding-box origin.
    pub offset: Vec2,
    /// Modifier flags copied from the source sample.
    pub modifiers: Modifiers,
    /// Active touch count, else the source button mask, else 0.
    pub buttons: u32,
    /// Mirrors `buttons`.
    pub which: u32,
    /// Always 0 (primary).
    pub button: u8,
}

impl<K> SyntheticEvent<K> {
    /// Build an event of `kind` at `target` from a source sample.
    ///
    /// `target_bounds` is the target's bounding box in client space; the
    /// event's offset is the source's page coordinate minus the bounds
    /// origin.
    pub fn from_sample(
        sample: &TouchSample<K>,
        kind: SyntheticKind,
        target: K,
        target_bounds: Rect,
    ) -> Self {
        let coords = sample.coordinate_source();
        let touch_count = u32::try_from(sample.touch_count()).unwrap_or(u32::MAX);
        let buttons = if touch_count > 0 {
            touch_count
        } else {
            sample.buttons
        };
        Self {
            kind,
            target,
            bubbles: true,
            cancelable: true,
            coords,
            offset: coords.page - target_bounds.origin(),
            modifiers: sample.modifiers,
            buttons,
            which: buttons,
            button: 0,
        }
    }

    /// Apply caller-supplied overrides; explicit fields win over copied ones.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(buttons) = overrides.buttons {
            self.buttons = buttons;
        }
        if let Some(which) = overrides.which {
            self.which = which;
        }
        if let Some(button) = overrides.button {
            self.button = button;
        }
        if let Some(modifiers) = overrides.modifiers {
            self.modifiers = modifiers;
        }
        self
    }
}

/// The host's dispatch seam.
///
/// Implementations deliver the event to their listeners (bubbling through
/// whatever tree the host owns) with the live carrier available for
/// mutation, and return `true` if any listener canceled the event
/// (prevented its default).
pub trait EventSink<K> {
    /// Dispatch `event` against its target; returns whether a listener
    /// canceled it.
    fn dispatch(&mut self, event: &SyntheticEvent<K>, data: &mut DataTransfer<K>) -> bool;
}
