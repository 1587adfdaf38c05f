// Copyright 2025 the Touchdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchdrag Carrier: an emulated drag-and-drop data transfer payload.
//!
//! ## Overview
//!
//! When a touch gesture is promoted to a drag, listeners expect an object
//! shaped like the native drag payload: a mutable type→value map, drop and
//! allowed effect strings, and an optional custom preview image with a cursor
//! offset. [`DataTransfer`] is that object. A fresh carrier is created at the
//! start of every native-drag sequence and handed mutably to each synthetic
//! drag-family event, so a `dragstart` listener can populate it and a `drop`
//! listener can read it back.
//!
//! The carrier is generic over a node key `K` so the custom preview image can
//! reference whatever the host uses for element identity (a DOM handle, a
//! widget id, a test integer).
//!
//! ## Minimal example
//!
//! ```
//! use touchdrag_carrier::DataTransfer;
//!
//! let mut dt: DataTransfer<u32> = DataTransfer::new();
//! dt.set_data("text/plain", "hello");
//! assert_eq!(dt.get_data("text/plain"), Some("hello"));
//! assert!(dt.types().any(|t| t == "text/plain"));
//!
//! dt.clear_data(Some("text/plain"));
//! assert_eq!(dt.get_data("text/plain"), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;

use hashbrown::HashMap;
use kurbo::Vec2;

/// The emulated drag payload carried by synthetic drag-family events.
///
/// Mirrors the native data transfer surface: a mutable map of MIME-like type
/// strings to values, mutable `drop_effect`/`effect_allowed` strings, and an
/// optional custom preview image with its cursor offset.
///
/// The gesture layer creates a fresh carrier per native-drag sequence and
/// replaces it on session reset; listeners mutate the live instance through
/// the event dispatch seam.
#[derive(Clone, Debug)]
pub struct DataTransfer<K> {
    drop_effect: String,
    effect_allowed: String,
    data: HashMap<String, String>,
    drag_image: Option<(K, Vec2)>,
}

impl<K> DataTransfer<K> {
    /// Create an empty carrier with the conventional initial effects
    /// (`"move"` / `"all"`).
    pub fn new() -> Self {
        Self {
            drop_effect: String::from("move"),
            effect_allowed: String::from("all"),
            data: HashMap::new(),
            drag_image: None,
        }
    }

    /// The value stored under `type_`, if any.
    pub fn get_data(&self, type_: &str) -> Option<&str> {
        self.data.get(type_).map(String::as_str)
    }

    /// Store `value` under `type_`, replacing any previous value.
    pub fn set_data(&mut self, type_: impl Into<String>, value: impl Into<String>) {
        self.data.insert(type_.into(), value.into());
    }

    /// Remove the entry for `type_`, or every entry when `type_` is `None`.
    pub fn clear_data(&mut self, type_: Option<&str>) {
        match type_ {
            Some(t) => {
                self.data.remove(t);
            }
            None => self.data.clear(),
        }
    }

    /// The current key set of the data map. Order is unspecified.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// The requested drop effect.
    pub fn drop_effect(&self) -> &str {
        &self.drop_effect
    }

    /// Set the requested drop effect.
    pub fn set_drop_effect(&mut self, effect: impl Into<String>) {
        self.drop_effect = effect.into();
    }

    /// The effects the drag source allows.
    pub fn effect_allowed(&self) -> &str {
        &self.effect_allowed
    }

    /// Set the effects the drag source allows.
    pub fn set_effect_allowed(&mut self, effect: impl Into<String>) {
        self.effect_allowed = effect.into();
    }

    /// Override the generated preview with a custom image and cursor offset.
    pub fn set_drag_image(&mut self, image: K, offset_x: f64, offset_y: f64) {
        self.drag_image = Some((image, Vec2::new(offset_x, offset_y)));
    }

    /// The custom preview image and its cursor offset, if one was set.
    pub fn drag_image(&self) -> Option<(&K, Vec2)> {
        self.drag_image.as_ref().map(|(k, off)| (k, *off))
    }
}

impl<K> Default for DataTransfer<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn fresh_carrier_has_conventional_effects() {
        let dt: DataTransfer<u32> = DataTransfer::new();
        assert_eq!(dt.drop_effect(), "move");
        assert_eq!(dt.effect_allowed(), "all");
        assert_eq!(dt.types().count(), 0);
        assert!(dt.drag_image().is_none());
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut dt: DataTransfer<u32> = DataTransfer::new();
        dt.set_data("text/plain", "hello");
        dt.set_data("text/uri-list", "https://example.com");
        assert_eq!(dt.get_data("text/plain"), Some("hello"));
        assert_eq!(dt.get_data("text/uri-list"), Some("https://example.com"));
        assert_eq!(dt.get_data("text/html"), None);
    }

    #[test]
    fn set_data_replaces_existing_value() {
        let mut dt: DataTransfer<u32> = DataTransfer::new();
        dt.set_data("text/plain", "first");
        dt.set_data("text/plain", "second");
        assert_eq!(dt.get_data("text/plain"), Some("second"));
        assert_eq!(dt.types().count(), 1);
    }

    #[test]
    fn types_reflects_live_key_set() {
        let mut dt: DataTransfer<u32> = DataTransfer::new();
        dt.set_data("a", "1");
        dt.set_data("b", "2");
        let mut types: Vec<&str> = dt.types().collect();
        types.sort_unstable();
        assert_eq!(types, ["a", "b"]);

        dt.clear_data(Some("a"));
        let types: Vec<&str> = dt.types().collect();
        assert_eq!(types, ["b"]);
    }

    #[test]
    fn clear_single_type_leaves_others() {
        let mut dt: DataTransfer<u32> = DataTransfer::new();
        dt.set_data("a", "1");
        dt.set_data("b", "2");
        dt.clear_data(Some("a"));
        assert_eq!(dt.get_data("a"), None);
        assert_eq!(dt.get_data("b"), Some("2"));
    }

    // Omitted type clears the whole map.
    #[test]
    fn clear_all_empties_the_map() {
        let mut dt: DataTransfer<u32> = DataTransfer::new();
        dt.set_data("a", "1");
        dt.set_data("b", "2");
        dt.clear_data(None);
        assert_eq!(dt.types().count(), 0);
        assert_eq!(dt.get_data("a"), None);
    }

    // Clearing a type that was never set is a silent no-op.
    #[test]
    fn clear_missing_type_is_noop() {
        let mut dt: DataTransfer<u32> = DataTransfer::new();
        dt.set_data("a", "1");
        dt.clear_data(Some("zzz"));
        assert_eq!(dt.get_data("a"), Some("1"));
    }

    #[test]
    fn effects_are_mutable() {
        let mut dt: DataTransfer<u32> = DataTransfer::new();
        dt.set_drop_effect("copy");
        dt.set_effect_allowed("copyMove");
        assert_eq!(dt.drop_effect(), "copy");
        assert_eq!(dt.effect_allowed(), "copyMove");
    }

    #[test]
    fn custom_drag_image_stores_node_and_offset() {
        let mut dt: DataTransfer<u32> = DataTransfer::new();
        dt.set_drag_image(42, 8.0, 12.0);
        let (node, offset) = dt.drag_image().unwrap();
        assert_eq!(*node, 42);
        assert_eq!(offset, Vec2::new(8.0, 12.0));
    }

    #[test]
    fn custom_drag_image_can_be_replaced() {
        let mut dt: DataTransfer<u32> = DataTransfer::new();
        dt.set_drag_image(1, 0.0, 0.0);
        dt.set_drag_image(2, 3.0, 4.0);
        let (node, offset) = dt.drag_image().unwrap();
        assert_eq!(*node, 2);
        assert_eq!(offset, Vec2::new(3.0, 4.0));
    }
}
