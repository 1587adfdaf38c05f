// Copyright 2025 the Touchdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognized configuration options and their defaults.

/// Immutable recognizer configuration.
///
/// Set once at construction and read-only thereafter. Durations are in
/// milliseconds, distances in the same units as the host's client
/// coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Whether to synthesize a floating preview of the dragged element.
    pub generate_drag_image: bool,
    /// Minimum hold time before motion can start a drag.
    pub drag_init_delay: u64,
    /// Manhattan-distance motion required to confirm tap-vs-drag intent.
    pub drag_init_threshold: f64,
    /// Maximum gap between taps to count as a double-click.
    pub double_click_interval: u64,
    /// Long-press duration before a `contextmenu` is synthesized.
    pub context_menu_delay: u64,
    /// Opacity applied to generated (non-custom) drag previews.
    pub drag_image_opacity: f64,
    /// If false, any sample with two or more simultaneous touches is
    /// ignored entirely.
    pub handle_multi_touch: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generate_drag_image: true,
            drag_init_delay: 160,
            drag_init_threshold: 5.0,
            double_click_interval: 500,
            context_menu_delay: 1000,
            drag_image_opacity: 0.5,
            handle_multi_touch: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let c = Config::default();
        assert!(c.generate_drag_image);
        assert_eq!(c.drag_init_delay, 160);
        assert_eq!(c.drag_init_threshold, 5.0);
        assert_eq!(c.double_click_interval, 500);
        assert_eq!(c.context_menu_delay, 1000);
        assert_eq!(c.drag_image_opacity, 0.5);
        assert!(!c.handle_multi_touch);
    }
}
