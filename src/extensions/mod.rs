/// How pointer presses on a component propagate.
pub mod click_behavior;

/// Painting overlays after the rest of the window.
pub mod deferrable;
