#![warn(missing_docs)]

//! Headless building blocks for gpui_mosaic components.
//!
//! Nothing in here renders. These are the pieces of component behaviour that
//! can be reasoned about (and tested) without a window: value ownership,
//! overlay placement, slider track mapping, option lists and timers.

/// Controlled and uncontrolled value ownership.
pub mod value;

/// Anchor-relative overlay placement with viewport clamping.
pub mod placement;

/// Pointer-to-value mapping along a slider track.
pub mod track;

/// Ordered option lists used by select-like components.
pub mod options;

/// Epoch-guarded timer used for auto-dismissing surfaces.
pub mod dismiss_timer;
