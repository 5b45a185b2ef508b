use gpui::{Bounds, Pixels, Point};
use thiserror::Error;

/// The axis a slider track runs along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackAxis {
    /// Left is the minimum, right is the maximum.
    #[default]
    Horizontal,
    /// Top is the maximum, bottom is the minimum.
    Vertical,
}

/// Errors produced when building a [`SliderRange`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    /// `min` was not strictly below `max`.
    #[error("slider minimum ({min}) must be below its maximum ({max})")]
    Empty {
        /// The requested minimum.
        min: f32,
        /// The requested maximum.
        max: f32,
    },
    /// A bound or the step was NaN or infinite.
    #[error("slider bounds and step must be finite")]
    NotFinite,
    /// The step was negative.
    #[error("slider step ({0}) must not be negative")]
    NegativeStep(f32),
}

/// The value range of a slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    min: f32,
    max: f32,
    step: f32,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            min: 0.,
            max: 100.,
            step: 1.,
        }
    }
}

impl SliderRange {
    /// Creates a range. A `step` of zero disables snapping.
    pub fn new(min: f32, max: f32, step: f32) -> Result<Self, RangeError> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(RangeError::NotFinite);
        }
        if min >= max {
            return Err(RangeError::Empty { min, max });
        }
        if step < 0. {
            return Err(RangeError::NegativeStep(step));
        }

        Ok(Self { min, max, step })
    }

    /// The smallest value.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// The largest value.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// The snapping interval, zero when snapping is disabled.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Clamps `value` into `[min, max]`.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Snaps `value` to the nearest `min + k * step`, then clamps.
    ///
    /// The final clamp can leave `max` off the step grid when the range is
    /// not a multiple of the step.
    pub fn snap(&self, value: f32) -> f32 {
        if self.step <= 0. {
            return self.clamp(value);
        }

        let steps = ((value - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }

    /// Where `value` sits in the range, from 0 to 1.
    pub fn fraction_of(&self, value: f32) -> f32 {
        ((self.clamp(value) - self.min) / (self.max - self.min)).clamp(0., 1.)
    }

    /// Maps a normalised track fraction to a snapped value.
    pub fn value_at_fraction(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0., 1.);
        self.snap(self.min + fraction * (self.max - self.min))
    }

    /// Maps a pointer position over `track` to a snapped value.
    ///
    /// Pointers before the track start map to the start value and pointers
    /// past its end map to the end value. A track with no length maps to
    /// `min`.
    pub fn value_at(&self, pointer: Point<Pixels>, track: Bounds<Pixels>, axis: TrackAxis) -> f32 {
        let (offset, length) = match axis {
            TrackAxis::Horizontal => (pointer.x - track.origin.x, track.size.width),
            TrackAxis::Vertical => (pointer.y - track.origin.y, track.size.height),
        };

        let length = length.to_f64() as f32;
        if length <= 0. {
            return self.min;
        }

        let fraction = ((offset.to_f64() as f32) / length).clamp(0., 1.);
        let fraction = match axis {
            TrackAxis::Horizontal => fraction,
            TrackAxis::Vertical => 1. - fraction,
        };

        self.value_at_fraction(fraction)
    }

    /// Formats `value` the way a slider label shows it.
    pub fn format(&self, value: f32) -> String {
        if self.step > 0. && self.step < 1. {
            format!("{value:.1}")
        } else {
            format!("{value:.0}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{point, px, size};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn track(x: f32, y: f32, w: f32, h: f32) -> Bounds<Pixels> {
        Bounds::new(point(px(x), px(y)), size(px(w), px(h)))
    }

    #[test]
    fn test_tap_snaps_to_nearest_step() {
        let range = SliderRange::new(0., 100., 10.).unwrap();
        let value = range.value_at(
            point(px(46.), px(10.)),
            track(0., 0., 200., 20.),
            TrackAxis::Horizontal,
        );

        assert_eq!(value, 20.);
    }

    #[test]
    fn test_snap_is_relative_to_min() {
        let range = SliderRange::new(5., 50., 10.).unwrap();
        assert_eq!(range.snap(17.), 15.);
        assert_eq!(range.snap(21.), 25.);
        // Beyond the last reachable step, the clamp wins.
        assert_eq!(range.snap(52.), 50.);
    }

    #[test]
    fn test_zero_step_disables_snapping() {
        let range = SliderRange::new(0., 1., 0.).unwrap();
        assert_eq!(range.snap(0.337), 0.337);
        assert_eq!(range.snap(4.), 1.);
    }

    #[test]
    fn test_vertical_track_is_inverted() {
        let range = SliderRange::default();
        let bar = track(0., 100., 20., 200.);

        assert_eq!(range.value_at(point(px(10.), px(100.)), bar, TrackAxis::Vertical), 100.);
        assert_eq!(range.value_at(point(px(10.), px(300.)), bar, TrackAxis::Vertical), 0.);
        assert_eq!(range.value_at(point(px(10.), px(150.)), bar, TrackAxis::Vertical), 75.);
    }

    #[test]
    fn test_pointer_outside_track_clamps() {
        let range = SliderRange::new(-20., 20., 1.).unwrap();
        let bar = track(50., 0., 100., 10.);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let before = rng.random_range(-1000.0..50.0);
            let after = rng.random_range(150.0..1000.0);

            assert_eq!(range.value_at(point(px(before), px(5.)), bar, TrackAxis::Horizontal), -20.);
            assert_eq!(range.value_at(point(px(after), px(5.)), bar, TrackAxis::Horizontal), 20.);
        }
    }

    #[test]
    fn test_values_stay_on_grid_inside_range() {
        let range = SliderRange::new(0., 100., 10.).unwrap();
        let bar = track(0., 0., 300., 10.);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..500 {
            let value = range.value_at(
                point(px(rng.random_range(-100.0..400.0)), px(0.)),
                bar,
                TrackAxis::Horizontal,
            );

            assert!((0. ..=100.).contains(&value));
            assert_eq!(value % 10., 0., "{value} is not on the step grid");
        }
    }

    #[test]
    fn test_empty_track_maps_to_min() {
        let range = SliderRange::new(3., 9., 1.).unwrap();
        let value = range.value_at(point(px(40.), px(40.)), track(0., 0., 0., 0.), TrackAxis::Horizontal);
        assert_eq!(value, 3.);
    }

    #[test]
    fn test_invalid_ranges_are_rejected() {
        assert_eq!(
            SliderRange::new(10., 10., 1.),
            Err(RangeError::Empty { min: 10., max: 10. })
        );
        assert_eq!(SliderRange::new(0., f32::NAN, 1.), Err(RangeError::NotFinite));
        assert_eq!(SliderRange::new(0., 1., -0.5), Err(RangeError::NegativeStep(-0.5)));
    }

    #[test]
    fn test_fraction_of() {
        let range = SliderRange::new(-50., 50., 1.).unwrap();
        assert_eq!(range.fraction_of(0.), 0.5);
        assert_eq!(range.fraction_of(-80.), 0.);
        assert_eq!(range.fraction_of(75.), 1.);
    }

    #[test]
    fn test_format_follows_step() {
        assert_eq!(SliderRange::new(0., 1., 0.1).unwrap().format(0.27), "0.3");
        assert_eq!(SliderRange::new(0., 100., 5.).unwrap().format(42.6), "43");
    }
}
