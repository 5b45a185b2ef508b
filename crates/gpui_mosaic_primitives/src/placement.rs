use gpui::{Bounds, Pixels, Point, Size, point, px, size};

/// Distance between the anchor edge and the overlay.
pub const OVERLAY_GAP: f32 = 10.;

/// Minimum distance kept between the overlay and the viewport edges.
pub const VIEWPORT_MARGIN: f32 = 10.;

/// Width used for placement before the overlay content has been measured.
pub const ESTIMATED_OVERLAY_WIDTH: f32 = 250.;

/// Height used for placement before the overlay content has been measured.
pub const ESTIMATED_OVERLAY_HEIGHT: f32 = 150.;

/// Side length of the square arrow indicator.
pub const ARROW_SIZE: f32 = 16.;

/// The side of the anchor an overlay is placed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayPlacement {
    /// Above the anchor, horizontally centred.
    Top,
    /// Below the anchor, horizontally centred.
    #[default]
    Bottom,
    /// Left of the anchor, vertically centred.
    Left,
    /// Right of the anchor, vertically centred.
    Right,
}

/// Spacing used when resolving a position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementConfig {
    /// Distance between the anchor edge and the overlay.
    pub gap: Pixels,
    /// Minimum distance kept from the viewport edges.
    pub margin: Pixels,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            gap: px(OVERLAY_GAP),
            margin: px(VIEWPORT_MARGIN),
        }
    }
}

impl PlacementConfig {
    /// Returns a copy with a different gap.
    pub fn gap(mut self, gap: Pixels) -> Self {
        self.gap = gap;
        self
    }
}

/// Where an overlay ends up on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayPosition {
    /// The overlay's top-left corner in window coordinates.
    pub origin: Point<Pixels>,
    /// The arrow's top-left corner, relative to `origin`.
    pub arrow: Point<Pixels>,
    /// The placement this position was resolved for.
    pub placement: OverlayPlacement,
}

/// Returns the size used for an overlay that has not been measured yet.
pub fn estimated_overlay_size() -> Size<Pixels> {
    size(px(ESTIMATED_OVERLAY_WIDTH), px(ESTIMATED_OVERLAY_HEIGHT))
}

fn f(pixels: Pixels) -> f32 {
    pixels.to_f64() as f32
}

/// Computes where an overlay of `overlay` size goes relative to `anchor`.
///
/// The raw position sits `config.gap` away from the anchor edge implied by
/// `placement`, centred on the other axis. It is then clamped so the overlay
/// stays `config.margin` away from every viewport edge. Overlays larger than
/// the viewport minus margins can still overflow on the far side.
pub fn resolve_overlay_position(
    anchor: Bounds<Pixels>,
    placement: OverlayPlacement,
    overlay: Size<Pixels>,
    viewport: Size<Pixels>,
    config: &PlacementConfig,
) -> OverlayPosition {
    let (ax, ay) = (f(anchor.origin.x), f(anchor.origin.y));
    let (aw, ah) = (f(anchor.size.width), f(anchor.size.height));
    let (ow, oh) = (f(overlay.width), f(overlay.height));
    let gap = f(config.gap);
    let margin = f(config.margin);

    let (mut left, mut top) = match placement {
        OverlayPlacement::Top => (ax + (aw - ow) / 2., ay - oh - gap),
        OverlayPlacement::Bottom => (ax + (aw - ow) / 2., ay + ah + gap),
        OverlayPlacement::Left => (ax - ow - gap, ay + (ah - oh) / 2.),
        OverlayPlacement::Right => (ax + aw + gap, ay + (ah - oh) / 2.),
    };

    left = clamp_to_viewport(left, ow, f(viewport.width), margin);
    top = clamp_to_viewport(top, oh, f(viewport.height), margin);

    let anchor_center_x = ax + aw / 2.;
    let anchor_center_y = ay + ah / 2.;
    let half_arrow = ARROW_SIZE / 2.;

    let along_x = (anchor_center_x - left - half_arrow).clamp(0., (ow - ARROW_SIZE).max(0.));
    let along_y = (anchor_center_y - top - half_arrow).clamp(0., (oh - ARROW_SIZE).max(0.));

    let arrow = match placement {
        OverlayPlacement::Top => point(px(along_x), px(oh - half_arrow)),
        OverlayPlacement::Bottom => point(px(along_x), px(-half_arrow)),
        OverlayPlacement::Left => point(px(ow - half_arrow), px(along_y)),
        OverlayPlacement::Right => point(px(-half_arrow), px(along_y)),
    };

    OverlayPosition {
        origin: point(px(left), px(top)),
        arrow,
        placement,
    }
}

fn clamp_to_viewport(start: f32, extent: f32, viewport: f32, margin: f32) -> f32 {
    let mut start = start;
    if start < margin {
        start = margin;
    }
    if start + extent > viewport - margin {
        start = viewport - extent - margin;
    }
    start
}

/// Measurement state for an overlay that is positioned in two phases.
///
/// The first frame after showing places the overlay using
/// [`estimated_overlay_size`] and keeps it invisible. Once the content has
/// been laid out its real size is recorded and the overlay is revealed at
/// the corrected position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayLayout {
    anchor: Option<Bounds<Pixels>>,
    content_size: Option<Size<Pixels>>,
}

impl OverlayLayout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets every measurement. Call on each show request.
    pub fn reset(&mut self) {
        self.anchor = None;
        self.content_size = None;
    }

    /// Records the anchor bounds. Returns true if they changed.
    pub fn set_anchor(&mut self, anchor: Bounds<Pixels>) -> bool {
        if self.anchor == Some(anchor) {
            return false;
        }
        self.anchor = Some(anchor);
        true
    }

    /// Records the measured content size. Returns true if it changed.
    pub fn set_content_size(&mut self, content_size: Size<Pixels>) -> bool {
        if self.content_size == Some(content_size) {
            return false;
        }
        self.content_size = Some(content_size);
        true
    }

    /// The last recorded anchor bounds.
    pub fn anchor(&self) -> Option<Bounds<Pixels>> {
        self.anchor
    }

    /// Returns true once the content has been measured.
    pub fn is_measured(&self) -> bool {
        self.content_size.is_some()
    }

    /// The measured content size, or the estimate when not yet measured.
    pub fn overlay_size(&self) -> Size<Pixels> {
        self.content_size.unwrap_or_else(estimated_overlay_size)
    }

    /// Resolves the overlay position, or `None` while the anchor is unknown.
    pub fn resolve(
        &self,
        placement: OverlayPlacement,
        viewport: Size<Pixels>,
        config: &PlacementConfig,
    ) -> Option<OverlayPosition> {
        let anchor = self.anchor?;
        Some(resolve_overlay_position(
            anchor,
            placement,
            self.overlay_size(),
            viewport,
            config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn bounds(x: f32, y: f32, w: f32, h: f32) -> Bounds<Pixels> {
        Bounds::new(point(px(x), px(y)), size(px(w), px(h)))
    }

    #[test]
    fn test_right_placement_clamps_to_viewport() {
        let position = resolve_overlay_position(
            bounds(300., 500., 100., 40.),
            OverlayPlacement::Right,
            size(px(250.), px(150.)),
            size(px(400.), px(800.)),
            &PlacementConfig::default(),
        );

        // Raw left would be 300 + 100 + 10 = 410.
        assert_eq!(position.origin.x, px(140.));
        assert_eq!(position.origin.y, px(445.));
    }

    #[test]
    fn test_bottom_placement_is_centred_below_anchor() {
        let position = resolve_overlay_position(
            bounds(100., 100., 80., 30.),
            OverlayPlacement::Bottom,
            size(px(120.), px(60.)),
            size(px(800.), px(600.)),
            &PlacementConfig::default(),
        );

        assert_eq!(position.origin, point(px(80.), px(140.)));
        assert_eq!(position.arrow, point(px(52.), px(-8.)));
    }

    #[test]
    fn test_top_placement_sits_above_anchor() {
        let position = resolve_overlay_position(
            bounds(200., 300., 40., 40.),
            OverlayPlacement::Top,
            size(px(100.), px(50.)),
            size(px(800.), px(600.)),
            &PlacementConfig::default(),
        );

        assert_eq!(position.origin, point(px(170.), px(240.)));
        assert_eq!(position.arrow.y, px(42.));
    }

    #[test]
    fn test_left_placement_clamps_at_margin() {
        let position = resolve_overlay_position(
            bounds(20., 100., 40., 40.),
            OverlayPlacement::Left,
            size(px(100.), px(40.)),
            size(px(800.), px(600.)),
            &PlacementConfig::default(),
        );

        assert_eq!(position.origin.x, px(VIEWPORT_MARGIN));
        assert_eq!(position.origin.y, px(100.));
    }

    #[test]
    fn test_arrow_tracks_anchor_after_clamping() {
        let position = resolve_overlay_position(
            bounds(0., 100., 40., 40.),
            OverlayPlacement::Bottom,
            size(px(200.), px(80.)),
            size(px(800.), px(600.)),
            &PlacementConfig::default(),
        );

        // Overlay is pushed right to the margin, so the arrow moves left to
        // keep pointing at the anchor's centre.
        assert_eq!(position.origin.x, px(10.));
        assert_eq!(position.arrow.x, px(2.));
    }

    #[test]
    fn test_oversized_overlay_may_overflow() {
        let position = resolve_overlay_position(
            bounds(10., 10., 20., 20.),
            OverlayPlacement::Bottom,
            size(px(500.), px(40.)),
            size(px(400.), px(400.)),
            &PlacementConfig::default(),
        );

        assert_eq!(position.origin.x, px(-110.));
    }

    #[test]
    fn test_overlay_stays_inside_viewport() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let viewport = size(px(400.), px(800.));
        let margin = VIEWPORT_MARGIN;
        let placements = [
            OverlayPlacement::Top,
            OverlayPlacement::Bottom,
            OverlayPlacement::Left,
            OverlayPlacement::Right,
        ];

        for _ in 0..2_000 {
            let anchor = bounds(
                rng.random_range(-50.0..450.0),
                rng.random_range(-50.0..850.0),
                rng.random_range(0.0..200.0),
                rng.random_range(0.0..200.0),
            );
            let overlay = size(
                px(rng.random_range(1.0..(400. - 2. * margin))),
                px(rng.random_range(1.0..(800. - 2. * margin))),
            );
            let placement = placements[rng.random_range(0..placements.len())];

            let position = resolve_overlay_position(
                anchor,
                placement,
                overlay,
                viewport,
                &PlacementConfig::default(),
            );

            let left = f(position.origin.x);
            let top = f(position.origin.y);
            let (width, height) = (f(overlay.width), f(overlay.height));

            assert!(left >= margin - 1e-3, "left {left} below margin");
            assert!(left + width <= 400. - margin + 1e-3, "right edge overflows");
            assert!(top >= margin - 1e-3, "top {top} below margin");
            assert!(top + height <= 800. - margin + 1e-3, "bottom edge overflows");
        }
    }

    #[test]
    fn test_custom_gap() {
        let position = resolve_overlay_position(
            bounds(50., 50., 100., 40.),
            OverlayPlacement::Bottom,
            size(px(100.), px(100.)),
            size(px(800.), px(600.)),
            &PlacementConfig::default().gap(px(4.)),
        );

        assert_eq!(position.origin, point(px(50.), px(94.)));
    }

    #[test]
    fn test_layout_uses_estimate_until_measured() {
        let mut layout = OverlayLayout::new();
        let viewport = size(px(1000.), px(1000.));
        let config = PlacementConfig::default();

        assert!(layout.resolve(OverlayPlacement::Bottom, viewport, &config).is_none());

        assert!(layout.set_anchor(bounds(400., 100., 200., 40.)));
        assert!(!layout.set_anchor(bounds(400., 100., 200., 40.)));
        assert!(!layout.is_measured());
        assert_eq!(layout.overlay_size(), estimated_overlay_size());

        let estimated = layout
            .resolve(OverlayPlacement::Bottom, viewport, &config)
            .map(|position| position.origin);
        assert_eq!(estimated, Some(point(px(375.), px(150.))));

        assert!(layout.set_content_size(size(px(100.), px(60.))));
        assert!(!layout.set_content_size(size(px(100.), px(60.))));
        assert!(layout.is_measured());

        let measured = layout
            .resolve(OverlayPlacement::Bottom, viewport, &config)
            .map(|position| position.origin);
        assert_eq!(measured, Some(point(px(450.), px(150.))));
    }

    #[test]
    fn test_layout_reset_forgets_measurements() {
        let mut layout = OverlayLayout::new();
        layout.set_anchor(bounds(0., 0., 10., 10.));
        layout.set_content_size(size(px(10.), px(10.)));

        layout.reset();

        assert!(layout.anchor().is_none());
        assert!(!layout.is_measured());
    }
}
