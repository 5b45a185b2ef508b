use std::{rc::Rc, time::Duration};

use gpui::{
    AnyElement, App, ElementId, Hsla, IntoElement, ParentElement, PathBuilder, Pixels, Point,
    RenderOnce, Styled, Window, canvas, div, point, prelude::FluentBuilder, px,
};
use gpui_mosaic_primitives::placement::{ARROW_SIZE, OverlayPlacement, PlacementConfig};

use crate::{
    primitives::{OverlayLayer, OverlayState, OverlayTiming},
    theme::{ShadowKind, ThemeExt},
    utils::rgb_a,
};

/// Corners of the arrow triangle inside its `ARROW_SIZE` box at `arrow`.
///
/// The apex points back at the anchor. The base lies on the overlay edge.
pub fn arrow_triangle(placement: OverlayPlacement, arrow: Point<Pixels>) -> [Point<Pixels>; 3] {
    let size = px(ARROW_SIZE);
    let half = size / 2.;
    let (x, y) = (arrow.x, arrow.y);

    match placement {
        OverlayPlacement::Bottom => [
            point(x + half, y),
            point(x + size, y + half),
            point(x, y + half),
        ],
        OverlayPlacement::Top => [
            point(x + half, y + size),
            point(x, y + half),
            point(x + size, y + half),
        ],
        OverlayPlacement::Right => [
            point(x, y + half),
            point(x + half, y),
            point(x + half, y + size),
        ],
        OverlayPlacement::Left => [
            point(x + size, y + half),
            point(x + half, y + size),
            point(x + half, y),
        ],
    }
}

/// Floating content positioned next to a trigger.
///
/// Visibility is owned by the caller. A press on the backdrop asks to be
/// closed through `on_close`.
#[derive(IntoElement)]
pub struct Popover {
    id: ElementId,
    visible: bool,
    trigger: Option<AnyElement>,
    content: Option<AnyElement>,
    placement: OverlayPlacement,
    with_arrow: bool,
    close_on_backdrop_press: bool,
    animation_duration: Duration,
    on_close: Option<Rc<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Popover {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            visible: false,
            trigger: None,
            content: None,
            placement: OverlayPlacement::Bottom,
            with_arrow: true,
            close_on_backdrop_press: true,
            animation_duration: Duration::from_millis(200),
            on_close: None,
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// The element the popover is anchored to.
    pub fn trigger(mut self, trigger: impl IntoElement) -> Self {
        self.trigger = Some(trigger.into_any_element());
        self
    }

    pub fn content(mut self, content: impl IntoElement) -> Self {
        self.content = Some(content.into_any_element());
        self
    }

    pub fn placement(mut self, placement: OverlayPlacement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_arrow(mut self, with_arrow: bool) -> Self {
        self.with_arrow = with_arrow;
        self
    }

    pub fn close_on_backdrop_press(mut self, close_on_backdrop_press: bool) -> Self {
        self.close_on_backdrop_press = close_on_backdrop_press;
        self
    }

    pub fn animation_duration(mut self, animation_duration: Duration) -> Self {
        self.animation_duration = animation_duration;
        self
    }

    pub fn on_close(mut self, on_close: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(on_close));
        self
    }
}

impl RenderOnce for Popover {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let state = OverlayState::from_window(
            &self.id,
            window,
            cx,
            OverlayTiming::symmetric(self.animation_duration),
        );
        state.sync(self.visible, cx);

        let is_open = state.is_open(cx);
        let delta = state.delta(window, cx);
        let viewport = window.viewport_size();
        let position = state.resolve(self.placement, viewport, &PlacementConfig::default(), cx);

        let layer = position
            .filter(|_| is_open || delta > 0.)
            .map(|position| {
                let theme = cx.get_theme();
                let surface_color = theme.colors.surface;

                let arrow = self.with_arrow.then(|| {
                    let triangle = arrow_triangle(position.placement, position.arrow);

                    canvas(
                        |_, _, _| {},
                        move |bounds, _, window, _cx| {
                            let mut builder = PathBuilder::fill();
                            builder.move_to(bounds.origin + triangle[0]);
                            builder.line_to(bounds.origin + triangle[1]);
                            builder.line_to(bounds.origin + triangle[2]);
                            builder.close();

                            if let Ok(path) = builder.build() {
                                window.paint_path(path, Hsla::from(surface_color));
                            }
                        },
                    )
                    .absolute()
                    .top_0()
                    .left_0()
                    .size_full()
                });

                let surface = div()
                    .relative()
                    .bg(surface_color)
                    .rounded(theme.border_radius.md)
                    .shadow(vec![ShadowKind::Md.from_presets(&theme.shadows)])
                    .children(arrow)
                    .child(div().overflow_hidden().children(self.content));

                let on_close = self.on_close.clone();
                OverlayLayer::new(self.id.clone(), state.clone(), position.origin, surface)
                    .scrim(rgb_a(0x000000, 0.3))
                    .when(self.close_on_backdrop_press, |this| {
                        this.on_dismiss(move |window, cx| {
                            if let Some(on_close) = &on_close {
                                on_close(window, cx);
                            }
                        })
                    })
            });

        div()
            .relative()
            .children(self.trigger)
            .child(state.anchor_probe())
            .children(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{Bounds, size};
    use gpui_mosaic_primitives::placement::resolve_overlay_position;

    #[test]
    fn test_arrow_points_at_anchor() {
        let arrow = point(px(40.), px(-8.));
        let [apex, base_a, base_b] = arrow_triangle(OverlayPlacement::Bottom, arrow);

        assert_eq!(apex, point(px(48.), px(-8.)));
        assert_eq!(base_a.y, px(0.));
        assert_eq!(base_b.y, px(0.));

        let arrow = point(px(-8.), px(20.));
        let [apex, base_a, base_b] = arrow_triangle(OverlayPlacement::Right, arrow);
        assert_eq!(apex, point(px(-8.), px(28.)));
        assert_eq!(base_a.x, px(0.));
        assert_eq!(base_b.x, px(0.));
    }

    #[test]
    fn test_clamped_popover_keeps_arrow_on_anchor_side() {
        let position = resolve_overlay_position(
            Bounds::new(point(px(300.), px(500.)), size(px(100.), px(40.))),
            OverlayPlacement::Right,
            size(px(250.), px(150.)),
            size(px(400.), px(800.)),
            &PlacementConfig::default(),
        );

        let [apex, _, _] = arrow_triangle(position.placement, position.arrow);
        assert_eq!(position.origin.x, px(140.));
        assert!(apex.y >= px(0.) && apex.y <= px(150.));
    }

    #[test]
    fn test_builder_defaults() {
        let popover = Popover::new("popover");

        assert!(!popover.visible);
        assert!(popover.with_arrow);
        assert!(popover.close_on_backdrop_press);
        assert_eq!(popover.placement, OverlayPlacement::Bottom);
        assert_eq!(popover.animation_duration, Duration::from_millis(200));
    }
}
