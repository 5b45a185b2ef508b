use std::time::Duration;

use gpui::{
    CornersRefinement, ElementId, FocusHandle, IntoElement, Pixels, Rgba, RenderOnce,
    prelude::*, px,
};
use gpui_squircle::{SquircleStyleRefinement, SquircleStyled, squircle};

use crate::{
    conitional_transition,
    theme::ColorKind,
    utils::{ElementIdExt, RgbaExt},
};

const SIZE_SCALE_FACTOR: f32 = 8.;

/// An animated outline drawn around a focused control.
#[derive(IntoElement)]
pub struct FocusRing {
    id: ElementId,
    focus_handle: FocusHandle,
    color: Option<Rgba>,
    style: SquircleStyleRefinement,
}

impl FocusRing {
    pub fn new(id: impl Into<ElementId>, focus_handle: FocusHandle) -> Self {
        Self {
            id: id.into(),
            focus_handle,
            color: None,
            style: SquircleStyleRefinement::default(),
        }
    }

    /// Tints the ring. Defaults to the theme's primary color.
    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl SquircleStyled for FocusRing {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style.inner
    }

    fn outer_style(&mut self) -> &mut SquircleStyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for FocusRing {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let ring_color = self.color.unwrap_or_else(|| ColorKind::Primary.resolve(cx));
        let is_focused = self.focus_handle.is_focused(window);

        let ring_transition = conitional_transition!(
            self.id.with_suffix("state:transition:ring"),
            window,
            cx,
            Duration::from_millis(365),
            {
                is_focused => 1.,
                _ => 0.
            }
        );
        let delta = *ring_transition.evaluate(window, cx);
        let size_factor = (1. - delta) * SIZE_SCALE_FACTOR;

        squircle()
            .absolute()
            .top_0()
            .bottom_0()
            .left_0()
            .right_0()
            .border(px(3.))
            .border_outside()
            .inset(px(-size_factor))
            .border_color(ring_color.alpha(delta * 0.3))
            .map(|mut this| {
                this.outer_style().corner_radii =
                    add_to_corner_radii(&self.style.corner_radii, px(8.), px(size_factor + 1.));
                this
            })
    }
}

fn add_to_corner_radii(
    corner_radii: &CornersRefinement<Pixels>,
    default: Pixels,
    num: Pixels,
) -> CornersRefinement<Pixels> {
    CornersRefinement {
        top_left: Some(corner_radii.top_left.unwrap_or(default) + num),
        top_right: Some(corner_radii.top_right.unwrap_or(default) + num),
        bottom_right: Some(corner_radii.bottom_right.unwrap_or(default) + num),
        bottom_left: Some(corner_radii.bottom_left.unwrap_or(default) + num),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_radii_fill_missing_corners() {
        let radii = CornersRefinement {
            top_left: Some(px(4.)),
            ..Default::default()
        };

        let grown = add_to_corner_radii(&radii, px(8.), px(2.));
        assert_eq!(grown.top_left, Some(px(6.)));
        assert_eq!(grown.bottom_right, Some(px(10.)));
    }
}
