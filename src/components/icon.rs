use gpui::{
    Hsla, IntoElement, Length, Radians, RenderOnce, SharedString, Styled, Transformation,
    prelude::FluentBuilder, px, svg,
};

use crate::theme::ThemeExt;

/// An SVG icon tinted with a single color.
#[derive(IntoElement)]
pub struct Icon {
    path: SharedString,
    size: Option<Length>,
    rotate: Radians,
    color: Option<Hsla>,
}

impl Icon {
    /// Creates an icon from an asset path or a [`crate::MosaicIconKind`].
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            size: None,
            rotate: Radians(0.),
            color: None,
        }
    }

    /// Sets width and height. Defaults to 14px.
    pub fn size(mut self, size: impl Into<Length>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Overrides the primary text color of the theme.
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn rotate(mut self, rotate: impl Into<Radians>) -> Self {
        self.rotate = rotate.into();
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let size = self.size.unwrap_or_else(|| px(14.).into());

        svg()
            .path(self.path)
            .flex_none()
            .w(size)
            .min_w(size)
            .h(size)
            .min_h(size)
            .text_color(cx.get_theme().colors.text.primary)
            .when_some(self.color, |this, color| this.text_color(color))
            .with_transformation(Transformation::rotate(self.rotate))
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::{MosaicIconKind, theme::Theme};
    use gpui::{AppContext, TestAppContext, VisualTestContext, hsla};

    #[gpui::test]
    fn test_icon_builder(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let icon = Icon::new(MosaicIconKind::Checkmark)
                .size(px(24.))
                .color(hsla(0.5, 0.5, 0.5, 1.))
                .rotate(Radians(1.5));

            assert_eq!(icon.path, SharedString::from("icons/checkmark.svg"));
            assert!(icon.size.is_some());
            assert!(icon.color.is_some());
            assert_eq!(icon.rotate.0, 1.5);
        });
    }

    #[gpui::test]
    fn test_icon_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| IconTestView))
                .unwrap()
        });

        let cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }

    struct IconTestView;

    impl gpui::Render for IconTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            gpui::div().size_full().child(Icon::new(MosaicIconKind::Close).size(px(24.)))
        }
    }
}
