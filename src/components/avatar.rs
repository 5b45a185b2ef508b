use gpui::{
    App, FontWeight, ImageSource, IntoElement, ObjectFit, ParentElement, Pixels, RenderOnce, Rgba,
    SharedString, Styled, StyledImage, Window, div, img, prelude::FluentBuilder, px, rgb,
};

use crate::{
    theme::{ColorKind, Theme, ThemeExt},
    typography::TypographyExt,
};

/// Avatar dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
    Custom(Pixels),
}

impl AvatarSize {
    pub fn pixels(&self) -> Pixels {
        match self {
            AvatarSize::Small => px(32.),
            AvatarSize::Medium => px(40.),
            AvatarSize::Large => px(56.),
            AvatarSize::Custom(size) => *size,
        }
    }
}

/// Outline of an avatar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarShape {
    #[default]
    Circular,
    Rounded,
    Square,
}

/// First letters of up to two words, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct AvatarStyle {
    pub size: Pixels,
    pub corner_radius: Pixels,
    pub background: Rgba,
    pub initials_size: Pixels,
    pub initials_color: Rgba,
}

impl AvatarStyle {
    pub fn resolve(
        size: AvatarSize,
        shape: AvatarShape,
        color: ColorKind,
        has_image: bool,
        theme: &Theme,
    ) -> Self {
        let size = size.pixels();
        let corner_radius = match shape {
            AvatarShape::Circular => size / 2.,
            AvatarShape::Rounded => theme.border_radius.md,
            AvatarShape::Square => px(0.),
        };

        let mut background = color.from_palette(&theme.colors);
        if has_image {
            background.a = 0.;
        }

        Self {
            size,
            corner_radius,
            background,
            initials_size: size * 0.4,
            initials_color: rgb(0xFFFFFF),
        }
    }
}

/// A picture or the initials of a person.
#[derive(IntoElement)]
pub struct Avatar {
    src: Option<ImageSource>,
    alt: SharedString,
    size: AvatarSize,
    shape: AvatarShape,
    color: ColorKind,
}

impl Avatar {
    pub fn new() -> Self {
        Self {
            src: None,
            alt: SharedString::default(),
            size: AvatarSize::default(),
            shape: AvatarShape::default(),
            color: ColorKind::default(),
        }
    }

    /// Shows an image instead of initials.
    pub fn src(mut self, src: impl Into<ImageSource>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// The name initials are taken from.
    pub fn alt(mut self, alt: impl Into<SharedString>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    pub fn shape(mut self, shape: AvatarShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn color(mut self, color: ColorKind) -> Self {
        self.color = color;
        self
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let style = AvatarStyle::resolve(
            self.size,
            self.shape,
            self.color,
            self.src.is_some(),
            cx.get_theme(),
        );
        let font_family = cx.get_typography().font_family.primary[0].clone();

        div()
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .overflow_hidden()
            .size(style.size)
            .rounded(style.corner_radius)
            .bg(style.background)
            .map(|this| match self.src {
                Some(src) => this.child(
                    img(src)
                        .size(style.size)
                        .rounded(style.corner_radius)
                        .object_fit(ObjectFit::Cover),
                ),
                None => this.child(
                    div()
                        .font_family(font_family)
                        .font_weight(FontWeight::MEDIUM)
                        .text_size(style.initials_size)
                        .line_height(style.initials_size * 1.2)
                        .text_color(style.initials_color)
                        .child(initials(&self.alt)),
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("grace brewster murray hopper"), "GB");
        assert_eq!(initials("plato"), "P");
        assert_eq!(initials("  spaced   out  "), "SO");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_sizes() {
        assert_eq!(AvatarSize::Small.pixels(), px(32.));
        assert_eq!(AvatarSize::Medium.pixels(), px(40.));
        assert_eq!(AvatarSize::Large.pixels(), px(56.));
        assert_eq!(AvatarSize::Custom(px(72.)).pixels(), px(72.));
    }

    #[test]
    fn test_shape_radius_and_font_scale() {
        let theme = Theme::DEFAULT;
        let resolve = |shape| {
            AvatarStyle::resolve(AvatarSize::Large, shape, ColorKind::Primary, false, &theme)
        };

        assert_eq!(resolve(AvatarShape::Circular).corner_radius, px(28.));
        assert_eq!(resolve(AvatarShape::Rounded).corner_radius, theme.border_radius.md);
        assert_eq!(resolve(AvatarShape::Square).corner_radius, px(0.));
        assert_eq!(resolve(AvatarShape::Circular).initials_size, px(56. * 0.4));
    }

    #[test]
    fn test_image_clears_background() {
        let theme = Theme::DEFAULT;
        let style = AvatarStyle::resolve(
            AvatarSize::Medium,
            AvatarShape::Circular,
            ColorKind::Info,
            true,
            &theme,
        );

        assert_eq!(style.background.a, 0.);
    }
}

#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use super::*;
    use gpui::{AppContext, Context, TestAppContext, VisualTestContext};

    struct AvatarTestView;

    impl gpui::Render for AvatarTestView {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div()
                .size_full()
                .flex()
                .child(Avatar::new().alt("Ada Lovelace"))
                .child(
                    Avatar::new()
                        .alt("Plato")
                        .size(AvatarSize::Custom(px(64.)))
                        .shape(AvatarShape::Rounded)
                        .color(ColorKind::Secondary),
                )
        }
    }

    #[gpui::test]
    fn test_avatar_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            crate::init(cx);

            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| AvatarTestView))
                .unwrap()
        });

        let cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }
}
