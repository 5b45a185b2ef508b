use gpui::{
    App, IntoElement, ParentElement, Pixels, RenderOnce, Rgba, SharedString, Styled, Window, div,
    prelude::FluentBuilder, px,
};

use crate::{
    theme::{Theme, ThemeExt},
    typography::{TextStyleSpec, TextVariant, Typography, TypographyExt},
    utils::TextStyleExt,
};

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// The resolved look of a [`Text`].
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub spec: TextStyleSpec,
    pub color: Rgba,
    pub margin_bottom: Pixels,
}

impl TextStyle {
    pub fn resolve(
        variant: TextVariant,
        color: Option<Rgba>,
        gutter_bottom: bool,
        theme: &Theme,
        typography: &Typography,
    ) -> Self {
        Self {
            spec: typography.style(variant.kind()),
            color: color.unwrap_or_else(|| variant.default_color(&theme.colors)),
            margin_bottom: if gutter_bottom { theme.spacing.sm } else { px(0.) },
        }
    }
}

/// A run of text set in one of the typography variants.
#[derive(IntoElement)]
pub struct Text {
    text: SharedString,
    variant: TextVariant,
    color: Option<Rgba>,
    align: TextAlign,
    no_wrap: bool,
    gutter_bottom: bool,
}

impl Text {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            variant: TextVariant::default(),
            color: None,
            align: TextAlign::default(),
            no_wrap: false,
            gutter_bottom: false,
        }
    }

    pub fn variant(mut self, variant: TextVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Overrides the variant's default color.
    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Keeps the text on one line, truncating with an ellipsis.
    pub fn no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = no_wrap;
        self
    }

    pub fn gutter_bottom(mut self, gutter_bottom: bool) -> Self {
        self.gutter_bottom = gutter_bottom;
        self
    }
}

impl RenderOnce for Text {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let style = TextStyle::resolve(
            self.variant,
            self.color,
            self.gutter_bottom,
            cx.get_theme(),
            cx.get_typography(),
        );

        div()
            .text_style_spec(&style.spec)
            .text_color(style.color)
            .mb(style.margin_bottom)
            .map(|this| match self.align {
                TextAlign::Left => this.text_left(),
                TextAlign::Center => this.text_center(),
                TextAlign::Right => this.text_right(),
            })
            .when(self.no_wrap, |this| this.min_w_0().truncate())
            .child(style.spec.transform(&self.text))
    }
}
