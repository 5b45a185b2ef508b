#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{App, BoxShadow, Pixels, Rgba};

use crate::theme::{ThemeBorderRadius, ThemeExt, ThemePalette, ThemeShadows, ThemeSpacing};

/// Semantic palette colors a component can be tinted with.
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn from_palette(&self, palette: &ThemePalette) -> Rgba)]
pub enum ColorKind {
    #[default]
    #[assoc(from_palette = palette.primary)]
    Primary,
    #[assoc(from_palette = palette.secondary)]
    Secondary,
    #[assoc(from_palette = palette.success)]
    Success,
    #[assoc(from_palette = palette.error)]
    Error,
    #[assoc(from_palette = palette.warning)]
    Warning,
    #[assoc(from_palette = palette.info)]
    Info,
}

impl ColorKind {
    /// Resolves the color from the installed theme.
    pub fn resolve(&self, cx: &App) -> Rgba {
        self.from_palette(&cx.get_theme().colors)
    }
}

/// Steps of the spacing scale.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn from_scale(&self, spacing: &ThemeSpacing) -> Pixels)]
pub enum SpacingKind {
    #[assoc(from_scale = spacing.xs)]
    Xs,
    #[assoc(from_scale = spacing.sm)]
    Sm,
    #[assoc(from_scale = spacing.md)]
    Md,
    #[assoc(from_scale = spacing.lg)]
    Lg,
    #[assoc(from_scale = spacing.xl)]
    Xl,
    #[assoc(from_scale = spacing.xxl)]
    Xxl,
}

impl SpacingKind {
    pub fn resolve(&self, cx: &App) -> Pixels {
        self.from_scale(&cx.get_theme().spacing)
    }
}

/// Steps of the border radius scale.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn from_scale(&self, radius: &ThemeBorderRadius) -> Pixels)]
pub enum RadiusKind {
    #[assoc(from_scale = radius.xs)]
    Xs,
    #[assoc(from_scale = radius.sm)]
    Sm,
    #[assoc(from_scale = radius.md)]
    Md,
    #[assoc(from_scale = radius.lg)]
    Lg,
    #[assoc(from_scale = radius.xl)]
    Xl,
    /// Fully rounded ends.
    #[assoc(from_scale = radius.round)]
    Round,
}

impl RadiusKind {
    pub fn resolve(&self, cx: &App) -> Pixels {
        self.from_scale(&cx.get_theme().border_radius)
    }
}

/// Elevation presets.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn from_presets(&self, shadows: &ThemeShadows) -> BoxShadow)]
pub enum ShadowKind {
    #[assoc(from_presets = shadows.sm.to_box_shadow())]
    Sm,
    #[assoc(from_presets = shadows.md.to_box_shadow())]
    Md,
    #[assoc(from_presets = shadows.lg.to_box_shadow())]
    Lg,
}

impl ShadowKind {
    pub fn resolve(&self, cx: &App) -> BoxShadow {
        self.from_presets(&cx.get_theme().shadows)
    }
}

/// The three sizes most components come in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeKind {
    Small,
    #[default]
    Medium,
    Large,
}
