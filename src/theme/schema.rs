use std::{
    ops::{Deref, DerefMut},
    sync::LazyLock,
};

use gpui::{BoxShadow, Global, Pixels, Rgba, SharedString, point, px};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::deserializers::{de_pixels, de_unit_interval};
use crate::config::{ConfigError, merge_over_defaults};

const DEFAULT_THEME_JSON: &str = include_str!("../../themes/default.json");

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub colors: ThemePalette,
    pub spacing: ThemeSpacing,
    pub border_radius: ThemeBorderRadius,
    pub shadows: ThemeShadows,
    pub breakpoints: ThemeBreakpoints,
    pub z_index: ThemeZIndex,
}

macro_rules! generate_builtin_themes {
    ( $( [$json:expr, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| {
                Theme::from_string($json)
                    .unwrap_or_else(|err| panic!("built-in theme failed to parse: {err}"))
            });
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockTheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Theme {
    generate_builtin_themes!([DEFAULT_THEME_JSON, DEFAULT]);

    fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }

    /// Builds a theme by deep-merging `options` over the default theme.
    ///
    /// Only the keys present in `options` are replaced, so
    /// `{"colors": {"primary": "#FF5722"}}` keeps every other default.
    pub fn create(options: Value) -> Result<Theme, ConfigError> {
        merge_over_defaults(DEFAULT_THEME_JSON, options, "theme")
    }
}

impl Global for Theme {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePalette {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub success: Rgba,
    pub error: Rgba,
    pub warning: Rgba,
    pub info: Rgba,
    pub light: Rgba,
    pub dark: Rgba,
    pub background: Rgba,
    pub surface: Rgba,
    pub text: ThemeTextColors,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub disabled: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeSpacing {
    #[serde(deserialize_with = "de_pixels")]
    pub xs: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xxl: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeBorderRadius {
    #[serde(deserialize_with = "de_pixels")]
    pub xs: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub round: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeShadows {
    pub sm: ThemeShadow,
    pub md: ThemeShadow,
    pub lg: ThemeShadow,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeShadow {
    pub color: Rgba,
    #[serde(deserialize_with = "de_pixels")]
    pub offset_x: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub offset_y: Pixels,
    #[serde(deserialize_with = "de_unit_interval")]
    pub opacity: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub blur: Pixels,
}

impl ThemeShadow {
    /// Converts the preset into a shadow gpui can paint.
    pub fn to_box_shadow(&self) -> BoxShadow {
        let mut color = self.color;
        color.a *= self.opacity;

        BoxShadow {
            color: color.into(),
            offset: point(self.offset_x, self.offset_y),
            blur_radius: self.blur,
            spread_radius: px(0.),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeBreakpoints {
    #[serde(deserialize_with = "de_pixels")]
    pub xs: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeZIndex {
    pub app_bar: usize,
    pub drawer: usize,
    pub modal: usize,
    pub snackbar: usize,
    pub tooltip: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_theme_parses() {
        let theme = Theme::DEFAULT;
        assert_eq!(&*theme.name, "Default");
        assert_eq!(theme.spacing.sm, px(8.));
        assert_eq!(theme.border_radius.round, px(9999.));
        assert!(theme.spacing.xs < theme.spacing.xxl);
        assert!(theme.breakpoints.sm < theme.breakpoints.xl);
    }

    #[test]
    fn test_create_overrides_single_color() {
        let theme = Theme::create(json!({ "colors": { "primary": "#FF5722" } })).unwrap();
        let default = Theme::DEFAULT;

        assert_ne!(theme.colors.primary, default.colors.primary);
        assert!((theme.colors.primary.r - 1.).abs() < 1e-4);
        assert_eq!(theme.colors.secondary, default.colors.secondary);
        assert_eq!(theme.colors.text.primary, default.colors.text.primary);
        assert_eq!(theme.spacing.md, default.spacing.md);
    }

    #[test]
    fn test_create_with_empty_options_matches_default() {
        let theme = Theme::create(json!({})).unwrap();
        assert_eq!(theme.name, Theme::DEFAULT.name);
        assert_eq!(theme.colors.error, Theme::DEFAULT.colors.error);
    }

    #[test]
    fn test_create_rejects_bad_values() {
        assert!(matches!(
            Theme::create(json!({ "spacing": { "md": "lots" } })),
            Err(ConfigError::Parse { what: "theme", .. })
        ));
        assert!(matches!(
            Theme::create(json!({ "shadows": { "md": { "opacity": 4 } } })),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_shadow_opacity_scales_alpha() {
        let shadow = Theme::DEFAULT.shadows.md.to_box_shadow();
        assert!((shadow.color.a - 0.25).abs() < 1e-4);
        assert_eq!(shadow.offset.y, px(2.));
    }
}
