use std::{ops::Deref, sync::LazyLock};

use gpui::{FontWeight, Global, Pixels, SharedString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

use crate::{
    config::{ConfigError, merge_over_defaults},
    theme::deserializers::{de_pixels, de_string_or_non_empty_list},
};

const DEFAULT_TYPOGRAPHY_JSON: &str = include_str!("../../themes/typography.json");

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Typography {
    pub font_family: TypographyFontFamily,
    pub font_weight: TypographyFontWeights,
    pub font_size: TypographyFontSizes,
    pub variants: TypographyVariants,
}

pub struct LazyLockTypography(LazyLock<Typography>);

impl LazyLockTypography {
    #[inline(always)]
    const fn new(f: fn() -> Typography) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTypography {
    type Target = Typography;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Typography> for LazyLockTypography {
    fn as_ref(&self) -> &Typography {
        &self.0
    }
}

impl AsRef<Typography> for Typography {
    fn as_ref(&self) -> &Typography {
        self
    }
}

impl Typography {
    pub const DEFAULT: LazyLockTypography = LazyLockTypography::new(|| {
        serde_json::from_str(DEFAULT_TYPOGRAPHY_JSON)
            .unwrap_or_else(|err| panic!("built-in typography failed to parse: {err}"))
    });

    /// Builds a typography table by deep-merging `options` over the default.
    pub fn create(options: Value) -> Result<Typography, ConfigError> {
        merge_over_defaults(DEFAULT_TYPOGRAPHY_JSON, options, "typography")
    }

    /// Resolves a variant into the values a text element needs.
    pub fn style(&self, kind: TypographyVariantKind) -> TextStyleSpec {
        let variant = kind.from_table(&self.variants);

        TextStyleSpec {
            font_family: variant
                .font_family
                .clone()
                .unwrap_or_else(|| self.font_family.primary[0].clone()),
            font_size: variant.font_size,
            font_weight: FontWeight(variant.font_weight),
            line_height: variant.line_height,
            letter_spacing: variant.letter_spacing,
            uppercase: variant.uppercase,
        }
    }
}

impl Global for Typography {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TypographyFontFamily {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub primary: SmallVec<[SharedString; 1]>,
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub secondary: SmallVec<[SharedString; 1]>,
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub monospace: SmallVec<[SharedString; 1]>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TypographyFontWeights {
    pub light: f32,
    pub regular: f32,
    pub medium: f32,
    pub semi_bold: f32,
    pub bold: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TypographyFontSizes {
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
pub struct TypographyVariants {
    pub h1: TypographyVariant,
    pub h2: TypographyVariant,
    pub h3: TypographyVariant,
    pub h4: TypographyVariant,
    pub h5: TypographyVariant,
    pub h6: TypographyVariant,
    pub subtitle1: TypographyVariant,
    pub subtitle2: TypographyVariant,
    pub body1: TypographyVariant,
    pub body2: TypographyVariant,
    pub button: TypographyVariant,
    pub caption: TypographyVariant,
    pub overline: TypographyVariant,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TypographyVariant {
    /// Overrides the primary font family for this variant.
    #[serde(default)]
    pub font_family: Option<SharedString>,
    #[serde(deserialize_with = "de_pixels")]
    pub font_size: Pixels,
    pub font_weight: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub line_height: Pixels,
    #[serde(default)]
    pub letter_spacing: f32,
    #[serde(default)]
    pub uppercase: bool,
}

/// A typography variant with every fallback applied.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyleSpec {
    pub font_family: SharedString,
    pub font_size: Pixels,
    pub font_weight: FontWeight,
    pub line_height: Pixels,
    /// Kept for completeness. gpui has no tracking control, so this is not
    /// applied when rendering.
    pub letter_spacing: f32,
    pub uppercase: bool,
}

impl TextStyleSpec {
    /// Applies the uppercase transform when the variant asks for it.
    pub fn transform(&self, text: &str) -> SharedString {
        if self.uppercase {
            text.to_uppercase().into()
        } else {
            SharedString::from(text.to_string())
        }
    }
}
