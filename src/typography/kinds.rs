#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::Rgba;

use crate::{
    theme::ThemePalette,
    typography::{TypographyVariant, TypographyVariants},
};

/// The entries of the typography table.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn from_table(&self, variants: &TypographyVariants) -> TypographyVariant)]
pub enum TypographyVariantKind {
    #[assoc(from_table = variants.h1.clone())]
    H1,
    #[assoc(from_table = variants.h2.clone())]
    H2,
    #[assoc(from_table = variants.h3.clone())]
    H3,
    #[assoc(from_table = variants.h4.clone())]
    H4,
    #[assoc(from_table = variants.h5.clone())]
    H5,
    #[assoc(from_table = variants.h6.clone())]
    H6,
    #[assoc(from_table = variants.subtitle1.clone())]
    Subtitle1,
    #[assoc(from_table = variants.subtitle2.clone())]
    Subtitle2,
    #[assoc(from_table = variants.body1.clone())]
    Body1,
    #[assoc(from_table = variants.body2.clone())]
    Body2,
    #[assoc(from_table = variants.button.clone())]
    Button,
    #[assoc(from_table = variants.caption.clone())]
    Caption,
    #[assoc(from_table = variants.overline.clone())]
    Overline,
}

/// Text variants accepted by [`crate::components::Text`].
///
/// Besides the table entries there are a few named aliases that also pick a
/// default color.
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn kind(&self) -> TypographyVariantKind)]
#[func(pub fn default_color(&self, palette: &ThemePalette) -> Rgba)]
pub enum TextVariant {
    #[assoc(kind = TypographyVariantKind::H1)]
    #[assoc(default_color = palette.text.primary)]
    H1,
    #[assoc(kind = TypographyVariantKind::H2)]
    #[assoc(default_color = palette.text.primary)]
    H2,
    #[assoc(kind = TypographyVariantKind::H3)]
    #[assoc(default_color = palette.text.primary)]
    H3,
    #[assoc(kind = TypographyVariantKind::H4)]
    #[assoc(default_color = palette.text.primary)]
    H4,
    #[assoc(kind = TypographyVariantKind::H5)]
    #[assoc(default_color = palette.text.primary)]
    H5,
    #[assoc(kind = TypographyVariantKind::H6)]
    #[assoc(default_color = palette.text.primary)]
    H6,
    #[assoc(kind = TypographyVariantKind::Subtitle1)]
    #[assoc(default_color = palette.text.primary)]
    Subtitle1,
    #[assoc(kind = TypographyVariantKind::Subtitle2)]
    #[assoc(default_color = palette.text.primary)]
    Subtitle2,
    #[default]
    #[assoc(kind = TypographyVariantKind::Body1)]
    #[assoc(default_color = palette.text.primary)]
    Body1,
    #[assoc(kind = TypographyVariantKind::Body2)]
    #[assoc(default_color = palette.text.primary)]
    Body2,
    #[assoc(kind = TypographyVariantKind::Button)]
    #[assoc(default_color = palette.text.primary)]
    Button,
    #[assoc(kind = TypographyVariantKind::Caption)]
    #[assoc(default_color = palette.text.primary)]
    Caption,
    #[assoc(kind = TypographyVariantKind::Overline)]
    #[assoc(default_color = palette.text.primary)]
    Overline,
    /// Screen or card title.
    #[assoc(kind = TypographyVariantKind::H5)]
    #[assoc(default_color = palette.text.primary)]
    Title,
    /// Section header tinted with the primary color.
    #[assoc(kind = TypographyVariantKind::H4)]
    #[assoc(default_color = palette.primary)]
    HeaderTitle,
    /// Secondary descriptive heading.
    #[assoc(kind = TypographyVariantKind::Subtitle1)]
    #[assoc(default_color = palette.text.secondary)]
    DescriptionTitle,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_aliases_map_to_table_entries() {
        assert_eq!(TextVariant::Title.kind(), TypographyVariantKind::H5);
        assert_eq!(TextVariant::HeaderTitle.kind(), TypographyVariantKind::H4);
        assert_eq!(
            TextVariant::DescriptionTitle.kind(),
            TypographyVariantKind::Subtitle1
        );
    }

    #[test]
    fn test_alias_colors() {
        let theme = Theme::DEFAULT;
        assert_eq!(
            TextVariant::HeaderTitle.default_color(&theme.colors),
            theme.colors.primary
        );
        assert_eq!(
            TextVariant::DescriptionTitle.default_color(&theme.colors),
            theme.colors.text.secondary
        );
        assert_eq!(
            TextVariant::Body1.default_color(&theme.colors),
            theme.colors.text.primary
        );
    }
}
