use gpui::Styled;

use crate::typography::TextStyleSpec;

pub trait TextStyleExt: Styled + Sized {
    /// Applies family, size, weight and line height from a typography variant.
    fn text_style_spec(self, spec: &TextStyleSpec) -> Self {
        self.font_family(spec.font_family.clone())
            .text_size(spec.font_size)
            .font_weight(spec.font_weight)
            .line_height(spec.line_height)
    }
}

impl<E: Styled> TextStyleExt for E {}
