use gpui::{App, KeyBinding, Window};
use serde_json::Value;

use crate::{
    components::menu::{Confirm, Dismiss, MENU_KEY_CONTEXT, MoveDown, MoveUp},
    config::ConfigError,
    theme::{Theme, ThemeExt},
    typography::{Typography, TypographyExt, TypographyVariantKind},
};

/// Partial theme and typography overrides, deep-merged over the defaults.
#[derive(Clone, Debug, Default)]
pub struct MosaicOptions {
    pub theme: Option<Value>,
    pub typography: Option<Value>,
}

impl MosaicOptions {
    pub fn theme(mut self, theme: Value) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn typography(mut self, typography: Value) -> Self {
        self.typography = Some(typography);
        self
    }
}

/// Installs the default theme and typography and binds menu keys.
pub fn init(cx: &mut App) {
    cx.set_theme(Theme::DEFAULT);
    cx.set_typography(Typography::DEFAULT);
    bind_keys(cx);
}

/// Like [`init`], but with theme and typography overrides.
///
/// Nothing is installed when either set of options fails to parse.
pub fn init_with(cx: &mut App, options: MosaicOptions) -> Result<(), ConfigError> {
    let theme = match options.theme {
        Some(theme) => Theme::create(theme)?,
        None => Theme::DEFAULT.clone(),
    };
    let typography = match options.typography {
        Some(typography) => Typography::create(typography)?,
        None => Typography::DEFAULT.clone(),
    };

    cx.set_theme(theme);
    cx.set_typography(typography);
    bind_keys(cx);

    Ok(())
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(
        cx.get_typography()
            .style(TypographyVariantKind::Body1)
            .font_size,
    );
}

fn bind_keys(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("up", MoveUp, Some(MENU_KEY_CONTEXT)),
        KeyBinding::new("down", MoveDown, Some(MENU_KEY_CONTEXT)),
        KeyBinding::new("enter", Confirm, Some(MENU_KEY_CONTEXT)),
        KeyBinding::new("escape", Dismiss, Some(MENU_KEY_CONTEXT)),
    ]);
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{TestAppContext, px};
    use serde_json::json;

    #[gpui::test]
    fn test_init_installs_defaults(cx: &mut TestAppContext) {
        cx.update(|cx| {
            init(cx);
            assert_eq!(&*cx.get_theme().name, "Default");
            assert_eq!(
                cx.get_typography()
                    .style(TypographyVariantKind::H1)
                    .font_size,
                px(40.)
            );
        });
    }

    #[gpui::test]
    fn test_init_with_merges_options(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let options = MosaicOptions::default()
                .theme(json!({ "colors": { "text": { "primary": "#000000" } } }))
                .typography(json!({ "variants": { "body1": { "font_size": 18 } } }));

            init_with(cx, options).unwrap();

            assert_eq!(cx.get_theme().colors.text.primary.r, 0.);
            assert_eq!(
                cx.get_theme().colors.text.secondary,
                Theme::DEFAULT.colors.text.secondary
            );
            assert_eq!(
                cx.get_typography()
                    .style(TypographyVariantKind::Body1)
                    .font_size,
                px(18.)
            );
        });
    }

    #[gpui::test]
    fn test_init_with_invalid_options_installs_nothing(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let options = MosaicOptions::default().typography(json!({ "variants": "nope" }));

            assert!(init_with(cx, options).is_err());
            assert!(cx.try_theme().is_none());
        });
    }
}
