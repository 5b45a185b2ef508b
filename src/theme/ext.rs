use gpui::App;

use crate::theme::Theme;

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    ///
    /// Panics when no theme was installed. Call [`crate::init`] (or
    /// [`ThemeExt::set_theme`]) before rendering any component.
    fn get_theme(&self) -> &Theme;

    /// Returns the theme if one was installed.
    fn try_theme(&self) -> Option<&Theme>;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        match self.try_global::<Theme>() {
            Some(theme) => theme,
            None => panic!(
                "gpui_mosaic: no theme installed. Call `gpui_mosaic::init` before rendering components."
            ),
        }
    }

    fn try_theme(&self) -> Option<&Theme> {
        self.try_global::<Theme>()
    }
}
