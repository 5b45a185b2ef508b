use gpui::App;

use crate::typography::Typography;

/// Extension trait for accessing and modifying the global typography table.
pub trait TypographyExt {
    /// Changes the typography table.
    fn set_typography<T: AsRef<Typography>>(&mut self, typography: T);

    /// Gets the typography table. Panics when none was installed.
    fn get_typography(&self) -> &Typography;
}

impl TypographyExt for App {
    fn set_typography<T: AsRef<Typography>>(&mut self, typography: T) {
        self.set_global::<Typography>(typography.as_ref().clone())
    }

    fn get_typography(&self) -> &Typography {
        match self.try_global::<Typography>() {
            Some(typography) => typography,
            None => panic!(
                "gpui_mosaic: no typography installed. Call `gpui_mosaic::init` before rendering components."
            ),
        }
    }
}
