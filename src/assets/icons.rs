#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::SharedString;

/// Icons the components draw, by asset path.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn path(&self) -> SharedString)]
pub enum MosaicIconKind {
    #[assoc(path = "icons/checkmark.svg".into())]
    Checkmark,
    #[assoc(path = "icons/chevron_down.svg".into())]
    ChevronDown,
    #[assoc(path = "icons/close.svg".into())]
    Close,
}

impl From<MosaicIconKind> for SharedString {
    fn from(icon: MosaicIconKind) -> Self {
        icon.path()
    }
}
