use std::rc::Rc;

use gpui::{App, AppContext, ElementId, Entity, SharedString, Window};
use gpui_mosaic_primitives::{
    options::{OptionSet, SelectOption},
    value::ComponentValue,
};
use thiserror::Error;

use crate::{
    ElementIdExt,
    components::menu::MenuState,
    primitives::{OnChange, OverlayState, OverlayTiming, use_component_value},
};

pub type OnToggle = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectError {
    #[error("No option holds this value.")]
    UnknownValue,
    #[error("The option \"{0}\" is disabled.")]
    DisabledOption(SharedString),
    #[error("There is no option at index {0}.")]
    IndexOutOfRange(usize),
}

/// Handlers run by [`SelectState`].
#[derive(Clone)]
pub struct SelectCallbacks<T> {
    pub on_change: Option<OnChange<T>>,
    pub on_open: Option<OnToggle>,
    pub on_close: Option<OnToggle>,
    /// Close the menu once an option has been chosen.
    pub close_on_select: bool,
}

impl<T> Default for SelectCallbacks<T> {
    fn default() -> Self {
        Self {
            on_change: None,
            on_open: None,
            on_close: None,
            close_on_select: true,
        }
    }
}

/// Selection, open state and keyboard highlight shared by Select and
/// Dropdown.
#[derive(Clone)]
pub struct SelectState<T: Clone + PartialEq + 'static> {
    options: Rc<OptionSet<T>>,
    value: Entity<ComponentValue<Option<T>>>,
    pub overlay: OverlayState,
    pub menu: MenuState,
    callbacks: SelectCallbacks<T>,
}

impl<T: Clone + PartialEq + 'static> SelectState<T> {
    /// Fetches the keyed state for `id`.
    ///
    /// `external` is the controlled value. `Some(None)` means the caller
    /// controls the value and nothing is selected.
    pub fn from_window(
        id: &ElementId,
        options: Rc<OptionSet<T>>,
        external: Option<Option<T>>,
        default: Option<T>,
        timing: OverlayTiming,
        window: &mut Window,
        cx: &mut App,
    ) -> Self {
        let checked = window.use_keyed_state(
            id.with_suffix("state:duplicates_checked"),
            cx,
            |_window, _cx| false,
        );
        if !*checked.read(cx) {
            let duplicates = options.duplicate_values().len();
            if duplicates > 0 {
                log::warn!("{id:?}: {duplicates} option value(s) are held by more than one option");
            }
            checked.update(cx, |checked, _cx| *checked = true);
        }

        Self {
            value: use_component_value(id, external, || default, window, cx),
            overlay: OverlayState::from_window(id, window, cx, timing),
            menu: MenuState::from_window(id, window, cx),
            options,
            callbacks: SelectCallbacks::default(),
        }
    }

    /// Creates unkeyed state around `value`.
    pub fn new(
        cx: &mut App,
        options: Rc<OptionSet<T>>,
        value: ComponentValue<Option<T>>,
        timing: OverlayTiming,
    ) -> Self {
        Self {
            value: cx.new(|_cx| value),
            overlay: OverlayState::new(cx, timing),
            menu: MenuState::new(cx),
            options,
            callbacks: SelectCallbacks::default(),
        }
    }

    pub fn callbacks(mut self, callbacks: SelectCallbacks<T>) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn options(&self) -> &Rc<OptionSet<T>> {
        &self.options
    }

    pub fn selected(&self, cx: &App) -> Option<T> {
        self.value.read(cx).current().clone()
    }

    /// Index of the selected option. `None` when the value matches no option.
    pub fn selected_index(&self, cx: &App) -> Option<usize> {
        self.value
            .read(cx)
            .current()
            .as_ref()
            .and_then(|value| self.options.position(value))
    }

    pub fn selected_label(&self, cx: &App) -> Option<SharedString> {
        self.value
            .read(cx)
            .current()
            .as_ref()
            .and_then(|value| self.options.label_for(value))
    }

    pub fn is_open(&self, cx: &App) -> bool {
        self.overlay.is_open(cx)
    }

    /// Chooses the option holding `value`.
    ///
    /// Uncontrolled state is updated in place. `on_change` runs either way.
    pub fn select_value(
        &self,
        value: &T,
        window: &mut Window,
        cx: &mut App,
    ) -> Result<(), SelectError> {
        let options = self.options.clone();
        let Some(option) = options.find(value) else {
            log::warn!("ignoring a selection that matches no option");
            return Err(SelectError::UnknownValue);
        };

        self.commit(option, window, cx)
    }

    /// Chooses the option at `index`, even when an earlier option holds the
    /// same value.
    pub fn select_index(
        &self,
        index: usize,
        window: &mut Window,
        cx: &mut App,
    ) -> Result<(), SelectError> {
        let options = self.options.clone();
        let option = options
            .get(index)
            .ok_or(SelectError::IndexOutOfRange(index))?;

        self.commit(option, window, cx)
    }

    fn commit(
        &self,
        option: &SelectOption<T>,
        window: &mut Window,
        cx: &mut App,
    ) -> Result<(), SelectError> {
        if option.disabled {
            return Err(SelectError::DisabledOption(option.label.clone()));
        }

        let proposed = Some(option.value.clone());
        self.value.update(cx, |value, cx| {
            if value.apply(&proposed) {
                cx.notify();
            }
        });

        if let Some(on_change) = &self.callbacks.on_change {
            on_change(&option.value, window, cx);
        }

        if self.callbacks.close_on_select {
            self.close(window, cx);
        }

        Ok(())
    }

    /// Opens the menu with the highlight on the current selection.
    pub fn open(&self, window: &mut Window, cx: &mut App) {
        if !self.overlay.show(cx) {
            return;
        }

        self.menu.open_at(self.selected_index(cx), window, cx);

        if let Some(on_open) = &self.callbacks.on_open {
            on_open(window, cx);
        }
    }

    pub fn close(&self, window: &mut Window, cx: &mut App) {
        if !self.overlay.hide(cx) {
            return;
        }

        if let Some(on_close) = &self.callbacks.on_close {
            on_close(window, cx);
        }
    }

    pub fn toggle(&self, window: &mut Window, cx: &mut App) {
        if self.is_open(cx) {
            self.close(window, cx);
        } else {
            self.open(window, cx);
        }
    }
}
