use gpui::{
    App, Div, ElementId, Entity, FocusHandle, InteractiveElement, MouseButton, Stateful,
    StatefulInteractiveElement, Window,
};

use crate::ElementIdExt;

/// Hover, press and focus state for a pressable control.
#[derive(Clone)]
pub struct PressState {
    hover: Entity<bool>,
    click_down: Entity<bool>,
    pub focus_handle: FocusHandle,
    was_focused: bool,
}

impl PressState {
    pub fn from_window(id: &ElementId, window: &mut Window, cx: &mut App) -> Self {
        let hover = window.use_keyed_state(id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let click_down =
            window.use_keyed_state(id.with_suffix("state:click_down"), cx, |_window, _cx| false);
        let focus_handle = window
            .use_keyed_state(id.with_suffix("state:focus_handle"), cx, |_window, cx| {
                cx.focus_handle().tab_stop(true)
            })
            .read(cx)
            .clone();
        let was_focused = focus_handle.is_focused(window);

        Self {
            hover,
            click_down,
            focus_handle,
            was_focused,
        }
    }

    pub fn is_hover(&self, cx: &App) -> bool {
        *self.hover.read(cx)
    }

    pub fn is_click_down(&self, cx: &App) -> bool {
        *self.click_down.read(cx)
    }

    pub fn is_focus(&self) -> bool {
        self.was_focused
    }

    /// Drops focus from a control that just became disabled.
    pub fn blur_if_disabled(&self, disabled: bool, window: &mut Window) {
        if disabled && self.was_focused {
            window.blur();
        }
    }

    /// Wires hover, press and focus tracking onto `element`.
    ///
    /// The caller adds its own `on_click` and calls [`Self::end_click`] from it.
    pub fn attach(&self, element: Stateful<Div>) -> Stateful<Div> {
        let hover_on_hover = self.hover.clone();
        let click_down_on_mouse_down = self.click_down.clone();
        let hover_on_up_out = self.hover.clone();
        let click_down_on_up_out = self.click_down.clone();

        element
            .on_hover(move |hover, _window, cx| {
                set_flag(&hover_on_hover, *hover, cx);
            })
            .on_mouse_down(MouseButton::Left, move |_event, window, cx| {
                // Keeps the focus ring hidden for pointer presses.
                window.prevent_default();
                set_flag(&click_down_on_mouse_down, true, cx);
            })
            .on_mouse_up_out(MouseButton::Left, move |_event, _window, cx| {
                set_flag(&hover_on_up_out, false, cx);
                set_flag(&click_down_on_up_out, false, cx);
            })
            .track_focus(&self.focus_handle)
    }

    /// Clears the pressed flag once a click lands.
    pub fn end_click(&self, window: &mut Window, cx: &mut App) {
        window.prevent_default();

        if !self.was_focused {
            window.blur();
        }

        set_flag(&self.click_down, false, cx);
    }
}

fn set_flag(flag: &Entity<bool>, value: bool, cx: &mut App) {
    flag.update(cx, |this, cx| {
        if *this != value {
            *this = value;
            cx.notify();
        }
    });
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, TestAppContext};

    #[gpui::test]
    fn test_set_flag_only_notifies_on_change(cx: &mut TestAppContext) {
        let flag = cx.new(|_cx| false);
        let notifications = std::rc::Rc::new(std::cell::Cell::new(0));

        let _subscription = cx.update(|cx| {
            let notifications = notifications.clone();
            cx.observe(&flag, move |_flag, _cx| notifications.set(notifications.get() + 1))
        });

        cx.update(|cx| set_flag(&flag, true, cx));
        cx.update(|cx| set_flag(&flag, true, cx));
        cx.update(|cx| set_flag(&flag, false, cx));
        cx.run_until_parked();

        assert!(!flag.read_with(cx, |flag, _cx| *flag));
        assert_eq!(notifications.get(), 2);
    }
}
