use std::rc::Rc;

use gpui::{
    App, AppContext, ElementId, Entity, FocusHandle, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, Rgba, StatefulInteractiveElement, Styled, Window, actions, div,
    prelude::FluentBuilder, px,
};
use gpui_mosaic_primitives::options::OptionSet;

use crate::{
    ElementIdExt, MosaicIconKind,
    components::Icon,
    theme::{Theme, ThemeExt},
    typography::{TypographyExt, TypographyVariantKind},
    utils::{RgbaExt, TextStyleExt},
};

actions!(mosaic_menu, [MoveUp, MoveDown, Confirm, Dismiss]);

/// Key context option lists listen in. Bound by [`crate::init`].
pub const MENU_KEY_CONTEXT: &str = "MosaicMenu";

/// Keyboard highlight and focus for an option list.
#[derive(Clone)]
pub struct MenuState {
    highlighted: Entity<Option<usize>>,
    pub focus_handle: FocusHandle,
}

impl MenuState {
    pub fn from_window(id: &ElementId, window: &mut Window, cx: &mut App) -> Self {
        Self {
            highlighted: window.use_keyed_state(
                id.with_suffix("state:highlighted"),
                cx,
                |_window, _cx| None,
            ),
            focus_handle: window
                .use_keyed_state(id.with_suffix("state:menu_focus"), cx, |_window, cx| {
                    cx.focus_handle()
                })
                .read(cx)
                .clone(),
        }
    }

    /// Creates unkeyed state with nothing highlighted.
    pub fn new(cx: &mut App) -> Self {
        Self {
            highlighted: cx.new(|_cx| None),
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn highlighted(&self, cx: &App) -> Option<usize> {
        *self.highlighted.read(cx)
    }

    pub fn set_highlighted(&self, index: Option<usize>, cx: &mut App) {
        self.highlighted.update(cx, |highlighted, cx| {
            if *highlighted != index {
                *highlighted = index;
                cx.notify();
            }
        });
    }

    /// Moves the highlight to the next enabled option, wrapping at the ends.
    pub fn move_highlight<T: PartialEq>(&self, options: &OptionSet<T>, forward: bool, cx: &mut App) {
        let next = options.next_enabled(self.highlighted(cx), forward);
        if next.is_some() {
            self.set_highlighted(next, cx);
        }
    }

    /// Starts a fresh session with the highlight on the selected option.
    pub fn open_at(&self, selected: Option<usize>, window: &mut Window, cx: &mut App) {
        self.set_highlighted(selected, cx);
        self.focus_handle.focus(window, cx);
    }
}

/// Colors of one option row.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuRowStyle {
    pub background: Rgba,
    pub text_color: Rgba,
    pub show_check: bool,
}

impl MenuRowStyle {
    pub fn resolve(
        selected: bool,
        highlighted: bool,
        disabled: bool,
        color: Rgba,
        theme: &Theme,
    ) -> Self {
        let text = &theme.colors.text;

        let background = if disabled {
            color.alpha(0.)
        } else if selected {
            color.alpha(if highlighted { 0.2 } else { 0.12 })
        } else if highlighted {
            text.primary.alpha(0.06)
        } else {
            color.alpha(0.)
        };

        let text_color = if disabled {
            text.disabled
        } else if selected {
            color
        } else {
            text.primary
        };

        Self {
            background,
            text_color,
            show_check: selected,
        }
    }
}

/// The rows of a Select or Dropdown menu, with keyboard navigation.
#[derive(IntoElement)]
pub struct OptionList<T: Clone + PartialEq + 'static> {
    id: ElementId,
    options: Rc<OptionSet<T>>,
    selected: Option<usize>,
    color: Rgba,
    state: MenuState,
    on_confirm: Option<Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>>,
    on_dismiss: Option<Rc<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl<T: Clone + PartialEq + 'static> OptionList<T> {
    pub fn new(id: impl Into<ElementId>, options: Rc<OptionSet<T>>, state: MenuState) -> Self {
        Self {
            id: id.into(),
            options,
            selected: None,
            color: Rgba::default(),
            state,
            on_confirm: None,
            on_dismiss: None,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Called with the index of an enabled option that was clicked or
    /// confirmed with enter.
    pub fn on_confirm(mut self, on_confirm: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_confirm = Some(Rc::new(on_confirm));
        self
    }

    pub fn on_dismiss(mut self, on_dismiss: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_dismiss = Some(Rc::new(on_dismiss));
        self
    }
}

impl<T: Clone + PartialEq + 'static> RenderOnce for OptionList<T> {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.get_theme();
        let (padding_x, padding_y) = (theme.spacing.md, theme.spacing.sm + px(4.));
        let text_style = cx.get_typography().style(TypographyVariantKind::Body1);
        let highlighted = self.state.highlighted(cx);

        let rows = self
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let style = MenuRowStyle::resolve(
                    self.selected == Some(index),
                    highlighted == Some(index),
                    option.disabled,
                    self.color,
                    cx.get_theme(),
                );

                div()
                    .id(self.id.with_suffix(format!("row:{index}")))
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .gap(padding_x)
                    .px(padding_x)
                    .py(padding_y)
                    .bg(style.background)
                    .text_style_spec(&text_style)
                    .text_color(style.text_color)
                    .child(option.label.clone())
                    .when(style.show_check, |this| {
                        this.child(
                            Icon::new(MosaicIconKind::Checkmark)
                                .size(px(14.))
                                .color(style.text_color),
                        )
                    })
                    .when(!option.disabled, |this| {
                        let state = self.state.clone();
                        let on_confirm = self.on_confirm.clone();

                        this.cursor_pointer()
                            .on_hover(move |hovered, _window, cx| {
                                if *hovered {
                                    state.set_highlighted(Some(index), cx);
                                }
                            })
                            .on_click(move |_event, window, cx| {
                                cx.stop_propagation();
                                if let Some(on_confirm) = &on_confirm {
                                    on_confirm(index, window, cx);
                                }
                            })
                    })
            })
            .collect::<Vec<_>>();

        let state_on_up = self.state.clone();
        let options_on_up = self.options.clone();
        let state_on_down = self.state.clone();
        let options_on_down = self.options.clone();
        let state_on_confirm = self.state.clone();
        let options_on_confirm = self.options.clone();
        let on_confirm = self.on_confirm.clone();
        let on_dismiss = self.on_dismiss.clone();

        div()
            .id(self.id.clone())
            .key_context(MENU_KEY_CONTEXT)
            .track_focus(&self.state.focus_handle)
            .w_full()
            .flex()
            .flex_col()
            .on_action(move |_: &MoveUp, _window, cx| {
                state_on_up.move_highlight(&options_on_up, false, cx);
            })
            .on_action(move |_: &MoveDown, _window, cx| {
                state_on_down.move_highlight(&options_on_down, true, cx);
            })
            .on_action(move |_: &Confirm, window, cx| {
                let Some(index) = state_on_confirm.highlighted(cx) else {
                    return;
                };
                let enabled = options_on_confirm
                    .get(index)
                    .is_some_and(|option| !option.disabled);

                if let (true, Some(on_confirm)) = (enabled, &on_confirm) {
                    on_confirm(index, window, cx);
                }
            })
            .on_action(move |_: &Dismiss, window, cx| {
                if let Some(on_dismiss) = &on_dismiss {
                    on_dismiss(window, cx);
                }
            })
            .children(rows)
    }
}
