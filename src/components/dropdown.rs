use std::{rc::Rc, time::Duration};

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, Pixels, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};
use gpui_mosaic_primitives::{
    options::OptionSet,
    placement::{OverlayPlacement, PlacementConfig},
};

use crate::{
    ElementIdExt,
    components::{
        field::{Field, FieldState, FieldVariant},
        menu::OptionList,
        select::{SelectCallbacks, SelectState},
    },
    primitives::{OnChange, OverlayLayer, OverlayTiming},
    theme::{ColorKind, ShadowKind, ThemeExt},
};

/// Gap between the field and its menu.
const MENU_GAP: f32 = 4.;

/// Share of the viewport height the menu may take before scrolling.
const MENU_MAX_HEIGHT_FRACTION: f32 = 0.4;

pub const DROPDOWN_TIMING: OverlayTiming = OverlayTiming {
    open: Duration::from_millis(200),
    close: Duration::from_millis(150),
};

pub fn menu_max_height(viewport_height: Pixels) -> Pixels {
    viewport_height * MENU_MAX_HEIGHT_FRACTION
}

/// A field with a menu of options that opens right below it.
#[derive(IntoElement)]
pub struct Dropdown<T: Clone + PartialEq + 'static> {
    id: ElementId,
    options: Rc<OptionSet<T>>,
    value: Option<Option<T>>,
    default_value: Option<T>,
    placeholder: SharedString,
    label: Option<SharedString>,
    variant: FieldVariant,
    color: ColorKind,
    full_width: bool,
    disabled: bool,
    callbacks: SelectCallbacks<T>,
}

impl<T: Clone + PartialEq + 'static> Dropdown<T> {
    pub fn new(id: impl Into<ElementId>, options: impl Into<Rc<OptionSet<T>>>) -> Self {
        Self {
            id: id.into(),
            options: options.into(),
            value: None,
            default_value: None,
            placeholder: "Select an option".into(),
            label: None,
            variant: FieldVariant::default(),
            color: ColorKind::default(),
            full_width: false,
            disabled: false,
            callbacks: SelectCallbacks::default(),
        }
    }

    /// Controls the selection. `None` shows the placeholder.
    pub fn value(mut self, value: impl Into<Option<T>>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn default_value(mut self, default_value: T) -> Self {
        self.default_value = Some(default_value);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn variant(mut self, variant: FieldVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn color(mut self, color: ColorKind) -> Self {
        self.color = color;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_change(mut self, on_change: impl Fn(&T, &mut Window, &mut App) + 'static) -> Self {
        let on_change: OnChange<T> = Rc::new(on_change);
        self.callbacks.on_change = Some(on_change);
        self
    }

    pub fn on_open(mut self, on_open: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.callbacks.on_open = Some(Rc::new(on_open));
        self
    }

    pub fn on_close(mut self, on_close: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.callbacks.on_close = Some(Rc::new(on_close));
        self
    }
}

impl<T: Clone + PartialEq + 'static> RenderOnce for Dropdown<T> {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let state = SelectState::from_window(
            &self.id,
            self.options,
            self.value,
            self.default_value,
            DROPDOWN_TIMING,
            window,
            cx,
        )
        .callbacks(self.callbacks);

        if self.disabled && state.is_open(cx) {
            state.close(window, cx);
        }

        let is_open = state.is_open(cx);
        let delta = state.overlay.delta(window, cx);
        let selected_label = state.selected_label(cx);
        let viewport = window.viewport_size();

        let field = Field::new(
            self.id.with_suffix("field"),
            selected_label.clone().unwrap_or(self.placeholder),
        )
        .variant(self.variant)
        .color(self.color)
        .full_width(self.full_width)
        .state(FieldState {
            disabled: self.disabled,
            open: is_open,
            has_value: selected_label.is_some(),
            ..Default::default()
        })
        .label(self.label)
        .anchor_probe(state.overlay.anchor_probe())
        .on_press({
            let state = state.clone();
            move |window, cx| state.toggle(window, cx)
        });

        let position = state.overlay.resolve(
            OverlayPlacement::Bottom,
            viewport,
            &PlacementConfig::default().gap(px(MENU_GAP)),
            cx,
        );

        let menu = position
            .filter(|_| is_open || delta > 0.)
            .map(|position| {
                let theme = cx.get_theme();
                let anchor_width = state.overlay.anchor(cx).map(|anchor| anchor.size.width);

                let list = OptionList::new(
                    self.id.with_suffix("list"),
                    state.options().clone(),
                    state.menu.clone(),
                )
                .selected(state.selected_index(cx))
                .color(self.color.from_palette(&theme.colors))
                .on_confirm({
                    let state = state.clone();
                    move |index, window, cx| {
                        if let Err(err) = state.select_index(index, window, cx) {
                            log::warn!("{err}");
                        }
                    }
                })
                .on_dismiss({
                    let state = state.clone();
                    move |window, cx| state.close(window, cx)
                });

                let surface = div()
                    .id(self.id.with_suffix("menu"))
                    .when_some(anchor_width, |this, width| this.w(width))
                    .max_h(menu_max_height(viewport.height))
                    .overflow_y_scroll()
                    .py(theme.spacing.xs)
                    .bg(theme.colors.surface)
                    .rounded(theme.border_radius.md)
                    .shadow(vec![ShadowKind::Md.from_presets(&theme.shadows)])
                    .child(list);

                OverlayLayer::new(
                    self.id.with_suffix("overlay"),
                    state.overlay.clone(),
                    position.origin,
                    surface,
                )
                .on_dismiss({
                    let state = state.clone();
                    move |window, cx| state.close(window, cx)
                })
            });

        div()
            .map(|this| if self.full_width { this.w_full() } else { this })
            .child(field)
            .children(menu)
    }
}


#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use super::*;
    use gpui::{AppContext, Context, TestAppContext, VisualTestContext};

    struct DropdownTestView;

    impl gpui::Render for DropdownTestView {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            let options: OptionSet<u32> = [("Ten", 10), ("Twenty", 20), ("Thirty", 30)]
                .into_iter()
                .collect();

            div()
                .size_full()
                .p_4()
                .child(
                    Dropdown::new("outlined", options.clone())
                        .label("Age")
                        .default_value(20)
                        .full_width(true),
                )
                .child(
                    Dropdown::new("standard", options)
                        .variant(FieldVariant::Standard)
                        .value(None)
                        .disabled(true),
                )
        }
    }

    #[gpui::test]
    fn test_dropdown_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            crate::init(cx);

            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| DropdownTestView))
                .unwrap()
        });

        let cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }
}
