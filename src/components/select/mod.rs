mod state;
pub use state::*;

use std::{rc::Rc, time::Duration};

use gpui::{
    App, Bounds, ElementId, InteractiveElement, IntoElement, ParentElement, Pixels, RenderOnce,
    SharedString, Size, StatefulInteractiveElement, Styled, Window, div, point,
    prelude::FluentBuilder, px, size,
};
use gpui_mosaic_primitives::{
    options::OptionSet,
    placement::{OverlayPlacement, PlacementConfig, resolve_overlay_position},
};

use crate::{
    ElementIdExt,
    components::{
        field::{Field, FieldState},
        menu::OptionList,
    },
    primitives::{OnChange, OverlayLayer, OverlayTiming},
    theme::{ColorKind, ShadowKind, ThemeExt},
    typography::{TypographyExt, TypographyVariantKind},
    utils::{TextStyleExt, rgb_a},
};

const MODAL_WIDTH_FRACTION: f32 = 0.9;
const MODAL_MAX_HEIGHT: f32 = 300.;

/// A zero-sized anchor that centres an overlay of `overlay` size when it is
/// placed below it.
pub fn modal_anchor(viewport: Size<Pixels>, overlay: Size<Pixels>, gap: Pixels) -> Bounds<Pixels> {
    Bounds::new(
        point(
            viewport.width / 2.,
            (viewport.height - overlay.height) / 2. - gap,
        ),
        size(px(0.), px(0.)),
    )
}

/// A field that opens a centred modal list of options.
#[derive(IntoElement)]
pub struct Select<T: Clone + PartialEq + 'static> {
    id: ElementId,
    options: Rc<OptionSet<T>>,
    value: Option<Option<T>>,
    default_value: Option<T>,
    placeholder: SharedString,
    label: Option<SharedString>,
    helper_text: Option<SharedString>,
    error: bool,
    disabled: bool,
    color: ColorKind,
    callbacks: SelectCallbacks<T>,
}

impl<T: Clone + PartialEq + 'static> Select<T> {
    pub fn new(id: impl Into<ElementId>, options: impl Into<Rc<OptionSet<T>>>) -> Self {
        Self {
            id: id.into(),
            options: options.into(),
            value: None,
            default_value: None,
            placeholder: "Select an option".into(),
            label: None,
            helper_text: None,
            error: false,
            disabled: false,
            color: ColorKind::default(),
            callbacks: SelectCallbacks::default(),
        }
    }

    /// Controls the selection. `None` shows the placeholder.
    pub fn value(mut self, value: impl Into<Option<T>>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Initial selection of an uncontrolled select.
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

    pub fn helper_text(mut self, helper_text: impl Into<SharedString>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn color(mut self, color: ColorKind) -> Self {
        self.color = color;
        self
    }

    /// Keeps the list open after a choice when false. Defaults to true.
    pub fn close_on_select(mut self, close_on_select: bool) -> Self {
        self.callbacks.close_on_select = close_on_select;
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

impl<T: Clone + PartialEq + 'static> RenderOnce for Select<T> {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let state = SelectState::from_window(
            &self.id,
            self.options,
            self.value,
            self.default_value,
            OverlayTiming::symmetric(Duration::from_millis(300)),
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

        let field = Field::new(
            self.id.with_suffix("field"),
            selected_label.clone().unwrap_or(self.placeholder),
        )
        .color(self.color)
        .state(FieldState {
            disabled: self.disabled,
            error: self.error,
            open: is_open,
            has_value: selected_label.is_some(),
        })
        .label(self.label.clone())
        .helper_text(self.helper_text)
        .on_press({
            let state = state.clone();
            move |window, cx| state.toggle(window, cx)
        });

        let modal = (is_open || delta > 0.).then(|| {
            let theme = cx.get_theme();
            let viewport = window.viewport_size();
            let config = PlacementConfig::default();
            let overlay_size = state.overlay.layout.read(cx).overlay_size();
            let position = resolve_overlay_position(
                modal_anchor(viewport, overlay_size, config.gap),
                OverlayPlacement::Bottom,
                overlay_size,
                viewport,
                &config,
            );

            let title = self.label.map(|label| {
                div()
                    .px(theme.spacing.md)
                    .pt(theme.spacing.md)
                    .pb(theme.spacing.sm)
                    .text_style_spec(&cx.get_typography().style(TypographyVariantKind::Subtitle1))
                    .text_color(theme.colors.text.primary)
                    .child(label)
            });

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
                .flex()
                .flex_col()
                .w(viewport.width * MODAL_WIDTH_FRACTION)
                .max_h(px(MODAL_MAX_HEIGHT))
                .overflow_hidden()
                .bg(theme.colors.surface)
                .rounded(theme.border_radius.lg)
                .shadow(vec![ShadowKind::Lg.from_presets(&theme.shadows)])
                .children(title)
                .child(
                    div()
                        .id(self.id.with_suffix("scroll"))
                        .flex_1()
                        .overflow_y_scroll()
                        .child(list),
                );

            OverlayLayer::new(
                self.id.with_suffix("modal"),
                state.overlay.clone(),
                position.origin,
                surface,
            )
            .scrim(rgb_a(0x000000, 0.5))
            .on_dismiss({
                let state = state.clone();
                move |window, cx| state.close(window, cx)
            })
        });

        div().w_full().child(field).children(modal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_anchor_centres_overlay() {
        let viewport = size(px(400.), px(800.));
        let overlay = size(px(360.), px(300.));
        let config = PlacementConfig::default();

        let position = resolve_overlay_position(
            modal_anchor(viewport, overlay, config.gap),
            OverlayPlacement::Bottom,
            overlay,
            viewport,
            &config,
        );

        assert_eq!(position.origin, point(px(20.), px(250.)));
    }

    #[test]
    fn test_oversized_modal_stays_inside_margins() {
        let viewport = size(px(400.), px(200.));
        let overlay = size(px(360.), px(150.));
        let config = PlacementConfig::default();

        let position = resolve_overlay_position(
            modal_anchor(viewport, overlay, config.gap),
            OverlayPlacement::Bottom,
            overlay,
            viewport,
            &config,
        );

        assert!(position.origin.y >= config.margin);
        assert!(position.origin.y + overlay.height <= viewport.height - config.margin);
    }

    #[test]
    fn test_builder_defaults() {
        let select = Select::new("select", OptionSet::<u8>::new());

        assert_eq!(&*select.placeholder, "Select an option");
        assert!(select.callbacks.close_on_select);
        assert!(select.value.is_none());

        let select = select.value(None);
        assert_eq!(select.value, Some(None));
    }
}

#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use super::*;
    use gpui::{AppContext, Context, TestAppContext, VisualTestContext};
    use gpui_mosaic_primitives::options::SelectOption;

    struct SelectTestView {
        value: Option<&'static str>,
    }

    impl gpui::Render for SelectTestView {
        fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
            let view = cx.entity();
            let options: OptionSet<&'static str> = [
                SelectOption::new("Option 1", "option1"),
                SelectOption::new("Option 2", "option2").disabled(true),
                SelectOption::new("Option 3", "option3"),
            ]
            .into_iter()
            .collect();

            div()
                .size_full()
                .p_4()
                .child(
                    Select::new("controlled", options.clone())
                        .value(self.value)
                        .label("Controlled")
                        .helper_text("Pick one")
                        .on_change(move |value, _window, cx| {
                            let value = *value;
                            view.update(cx, |view, cx| {
                                view.value = Some(value);
                                cx.notify();
                            });
                        }),
                )
                .child(
                    Select::new("uncontrolled", options)
                        .default_value("option3")
                        .error(true)
                        .disabled(true),
                )
        }
    }

    #[gpui::test]
    fn test_select_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            crate::init(cx);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| SelectTestView { value: None })
            })
            .unwrap()
        });

        let cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }
}
