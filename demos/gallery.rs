use gpui::{
    App, AppContext, Application, Bounds, Context, FocusHandle, KeyBinding, Menu, TitlebarOptions,
    Window, WindowBounds, WindowOptions, actions, div, point, prelude::*, px, size,
};

use gpui_mosaic::{
    MosaicAssets, assets,
    components::{
        Avatar, AvatarShape, Button, ButtonVariant, Checkbox, Dropdown, FieldVariant, Popover,
        Select, Slider, Switch, Text, Toast, ToastVariant,
    },
    gpui_mosaic_primitives::{
        options::{OptionSet, SelectOption},
        placement::OverlayPlacement,
    },
    theme::{ColorKind, ThemeExt},
    typography::TextVariant,
};

struct Gallery {
    focus_handle: FocusHandle,

    notifications: bool,
    volume: f32,
    fruit: Option<&'static str>,
    popover_visible: bool,
    toast_visible: bool,
}

actions!(window, [TabNext, TabPrev]);

fn fruits() -> OptionSet<&'static str> {
    [
        SelectOption::new("Apple", "apple"),
        SelectOption::new("Banana", "banana"),
        SelectOption::new("Durian", "durian").disabled(true),
        SelectOption::new("Mango", "mango"),
    ]
    .into_iter()
    .collect()
}

impl Render for Gallery {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        gpui_mosaic::init_for_window(window, cx);

        let view = cx.entity();
        let theme = cx.get_theme();

        div()
            .tab_group()
            .track_focus(&self.focus_handle)
            .size_full()
            .bg(theme.colors.background)
            .flex()
            .flex_col()
            .gap(theme.spacing.lg)
            .p(theme.spacing.xl)
            .child(Text::new("Mosaic").variant(TextVariant::H3).gutter_bottom(true))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(theme.spacing.md)
                    .child(Avatar::new().alt("Ada Lovelace"))
                    .child(
                        Avatar::new()
                            .alt("Grace Hopper")
                            .shape(AvatarShape::Rounded)
                            .color(ColorKind::Secondary),
                    )
                    .child(
                        Button::new("toast-button")
                            .text("Show toast")
                            .on_click(cx.listener(|view, _event, _window, cx| {
                                view.toast_visible = true;
                                cx.notify();
                            })),
                    ),
            )
            .child(Checkbox::new("terms").default_checked(false).label("Accept terms"))
            .child(
                Switch::new("notifications")
                    .value(self.notifications)
                    .on_change(cx.listener(|view, value, _window, cx| {
                        view.notifications = *value;
                        cx.notify();
                    })),
            )
            .child(
                Slider::new("volume")
                    .value(self.volume)
                    .step(10.)
                    .show_value(true)
                    .on_change(cx.listener(|view, value, _window, cx| {
                        view.volume = *value;
                        cx.notify();
                    })),
            )
            .child(
                Select::new("fruit", fruits())
                    .value(self.fruit)
                    .label("Favourite fruit")
                    .helper_text("Durian is out of season")
                    .on_change(cx.listener(|view, value: &&'static str, _window, cx| {
                        view.fruit = Some(*value);
                        cx.notify();
                    })),
            )
            .child(
                Dropdown::new("fruit-dropdown", fruits())
                    .label("Uncontrolled")
                    .variant(FieldVariant::Filled)
                    .default_value("banana"),
            )
            .child(
                Popover::new("popover")
                    .visible(self.popover_visible)
                    .placement(OverlayPlacement::Right)
                    .trigger(
                        Button::new("popover-trigger")
                            .text("Toggle popover")
                            .variant(ButtonVariant::Outlined)
                            .on_click(cx.listener(|view, _event, _window, cx| {
                                view.popover_visible = !view.popover_visible;
                                cx.notify();
                            })),
                    )
                    .content(div().p(theme.spacing.md).child(Text::new("Anchored content")))
                    .on_close({
                        let view = view.clone();
                        move |_window, cx| {
                            view.update(cx, |view, cx| {
                                view.popover_visible = false;
                                cx.notify();
                            })
                        }
                    }),
            )
            .child(
                Toast::new("toast", "Saved")
                    .visible(self.toast_visible)
                    .variant(ToastVariant::Success)
                    .on_close(move |_window, cx| {
                        view.update(cx, |view, cx| {
                            view.toast_visible = false;
                            cx.notify();
                        })
                    }),
            )
    }
}

fn main() {
    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .with_assets(assets![MosaicAssets])
        .run(|cx: &mut App| {
            gpui_mosaic::init(cx);

            cx.set_menus(vec![Menu {
                name: "Mosaic Gallery".into(),
                items: vec![],
            }]);

            let bounds = Bounds::centered(None, size(px(620.), px(860.)), cx);

            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        appears_transparent: true,
                        traffic_light_position: Some(point(px(10.), px(10.))),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |_window, cx| {
                    cx.new(|cx| Gallery {
                        focus_handle: cx.focus_handle(),
                        notifications: true,
                        volume: 40.,
                        fruit: None,
                        popover_visible: false,
                        toast_visible: false,
                    })
                },
            )
            .unwrap();

            init_tab_indexing_actions(cx);

            cx.activate(true);
        });
}

fn init_tab_indexing_actions(cx: &mut App) {
    cx.on_action(move |_: &TabNext, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_next(cx);
            });
        })
    });

    cx.on_action(move |_: &TabPrev, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_prev(cx);
            });
        })
    });

    cx.bind_keys([
        KeyBinding::new("tab", TabNext, None),
        KeyBinding::new("shift-tab", TabPrev, None),
    ]);
}
