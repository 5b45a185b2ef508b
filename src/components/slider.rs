use std::rc::Rc;

use gpui::{
    App, Bounds, CursorStyle, DispatchPhase, ElementId, Entity, InteractiveElement, IntoElement,
    MouseButton, MouseMoveEvent, MouseUpEvent, ParentElement, Pixels, Point, RenderOnce, Rgba,
    Styled, Window, canvas, div, prelude::FluentBuilder, px, relative,
};
use gpui_mosaic_primitives::{
    track::{SliderRange, TrackAxis},
    value::ComponentValue,
};

use crate::{
    ElementIdExt,
    primitives::{OnChange, propose_value, use_component_value},
    theme::{ColorKind, Theme, ThemeExt},
    typography::{TypographyExt, TypographyVariantKind},
    utils::{DISABLED_OPACITY, TextStyleExt},
};

/// Height of the hit area around a horizontal track.
const TRACK_HIT_SIZE: f32 = 30.;

/// Colors of a [`Slider`].
#[derive(Clone, Debug, PartialEq)]
pub struct SliderStyle {
    pub track_color: Rgba,
    pub fill_color: Rgba,
    pub thumb_color: Rgba,
    pub thumb_opacity: f32,
}

impl SliderStyle {
    pub fn resolve(color: ColorKind, disabled: bool, theme: &Theme) -> Self {
        let text = &theme.colors.text;

        if disabled {
            return Self {
                track_color: text.disabled,
                fill_color: text.disabled,
                thumb_color: text.disabled,
                thumb_opacity: DISABLED_OPACITY,
            };
        }

        let color = color.from_palette(&theme.colors);
        Self {
            track_color: text.secondary,
            fill_color: color,
            thumb_color: color,
            thumb_opacity: 1.,
        }
    }
}

#[derive(Default)]
struct DragState {
    active: bool,
    last_value: Option<f32>,
}

/// Everything pointer handlers need to turn a position into a value.
#[derive(Clone)]
struct SliderHandles {
    range: SliderRange,
    axis: TrackAxis,
    value: Entity<ComponentValue<f32>>,
    track: Entity<Option<Bounds<Pixels>>>,
    drag: Entity<DragState>,
    on_change: Option<OnChange<f32>>,
    on_change_complete: Option<OnChange<f32>>,
}

impl SliderHandles {
    fn is_dragging(&self, cx: &App) -> bool {
        self.drag.read(cx).active
    }

    fn begin_drag(&self, cx: &mut App) {
        self.drag.update(cx, |drag, cx| {
            drag.active = true;
            drag.last_value = None;
            cx.notify();
        });
    }

    fn move_to(&self, position: Point<Pixels>, window: &mut Window, cx: &mut App) {
        let Some(track) = *self.track.read(cx) else {
            return;
        };

        let proposed = self.range.value_at(position, track, self.axis);
        self.drag
            .update(cx, |drag, _cx| drag.last_value = Some(proposed));

        if *self.value.read(cx).current() != proposed {
            propose_value(&self.value, proposed, self.on_change.as_ref(), window, cx);
        }
    }

    /// Follows the pointer during a drag. A move without the left button
    /// held means the release was missed, so the drag ends instead.
    fn pointer_moved(
        &self,
        position: Point<Pixels>,
        pressed_button: Option<MouseButton>,
        window: &mut Window,
        cx: &mut App,
    ) {
        if !self.is_dragging(cx) {
            return;
        }

        if pressed_button != Some(MouseButton::Left) {
            self.end_drag(window, cx);
            return;
        }

        self.move_to(position, window, cx);
    }

    fn end_drag(&self, window: &mut Window, cx: &mut App) {
        let last_value = self.drag.update(cx, |drag, cx| {
            drag.active = false;
            cx.notify();
            drag.last_value.take()
        });
        let completed = last_value.unwrap_or_else(|| *self.value.read(cx).current());

        if let Some(on_change_complete) = &self.on_change_complete {
            on_change_complete(&completed, window, cx);
        }
    }
}

/// Picks a value from a continuous or stepped range by dragging or tapping.
#[derive(IntoElement)]
pub struct Slider {
    id: ElementId,
    value: Option<f32>,
    default_value: f32,
    min: f32,
    max: f32,
    step: f32,
    axis: TrackAxis,
    length: Pixels,
    track_height: Pixels,
    thumb_size: Pixels,
    allow_tap: bool,
    show_value: bool,
    color: ColorKind,
    disabled: bool,
    on_change: Option<OnChange<f32>>,
    on_change_complete: Option<OnChange<f32>>,
}

impl Slider {
    pub fn new(id: impl Into<ElementId>) -> Self {
        let range = SliderRange::default();

        Self {
            id: id.into(),
            value: None,
            default_value: range.min(),
            min: range.min(),
            max: range.max(),
            step: range.step(),
            axis: TrackAxis::Horizontal,
            length: px(200.),
            track_height: px(4.),
            thumb_size: px(20.),
            allow_tap: true,
            show_value: false,
            color: ColorKind::default(),
            disabled: false,
            on_change: None,
            on_change_complete: None,
        }
    }

    /// Controls the value.
    pub fn value(mut self, value: f32) -> Self {
        self.value = Some(value);
        self
    }

    pub fn default_value(mut self, default_value: f32) -> Self {
        self.default_value = default_value;
        self
    }

    pub fn min(mut self, min: f32) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: f32) -> Self {
        self.max = max;
        self
    }

    /// Snapping interval. Zero disables snapping.
    pub fn step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    pub fn axis(mut self, axis: TrackAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn vertical(self) -> Self {
        self.axis(TrackAxis::Vertical)
    }

    /// Track length of a vertical slider. Horizontal sliders fill their parent.
    pub fn length(mut self, length: impl Into<Pixels>) -> Self {
        self.length = length.into();
        self
    }

    pub fn track_height(mut self, track_height: impl Into<Pixels>) -> Self {
        self.track_height = track_height.into();
        self
    }

    pub fn thumb_size(mut self, thumb_size: impl Into<Pixels>) -> Self {
        self.thumb_size = thumb_size.into();
        self
    }

    /// Whether pressing the track jumps to the pressed value.
    pub fn allow_tap(mut self, allow_tap: bool) -> Self {
        self.allow_tap = allow_tap;
        self
    }

    pub fn show_value(mut self, show_value: bool) -> Self {
        self.show_value = show_value;
        self
    }

    pub fn color(mut self, color: ColorKind) -> Self {
        self.color = color;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called for every value change while dragging or tapping.
    pub fn on_change(mut self, on_change: impl Fn(&f32, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(on_change));
        self
    }

    /// Called once when the pointer is released.
    pub fn on_change_complete(
        mut self,
        on_change_complete: impl Fn(&f32, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_change_complete = Some(Rc::new(on_change_complete));
        self
    }

    fn range(&self) -> SliderRange {
        SliderRange::new(self.min, self.max, self.step).unwrap_or_else(|err| {
            log::warn!("{:?}: {err}, falling back to the default range", self.id);
            SliderRange::default()
        })
    }
}

impl RenderOnce for Slider {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let range = self.range();
        let style = SliderStyle::resolve(self.color, self.disabled, cx.get_theme());
        let is_disabled = self.disabled;
        let is_vertical = self.axis == TrackAxis::Vertical;
        let (track_height, thumb_size) = (self.track_height, self.thumb_size);

        let default_value = range.snap(self.default_value);
        let value = use_component_value(
            &self.id,
            self.value.map(|value| range.clamp(value)),
            || default_value,
            window,
            cx,
        );
        let current = *value.read(cx).current();
        let fraction = range.fraction_of(current);

        let handles = SliderHandles {
            range,
            axis: self.axis,
            value,
            track: window.use_keyed_state(self.id.with_suffix("state:track"), cx, |_window, _cx| {
                None
            }),
            drag: window.use_keyed_state(self.id.with_suffix("state:drag"), cx, |_window, _cx| {
                DragState::default()
            }),
            on_change: self.on_change,
            on_change_complete: self.on_change_complete,
        };

        let value_label = self.show_value.then(|| {
            let text_style = cx.get_typography().style(TypographyVariantKind::Body2);
            div()
                .mt(px(8.))
                .w_full()
                .text_center()
                .text_style_spec(&text_style)
                .text_size(px(14.))
                .text_color(cx.get_theme().colors.text.primary)
                .child(range.format(current))
        });

        let handles_on_measure = handles.clone();
        let handles_on_paint = handles.clone();
        let track_probe = canvas(
            move |bounds, _window, cx| {
                handles_on_measure
                    .track
                    .update(cx, |track, _cx| *track = Some(bounds));
            },
            move |_bounds, _, window, _cx| {
                if is_disabled {
                    return;
                }

                // Registered on every paint: a press can begin a drag between frames.
                let handles_on_move = handles_on_paint.clone();
                window.on_mouse_event(move |event: &MouseMoveEvent, phase, window, cx| {
                    if phase == DispatchPhase::Bubble {
                        handles_on_move.pointer_moved(
                            event.position,
                            event.pressed_button,
                            window,
                            cx,
                        );
                    }
                });

                let handles_on_up = handles_on_paint.clone();
                window.on_mouse_event(move |event: &MouseUpEvent, phase, window, cx| {
                    if phase == DispatchPhase::Bubble
                        && event.button == MouseButton::Left
                        && handles_on_up.is_dragging(cx)
                    {
                        handles_on_up.end_drag(window, cx);
                    }
                });
            },
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        let rail = div()
            .absolute()
            .bg(style.track_color)
            .rounded(track_height / 2.)
            .map(|this| {
                if is_vertical {
                    this.top_0().bottom_0().w(track_height)
                } else {
                    this.left_0().right_0().h(track_height)
                }
            });

        let fill = div()
            .absolute()
            .bg(style.fill_color)
            .rounded(track_height / 2.)
            .map(|this| {
                if is_vertical {
                    this.bottom_0().w(track_height).h(relative(fraction))
                } else {
                    this.left_0().h(track_height).w(relative(fraction))
                }
            });

        let thumb = div()
            .id(self.id.with_suffix("thumb"))
            .absolute()
            .size(thumb_size)
            .rounded(thumb_size / 2.)
            .bg(style.thumb_color)
            .opacity(style.thumb_opacity)
            .shadow_sm()
            .map(|this| {
                let centre = (track_height - thumb_size) / 2.;
                if is_vertical {
                    this.left(centre)
                        .top(relative(1. - fraction))
                        .mt(-thumb_size / 2.)
                } else {
                    this.top(centre)
                        .left(relative(fraction))
                        .ml(-thumb_size / 2.)
                }
            })
            .when(!is_disabled, |this| {
                let handles = handles.clone();
                this.cursor(CursorStyle::PointingHand)
                    .on_mouse_down(MouseButton::Left, move |_event, window, cx| {
                        window.prevent_default();
                        cx.stop_propagation();
                        handles.begin_drag(cx);
                    })
            });

        let track = div()
            .id(self.id.with_suffix("track"))
            .relative()
            .map(|this| {
                if is_vertical {
                    this.h(self.length).w(track_height)
                } else {
                    this.w_full().h(track_height)
                }
            })
            .child(rail)
            .child(fill)
            .child(track_probe)
            .child(thumb);

        div()
            .id(self.id.clone())
            .flex()
            .flex_col()
            .items_center()
            .py(px(8.))
            .when(!is_vertical, |this| this.w_full())
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::Arrow
            })
            .child(
                div()
                    .id(self.id.with_suffix("hit_area"))
                    .flex()
                    .items_center()
                    .justify_center()
                    .map(|this| {
                        if is_vertical {
                            this.w(if thumb_size > track_height {
                                thumb_size
                            } else {
                                track_height
                            })
                        } else {
                            this.w_full().h(px(TRACK_HIT_SIZE))
                        }
                    })
                    .child(track)
                    .when(!is_disabled && self.allow_tap, |this| {
                        this.cursor(CursorStyle::PointingHand).on_mouse_down(
                            MouseButton::Left,
                            move |event, window, cx| {
                                window.prevent_default();
                                handles.begin_drag(cx);
                                handles.move_to(event.position, window, cx);
                            },
                        )
                    }),
            )
            .children(value_label)
    }
}


#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use super::*;
    use gpui::{AppContext, Context, TestAppContext, VisualTestContext, point, size};
    use std::cell::RefCell;

    fn handles(cx: &mut TestAppContext, value: ComponentValue<f32>) -> SliderHandles {
        cx.update(|cx| SliderHandles {
            range: SliderRange::new(0., 100., 10.).unwrap(),
            axis: TrackAxis::Horizontal,
            value: cx.new(|_cx| value),
            track: cx.new(|_cx| {
                Some(Bounds::new(point(px(0.), px(0.)), size(px(200.), px(4.))))
            }),
            drag: cx.new(|_cx| DragState::default()),
            on_change: None,
            on_change_complete: None,
        })
    }

    #[gpui::test]
    fn test_tap_snaps_and_completes(cx: &mut TestAppContext) {
        let window = cx.add_empty_window();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let completed = Rc::new(RefCell::new(Vec::new()));

        let mut handles = handles(window, ComponentValue::uncontrolled(0.));
        let changes_on_change = changes.clone();
        handles.on_change = Some(Rc::new(move |value: &f32, _window: &mut Window, _cx: &mut App| {
            changes_on_change.borrow_mut().push(*value)
        }));
        let completed_on_complete = completed.clone();
        handles.on_change_complete = Some(Rc::new(move |value: &f32, _window: &mut Window, _cx: &mut App| {
            completed_on_complete.borrow_mut().push(*value)
        }));

        window.update(|window, cx| {
            handles.begin_drag(cx);
            // 23% along the track.
            handles.move_to(point(px(46.), px(2.)), window, cx);
            handles.end_drag(window, cx);

            assert_eq!(*handles.value.read(cx).current(), 20.);
            assert!(!handles.is_dragging(cx));
        });

        assert_eq!(*changes.borrow(), vec![20.]);
        assert_eq!(*completed.borrow(), vec![20.]);
    }

    #[gpui::test]
    fn test_move_without_button_ends_a_missed_release(cx: &mut TestAppContext) {
        let window = cx.add_empty_window();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let completed = Rc::new(RefCell::new(Vec::new()));

        let mut handles = handles(window, ComponentValue::uncontrolled(0.));
        let changes_on_change = changes.clone();
        handles.on_change = Some(Rc::new(move |value: &f32, _window: &mut Window, _cx: &mut App| {
            changes_on_change.borrow_mut().push(*value)
        }));
        let completed_on_complete = completed.clone();
        handles.on_change_complete = Some(Rc::new(move |value: &f32, _window: &mut Window, _cx: &mut App| {
            completed_on_complete.borrow_mut().push(*value)
        }));

        window.update(|window, cx| {
            // Tap at 23%, then the release never arrives.
            handles.begin_drag(cx);
            handles.move_to(point(px(46.), px(2.)), window, cx);

            handles.pointer_moved(point(px(180.), px(2.)), None, window, cx);
            assert!(!handles.is_dragging(cx));
            assert_eq!(*handles.value.read(cx).current(), 20.);

            handles.pointer_moved(point(px(150.), px(2.)), None, window, cx);
            handles.pointer_moved(point(px(150.), px(2.)), Some(MouseButton::Left), window, cx);
            assert_eq!(*handles.value.read(cx).current(), 20.);
        });

        assert_eq!(*changes.borrow(), vec![20.]);
        assert_eq!(*completed.borrow(), vec![20.]);
    }

    #[gpui::test]
    fn test_held_button_keeps_dragging(cx: &mut TestAppContext) {
        let window = cx.add_empty_window();
        let handles = handles(window, ComponentValue::uncontrolled(0.));

        window.update(|window, cx| {
            handles.begin_drag(cx);
            handles.pointer_moved(point(px(120.), px(2.)), Some(MouseButton::Left), window, cx);

            assert!(handles.is_dragging(cx));
            assert_eq!(*handles.value.read(cx).current(), 60.);
        });
    }

    #[gpui::test]
    fn test_drag_outside_track_clamps(cx: &mut TestAppContext) {
        let window = cx.add_empty_window();
        let handles = handles(window, ComponentValue::uncontrolled(50.));

        window.update(|window, cx| {
            handles.begin_drag(cx);
            handles.move_to(point(px(-40.), px(2.)), window, cx);
            assert_eq!(*handles.value.read(cx).current(), 0.);

            handles.move_to(point(px(900.), px(2.)), window, cx);
            assert_eq!(*handles.value.read(cx).current(), 100.);
        });
    }

    #[gpui::test]
    fn test_controlled_drag_only_proposes(cx: &mut TestAppContext) {
        let window = cx.add_empty_window();
        let proposed = Rc::new(RefCell::new(Vec::new()));

        let mut handles = handles(window, ComponentValue::controlled(30.));
        let proposed_on_change = proposed.clone();
        handles.on_change = Some(Rc::new(move |value: &f32, _window: &mut Window, _cx: &mut App| {
            proposed_on_change.borrow_mut().push(*value)
        }));

        window.update(|window, cx| {
            handles.begin_drag(cx);
            handles.move_to(point(px(200.), px(2.)), window, cx);
            assert_eq!(*handles.value.read(cx).current(), 30.);
        });

        assert_eq!(*proposed.borrow(), vec![100.]);
    }

    struct SliderTestView;

    impl gpui::Render for SliderTestView {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div()
                .size_full()
                .flex()
                .flex_col()
                .child(Slider::new("horizontal").default_value(40.).show_value(true))
                .child(Slider::new("vertical").vertical().value(70.).step(0.5))
                .child(Slider::new("invalid").min(5.).max(1.))
        }
    }

    #[gpui::test]
    fn test_slider_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            crate::init(cx);

            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| SliderTestView))
                .unwrap()
        });

        let cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }
}
