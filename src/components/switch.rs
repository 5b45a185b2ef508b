use std::{rc::Rc, time::Duration};

use gpui::{
    App, BoxShadow, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement,
    Pixels, RenderOnce, Rgba, StatefulInteractiveElement, Styled, Window, div, hsla, point,
    prelude::FluentBuilder, px, rgb,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::Lerp;

use crate::{
    conitional_transition,
    primitives::{FocusRing, OnChange, PressState, propose_value, use_component_value},
    theme::{ColorKind, SizeKind, Theme, ThemeExt},
    utils::{DISABLED_OPACITY, ElementIdExt, checked_transition},
};

const OFF_TRACK_COLOR: u32 = 0xE0E0E0;

/// Where the thumb rests when the switch is off.
const THUMB_INSET: f32 = 2.;

/// Dimensions and colors of a [`Switch`].
#[derive(Clone, Debug, PartialEq)]
pub struct SwitchStyle {
    pub track_width: Pixels,
    pub track_height: Pixels,
    pub thumb_size: Pixels,
    /// Horizontal thumb offset when off.
    pub thumb_start: Pixels,
    /// Horizontal thumb offset when on.
    pub thumb_end: Pixels,
    pub on_color: Rgba,
    pub off_color: Rgba,
    pub thumb_color: Rgba,
    pub opacity: f32,
}

impl SwitchStyle {
    pub fn resolve(size: SizeKind, color: ColorKind, disabled: bool, theme: &Theme) -> Self {
        let (track_width, track_height, thumb_size, travel) = match size {
            SizeKind::Small => (36., 20., 16., 16.),
            SizeKind::Medium => (46., 24., 20., 22.),
            SizeKind::Large => (56., 30., 26., 26.),
        };

        let (on_color, off_color) = if disabled {
            (theme.colors.text.disabled, theme.colors.text.disabled)
        } else {
            (color.from_palette(&theme.colors), rgb(OFF_TRACK_COLOR))
        };

        Self {
            track_width: px(track_width),
            track_height: px(track_height),
            thumb_size: px(thumb_size),
            thumb_start: px(THUMB_INSET),
            thumb_end: px(travel),
            on_color,
            off_color,
            thumb_color: rgb(0xFFFFFF),
            opacity: if disabled { DISABLED_OPACITY } else { 1. },
        }
    }

    /// Thumb offset for a checked delta between 0 (off) and 1 (on).
    pub fn thumb_offset(&self, checked_delta: f32) -> Pixels {
        px(remap(
            checked_delta,
            0.,
            1.,
            self.thumb_start.to_f64() as f32,
            self.thumb_end.to_f64() as f32,
        ))
    }
}

/// An on/off toggle with a sliding thumb.
#[derive(IntoElement)]
pub struct Switch {
    id: ElementId,
    value: Option<bool>,
    default_value: bool,
    size: SizeKind,
    color: ColorKind,
    disabled: bool,
    on_change: Option<OnChange<bool>>,
}

impl Switch {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            value: None,
            default_value: false,
            size: SizeKind::default(),
            color: ColorKind::default(),
            disabled: false,
            on_change: None,
        }
    }

    /// Controls whether the switch is on.
    pub fn value(mut self, value: bool) -> Self {
        self.value = Some(value);
        self
    }

    pub fn default_value(mut self, default_value: bool) -> Self {
        self.default_value = default_value;
        self
    }

    pub fn size(mut self, size: SizeKind) -> Self {
        self.size = size;
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

    pub fn on_change(mut self, on_change: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(on_change));
        self
    }
}

impl RenderOnce for Switch {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let style = SwitchStyle::resolve(self.size, self.color, self.disabled, cx.get_theme());
        let is_disabled = self.disabled;
        let radius = style.track_height / 2.;

        let default_value = self.default_value;
        let value = use_component_value(&self.id, self.value, || default_value, window, cx);
        let is_on = *value.read(cx).current();

        let press = PressState::from_window(&self.id, window, cx);
        press.blur_if_disabled(is_disabled, window);
        let is_click_down = press.is_click_down(cx);

        let checked_transition =
            checked_transition(self.id.clone(), window, cx, Duration::from_millis(200), is_on);

        // Pressing dims the track slightly.
        let press_transition = conitional_transition!(
            self.id.with_suffix("state:transition:press"),
            window,
            cx,
            Duration::from_millis(150),
            {
                is_click_down => 0.8,
                _ => 1.
            }
        );

        let opacity_transition = conitional_transition!(
            self.id.with_suffix("state:transition:opacity"),
            window,
            cx,
            Duration::from_millis(365),
            style.opacity
        );

        let checked_delta = *checked_transition.evaluate(window, cx);
        let track_color = style.off_color.lerp(&style.on_color, checked_delta);
        let thumb_top = (style.track_height - style.thumb_size) / 2.;

        div()
            .id(self.id.clone())
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .w(style.track_width)
            .min_w(style.track_width)
            .h(style.track_height)
            .min_h(style.track_height)
            .opacity(*opacity_transition.evaluate(window, cx) * *press_transition.evaluate(window, cx))
            .child(FocusRing::new(self.id.with_suffix("focus_ring"), press.focus_handle.clone()).rounded(radius))
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(radius)
                    .bg(track_color),
            )
            .child(
                div()
                    .absolute()
                    .top(thumb_top)
                    .left(style.thumb_offset(checked_delta))
                    .size(style.thumb_size)
                    .rounded(style.thumb_size / 2.)
                    .bg(style.thumb_color)
                    .shadow(vec![BoxShadow {
                        color: hsla(0., 0., 0., 0.2),
                        offset: point(px(0.), px(2.)),
                        blur_radius: px(2.),
                        spread_radius: px(0.),
                    }]),
            )
            .when(!is_disabled, |this| {
                let press_on_click = press.clone();
                let on_change = self.on_change;

                press.attach(this).on_click(move |_event, window, cx| {
                    press_on_click.end_click(window, cx);
                    cx.stop_propagation();

                    let proposed = !*value.read(cx).current();
                    propose_value(&value, proposed, on_change.as_ref(), window, cx);
                })
            })
    }
}

/// Linearly maps `value` from one range onto another.
pub fn remap(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    (value - from_min) / (from_max - from_min) * (to_max - to_min) + to_min
}
