use std::{rc::Rc, time::Duration};

use gpui::{
    App, BoxShadow, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement, Pixels,
    RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window, anchored,
    deferred, div, hsla, point, prelude::FluentBuilder, px, rgb,
};
use gpui_mosaic_primitives::dismiss_timer::DismissTimer;

use crate::{
    ElementIdExt, conitional_transition,
    theme::{Theme, ThemeExt},
    typography::TypographyExt,
};

/// Distance between the toast and the window edge.
const EDGE_OFFSET: f32 = 16.;

/// How far the toast slides while fading.
const SLIDE_DISTANCE: f32 = 20.;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

/// The window edge a toast is pinned to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPosition {
    Top,
    #[default]
    Bottom,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastStyle {
    pub background: Rgba,
    pub text_color: Rgba,
    pub corner_radius: Pixels,
    pub padding: Pixels,
}

impl ToastStyle {
    pub fn resolve(variant: ToastVariant, theme: &Theme) -> Self {
        let colors = &theme.colors;

        Self {
            background: match variant {
                ToastVariant::Success => colors.success,
                ToastVariant::Error => colors.error,
                ToastVariant::Warning => colors.warning,
                ToastVariant::Info => colors.info,
            },
            text_color: rgb(0xFFFFFF),
            corner_radius: theme.border_radius.md,
            padding: theme.spacing.md,
        }
    }
}

/// Vertical offset of a toast `delta` of the way through its entrance.
pub fn slide_offset(position: ToastPosition, delta: f32) -> Pixels {
    let distance = SLIDE_DISTANCE * (1. - delta.clamp(0., 1.));
    match position {
        ToastPosition::Top => px(-distance),
        ToastPosition::Bottom => px(distance),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PresenceChange {
    Shown,
    Hidden,
    AutoHidden,
    Unchanged,
}

/// Remembers the last `visible` flag so edges can be detected across renders.
#[derive(Clone, Copy, Debug, Default)]
struct ToastPresence {
    last_visible: bool,
    auto_hidden: bool,
}

impl ToastPresence {
    fn observe(&mut self, visible: bool, timer_expired: bool) -> PresenceChange {
        if visible != self.last_visible {
            self.last_visible = visible;
            self.auto_hidden = false;
            return if visible {
                PresenceChange::Shown
            } else {
                PresenceChange::Hidden
            };
        }

        if visible && timer_expired && !self.auto_hidden {
            self.auto_hidden = true;
            return PresenceChange::AutoHidden;
        }

        PresenceChange::Unchanged
    }

    fn is_showing(&self) -> bool {
        self.last_visible && !self.auto_hidden
    }
}

type ToastHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// A short message pinned to the top or bottom of the window.
///
/// Visibility belongs to the caller. When the auto-hide duration runs out
/// the toast fades by itself and asks to be closed through `on_close`.
#[derive(IntoElement)]
pub struct Toast {
    id: ElementId,
    visible: bool,
    message: SharedString,
    variant: ToastVariant,
    position: ToastPosition,
    duration: Option<Duration>,
    on_close: Option<ToastHandler>,
    action: Option<(SharedString, ToastHandler)>,
}

impl Toast {
    pub fn new(id: impl Into<ElementId>, message: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            visible: false,
            message: message.into(),
            variant: ToastVariant::default(),
            position: ToastPosition::default(),
            duration: Some(Duration::from_secs(3)),
            on_close: None,
            action: None,
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    /// How long the toast stays before hiding itself. `None` or zero keeps
    /// it until the caller hides it.
    pub fn duration(mut self, duration: Option<Duration>) -> Self {
        self.duration = duration;
        self
    }

    pub fn on_close(mut self, on_close: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(on_close));
        self
    }

    /// Adds a text button next to the message.
    pub fn action(
        mut self,
        label: impl Into<SharedString>,
        on_press: impl Fn(&mut Window, &mut App) + 'static,
    ) -> Self {
        self.action = Some((label.into(), Rc::new(on_press)));
        self
    }

    fn auto_hide_after(&self) -> Option<Duration> {
        self.duration.filter(|duration| !duration.is_zero())
    }
}

impl RenderOnce for Toast {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let style = ToastStyle::resolve(self.variant, cx.get_theme());
        let font_family = cx.get_typography().font_family.primary[0].clone();

        let timer = window.use_keyed_state(self.id.with_suffix("state:timer"), cx, |_window, _cx| {
            DismissTimer::new()
        });
        let presence = window.use_keyed_state(
            self.id.with_suffix("state:presence"),
            cx,
            |_window, _cx| ToastPresence::default(),
        );

        let expired = timer.read(cx).expired();
        let change = presence.update(cx, |presence, _cx| presence.observe(self.visible, expired));

        match change {
            PresenceChange::Shown => {
                if let Some(duration) = self.auto_hide_after() {
                    timer.update(cx, |timer, cx| timer.start(duration, cx));
                }
            }
            PresenceChange::Hidden => timer.update(cx, |timer, _cx| timer.cancel()),
            PresenceChange::AutoHidden => {
                timer.update(cx, |timer, _cx| timer.cancel());
                log::debug!("{:?}: toast auto-hidden", self.id);

                if let Some(on_close) = self.on_close.clone() {
                    window.defer(cx, move |window, cx| on_close(window, cx));
                }
            }
            PresenceChange::Unchanged => {}
        }

        let is_showing = presence.read(cx).is_showing();
        let visible_transition = conitional_transition!(
            self.id.with_suffix("state:transition:visible"),
            window,
            cx,
            Duration::from_millis(300),
            {
                is_showing => 1.,
                _ => 0.
            }
        );
        let delta = *visible_transition.evaluate(window, cx);

        if delta <= 0. && !is_showing {
            return div().into_any_element();
        }

        let viewport = window.viewport_size();
        let edge = px(EDGE_OFFSET);

        let card = div()
            .id(self.id.clone())
            .occlude()
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .w_full()
            .p(style.padding)
            .rounded(style.corner_radius)
            .bg(style.background)
            .shadow(vec![BoxShadow {
                color: hsla(0., 0., 0., 0.3),
                offset: point(px(0.), px(3.)),
                blur_radius: px(4.),
                spread_radius: px(0.),
            }])
            .opacity(delta)
            .mt(slide_offset(self.position, delta))
            .child(
                div()
                    .flex_1()
                    .font_family(font_family.clone())
                    .text_size(px(14.))
                    .line_height(px(20.))
                    .text_color(style.text_color)
                    .child(self.message),
            )
            .when_some(self.action, |this, (label, on_press)| {
                this.child(
                    div()
                        .id(self.id.with_suffix("action"))
                        .ml(edge)
                        .px(px(8.))
                        .py(px(4.))
                        .cursor_pointer()
                        .font_family(font_family)
                        .font_weight(FontWeight::MEDIUM)
                        .text_size(px(14.))
                        .text_color(style.text_color)
                        .child(label.to_uppercase())
                        .on_click(move |_event, window, cx| {
                            cx.stop_propagation();
                            on_press(window, cx);
                        }),
                )
            });

        deferred(
            anchored().position(point(px(0.), px(0.))).child(
                div()
                    .w(viewport.width)
                    .h(viewport.height)
                    .flex()
                    .flex_col()
                    .map(|this| match self.position {
                        ToastPosition::Top => this.justify_start(),
                        ToastPosition::Bottom => this.justify_end(),
                    })
                    .p(edge)
                    .child(card),
            ),
        )
        .priority(2)
        .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_colors() {
        let theme = Theme::DEFAULT;

        assert_eq!(ToastStyle::resolve(ToastVariant::Success, &theme).background, theme.colors.success);
        assert_eq!(ToastStyle::resolve(ToastVariant::Error, &theme).background, theme.colors.error);
        assert_eq!(ToastStyle::resolve(ToastVariant::Warning, &theme).background, theme.colors.warning);
        assert_eq!(ToastStyle::resolve(ToastVariant::Info, &theme).background, theme.colors.info);
    }

    #[test]
    fn test_slide_offset_moves_away_from_edge() {
        assert_eq!(slide_offset(ToastPosition::Top, 0.), px(-20.));
        assert_eq!(slide_offset(ToastPosition::Bottom, 0.), px(20.));
        assert_eq!(slide_offset(ToastPosition::Bottom, 1.), px(0.));
        assert_eq!(slide_offset(ToastPosition::Top, 0.5), px(-10.));
    }

    #[test]
    fn test_presence_edges() {
        let mut presence = ToastPresence::default();

        assert_eq!(presence.observe(false, false), PresenceChange::Unchanged);
        assert_eq!(presence.observe(true, false), PresenceChange::Shown);
        assert!(presence.is_showing());

        assert_eq!(presence.observe(true, true), PresenceChange::AutoHidden);
        assert!(!presence.is_showing());
        assert_eq!(presence.observe(true, true), PresenceChange::Unchanged);

        assert_eq!(presence.observe(false, false), PresenceChange::Hidden);
        assert_eq!(presence.observe(true, false), PresenceChange::Shown);
        assert!(presence.is_showing());
    }

    #[test]
    fn test_zero_duration_disables_auto_hide() {
        let toast = Toast::new("toast", "Saved");
        assert_eq!(toast.auto_hide_after(), Some(Duration::from_secs(3)));

        let toast = Toast::new("toast", "Saved").duration(Some(Duration::ZERO));
        assert_eq!(toast.auto_hide_after(), None);

        let toast = Toast::new("toast", "Saved").duration(None);
        assert_eq!(toast.auto_hide_after(), None);
    }
}
