use std::{rc::Rc, time::Duration};

use gpui::{
    App, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement, Pixels,
    RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder, px, relative, rgb, svg,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::Lerp;

use crate::{
    MosaicIconKind, conitional_transition,
    primitives::{FocusRing, OnChange, PressState, propose_value, use_component_value},
    theme::{ColorKind, SizeKind, Theme, ThemeExt},
    typography::{Typography, TypographyExt, TypographyVariantKind},
    utils::{
        DISABLED_OPACITY, ElementIdExt, RgbaExt, SquircleExt, TextStyleExt, checked_transition,
    },
};

/// Everything a [`Checkbox`] needs to paint itself.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckboxStyle {
    pub box_size: Pixels,
    pub corner_radius: Pixels,
    pub border_width: Pixels,
    pub color: Rgba,
    pub check_color: Rgba,
    pub label_gap: Pixels,
    pub label_size: Pixels,
    pub label_color: Rgba,
    pub opacity: f32,
}

impl CheckboxStyle {
    pub fn resolve(
        size: SizeKind,
        color: ColorKind,
        disabled: bool,
        theme: &Theme,
        _typography: &Typography,
    ) -> Self {
        let (box_size, label_size) = match size {
            SizeKind::Small => (px(16.), px(14.)),
            SizeKind::Medium => (px(20.), px(16.)),
            SizeKind::Large => (px(24.), px(18.)),
        };

        Self {
            box_size,
            corner_radius: theme.border_radius.xs,
            border_width: px(2.),
            color: color.from_palette(&theme.colors),
            check_color: rgb(0xFFFFFF),
            label_gap: theme.spacing.sm,
            label_size,
            label_color: if disabled {
                theme.colors.text.disabled
            } else {
                theme.colors.text.primary
            },
            opacity: if disabled { DISABLED_OPACITY } else { 1. },
        }
    }
}

/// A box that toggles between checked and unchecked, with an optional label.
///
/// Pass [`Checkbox::checked`] to control it, or [`Checkbox::default_checked`]
/// to let it keep its own state.
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    icon: SharedString,
    label: Option<SharedString>,
    checked: Option<bool>,
    default_checked: bool,
    size: SizeKind,
    color: ColorKind,
    disabled: bool,
    on_change: Option<OnChange<bool>>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            icon: MosaicIconKind::Checkmark.into(),
            label: None,
            checked: None,
            default_checked: false,
            size: SizeKind::default(),
            color: ColorKind::default(),
            disabled: false,
            on_change: None,
        }
    }

    /// Controls the checked state.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Initial state when uncontrolled.
    pub fn default_checked(mut self, default_checked: bool) -> Self {
        self.default_checked = default_checked;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.icon = icon.into();
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

impl RenderOnce for Checkbox {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let style = CheckboxStyle::resolve(
            self.size,
            self.color,
            self.disabled,
            cx.get_theme(),
            cx.get_typography(),
        );
        let label_style = cx.get_typography().style(TypographyVariantKind::Body2);
        let is_disabled = self.disabled;

        let default_checked = self.default_checked;
        let value = use_component_value(&self.id, self.checked, || default_checked, window, cx);
        let is_checked = *value.read(cx).current();

        let press = PressState::from_window(&self.id, window, cx);
        press.blur_if_disabled(is_disabled, window);
        let (is_hover, is_click_down) = (press.is_hover(cx), press.is_click_down(cx));

        let checked_transition = checked_transition(
            self.id.clone(),
            window,
            cx,
            Duration::from_millis(200),
            is_checked,
        );

        let border_transition = conitional_transition!(
            self.id.with_suffix("state:transition:border_color"),
            window,
            cx,
            Duration::from_millis(365),
            {
                is_click_down => style.color.lerp(&cx.get_theme().colors.dark, 0.24),
                is_hover => style.color.lerp(&cx.get_theme().colors.dark, 0.12),
                _ => style.color
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
        let border_color = *border_transition.evaluate(window, cx);

        div()
            .id(self.id.clone())
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .flex()
            .flex_row()
            .items_center()
            .gap(style.label_gap)
            .opacity(*opacity_transition.evaluate(window, cx))
            .child(
                div()
                    .size(style.box_size)
                    .min_w(style.box_size)
                    .min_h(style.box_size)
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        FocusRing::new(self.id.with_suffix("focus_ring"), press.focus_handle.clone())
                            .rounded(style.corner_radius),
                    )
                    .child(
                        squircle()
                            .absolute_expand()
                            .rounded(style.corner_radius)
                            .border(style.border_width)
                            .border_inside()
                            .border_color(border_color),
                    )
                    .child(
                        squircle()
                            .absolute_expand()
                            .rounded(style.corner_radius)
                            .border(px(1.))
                            .border_inside()
                            .bg(border_color.alpha(checked_delta))
                            .border_highlight(checked_delta * 0.15),
                    )
                    .child(
                        svg()
                            .map(|mut this| {
                                this.style().aspect_ratio = Some(1.);
                                this
                            })
                            .size(relative(0.7))
                            .text_color(style.check_color.alpha(checked_delta))
                            .path(self.icon.clone()),
                    ),
            )
            .when_some(self.label, |this, label| {
                this.child(
                    div()
                        .text_style_spec(&label_style)
                        .text_size(style.label_size)
                        .text_color(style.label_color)
                        .child(label),
                )
            })
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_size_follows_size() {
        let sizes = [SizeKind::Small, SizeKind::Medium, SizeKind::Large].map(|size| {
            CheckboxStyle::resolve(
                size,
                ColorKind::Primary,
                false,
                &Theme::DEFAULT,
                &Typography::DEFAULT,
            )
            .box_size
        });

        assert_eq!(sizes, [px(16.), px(20.), px(24.)]);
    }

    #[test]
    fn test_disabled_dims_box_and_label() {
        let theme = Theme::DEFAULT;
        let style = CheckboxStyle::resolve(
            SizeKind::Medium,
            ColorKind::Secondary,
            true,
            &theme,
            &Typography::DEFAULT,
        );

        assert_eq!(style.opacity, 0.5);
        assert_eq!(style.label_color, theme.colors.text.disabled);
        assert_eq!(style.color, theme.colors.secondary);
        assert_eq!(style.corner_radius, theme.border_radius.xs);
    }
}
