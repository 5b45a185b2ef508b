use std::{f32::consts::PI, rc::Rc, time::Duration};

use gpui::{
    AnyElement, App, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement,
    Pixels, Radians, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window,
    div, prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    MosaicIconKind,
    components::Icon,
    conitional_transition,
    primitives::{FocusRing, PressState},
    theme::{ColorKind, Theme, ThemeExt},
    typography::{TypographyExt, TypographyVariantKind},
    utils::{ElementIdExt, RgbaExt, TextStyleExt},
};

/// Visual treatment of a select-like trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldVariant {
    /// Full border.
    #[default]
    Outlined,
    /// Tinted background, no border.
    Filled,
    /// Bottom border only, no horizontal padding.
    Standard,
}

/// Interaction state a field is painted for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub disabled: bool,
    pub error: bool,
    pub open: bool,
    pub has_value: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldStyle {
    pub background: Rgba,
    pub border_color: Rgba,
    pub border_width: Pixels,
    /// Only the bottom edge is drawn.
    pub underline: bool,
    pub corner_radius: Pixels,
    pub padding_x: Pixels,
    pub padding_y: Pixels,
    pub text_color: Rgba,
    pub label_color: Rgba,
    pub helper_color: Rgba,
    pub chevron_color: Rgba,
}

impl FieldStyle {
    pub fn resolve(variant: FieldVariant, color: ColorKind, state: FieldState, theme: &Theme) -> Self {
        let colors = &theme.colors;
        let accent = color.from_palette(colors);

        let border_color = if state.disabled {
            colors.text.disabled
        } else if state.error {
            colors.error
        } else if state.open {
            accent
        } else {
            colors.text.secondary
        };

        let (background, border_width, underline, corner_radius, padding_x, padding_y) =
            match variant {
                FieldVariant::Outlined => (
                    if state.disabled { colors.light } else { colors.surface },
                    px(1.),
                    false,
                    theme.border_radius.md,
                    theme.spacing.md,
                    px(12.),
                ),
                FieldVariant::Filled => (
                    if state.disabled {
                        colors.light
                    } else {
                        accent.alpha(0x10 as f32 / 255.)
                    },
                    px(0.),
                    false,
                    theme.border_radius.md,
                    theme.spacing.md,
                    px(12.),
                ),
                FieldVariant::Standard => (
                    colors.surface.alpha(0.),
                    px(1.),
                    true,
                    px(0.),
                    px(0.),
                    theme.spacing.sm,
                ),
            };

        Self {
            background,
            border_color,
            border_width,
            underline,
            corner_radius,
            padding_x,
            padding_y,
            text_color: if state.has_value && !state.disabled {
                colors.text.primary
            } else {
                colors.text.secondary
            },
            label_color: if state.disabled {
                colors.text.disabled
            } else {
                colors.text.secondary
            },
            helper_color: if state.error {
                colors.error
            } else {
                colors.text.secondary
            },
            chevron_color: if state.disabled {
                colors.text.disabled
            } else {
                colors.text.secondary
            },
        }
    }
}

/// The closed face of a Select or Dropdown: label, current text, chevron
/// and helper text.
#[derive(IntoElement)]
pub(crate) struct Field {
    id: ElementId,
    variant: FieldVariant,
    color: ColorKind,
    state: FieldState,
    text: SharedString,
    label: Option<SharedString>,
    helper_text: Option<SharedString>,
    full_width: bool,
    anchor_probe: Option<AnyElement>,
    on_press: Option<Rc<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Field {
    pub(crate) fn new(id: impl Into<ElementId>, text: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            variant: FieldVariant::default(),
            color: ColorKind::default(),
            state: FieldState::default(),
            text: text.into(),
            label: None,
            helper_text: None,
            full_width: true,
            anchor_probe: None,
            on_press: None,
        }
    }

    pub(crate) fn variant(mut self, variant: FieldVariant) -> Self {
        self.variant = variant;
        self
    }

    pub(crate) fn color(mut self, color: ColorKind) -> Self {
        self.color = color;
        self
    }

    pub(crate) fn state(mut self, state: FieldState) -> Self {
        self.state = state;
        self
    }

    pub(crate) fn label(mut self, label: Option<SharedString>) -> Self {
        self.label = label;
        self
    }

    pub(crate) fn helper_text(mut self, helper_text: Option<SharedString>) -> Self {
        self.helper_text = helper_text;
        self
    }

    pub(crate) fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// An element laid over the trigger to record its bounds.
    pub(crate) fn anchor_probe(mut self, anchor_probe: impl IntoElement) -> Self {
        self.anchor_probe = Some(anchor_probe.into_any_element());
        self
    }

    pub(crate) fn on_press(mut self, on_press: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_press = Some(Rc::new(on_press));
        self
    }
}

impl RenderOnce for Field {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let style = FieldStyle::resolve(self.variant, self.color, self.state, cx.get_theme());
        let typography = cx.get_typography();
        let (label_style, value_style, helper_style) = (
            typography.style(TypographyVariantKind::Body2),
            typography.style(TypographyVariantKind::Body1),
            typography.style(TypographyVariantKind::Caption),
        );
        let label_gap = cx.get_theme().spacing.xs;
        let is_disabled = self.state.disabled;

        let press = PressState::from_window(&self.id, window, cx);
        press.blur_if_disabled(is_disabled, window);

        let chevron_transition = conitional_transition!(
            self.id.with_suffix("state:transition:chevron"),
            window,
            cx,
            Duration::from_millis(200),
            {
                self.state.open => 1.,
                _ => 0.
            }
        );
        let chevron_rotation = Radians(*chevron_transition.evaluate(window, cx) * PI);

        let trigger = div()
            .id(self.id.with_suffix("trigger"))
            .relative()
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .gap(label_gap)
            .px(style.padding_x)
            .py(style.padding_y)
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .child(
                FocusRing::new(self.id.with_suffix("focus_ring"), press.focus_handle.clone())
                    .rounded(style.corner_radius),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(style.corner_radius)
                    .bg(style.background)
                    .when(!style.underline, |this| {
                        this.border(style.border_width)
                            .border_inside()
                            .border_color(style.border_color)
                    }),
            )
            .when(style.underline, |this| {
                this.child(
                    div()
                        .absolute()
                        .left_0()
                        .right_0()
                        .bottom_0()
                        .h(style.border_width)
                        .bg(style.border_color),
                )
            })
            .child(
                div()
                    .flex_1()
                    .min_w_0()
                    .truncate()
                    .text_style_spec(&value_style)
                    .text_color(style.text_color)
                    .child(self.text),
            )
            .child(
                Icon::new(MosaicIconKind::ChevronDown)
                    .size(px(16.))
                    .color(style.chevron_color)
                    .rotate(chevron_rotation),
            )
            .children(self.anchor_probe)
            .when_some(self.on_press.filter(|_| !is_disabled), |this, on_press| {
                let press_on_click = press.clone();

                press.attach(this).on_click(move |_event, window, cx| {
                    press_on_click.end_click(window, cx);
                    cx.stop_propagation();
                    on_press(window, cx);
                })
            });

        div()
            .flex()
            .flex_col()
            .gap(label_gap)
            .map(|this| if self.full_width { this.w_full() } else { this.min_w(px(120.)) })
            .when_some(self.label, |this, label| {
                this.child(
                    div()
                        .text_style_spec(&label_style)
                        .text_size(px(14.))
                        .text_color(style.label_color)
                        .child(label),
                )
            })
            .child(trigger)
            .when_some(self.helper_text, |this, helper_text| {
                this.child(
                    div()
                        .text_style_spec(&helper_style)
                        .text_color(style.helper_color)
                        .child(helper_text),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_priority() {
        let theme = Theme::DEFAULT;
        let resolve = |state| {
            FieldStyle::resolve(FieldVariant::Outlined, ColorKind::Secondary, state, &theme)
                .border_color
        };

        assert_eq!(resolve(FieldState::default()), theme.colors.text.secondary);
        assert_eq!(
            resolve(FieldState {
                open: true,
                ..Default::default()
            }),
            theme.colors.secondary
        );
        assert_eq!(
            resolve(FieldState {
                open: true,
                error: true,
                ..Default::default()
            }),
            theme.colors.error
        );
        assert_eq!(
            resolve(FieldState {
                disabled: true,
                error: true,
                ..Default::default()
            }),
            theme.colors.text.disabled
        );
    }

    #[test]
    fn test_variants() {
        let theme = Theme::DEFAULT;
        let state = FieldState::default();

        let filled = FieldStyle::resolve(FieldVariant::Filled, ColorKind::Primary, state, &theme);
        assert_eq!(filled.border_width, px(0.));
        assert!(filled.background.a > 0. && filled.background.a < 0.1);

        let standard = FieldStyle::resolve(FieldVariant::Standard, ColorKind::Primary, state, &theme);
        assert!(standard.underline);
        assert_eq!(standard.padding_x, px(0.));
        assert_eq!(standard.corner_radius, px(0.));

        let disabled = FieldStyle::resolve(
            FieldVariant::Outlined,
            ColorKind::Primary,
            FieldState {
                disabled: true,
                ..state
            },
            &theme,
        );
        assert_eq!(disabled.background, theme.colors.light);
    }

    #[test]
    fn test_placeholder_text_is_secondary() {
        let theme = Theme::DEFAULT;

        let empty = FieldStyle::resolve(FieldVariant::Outlined, ColorKind::Primary, FieldState::default(), &theme);
        assert_eq!(empty.text_color, theme.colors.text.secondary);

        let filled = FieldStyle::resolve(
            FieldVariant::Outlined,
            ColorKind::Primary,
            FieldState {
                has_value: true,
                ..Default::default()
            },
            &theme,
        );
        assert_eq!(filled.text_color, theme.colors.text.primary);
    }
}
