use std::time::Duration;

use gpui::{
    App, BoxShadow, ClickEvent, CursorStyle, ElementId, InteractiveElement, IntoElement,
    ParentElement, Pixels, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled,
    Window, div, prelude::FluentBuilder, px, rgb,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::Lerp;

use crate::{
    conitional_transition,
    extensions::click_behavior::{ClickBehavior, ClickBehaviorExt},
    primitives::{FocusRing, PressState},
    theme::{ColorKind, SizeKind, Theme, ThemeExt},
    typography::{Typography, TypographyExt, TypographyVariantKind},
    utils::{
        DISABLED_OPACITY, ElementIdExt, PositionalChildren, PositionalParentElement, RgbaExt,
        TextStyleExt,
    },
};

const MIN_WIDTH: f32 = 64.;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the button color.
    #[default]
    Contained,
    /// Transparent with a border in the button color.
    Outlined,
    /// Transparent, label only.
    Text,
}

/// Everything a [`Button`] needs to paint itself.
#[derive(Clone, Debug)]
pub struct ButtonStyle {
    pub background: Rgba,
    pub background_hover: Rgba,
    pub background_pressed: Rgba,
    pub border_color: Option<Rgba>,
    pub text_color: Rgba,
    pub padding_x: Pixels,
    pub padding_y: Pixels,
    pub min_width: Pixels,
    pub corner_radius: Pixels,
    pub font_size: Pixels,
    pub shadow: Option<BoxShadow>,
    pub opacity: f32,
}

impl ButtonStyle {
    pub fn resolve(
        variant: ButtonVariant,
        size: SizeKind,
        color: ColorKind,
        disabled: bool,
        theme: &Theme,
        typography: &Typography,
    ) -> Self {
        let spacing = &theme.spacing;
        let main = color.from_palette(&theme.colors);

        let (padding_y, padding_x, font_size) = match size {
            SizeKind::Small => (spacing.xs, spacing.sm, typography.font_size.xs),
            SizeKind::Medium => (spacing.sm, spacing.md, typography.font_size.sm),
            SizeKind::Large => (spacing.md, spacing.lg, typography.font_size.md),
        };

        let (background, background_hover, background_pressed) = match variant {
            ButtonVariant::Contained => (
                main,
                main.lerp(&theme.colors.dark, 0.12),
                main.lerp(&theme.colors.dark, 0.24),
            ),
            ButtonVariant::Outlined | ButtonVariant::Text => {
                (main.alpha(0.), main.alpha(0.08), main.alpha(0.16))
            }
        };

        Self {
            background,
            background_hover,
            background_pressed,
            border_color: (variant == ButtonVariant::Outlined).then_some(main),
            text_color: match variant {
                ButtonVariant::Contained => rgb(0xFFFFFF),
                ButtonVariant::Outlined | ButtonVariant::Text => main,
            },
            padding_x,
            padding_y,
            min_width: px(MIN_WIDTH),
            corner_radius: theme.border_radius.md,
            font_size,
            shadow: (variant == ButtonVariant::Contained).then(|| theme.shadows.sm.to_box_shadow()),
            opacity: if disabled { DISABLED_OPACITY } else { 1. },
        }
    }
}

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    text: Option<SharedString>,
    variant: ButtonVariant,
    size: SizeKind,
    color: ColorKind,
    full_width: bool,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
    click_behavior: ClickBehavior,
    children: PositionalChildren,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            text: None,
            variant: ButtonVariant::default(),
            size: SizeKind::default(),
            color: ColorKind::default(),
            full_width: false,
            disabled: false,
            on_click: None,
            click_behavior: ClickBehavior::default(),
            children: PositionalChildren::default(),
        }
    }

    pub fn text(mut self, text: impl Into<SharedString>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
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

    /// Stretches the button across its container.
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }
}

impl ClickBehaviorExt for Button {
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior {
        &mut self.click_behavior
    }
}

impl PositionalParentElement for Button {
    fn children_mut(&mut self) -> &mut PositionalChildren {
        &mut self.children
    }
}

impl RenderOnce for Button {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let style = ButtonStyle::resolve(
            self.variant,
            self.size,
            self.color,
            self.disabled,
            cx.get_theme(),
            cx.get_typography(),
        );
        let text_style = cx.get_typography().style(TypographyVariantKind::Button);
        let gap = cx.get_theme().spacing.sm;

        let press = PressState::from_window(&self.id, window, cx);
        press.blur_if_disabled(self.disabled, window);
        let (is_hover, is_click_down) = (press.is_hover(cx), press.is_click_down(cx));
        let is_focus = press.is_focus();

        let bg_transition = conitional_transition!(
            self.id.with_suffix("state:transition:bg_color"),
            window,
            cx,
            Duration::from_millis(250),
            {
                is_focus || is_click_down => style.background_pressed,
                is_hover => style.background_hover,
                _ => style.background
            }
        );

        let opacity_transition = conitional_transition!(
            self.id.with_suffix("state:transition:opacity"),
            window,
            cx,
            Duration::from_millis(365),
            style.opacity
        );

        let corner_radius = style.corner_radius;
        let is_disabled = self.disabled;

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
            .justify_center()
            .gap(gap)
            .min_w(style.min_width)
            .when(self.full_width, |this| this.w_full())
            .px(style.padding_x)
            .py(style.padding_y)
            .rounded(corner_radius)
            .when_some(style.shadow, |this, shadow| this.shadow(vec![shadow]))
            .opacity(*opacity_transition.evaluate(window, cx))
            .child(
                FocusRing::new(self.id.with_suffix("focus_ring"), press.focus_handle.clone())
                    .rounded(corner_radius),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(*bg_transition.evaluate(window, cx))
                    .when_some(style.border_color, |this, border_color| {
                        this.border(px(1.)).border_inside().border_color(border_color)
                    }),
            )
            .children(self.children.left)
            .when_some(self.text, |this, text| {
                this.child(
                    div()
                        .text_style_spec(&text_style)
                        .text_size(style.font_size)
                        .text_color(style.text_color)
                        .text_ellipsis()
                        .child(text_style.transform(&text)),
                )
            })
            .children(self.children.right)
            .when(!is_disabled, |this| {
                let behavior = self.click_behavior;
                let on_click = self.on_click;
                let press_on_click = press.clone();

                press.attach(this).on_click(move |event, window, cx| {
                    behavior.apply(window, cx);
                    press_on_click.end_click(window, cx);

                    if let Some(on_click) = &on_click {
                        on_click(event, window, cx);
                    }
                })
            })
    }
}
