use std::{rc::Rc, time::Duration};

use gpui::{
    AnyElement, App, AppContext, Bounds, ElementId, Entity, InteractiveElement, IntoElement, MouseButton,
    ParentElement, Pixels, Point, RenderOnce, Rgba, Size, Styled, Window, anchored, canvas, div,
    ease_out_quint, point, prelude::FluentBuilder, px,
};
use gpui_mosaic_primitives::placement::{
    OverlayLayout, OverlayPlacement, OverlayPosition, PlacementConfig,
};
use gpui_transitions::{BoolLerp, Transition, TransitionState};

use crate::{
    ElementIdExt,
    extensions::deferrable::{Deferrable, DeferredConfig},
    utils::RgbaExt,
};

/// How long an overlay takes to appear and disappear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayTiming {
    pub open: Duration,
    pub close: Duration,
}

impl OverlayTiming {
    pub const fn symmetric(duration: Duration) -> Self {
        Self {
            open: duration,
            close: duration,
        }
    }
}

/// Open state, visibility transition and measurements for one overlay.
///
/// Showing or hiding while a transition is running retargets it.
#[derive(Clone)]
pub struct OverlayState {
    open: Entity<bool>,
    pub visible_transition: Transition<BoolLerp<f32>>,
    pub layout: Entity<OverlayLayout>,
}

impl OverlayState {
    pub fn from_window(
        id: &ElementId,
        window: &mut Window,
        cx: &mut App,
        timing: OverlayTiming,
    ) -> Self {
        let open = window.use_keyed_state(id.with_suffix("state:overlay_open"), cx, |_window, _cx| {
            false
        });
        let is_open = *open.read(cx);

        let visible = window.use_keyed_state(
            id.with_suffix("state:overlay_visible"),
            cx,
            |_window, _cx| TransitionState::new(BoolLerp::falsey()),
        );

        let layout = window.use_keyed_state(
            id.with_suffix("state:overlay_layout"),
            cx,
            |_window, _cx| OverlayLayout::new(),
        );

        Self {
            open,
            visible_transition: Transition::new(
                visible,
                if is_open { timing.open } else { timing.close },
            )
            .with_easing(ease_out_quint()),
            layout,
        }
    }

    /// Creates unkeyed state, closed and unmeasured.
    pub fn new(cx: &mut App, timing: OverlayTiming) -> Self {
        Self {
            open: cx.new(|_cx| false),
            visible_transition: Transition::new(
                cx.new(|_cx| TransitionState::new(BoolLerp::falsey())),
                timing.close,
            )
            .with_easing(ease_out_quint()),
            layout: cx.new(|_cx| OverlayLayout::new()),
        }
    }

    pub fn is_open(&self, cx: &App) -> bool {
        *self.open.read(cx)
    }

    /// Opens the overlay. Returns false if it was already open.
    ///
    /// Previous measurements are discarded so the anchor is measured again.
    pub fn show(&self, cx: &mut App) -> bool {
        if self.is_open(cx) {
            return false;
        }

        self.open.update(cx, |open, cx| {
            *open = true;
            cx.notify();
        });
        self.layout.update(cx, |layout, cx| {
            layout.reset();
            cx.notify();
        });
        self.visible_transition.update(cx, |this, cx| {
            *this = true.into();
            cx.notify();
        });

        log::debug!("overlay opened");
        true
    }

    /// Closes the overlay. Returns false if it was already closed.
    pub fn hide(&self, cx: &mut App) -> bool {
        if !self.is_open(cx) {
            return false;
        }

        self.open.update(cx, |open, cx| {
            *open = false;
            cx.notify();
        });
        self.visible_transition.update(cx, |this, cx| {
            *this = false.into();
            cx.notify();
        });

        log::debug!("overlay closed");
        true
    }

    /// Brings the open state in line with a caller-owned `visible` flag.
    pub fn sync(&self, visible: bool, cx: &mut App) -> bool {
        if visible {
            self.show(cx)
        } else {
            self.hide(cx)
        }
    }

    /// Current visibility between 0 (hidden) and 1 (shown).
    pub fn delta(&self, window: &mut Window, cx: &mut App) -> f32 {
        self.visible_transition.evaluate(window, cx).value()
    }

    /// Returns true when the content has been measured since the last show.
    pub fn is_measured(&self, cx: &App) -> bool {
        self.layout.read(cx).is_measured()
    }

    pub fn anchor(&self, cx: &App) -> Option<Bounds<Pixels>> {
        self.layout.read(cx).anchor()
    }

    pub fn resolve(
        &self,
        placement: OverlayPlacement,
        viewport: Size<Pixels>,
        config: &PlacementConfig,
        cx: &App,
    ) -> Option<OverlayPosition> {
        self.layout.read(cx).resolve(placement, viewport, config)
    }

    /// An invisible element that records the bounds of whatever it fills.
    ///
    /// Place it as an absolutely positioned child of the anchor.
    pub fn anchor_probe(&self) -> impl IntoElement {
        let layout = self.layout.clone();

        canvas(
            move |bounds, _window, cx| {
                layout.update(cx, |layout, cx| {
                    if layout.set_anchor(bounds) {
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full()
    }

    /// An invisible element that records the size of the overlay content.
    pub fn content_probe(&self) -> impl IntoElement {
        let layout = self.layout.clone();

        canvas(
            move |bounds, _window, cx| {
                layout.update(cx, |layout, cx| {
                    if layout.set_content_size(bounds.size) {
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full()
    }
}

/// A full-window layer that hosts one overlay surface.
///
/// The layer is made of a backdrop that swallows pointer presses while the
/// overlay is open and the content, absolutely placed at `origin`. Content stays invisible until it
/// has been measured, so a wrong first guess at its size is never seen.
#[derive(IntoElement)]
pub struct OverlayLayer {
    id: ElementId,
    state: OverlayState,
    origin: Point<Pixels>,
    content: Option<AnyElement>,
    scrim: Option<Rgba>,
    on_dismiss: Option<Rc<dyn Fn(&mut Window, &mut App) + 'static>>,
    deferred_config: DeferredConfig,
}

impl OverlayLayer {
    pub fn new(
        id: impl Into<ElementId>,
        state: OverlayState,
        origin: Point<Pixels>,
        content: impl IntoElement,
    ) -> Self {
        Self {
            id: id.into(),
            state,
            origin,
            content: Some(content.into_any_element()),
            scrim: None,
            on_dismiss: None,
            deferred_config: DeferredConfig::default(),
        }
    }

    /// Dims the rest of the window with `scrim` while the overlay is shown.
    pub fn scrim(mut self, scrim: impl Into<Rgba>) -> Self {
        self.scrim = Some(scrim.into());
        self
    }

    /// Called when the backdrop is pressed.
    pub fn on_dismiss(mut self, on_dismiss: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_dismiss = Some(Rc::new(on_dismiss));
        self
    }
}

impl Deferrable for OverlayLayer {
    const DEFAULT_PRIORITY: usize = 1;

    fn deferred_config(&self) -> &DeferredConfig {
        &self.deferred_config
    }

    fn deferred_config_mut(&mut self) -> &mut DeferredConfig {
        &mut self.deferred_config
    }
}

impl RenderOnce for OverlayLayer {
    fn render(mut self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let delta = self.state.delta(window, cx);
        let opacity = if self.state.is_measured(cx) { delta } else { 0. };
        let viewport = window.viewport_size();
        let is_open = self.state.is_open(cx);

        let layer = anchored().position(point(px(0.), px(0.))).child(
            div()
                .w(viewport.width)
                .h(viewport.height)
                .child(
                    div()
                        .id(self.id.with_suffix("backdrop"))
                        .absolute()
                        .top_0()
                        .left_0()
                        .size_full()
                        .when_some(self.scrim, |this, scrim| {
                            this.bg(scrim.alpha(scrim.a * delta))
                        })
                        // A closing overlay lets presses through to the window.
                        .when(is_open, |this| {
                            this.occlude().when_some(self.on_dismiss.clone(), |this, on_dismiss| {
                                this.on_mouse_down(MouseButton::Left, move |_event, window, cx| {
                                    cx.stop_propagation();
                                    on_dismiss(window, cx);
                                })
                            })
                        }),
                )
                .child(
                    div()
                        .id(self.id.with_suffix("content"))
                        .absolute()
                        .left(self.origin.x)
                        .top(self.origin.y)
                        .occlude()
                        .opacity(opacity)
                        .children(self.content.take())
                        .child(self.state.content_probe()),
                ),
        );

        self.apply_deferred(layer)
    }
}
