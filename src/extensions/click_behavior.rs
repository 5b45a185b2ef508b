use gpui::{App, Window};

/// Whether a press handled by a component may travel further.
///
/// Components stop propagation and prevent the default action unless told
/// otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickBehavior {
    pub allow_propagation: bool,
    pub allow_default: bool,
}

impl ClickBehavior {
    pub fn apply(&self, window: &mut Window, cx: &mut App) {
        if !self.allow_default {
            window.prevent_default();
        }
        if !self.allow_propagation {
            cx.stop_propagation();
        }
    }
}

/// Builder methods for components that carry a [`ClickBehavior`].
pub trait ClickBehaviorExt: Sized {
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior;

    /// Lets the press reach handlers on parent elements.
    fn allow_click_propagation(mut self) -> Self {
        self.click_behavior_mut().allow_propagation = true;
        self
    }

    /// Leaves the default action of the press in place.
    fn allow_default_click_behaviour(mut self) -> Self {
        self.click_behavior_mut().allow_default = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pressable(ClickBehavior);

    impl ClickBehaviorExt for Pressable {
        fn click_behavior_mut(&mut self) -> &mut ClickBehavior {
            &mut self.0
        }
    }

    #[test]
    fn test_click_behavior_defaults_to_contained() {
        let behavior = ClickBehavior::default();
        assert!(!behavior.allow_propagation);
        assert!(!behavior.allow_default);
    }

    #[test]
    fn test_click_behavior_builders() {
        let pressable = Pressable(ClickBehavior::default()).allow_click_propagation();
        assert!(pressable.0.allow_propagation);
        assert!(!pressable.0.allow_default);

        let pressable = pressable.allow_default_click_behaviour();
        assert!(pressable.0.allow_default);
    }
}
