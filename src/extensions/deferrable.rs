use gpui::{AnyElement, IntoElement, deferred};

/// Whether an overlay is painted after the rest of the window, and in which
/// order relative to other overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeferredConfig {
    pub enabled: bool,
    /// Higher priorities paint later. `None` uses the component default.
    pub priority: Option<usize>,
}

impl Default for DeferredConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            priority: None,
        }
    }
}

/// Components that render floating surfaces above the normal layout flow.
pub trait Deferrable: Sized {
    const DEFAULT_PRIORITY: usize = 0;

    fn deferred_config(&self) -> &DeferredConfig;

    fn deferred_config_mut(&mut self) -> &mut DeferredConfig;

    fn deferred(mut self, enabled: bool) -> Self {
        self.deferred_config_mut().enabled = enabled;
        self
    }

    fn deferred_priority(mut self, priority: usize) -> Self {
        self.deferred_config_mut().priority = Some(priority);
        self
    }

    fn apply_deferred(&self, element: impl IntoElement) -> AnyElement {
        let config = self.deferred_config();

        if config.enabled {
            deferred(element)
                .priority(config.priority.unwrap_or(Self::DEFAULT_PRIORITY))
                .into_any_element()
        } else {
            element.into_any_element()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Floating(DeferredConfig);

    impl Deferrable for Floating {
        const DEFAULT_PRIORITY: usize = 3;

        fn deferred_config(&self) -> &DeferredConfig {
            &self.0
        }

        fn deferred_config_mut(&mut self) -> &mut DeferredConfig {
            &mut self.0
        }
    }

    #[test]
    fn test_deferred_builders() {
        let floating = Floating(DeferredConfig::default()).deferred_priority(7);
        assert_eq!(floating.0.priority, Some(7));
        assert!(floating.0.enabled);

        let floating = floating.deferred(false);
        assert!(!floating.0.enabled);
    }
}
