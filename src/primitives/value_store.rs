use std::rc::Rc;

use gpui::{App, ElementId, Entity, Window};
use gpui_mosaic_primitives::value::ComponentValue;

use crate::ElementIdExt;

/// Change callback shared by every interactive component.
pub type OnChange<T> = Rc<dyn Fn(&T, &mut Window, &mut App) + 'static>;

/// Fetches the keyed value cell for `id`, creating it on first render.
///
/// Authority is fixed by whether `external` was supplied the first time.
/// Later renders refresh a controlled value. Flipping between supplying and
/// omitting a value keeps the first authority and logs a warning once.
pub fn use_component_value<T: Clone + PartialEq + 'static>(
    id: &ElementId,
    external: Option<T>,
    default: impl FnOnce() -> T,
    window: &mut Window,
    cx: &mut App,
) -> Entity<ComponentValue<T>> {
    let initial = external.clone();
    let store = window.use_keyed_state(id.with_suffix("state:value"), cx, move |_window, _cx| {
        ComponentValue::new(initial, default)
    });

    store.update(cx, |value, _cx| {
        if let Err(change) = value.sync(external) {
            log::warn!("{id:?}: {change}");
        }
    });

    store
}

/// Routes a proposed value from an interaction.
///
/// Uncontrolled values are updated in place. The change callback runs
/// either way.
pub fn propose_value<T: Clone + PartialEq + 'static>(
    store: &Entity<ComponentValue<T>>,
    proposed: T,
    on_change: Option<&OnChange<T>>,
    window: &mut Window,
    cx: &mut App,
) {
    store.update(cx, |value, cx| {
        if value.apply(&proposed) {
            cx.notify();
        }
    });

    if let Some(on_change) = on_change {
        on_change(&proposed, window, cx);
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, TestAppContext};
    use std::cell::RefCell;

    #[gpui::test]
    fn test_propose_updates_uncontrolled_and_notifies(cx: &mut TestAppContext) {
        let window = cx.add_empty_window();
        let seen = Rc::new(RefCell::new(Vec::new()));

        window.update(|window, cx| {
            let store = cx.new(|_cx| ComponentValue::uncontrolled(1));
            let seen_on_change = seen.clone();
            let on_change: OnChange<i32> =
                Rc::new(move |value: &i32, _window: &mut Window, _cx: &mut App| seen_on_change.borrow_mut().push(*value));

            propose_value(&store, 5, Some(&on_change), window, cx);

            assert_eq!(*store.read(cx).current(), 5);
        });

        assert_eq!(*seen.borrow(), vec![5]);
    }

    #[gpui::test]
    fn test_propose_leaves_controlled_untouched(cx: &mut TestAppContext) {
        let window = cx.add_empty_window();
        let seen = Rc::new(RefCell::new(Vec::new()));

        window.update(|window, cx| {
            let store = cx.new(|_cx| ComponentValue::controlled(1));
            let seen_on_change = seen.clone();
            let on_change: OnChange<i32> =
                Rc::new(move |value: &i32, _window: &mut Window, _cx: &mut App| seen_on_change.borrow_mut().push(*value));

            propose_value(&store, 5, Some(&on_change), window, cx);
            propose_value(&store, 7, None, window, cx);

            assert_eq!(*store.read(cx).current(), 1);
        });

        assert_eq!(*seen.borrow(), vec![5]);
    }
}
