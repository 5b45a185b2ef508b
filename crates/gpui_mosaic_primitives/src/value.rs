use thiserror::Error;

/// Which side owns a component's value.
///
/// The authority is decided once, when the value is created, from whether the
/// caller supplied an external value. It never changes afterwards.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueAuthority<T> {
    /// The caller owns the value. The component only proposes changes.
    External(T),
    /// The component owns the value and mutates it on interaction.
    Internal(T),
}

/// Raised when the caller flips between supplying and omitting a value
/// after the component was created.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorityChange {
    /// A value started being supplied to an uncontrolled component.
    #[error("component was created uncontrolled but is now being given a value; keeping local state")]
    BecameControlled,
    /// A controlled component stopped being given a value.
    #[error("component was created controlled but is no longer being given a value; keeping the last value")]
    BecameUncontrolled,
}

/// The current value of an interactive component.
#[derive(Clone, Debug)]
pub struct ComponentValue<T> {
    authority: ValueAuthority<T>,
    conflict_reported: bool,
}

impl<T: Clone + PartialEq> ComponentValue<T> {
    /// Creates a value that is controlled when `external` is `Some`, otherwise
    /// seeded from `default`.
    pub fn new(external: Option<T>, default: impl FnOnce() -> T) -> Self {
        match external {
            Some(value) => Self::controlled(value),
            None => Self::uncontrolled(default()),
        }
    }

    /// Creates a value owned by the caller.
    pub fn controlled(value: T) -> Self {
        Self {
            authority: ValueAuthority::External(value),
            conflict_reported: false,
        }
    }

    /// Creates a value owned by the component.
    pub fn uncontrolled(default: T) -> Self {
        Self {
            authority: ValueAuthority::Internal(default),
            conflict_reported: false,
        }
    }

    /// Returns true when the caller owns the value.
    pub fn is_controlled(&self) -> bool {
        matches!(self.authority, ValueAuthority::External(_))
    }

    /// The value to render with.
    pub fn current(&self) -> &T {
        match &self.authority {
            ValueAuthority::External(value) | ValueAuthority::Internal(value) => value,
        }
    }

    /// Returns the underlying authority.
    pub fn authority(&self) -> &ValueAuthority<T> {
        &self.authority
    }

    /// Applies a proposed value coming from an interaction.
    ///
    /// Controlled values are left untouched. Returns true if local state
    /// changed. Callers emit their change notification either way.
    pub fn apply(&mut self, proposed: &T) -> bool {
        match &mut self.authority {
            ValueAuthority::External(_) => false,
            ValueAuthority::Internal(value) => {
                if value == proposed {
                    return false;
                }
                *value = proposed.clone();
                true
            }
        }
    }

    /// Refreshes the value with whatever the caller supplied this frame.
    ///
    /// Returns `Ok(true)` when a controlled value changed. A change in
    /// whether a value is supplied at all keeps the original authority and is
    /// reported once as an [`AuthorityChange`].
    pub fn sync(&mut self, external: Option<T>) -> Result<bool, AuthorityChange> {
        match (&mut self.authority, external) {
            (ValueAuthority::External(value), Some(next)) => {
                if *value == next {
                    return Ok(false);
                }
                *value = next;
                Ok(true)
            }
            (ValueAuthority::Internal(_), None) => Ok(false),
            (ValueAuthority::External(_), None) => {
                self.report_conflict(AuthorityChange::BecameUncontrolled)
            }
            (ValueAuthority::Internal(_), Some(_)) => {
                self.report_conflict(AuthorityChange::BecameControlled)
            }
        }
    }

    fn report_conflict(&mut self, change: AuthorityChange) -> Result<bool, AuthorityChange> {
        if self.conflict_reported {
            return Ok(false);
        }
        self.conflict_reported = true;
        Err(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authority_decided_at_construction() {
        let value = ComponentValue::new(Some(3), || 0);
        assert!(value.is_controlled());
        assert_eq!(*value.current(), 3);

        let value = ComponentValue::new(None, || 7);
        assert!(!value.is_controlled());
        assert_eq!(*value.current(), 7);
    }

    #[test]
    fn test_default_is_lazy_when_controlled() {
        let value = ComponentValue::new(Some(1), || -> i32 { panic!("default should not run") });
        assert_eq!(*value.current(), 1);
    }

    #[test]
    fn test_controlled_value_is_sticky() {
        let mut value = ComponentValue::controlled("a".to_string());

        for proposed in ["b", "c", "d"] {
            assert!(!value.apply(&proposed.to_string()));
            assert_eq!(value.current(), "a");
        }

        assert_eq!(value.sync(Some("a".to_string())), Ok(false));
        assert_eq!(value.current(), "a");
    }

    #[test]
    fn test_controlled_value_follows_caller() {
        let mut value = ComponentValue::controlled(false);
        assert_eq!(value.sync(Some(true)), Ok(true));
        assert!(*value.current());
        assert_eq!(value.sync(Some(true)), Ok(false));
    }

    #[test]
    fn test_uncontrolled_value_folds_interactions() {
        let interactions = [4, 9, 9, 2, 15];
        let mut value = ComponentValue::uncontrolled(0);

        let mut changes = 0;
        for proposed in interactions {
            if value.apply(&proposed) {
                changes += 1;
            }
        }

        let folded = interactions.iter().fold(0, |_, next| *next);
        assert_eq!(*value.current(), folded);
        assert_eq!(changes, 4, "repeating the current value is not a change");
    }

    #[test]
    fn test_toggle_sequence_folds_over_default() {
        let mut value = ComponentValue::new(None, || true);
        for _ in 0..5 {
            let next = !*value.current();
            value.apply(&next);
        }
        assert!(!*value.current());
    }

    #[test]
    fn test_becoming_uncontrolled_keeps_last_value() {
        let mut value = ComponentValue::controlled(10);
        assert_eq!(value.sync(None), Err(AuthorityChange::BecameUncontrolled));
        assert!(value.is_controlled());
        assert_eq!(*value.current(), 10);

        // Only reported once.
        assert_eq!(value.sync(None), Ok(false));
    }

    #[test]
    fn test_becoming_controlled_keeps_local_state() {
        let mut value = ComponentValue::uncontrolled(1);
        value.apply(&2);

        assert_eq!(value.sync(Some(5)), Err(AuthorityChange::BecameControlled));
        assert!(!value.is_controlled());
        assert_eq!(*value.current(), 2);
        assert_eq!(value.sync(Some(5)), Ok(false));
    }

    #[test]
    fn test_uncontrolled_sync_without_value_is_noop() {
        let mut value = ComponentValue::uncontrolled(Some("option1"));
        assert_eq!(value.sync(None), Ok(false));
        assert_eq!(value.current(), &Some("option1"));
    }
}
