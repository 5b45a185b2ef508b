use gpui::SharedString;

/// A single choice in an [`OptionSet`].
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption<T> {
    /// Text shown for the option.
    pub label: SharedString,
    /// The value reported when the option is chosen.
    pub value: T,
    /// Disabled options are shown but cannot be chosen.
    pub disabled: bool,
}

impl<T> SelectOption<T> {
    /// Creates an enabled option.
    pub fn new(label: impl Into<SharedString>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
            disabled: false,
        }
    }

    /// Sets whether the option can be chosen.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl<T, L: Into<SharedString>> From<(L, T)> for SelectOption<T> {
    fn from((label, value): (L, T)) -> Self {
        Self::new(label, value)
    }
}

/// An ordered list of options.
///
/// Values are expected to be unique. This is not enforced: lookups return
/// the first option with a matching value, and [`OptionSet::duplicate_values`]
/// lists every value that appears more than once.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionSet<T> {
    options: Vec<SelectOption<T>>,
}

impl<T> Default for OptionSet<T> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
        }
    }
}

impl<T: PartialEq> OptionSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an option.
    pub fn push(&mut self, option: impl Into<SelectOption<T>>) {
        self.options.push(option.into());
    }

    /// Appends an option, builder style.
    pub fn option(mut self, option: impl Into<SelectOption<T>>) -> Self {
        self.push(option);
        self
    }

    /// The number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true when there are no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterates the options in order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectOption<T>> {
        self.options.iter()
    }

    /// The option at `index`.
    pub fn get(&self, index: usize) -> Option<&SelectOption<T>> {
        self.options.get(index)
    }

    /// Index of the first option holding `value`.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.options.iter().position(|option| &option.value == value)
    }

    /// The first option holding `value`.
    pub fn find(&self, value: &T) -> Option<&SelectOption<T>> {
        self.options.iter().find(|option| &option.value == value)
    }

    /// Label of the first option holding `value`.
    pub fn label_for(&self, value: &T) -> Option<SharedString> {
        self.find(value).map(|option| option.label.clone())
    }

    /// Every value that is held by more than one option, in first-seen order.
    pub fn duplicate_values(&self) -> Vec<&T> {
        let mut duplicates: Vec<&T> = Vec::new();

        for (index, option) in self.options.iter().enumerate() {
            let seen_before = self.options[..index]
                .iter()
                .any(|earlier| earlier.value == option.value);

            if seen_before && !duplicates.contains(&&option.value) {
                duplicates.push(&option.value);
            }
        }

        duplicates
    }

    /// Returns true when some value is held by more than one option.
    pub fn has_duplicates(&self) -> bool {
        !self.duplicate_values().is_empty()
    }

    /// Finds the next enabled option after `from`, wrapping around.
    ///
    /// With no starting point the first enabled option is returned (or the
    /// last one when moving backwards). Returns `None` when every option is
    /// disabled.
    pub fn next_enabled(&self, from: Option<usize>, forward: bool) -> Option<usize> {
        let len = self.options.len();
        if len == 0 {
            return None;
        }

        let start = match (from, forward) {
            (Some(index), true) => (index + 1) % len,
            (Some(index), false) => (index + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };

        (0..len)
            .map(|offset| {
                if forward {
                    (start + offset) % len
                } else {
                    (start + len - offset) % len
                }
            })
            .find(|index| !self.options[*index].disabled)
    }
}

impl<T: PartialEq, O: Into<SelectOption<T>>> FromIterator<O> for OptionSet<T> {
    fn from_iter<I: IntoIterator<Item = O>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> OptionSet<&'static str> {
        OptionSet::from_iter([
            ("Option 1", "option1"),
            ("Option 2", "option2"),
            ("Option 3", "option3"),
            ("Option 4", "option4"),
        ])
    }

    #[test]
    fn test_lookup_by_value() {
        let options = numbered();
        assert_eq!(options.len(), 4);
        assert_eq!(options.position(&"option3"), Some(2));
        assert_eq!(options.label_for(&"option4"), Some("Option 4".into()));
        assert!(options.find(&"missing").is_none());
    }

    #[test]
    fn test_duplicate_values_are_flagged() {
        let options = numbered()
            .option(("Again 2", "option2"))
            .option(("Again 2, twice", "option2"))
            .option(("Again 4", "option4"));

        assert!(options.has_duplicates());
        assert_eq!(options.duplicate_values(), vec![&"option2", &"option4"]);
        assert!(!numbered().has_duplicates());
    }

    #[test]
    fn test_next_enabled_skips_disabled_and_wraps() {
        let options = OptionSet::new()
            .option(("a", 1))
            .option(SelectOption::new("b", 2).disabled(true))
            .option(("c", 3));

        assert_eq!(options.next_enabled(None, true), Some(0));
        assert_eq!(options.next_enabled(Some(0), true), Some(2));
        assert_eq!(options.next_enabled(Some(2), true), Some(0));
        assert_eq!(options.next_enabled(None, false), Some(2));
        assert_eq!(options.next_enabled(Some(2), false), Some(0));
        assert_eq!(options.next_enabled(Some(0), false), Some(2));
    }

    #[test]
    fn test_next_enabled_with_nothing_enabled() {
        let options = OptionSet::new().option(SelectOption::new("only", 1).disabled(true));
        assert_eq!(options.next_enabled(None, true), None);
        assert_eq!(OptionSet::<i32>::new().next_enabled(Some(0), true), None);
    }
}
