//! Fixed questionnaire option lists and the selection set built on them.

use std::collections::HashSet;

pub const INTEREST_OPTIONS: &[&str] = &[
    "technology",
    "creativity",
    "business",
    "healthcare",
    "coding",
    "design",
];

pub const STRENGTH_OPTIONS: &[&str] = &[
    "problem solving",
    "communication",
    "logic",
    "visual thinking",
    "empathy",
    "strategic thinking",
];

/// Option text with its first letter capitalized
pub fn display_label(option: &str) -> String {
    let mut chars = option.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A set of choices drawn from one fixed option list.
///
/// Items outside the list are never stored, and each option appears at most
/// once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    options: &'static [&'static str],
    selected: HashSet<&'static str>,
}

impl SelectionSet {
    pub fn new(options: &'static [&'static str]) -> Self {
        Self {
            options,
            selected: HashSet::new(),
        }
    }

    pub fn interests() -> Self {
        Self::new(INTEREST_OPTIONS)
    }

    pub fn strengths() -> Self {
        Self::new(STRENGTH_OPTIONS)
    }

    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    /// Resolve free text to the canonical option, if it is one
    pub fn lookup(&self, item: &str) -> Option<&'static str> {
        self.options.iter().copied().find(|option| *option == item)
    }

    /// Remove the item if present, add it otherwise.
    ///
    /// Returns false (and changes nothing) when the item is not an option.
    pub fn toggle(&mut self, item: &str) -> bool {
        let Some(option) = self.lookup(item) else {
            return false;
        };

        if self.selected.contains(option) {
            self.selected.remove(option);
        } else {
            self.selected.insert(option);
        }
        true
    }

    pub fn contains(&self, item: &str) -> bool {
        self.selected.contains(item)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Selected options in option-list order
    pub fn to_vec(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|option| self.selected.contains(*option))
            .map(|option| option.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("technology"), "Technology");
        assert_eq!(display_label("problem solving"), "Problem solving");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = SelectionSet::interests();

        assert!(set.toggle("coding"));
        assert!(set.contains("coding"));
        assert_eq!(set.len(), 1);

        assert!(set.toggle("coding"));
        assert!(!set.contains("coding"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_rejects_unknown_item() {
        let mut set = SelectionSet::strengths();
        assert!(!set.toggle("juggling"));
        assert!(!set.toggle("Logic"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_to_vec_follows_option_order() {
        let mut set = SelectionSet::interests();
        set.toggle("design");
        set.toggle("technology");
        set.toggle("business");

        assert_eq!(set.to_vec(), vec!["technology", "business", "design"]);
    }

    proptest! {
        #[test]
        fn prop_double_toggle_is_identity(
            initial in proptest::collection::vec(0..STRENGTH_OPTIONS.len(), 0..6),
            pick in 0..STRENGTH_OPTIONS.len(),
        ) {
            let mut set = SelectionSet::strengths();
            for idx in initial {
                set.toggle(STRENGTH_OPTIONS[idx]);
            }
            let before = set.clone();

            set.toggle(STRENGTH_OPTIONS[pick]);
            set.toggle(STRENGTH_OPTIONS[pick]);

            prop_assert_eq!(set, before);
        }

        #[test]
        fn prop_never_holds_duplicates(
            toggles in proptest::collection::vec(0..INTEREST_OPTIONS.len(), 0..40),
        ) {
            let mut set = SelectionSet::interests();
            for idx in toggles {
                set.toggle(INTEREST_OPTIONS[idx]);
            }
            let items = set.to_vec();
            let unique: HashSet<_> = items.iter().collect();
            prop_assert_eq!(unique.len(), items.len());
            prop_assert!(items.len() <= INTEREST_OPTIONS.len());
        }
    }
}
