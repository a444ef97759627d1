//! Observable selection state.
//!
//! [`SelectionState`] is the "View Model" of the picker: the fixed option
//! list, the highlighted option and the accumulated search text. The
//! renderer reads it; only the [`crate::App`] state machine mutates it.
//!
//! The highlight is tracked by value, not position. Duplicate options are
//! therefore indistinguishable and navigation from a duplicate continues from
//! its first occurrence.

use crate::filter;

/// Options, highlight and search buffer for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    /// Options in display order.
    options: Vec<String>,
    /// Highlighted option. Empty only when there are no options.
    current: String,
    /// Search text typed so far.
    search: String,
}

impl SelectionState {
    /// Create state highlighting the first option.
    pub fn new(options: Vec<String>) -> Self {
        let current = options.first().cloned().unwrap_or_default();
        Self { options, current, search: String::new() }
    }

    /// Options in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Highlighted option.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Search text typed so far.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Whether `option` is the highlighted one.
    pub fn is_current(&self, option: &str) -> bool {
        self.current == option
    }

    /// Move the highlight up, wrapping from the first option to the last.
    pub fn select_previous(&mut self) {
        let Some(index) = self.position() else {
            return;
        };
        let previous = if index == 0 { self.options.len() - 1 } else { index - 1 };
        self.highlight(previous);
    }

    /// Move the highlight down, wrapping from the last option to the first.
    pub fn select_next(&mut self) {
        let Some(index) = self.position() else {
            return;
        };
        let next = if index + 1 == self.options.len() { 0 } else { index + 1 };
        self.highlight(next);
    }

    /// Append to the search text and re-run the filter.
    ///
    /// Without a match the highlight stays where it was.
    pub fn push_search(&mut self, c: char) {
        self.search.push(c);
        if let Some(found) = filter::search_options(&self.options, &self.search) {
            self.current = found.to_owned();
        }
    }

    /// Remove the last search char. Returns `false` if the search was empty.
    ///
    /// The filter is not re-run, so the highlight keeps whatever the longer
    /// search matched.
    pub fn pop_search(&mut self) -> bool {
        self.search.pop().is_some()
    }

    fn position(&self) -> Option<usize> {
        self.options.iter().position(|option| *option == self.current)
    }

    fn highlight(&mut self, index: usize) {
        if let Some(option) = self.options.get(index) {
            self.current.clone_from(option);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(values: &[&str]) -> SelectionState {
        SelectionState::new(values.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn seeds_first_option() {
        assert_eq!(state(&["x", "y"]).current(), "x");
        assert_eq!(state(&[]).current(), "");
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut s = state(&["a", "b", "c"]);
        s.select_previous();
        assert_eq!(s.current(), "c");
        s.select_next();
        assert_eq!(s.current(), "a");
        s.select_next();
        assert_eq!(s.current(), "b");
    }

    #[test]
    fn navigation_without_options_is_a_no_op() {
        let mut s = state(&[]);
        s.select_next();
        s.select_previous();
        assert_eq!(s.current(), "");
    }

    #[test]
    fn search_moves_highlight_and_sticks_without_match() {
        let mut s = state(&["apple", "banana", "apricot"]);
        s.push_search('n');
        assert_eq!(s.current(), "banana");
        s.push_search('q');
        assert_eq!(s.search(), "nq");
        assert_eq!(s.current(), "banana");
    }

    #[test]
    fn pop_search_does_not_refilter() {
        let mut s = state(&["ab", "ac"]);
        s.push_search('a');
        s.push_search('c');
        assert_eq!(s.current(), "ac");

        assert!(s.pop_search());
        assert_eq!(s.search(), "a");
        assert_eq!(s.current(), "ac");

        assert!(s.pop_search());
        assert!(!s.pop_search());
        assert_eq!(s.search(), "");
    }

    #[test]
    fn duplicates_navigate_from_first_occurrence() {
        let mut s = state(&["a", "dup", "b", "dup"]);
        s.select_next();
        s.select_next();
        s.select_next();
        // Highlight is on the second "dup", but lookups resolve to the first.
        assert_eq!(s.current(), "dup");
        s.select_next();
        assert_eq!(s.current(), "b");
    }
}
