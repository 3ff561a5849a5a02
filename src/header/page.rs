// SPDX-License-Identifier: MPL-2.0
//! Page indicator state.

use std::fmt;

/// Current page and page count, guaranteed to satisfy
/// `1 <= current <= total`.
///
/// Out-of-range input is clamped rather than rejected: during paging
/// transitions callers may briefly report a page that no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicatorState {
    current: i64,
    total: i64,
}

impl PageIndicatorState {
    /// Creates a state, clamping `total` to at least 1 and `current` to `1..=total`.
    #[must_use]
    pub fn new(current: i64, total: i64) -> Self {
        let total = total.max(1);
        Self {
            current: current.clamp(1, total),
            total,
        }
    }

    /// Returns the 1-based current page.
    #[must_use]
    pub fn current(self) -> i64 {
        self.current
    }

    #[must_use]
    pub fn total(self) -> i64 {
        self.total
    }

    /// Whether `(current, total)` had to be adjusted to build this state.
    #[must_use]
    pub fn differs_from(self, current: i64, total: i64) -> bool {
        self.current != current || self.total != total
    }

    /// Indicator text, e.g. `3/10`.
    #[must_use]
    pub fn text(self) -> String {
        self.to_string()
    }
}

impl Default for PageIndicatorState {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for PageIndicatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_current_over_total() {
        assert_eq!(PageIndicatorState::new(3, 10).text(), "3/10");
        assert_eq!(PageIndicatorState::new(1, 1).text(), "1/1");
    }

    #[test]
    fn clamps_page_below_range() {
        let state = PageIndicatorState::new(0, 5);
        assert_eq!(state.text(), "1/5");
        assert!(state.differs_from(0, 5));
    }

    #[test]
    fn negative_values_clamp_to_first_page() {
        assert_eq!(PageIndicatorState::new(-1, 5).text(), "1/5");
        assert_eq!(PageIndicatorState::new(-1, -3).text(), "1/1");
    }

    #[test]
    fn clamps_page_above_range() {
        assert_eq!(PageIndicatorState::new(9, 5).text(), "5/5");
    }

    #[test]
    fn zero_total_becomes_single_page() {
        let state = PageIndicatorState::new(0, 0);
        assert_eq!(state.current(), 1);
        assert_eq!(state.total(), 1);
    }

    #[test]
    fn valid_input_is_kept() {
        let state = PageIndicatorState::new(2, 4);
        assert!(!state.differs_from(2, 4));
        assert_eq!(state, PageIndicatorState::new(2, 4));
    }
}
