//! Type definitions for the built-in list selector.
//!
//! This module defines the state the selector keeps between redraws and
//! the results it can hand back.

/// What the user did in the list selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListChoice {
    /// Index into the full item list, not the filtered view.
    Index(usize),
    Quit,
}

/// Direction to cycle through items in the selection UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// State for the UI viewport.
///
/// Tracks the visible portion of the list when there are more items than
/// can fit on screen.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

/// Complete UI state for the list selector.
#[derive(Clone, PartialEq, Debug)]
pub struct UiState {
    /// Position of the highlighted row within the filtered view
    pub selected_index: usize,
    /// Viewport state for scrolling
    pub viewport: ViewportState,
    /// Text typed so far to narrow the list
    pub filter_text: String,
}

impl UiState {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            selected_index: 0,
            viewport: ViewportState {
                offset: 0,
                height: height.saturating_sub(2), // Subtract 2 for header and filter line
                width,
            },
            filter_text: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ui_state_reserves_two_rows() {
        let state = UiState::new(80, 24);
        assert_eq!(state.viewport.height, 22);
        assert_eq!(state.viewport.width, 80);
        assert_eq!(state.selected_index, 0);
        assert!(state.filter_text.is_empty());
    }

    #[test]
    fn test_tiny_terminal_does_not_underflow() {
        let state = UiState::new(10, 1);
        assert_eq!(state.viewport.height, 0);
    }

    #[test]
    fn test_ui_state_equality() {
        let first = UiState::new(80, 24);
        let mut second = first.clone();
        assert_eq!(first, second);

        second.filter_text.push('n');
        assert_ne!(first, second);
    }
}
