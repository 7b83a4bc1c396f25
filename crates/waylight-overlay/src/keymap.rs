#![forbid(unsafe_code)]

//! Keyboard navigation for the tooltip.
//!
//! Bindings are live only while the tooltip is visible; when it is hidden
//! every key falls through to the host untouched, so there are no dangling
//! global shortcuts.

use waylight_core::event::{KeyCode, KeyEvent};

/// Navigation intent produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Advance to the next step (or finish on the last).
    Next,
    /// Go back one step.
    Previous,
    /// Close the tooltip (pauses the tour; does not skip it).
    Close,
    /// Skip the entire tour.
    Skip,
}

/// Map a key press to a navigation action.
///
/// - Right arrow / Enter advance
/// - Left arrow goes back, but only past step 0
/// - Escape closes (pause, not skip)
/// - Ctrl+S skips the whole tour
#[must_use]
pub fn navigation_action(key: KeyEvent, visible: bool, step_index: usize) -> Option<NavAction> {
    if !visible {
        return None;
    }
    match key.code {
        KeyCode::Right | KeyCode::Enter => Some(NavAction::Next),
        KeyCode::Left if step_index > 0 => Some(NavAction::Previous),
        KeyCode::Left => None,
        KeyCode::Escape => Some(NavAction::Close),
        KeyCode::Char('s') if key.is_ctrl() => Some(NavAction::Skip),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_enter_navigate() {
        assert_eq!(
            navigation_action(KeyEvent::new(KeyCode::Right), true, 1),
            Some(NavAction::Next)
        );
        assert_eq!(
            navigation_action(KeyEvent::new(KeyCode::Enter), true, 0),
            Some(NavAction::Next)
        );
        assert_eq!(
            navigation_action(KeyEvent::new(KeyCode::Left), true, 2),
            Some(NavAction::Previous)
        );
    }

    #[test]
    fn left_at_first_step_does_nothing() {
        assert_eq!(navigation_action(KeyEvent::new(KeyCode::Left), true, 0), None);
    }

    #[test]
    fn escape_closes_rather_than_skips() {
        assert_eq!(
            navigation_action(KeyEvent::new(KeyCode::Escape), true, 0),
            Some(NavAction::Close)
        );
    }

    #[test]
    fn ctrl_s_skips() {
        assert_eq!(
            navigation_action(KeyEvent::ctrl('s'), true, 0),
            Some(NavAction::Skip)
        );
        // Plain 's' is not a binding.
        assert_eq!(
            navigation_action(KeyEvent::new(KeyCode::Char('s')), true, 0),
            None
        );
    }

    #[test]
    fn hidden_tooltip_binds_nothing() {
        for code in [KeyCode::Right, KeyCode::Enter, KeyCode::Escape, KeyCode::Left] {
            assert_eq!(navigation_action(KeyEvent::new(code), false, 1), None);
        }
        assert_eq!(navigation_action(KeyEvent::ctrl('s'), false, 1), None);
    }
}
