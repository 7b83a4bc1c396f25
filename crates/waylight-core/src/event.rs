#![forbid(unsafe_code)]

//! Canonical input and viewport events.
//!
//! Hosts translate their native input (terminal, DOM, test harness) into
//! these types before feeding the tour engine. All events derive `Clone`,
//! `PartialEq`, and `Eq` for use in tests and pattern matching.

use bitflags::bitflags;

use crate::geometry::Size;

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a key event with the given modifiers.
    #[must_use]
    pub const fn with_modifiers(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a Ctrl+`c` chord.
    #[must_use]
    pub const fn ctrl(c: char) -> Self {
        Self::with_modifiers(KeyCode::Char(c), Modifiers::CONTROL)
    }

    /// Check whether the control modifier is held.
    #[must_use]
    pub const fn is_ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CONTROL)
    }
}

/// Canonical key codes.
///
/// Only the keys the tour engine reacts to are spelled out; everything
/// else arrives as [`KeyCode::Char`] or [`KeyCode::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
    Escape,
    Left,
    Right,
    Up,
    Down,
    Tab,
    /// A printable character.
    Char(char),
    /// Function key (F1 = 1).
    F(u8),
    /// Any key the engine has no use for.
    Other,
}

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT   = 0b0001;
        const CONTROL = 0b0010;
        const ALT     = 0b0100;
        const SUPER   = 0b1000;
    }
}

/// A viewport change that invalidates spotlight geometry.
///
/// The presentation layer remeasures the highlight region when any of these
/// arrive; see the spotlight controller for how they are consumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// The viewport was resized.
    Resized(Size),
    /// Any scroll, including nested containers (capture-phase on DOM hosts).
    Scrolled,
    /// The UI tree mutated somewhere under the root; the target element may
    /// have moved, changed size, or been replaced.
    SubtreeMutated,
    /// The target element itself was resized.
    TargetResized,
}

#[cfg(all(feature = "crossterm", not(target_arch = "wasm32")))]
mod crossterm_conv {
    use super::{KeyCode, KeyEvent, Modifiers};
    use crossterm::event as cte;

    impl From<cte::KeyEvent> for KeyEvent {
        fn from(ev: cte::KeyEvent) -> Self {
            let code = match ev.code {
                cte::KeyCode::Enter => KeyCode::Enter,
                cte::KeyCode::Esc => KeyCode::Escape,
                cte::KeyCode::Left => KeyCode::Left,
                cte::KeyCode::Right => KeyCode::Right,
                cte::KeyCode::Up => KeyCode::Up,
                cte::KeyCode::Down => KeyCode::Down,
                cte::KeyCode::Tab => KeyCode::Tab,
                cte::KeyCode::Char(c) => KeyCode::Char(c),
                cte::KeyCode::F(n) => KeyCode::F(n),
                _ => KeyCode::Other,
            };

            let mut modifiers = Modifiers::empty();
            if ev.modifiers.contains(cte::KeyModifiers::SHIFT) {
                modifiers |= Modifiers::SHIFT;
            }
            if ev.modifiers.contains(cte::KeyModifiers::CONTROL) {
                modifiers |= Modifiers::CONTROL;
            }
            if ev.modifiers.contains(cte::KeyModifiers::ALT) {
                modifiers |= Modifiers::ALT;
            }
            if ev.modifiers.contains(cte::KeyModifiers::SUPER) {
                modifiers |= Modifiers::SUPER;
            }

            KeyEvent { code, modifiers }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyCode, KeyEvent, Modifiers};

    #[test]
    fn ctrl_chord() {
        let ev = KeyEvent::ctrl('s');
        assert_eq!(ev.code, KeyCode::Char('s'));
        assert!(ev.is_ctrl());
    }

    #[test]
    fn plain_key_has_no_modifiers() {
        let ev = KeyEvent::new(KeyCode::Enter);
        assert_eq!(ev.modifiers, Modifiers::empty());
        assert!(!ev.is_ctrl());
    }

    #[test]
    fn modifier_combination() {
        let m = Modifiers::CONTROL | Modifiers::SHIFT;
        assert!(m.contains(Modifiers::CONTROL));
        assert!(m.contains(Modifiers::SHIFT));
        assert!(!m.contains(Modifiers::ALT));
    }
}
