//! Key event types consumed by the autocomplete controller.
//!
//! Hosts translate their platform key events into [`KeyPressEvent`]s and
//! feed them to [`AutoCompleter::handle_key_event`] before their own key
//! handling; the controller reports back whether it consumed the event.
//!
//! [`AutoCompleter::handle_key_event`]: crate::completer::AutoCompleter::handle_key_event

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// The keys the autocomplete controller distinguishes.
///
/// Everything else arrives as [`Key::Character`] (printable input the host
/// editor will insert itself) or [`Key::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// The space bar. Ctrl+Space opens the popup.
    Space,
    /// Escape cancels the popup.
    Escape,
    /// Enter commits the selected candidate.
    Enter,
    /// Keypad Enter, treated like [`Key::Enter`].
    NumpadEnter,
    /// Moves the selection up.
    ArrowUp,
    /// Moves the selection down.
    ArrowDown,
    /// Tab key.
    Tab,
    /// Backspace key.
    Backspace,
    /// A printable character key.
    Character(char),
    /// A key the host could not classify.
    Unknown,
}

/// Key press event, sent when a key is pressed.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// The text input from this key press (if any).
    ///
    /// For printable keys, this contains the character that would be typed.
    /// For non-printable keys (modifiers, function keys, etc.), this is empty.
    pub text: String,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers, text: impl Into<String>) -> Self {
        Self {
            key,
            modifiers,
            text: text.into(),
        }
    }

    /// A key press with no modifiers and no text.
    pub fn plain(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_queries() {
        assert!(KeyboardModifiers::NONE.none());
        assert!(KeyboardModifiers::CTRL.any());
        assert!(!KeyboardModifiers::CTRL.none());
    }

    #[test]
    fn test_plain_event_has_no_text() {
        let event = KeyPressEvent::plain(Key::Escape);
        assert_eq!(event.key, Key::Escape);
        assert!(event.text.is_empty());
        assert!(event.modifiers.none());
    }
}
