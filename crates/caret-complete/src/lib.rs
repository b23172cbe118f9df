//! Caret-complete - an inline autocomplete popup for code-editor text widgets.
//!
//! This crate provides [`AutoCompleter`], a controller that cooperates with a
//! host editor's per-frame render/input loop:
//!
//! - Builds a candidate vocabulary from the host's language definition
//!   (keywords, identifiers, and a fixed set of directive tokens)
//! - Interprets key events to open (Ctrl+Space), close (Escape), navigate
//!   (arrow keys with wrap-around) and commit (Enter) the popup
//! - Recomputes the prefix-filtered candidate list lazily when the word
//!   under the caret changes
//! - Renders the popup each frame through the host's immediate-mode
//!   drawing calls, anchored one line below the caret
//! - Replaces the base word with the chosen candidate on commit
//!
//! The host editor is reached only through the [`TextEditorHost`] trait and
//! the [`Painter`] trait, so the whole controller runs headless in tests; a
//! rope-backed [`RopeEditor`] reference host and a [`RecordingPainter`] are
//! included for exactly that.
//!
//! # Example
//!
//! ```
//! use caret_complete::{
//!     AutoCompleter, Key, KeyPressEvent, KeyboardModifiers, LanguageDefinition,
//!     Point, RecordingPainter, RopeEditor,
//! };
//!
//! let language = LanguageDefinition::new("demo")
//!     .with_keywords(["for", "while"])
//!     .with_identifier("format", "fn format(text)");
//! let mut editor = RopeEditor::with_text("fo").with_language(language);
//! editor.set_cursor_position(0, 2);
//!
//! let mut completer = AutoCompleter::new();
//! completer.initialize(&editor);
//! completer.activated.connect(|candidate| {
//!     println!("committed {candidate}");
//! });
//!
//! // Ctrl+Space opens the popup; render filters against the caret word
//! completer.handle_key_event(
//!     &mut editor,
//!     &KeyPressEvent::new(Key::Space, KeyboardModifiers::CTRL, ""),
//! );
//! let mut painter = RecordingPainter::new();
//! completer.render(&editor, &mut painter, Point::ZERO);
//!
//! // Enter commits the selected candidate into the buffer
//! // (identifiers precede keywords in the vocabulary, so "format" is first)
//! completer.handle_key_event(&mut editor, &KeyPressEvent::plain(Key::Enter));
//! assert_eq!(editor.text(), "format");
//! ```

pub mod completer;
pub mod editor;
pub mod events;
pub mod geometry;
pub mod paint;
mod popup;
pub mod vocabulary;

pub use caret_complete_core::{ConnectionGuard, ConnectionId, Signal};

pub use completer::{AutoCompleter, autocomplete_base_word, is_character_delimiter};
pub use editor::{
    Identifier, LanguageDefinition, RopeEditor, TextEditorHost, TextPosition, TextRange,
};
pub use events::{Key, KeyPressEvent, KeyboardModifiers};
pub use geometry::{Point, Rect, Size};
pub use paint::{Color, DrawOp, Painter, PopupStyle, RecordingPainter, Stroke};
pub use vocabulary::{CandidateVocabulary, DIRECTIVE_TOKENS};
