//! Integration tests for the commit operation, keyboard and mouse paths.

use caret_complete::{
    AutoCompleter, Key, KeyPressEvent, KeyboardModifiers, LanguageDefinition, Point,
    RecordingPainter, RopeEditor, TextEditorHost, TextPosition,
};

fn demo_language() -> LanguageDefinition {
    LanguageDefinition::new("demo")
        .with_identifier("for", "")
        .with_identifier("format", "")
        .with_identifier("foo", "")
}

fn editor_with(text: &str, line: usize, column: usize) -> RopeEditor {
    let mut editor = RopeEditor::with_text(text).with_language(demo_language());
    editor.set_cursor_position(line, column);
    editor
}

fn opened(editor: &mut RopeEditor) -> AutoCompleter {
    let mut completer = AutoCompleter::new();
    completer.initialize(editor);
    let open = KeyPressEvent::new(Key::Space, KeyboardModifiers::CTRL, "");
    assert!(completer.handle_key_event(editor, &open));
    completer
}

fn render(completer: &mut AutoCompleter, editor: &RopeEditor) {
    let mut painter = RecordingPainter::new();
    completer.render(editor, &mut painter, Point::ZERO);
}

#[test]
fn enter_replaces_the_base_word() {
    let mut editor = editor_with("let x = fo", 0, 10);
    let mut completer = opened(&mut editor);
    render(&mut completer, &editor);
    assert_eq!(completer.filtered_candidates(), ["for", "format", "foo"]);

    // Select "format" and commit
    completer.handle_key_event(&mut editor, &KeyPressEvent::plain(Key::ArrowDown));
    assert!(completer.handle_key_event(&mut editor, &KeyPressEvent::plain(Key::Enter)));

    assert_eq!(editor.text(), "let x = format");
    assert_eq!(editor.cursor_position(), TextPosition::new(0, 14));
    assert!(!completer.is_open());
    assert_eq!(completer.selection(), 0);
}

#[test]
fn numpad_enter_commits_like_enter() {
    let mut editor = editor_with("fo", 0, 2);
    let mut completer = opened(&mut editor);
    render(&mut completer, &editor);

    assert!(completer.handle_key_event(&mut editor, &KeyPressEvent::plain(Key::NumpadEnter)));
    assert_eq!(editor.text(), "for");
    assert!(!completer.is_open());
}

#[test]
fn committing_identical_text_leaves_buffer_unchanged() {
    let mut editor = editor_with("foo", 0, 3);
    let mut completer = opened(&mut editor);
    render(&mut completer, &editor);
    assert_eq!(completer.filtered_candidates(), ["foo"]);

    completer.handle_key_event(&mut editor, &KeyPressEvent::plain(Key::Enter));
    assert_eq!(editor.text(), "foo");
    assert_eq!(editor.cursor_position(), TextPosition::new(0, 3));
    assert!(!completer.is_open());
}

#[test]
fn commit_only_touches_the_caret_line() {
    let mut editor = editor_with("first\nuse fo\nlast", 1, 6);
    let mut completer = opened(&mut editor);
    render(&mut completer, &editor);

    completer.handle_key_event(&mut editor, &KeyPressEvent::plain(Key::Enter));
    assert_eq!(editor.text(), "first\nuse for\nlast");
    assert_eq!(editor.cursor_position(), TextPosition::new(1, 7));
}

#[test]
fn commit_with_empty_base_word_inserts_at_caret() {
    let mut editor = editor_with("call(", 0, 5);
    let mut completer = opened(&mut editor);
    render(&mut completer, &editor);
    assert!(completer.filtered_candidates().len() > 3); // everything matches ""

    completer.handle_key_event(&mut editor, &KeyPressEvent::plain(Key::Enter));
    assert_eq!(editor.text(), "call(#include");
}

#[test]
fn enter_on_empty_list_closes_without_editing() {
    let mut editor = editor_with("zzz", 0, 3);
    let mut completer = opened(&mut editor);
    render(&mut completer, &editor);
    assert!(completer.filtered_candidates().is_empty());

    assert!(completer.handle_key_event(&mut editor, &KeyPressEvent::plain(Key::Enter)));
    assert_eq!(editor.text(), "zzz");
    assert!(!completer.is_open());
}

#[test]
fn commit_counts_chars_not_bytes() {
    let language = LanguageDefinition::new("demo").with_identifier("héllo", "");
    let mut editor = RopeEditor::with_text("say hél").with_language(language);
    editor.set_cursor_position(0, 7);
    let mut completer = opened(&mut editor);
    render(&mut completer, &editor);
    assert_eq!(completer.filtered_candidates(), ["héllo"]);

    completer.handle_key_event(&mut editor, &KeyPressEvent::plain(Key::Enter));
    assert_eq!(editor.text(), "say héllo");
}

#[test]
fn clicking_a_row_commits_that_candidate() {
    let mut editor = editor_with("fo", 0, 2);
    let mut completer = opened(&mut editor);
    render(&mut completer, &editor);

    // Click the second row ("format")
    let rect = completer.popup_rect();
    let row_height = completer.style().row_height;
    let click = Point::new(
        rect.left() + 5.0,
        rect.top() + 1.0 + row_height + row_height / 2.0,
    );
    assert!(completer.handle_mouse_press(&mut editor, click));

    assert_eq!(editor.text(), "format");
    assert!(!completer.is_open());
}

#[test]
fn clicking_the_padding_row_commits_nothing() {
    let mut editor = editor_with("fo", 0, 2);
    let mut completer = opened(&mut editor);
    render(&mut completer, &editor);

    // Three candidates, four rows: the last row is padding.
    let rect = completer.popup_rect();
    let row_height = completer.style().row_height;
    let click = Point::new(
        rect.left() + 5.0,
        rect.top() + 1.0 + 3.0 * row_height + row_height / 2.0,
    );
    assert!(completer.handle_mouse_press(&mut editor, click));

    assert_eq!(editor.text(), "fo");
    assert!(completer.is_open());
}

#[test]
fn clicks_outside_the_popup_are_declined() {
    let mut editor = editor_with("fo", 0, 2);
    let mut completer = opened(&mut editor);
    render(&mut completer, &editor);

    let rect = completer.popup_rect();
    let outside = Point::new(rect.right() + 20.0, rect.bottom() + 20.0);
    assert!(!completer.handle_mouse_press(&mut editor, outside));
    assert_eq!(editor.text(), "fo");
    assert!(completer.is_open());
}

#[test]
fn keyboard_and_mouse_commits_are_equivalent() {
    // Keyboard path
    let mut keyboard_editor = editor_with("use fo", 0, 6);
    let mut completer = opened(&mut keyboard_editor);
    render(&mut completer, &keyboard_editor);
    completer.handle_key_event(&mut keyboard_editor, &KeyPressEvent::plain(Key::Enter));

    // Mouse path, first row
    let mut mouse_editor = editor_with("use fo", 0, 6);
    let mut clicker = opened(&mut mouse_editor);
    render(&mut clicker, &mouse_editor);
    let rect = clicker.popup_rect();
    let click = Point::new(rect.left() + 5.0, rect.top() + 2.0);
    assert!(clicker.handle_mouse_press(&mut mouse_editor, click));

    assert_eq!(keyboard_editor.text(), mouse_editor.text());
    assert_eq!(keyboard_editor.text(), "use for");
}
