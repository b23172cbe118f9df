//! Headless demo driving the autocomplete controller without a GUI host.
//!
//! Run with: cargo run -p caret-complete --example headless
//!
//! Simulates the host frame loop against the rope-backed reference editor:
//! opens the popup with Ctrl+Space, types a few characters, navigates, and
//! commits, printing the buffer and the recorded display list along the way.
//! Enable `RUST_LOG=caret_complete=debug` to see the filter recompute events.

use caret_complete::{
    AutoCompleter, Key, KeyPressEvent, KeyboardModifiers, LanguageDefinition, Point,
    RecordingPainter, RopeEditor, TextEditorHost,
};
use tracing_subscriber::EnvFilter;

fn frame(completer: &mut AutoCompleter, editor: &RopeEditor, label: &str) {
    let mut painter = RecordingPainter::new();
    completer.render(editor, &mut painter, Point::ZERO);
    println!("-- {label}");
    println!("   buffer: {:?}", editor.text());
    println!(
        "   search key: {:?}, candidates: {:?}",
        completer.last_search_key(),
        painter.texts()
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let language = LanguageDefinition::new("demo")
        .with_keywords(["for", "while", "return"])
        .with_identifier("format", "fn format(text)")
        .with_identifier("foreach", "fn foreach(items)");

    let mut editor = RopeEditor::with_text("fn main() {\n    fo").with_language(language);
    editor.set_cursor_position(1, 6);

    let mut completer = AutoCompleter::new();
    completer.initialize(&editor);
    completer.activated.connect(|candidate| {
        println!("   activated: {candidate}");
    });
    completer.highlighted.connect(|candidate| {
        println!("   highlighted: {candidate}");
    });

    // Ctrl+Space opens the popup
    let open = KeyPressEvent::new(Key::Space, KeyboardModifiers::CTRL, "");
    assert!(completer.handle_key_event(&mut editor, &open));
    frame(&mut completer, &editor, "after Ctrl+Space");

    // Typing flows through to the editor; the popup refilters next frame
    let typed = KeyPressEvent::new(Key::Character('r'), KeyboardModifiers::NONE, "r");
    if !completer.handle_key_event(&mut editor, &typed) {
        editor.insert_text("r");
    }
    frame(&mut completer, &editor, "after typing 'r'");

    // Walk the selection down one row, then commit it
    completer.handle_key_event(&mut editor, &KeyPressEvent::plain(Key::ArrowDown));
    completer.handle_key_event(&mut editor, &KeyPressEvent::plain(Key::Enter));
    frame(&mut completer, &editor, "after Enter");

    println!("final buffer:\n{}", editor.text());
}
