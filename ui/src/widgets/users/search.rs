use egui::{TextEdit, Ui};

pub const SEARCH_PLACEHOLDER: &str = "Search by Name, Email, or Company...";

/// Single-line search box. Returns the new text when the user edited it this frame.
pub fn search_box(ui: &mut Ui, query: &str) -> Option<String> {
    let mut text = query.to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut text)
            .hint_text(SEARCH_PLACEHOLDER)
            .desired_width(360.0),
    );

    response.changed().then_some(text)
}
