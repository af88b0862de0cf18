//! Table header rendering for the users table.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use roster_business::{SortDirection, SortField, SortOrder};

use super::columns::HEADERS;

/// Shown in front of every sortable column.
pub const SORT_GLYPH: &str = "⬍";

/// Header text for a column; sortable columns carry the glyph, the active one its direction.
pub fn header_label(label: &str, sort: SortOrder) -> String {
    match sortable_field(label) {
        Some(field) if field == sort.field => {
            let arrow = match sort.direction {
                SortDirection::Asc => "▲",
                SortDirection::Desc => "▼",
            };
            format!("{SORT_GLYPH} {label} {arrow}")
        }
        Some(_) => format!("{SORT_GLYPH} {label}"),
        None => label.to_owned(),
    }
}

fn sortable_field(label: &str) -> Option<SortField> {
    [SortField::Name, SortField::Email]
        .into_iter()
        .find(|field| field.label() == label)
}

/// Renders the header row. Returns the sortable column that was clicked, if any.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, sort: SortOrder) -> Option<SortField> {
    let mut clicked = None;

    for label in HEADERS {
        header.col(|ui| {
            if render_header_cell(ui, label, sort) {
                clicked = sortable_field(label);
            }
        });
    }

    clicked
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str, sort: SortOrder) -> bool {
    let text = RichText::new(header_label(label, sort)).strong();

    if sortable_field(label).is_some() {
        ui.add(Button::new(text).frame(false))
            .on_hover_text(format!("Sort by {label}"))
            .clicked()
    } else {
        ui.label(text);
        false
    }
}
