//! Table components for the users panel.
//!
//! - `columns`: column definitions and widths
//! - `header`: header row with the sortable Name/Email columns
//! - `row`: one row per user

pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use roster_business::{SortField, SortOrder, User};

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Renders the users of the current page. Returns the header the user clicked, if any.
pub fn users_table(ui: &mut Ui, rows: &[User], sort: SortOrder) -> Option<SortField> {
    let mut clicked = None;

    let mut builder = TableBuilder::new(ui)
        .id_salt("users_table")
        .striped(true)
        .resizable(false)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            clicked = render_table_header(&mut header, sort);
        })
        .body(|mut body| {
            for user in rows {
                body.row(ROW_HEIGHT, |mut row| {
                    render_user_row(&mut row, user);
                });
            }
        });

    clicked
}
