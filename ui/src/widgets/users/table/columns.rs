//! Column definitions for the users table.

use egui_extras::Column;

pub const NAME_WIDTH: f32 = 180.0;
pub const EMAIL_WIDTH: f32 = 220.0;
pub const PHONE_WIDTH: f32 = 170.0;
pub const COMPANY_WIDTH: f32 = 170.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Column labels, in display order.
pub const HEADERS: [&str; 5] = ["Name", "Email", "Phone", "Company", "Address"];

/// Name, Email, Phone and Company start at a fixed width; Address takes the rest.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::initial(NAME_WIDTH).at_least(80.0).clip(true),
        Column::initial(EMAIL_WIDTH).at_least(80.0).clip(true),
        Column::initial(PHONE_WIDTH).at_least(60.0).clip(true),
        Column::initial(COMPANY_WIDTH).at_least(60.0).clip(true),
        Column::remainder().at_least(100.0).clip(true),
    ]
}
