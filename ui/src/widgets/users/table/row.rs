//! Row rendering for the users table.

use egui::{Label, Stroke, Ui};
use egui_extras::TableRow;
use roster_business::User;

/// Renders one user: Name, Email, Phone, Company, Address.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &User) {
    let address = user.address_line();
    let cells = [
        user.name.as_str(),
        user.email.as_str(),
        user.phone.as_str(),
        user.company.name.as_str(),
        address.as_str(),
    ];

    for text in cells {
        row.col(|ui| {
            ui.add(Label::new(text).truncate());
            draw_cell_bottom_border(ui);
        });
    }
}

#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
