//! Previous, one button per page, Next.

use egui::{Button, Ui};
use roster_business::UsersPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Previous,
    Next,
    Go(usize),
}

/// Renders the pagination bar for `page`. Returns the button clicked this frame.
///
/// Previous is disabled on the first page and Next on the last one. With no matches there
/// are no page buttons and both ends are disabled.
pub fn pagination(ui: &mut Ui, page: &UsersPage) -> Option<PageAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(!page.is_first(), Button::new("Previous"))
            .clicked()
        {
            action = Some(PageAction::Previous);
        }

        for number in 1..=page.total_pages {
            let button = Button::new(number.to_string()).selected(number == page.page);
            if ui.add(button).clicked() {
                action = Some(PageAction::Go(number));
            }
        }

        if ui
            .add_enabled(!page.is_last(), Button::new("Next"))
            .clicked()
        {
            action = Some(PageAction::Next);
        }
    });

    action
}
