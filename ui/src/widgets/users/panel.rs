//! The users panel: heading, search box, status line, table and pagination.

use egui::{Response, RichText, Ui};
use roster_business::{UsersFetchCompute, UsersPage, UsersQueryState, UsersViewCompute};
use roster_states::StateCtx;

use super::pagination::{PageAction, pagination};
use super::search::search_box;
use super::table::users_table;
use crate::utils::colors::COLOR_RED;

/// Displays the users panel.
///
/// Reads the loader result and the derived page from `state_ctx`; search, sort and
/// pagination input is written back into [`UsersQueryState`].
pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("User List");
        ui.add_space(8.0);

        let query = state_ctx.state::<UsersQueryState>().query.clone();
        if let Some(query) = search_box(ui, &query) {
            state_ctx.update::<UsersQueryState>(|state| state.set_query(query));
        }
        ui.add_space(8.0);

        let (is_loading, error, fetched_at) = match state_ctx.cached::<UsersFetchCompute>() {
            Some(fetch) => (
                fetch.is_loading(),
                fetch.error_message().map(str::to_owned),
                fetch.fetched_at(),
            ),
            None => (false, None, None),
        };

        if is_loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading users...");
            });
        }

        if let Some(error) = error {
            ui.label(RichText::new(error).color(COLOR_RED));
        }

        let page = state_ctx
            .cached::<UsersViewCompute>()
            .map(|view| view.page.clone())
            .unwrap_or_default();

        if fetched_at.is_some() {
            ui.label(summary_line(&page));
        }

        let sort = state_ctx.state::<UsersQueryState>().sort;
        if let Some(field) = users_table(ui, &page.rows, sort) {
            state_ctx.update::<UsersQueryState>(|state| state.click_sort(field));
        }

        ui.add_space(8.0);
        if let Some(action) = pagination(ui, &page) {
            state_ctx.update::<UsersQueryState>(|state| match action {
                PageAction::Previous => state.previous_page(page.page),
                PageAction::Next => state.next_page(page.page, page.total_pages),
                PageAction::Go(number) => state.go_to_page(number, page.total_pages),
            });
        }

        if let Some(fetched_at) = fetched_at {
            ui.add_space(4.0);
            ui.weak(format!(
                "Loaded at {}",
                fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
    })
    .response
}

/// `"{n} users match, page {p} of {t}"`; an empty result still reports page 1 of 1.
pub fn summary_line(page: &UsersPage) -> String {
    let noun = if page.total_matches == 1 { "user" } else { "users" };
    format!(
        "{} {noun} match, page {} of {}",
        page.total_matches,
        page.page,
        page.total_pages.max(1)
    )
}
