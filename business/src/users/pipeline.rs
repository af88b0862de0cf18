//! Filter -> sort -> slice over the working set.
//!
//! Everything here is pure; [`UsersViewCompute`](crate::UsersViewCompute) calls
//! [`build_page`] whenever the query state or the loaded list changes.

use std::cmp::Ordering;

use crate::users::{SortDirection, SortField, SortOrder, User};

/// Rows per page.
pub const USERS_PER_PAGE: usize = 5;

/// Case-insensitive substring match on `name + " " + email + " " + company.name`.
/// The empty query matches everyone.
pub fn matches_query(user: &User, query: &str) -> bool {
    user.search_text()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    users
        .iter()
        .filter(|user| matches_query(user, query))
        .collect()
}

/// Locale-style comparison: case-insensitive first, lowercase before uppercase on ties.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Stable sort on the selected field.
pub fn sort_users(users: &mut [&User], sort: SortOrder) {
    let field: SortField = sort.field;
    users.sort_by(|a, b| {
        let ordering = locale_cmp(field.value(a), field.value(b));
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

pub fn total_pages(matches: usize) -> usize {
    matches.div_ceil(USERS_PER_PAGE)
}

/// Rows `[(page - 1) * 5, page * 5)`. Out-of-range pages (including 0) are empty.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let Some(start) = page
        .checked_sub(1)
        .map(|index| index * USERS_PER_PAGE)
        .filter(|start| *start < items.len())
    else {
        return &[];
    };
    let end = (start + USERS_PER_PAGE).min(items.len());
    &items[start..end]
}

/// One rendered page of the users table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersPage {
    pub rows: Vec<User>,
    /// Page actually shown, clamped to `[1, max(total_pages, 1)]`.
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

impl UsersPage {
    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}

pub fn build_page(users: &[User], query: &str, sort: SortOrder, page: usize) -> UsersPage {
    let mut filtered = filter_users(users, query);
    sort_users(&mut filtered, sort);

    let total_pages = total_pages(filtered.len());
    let page = page.clamp(1, total_pages.max(1));
    let rows = paginate(&filtered, page)
        .iter()
        .map(|user| (*user).clone())
        .collect();

    UsersPage {
        rows,
        page,
        total_pages,
        total_matches: filtered.len(),
    }
}
