//! Search, sort and page inputs for the users table.
//!
//! The UI mutates this through `ctx.update::<UsersQueryState>(..)`, which marks
//! [`UsersViewCompute`](crate::UsersViewCompute) dirty.

use std::any::Any;

use roster_states::{State, state_assign_impl};

use crate::users::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Email,
}

impl SortField {
    pub fn value(self, user: &User) -> &str {
        match self {
            Self::Name => &user.name,
            Self::Email => &user.email,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: select `field` and flip the direction.
    ///
    /// The direction flips even when switching columns, so clicking Email while sorted
    /// by Name ascending yields Email descending.
    pub fn clicked(self, field: SortField) -> Self {
        Self {
            field,
            direction: self.direction.toggled(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersQueryState {
    pub query: String,
    pub sort: SortOrder,
    /// Requested page, 1-based. The view clamps it to the pages that exist.
    pub page: usize,
}

impl Default for UsersQueryState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: SortOrder::default(),
            page: 1,
        }
    }
}

impl UsersQueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn click_sort(&mut self, field: SortField) {
        self.sort = self.sort.clicked(field);
    }

    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Steps back from `current`, the page actually on screen.
    pub fn previous_page(&mut self, current: usize) {
        self.page = current.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, current: usize, total_pages: usize) {
        self.go_to_page(current + 1, total_pages);
    }
}

impl State for UsersQueryState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
