use std::any::{Any, TypeId};

use roster_states::{Compute, ComputeDeps, Dep, Updater, assign_impl};

use crate::users::{UsersFetchCompute, UsersPage, UsersQueryState, build_page};

/// The page the table renders, derived from the loaded list and the query state.
///
/// Re-derived whenever either changes. Until a load succeeds the working set is empty, so
/// the page is empty too.
#[derive(Debug, Clone, Default)]
pub struct UsersViewCompute {
    pub page: UsersPage,
}

impl Compute for UsersViewCompute {
    fn deps(&self) -> ComputeDeps {
        (
            vec![TypeId::of::<UsersQueryState>()],
            vec![TypeId::of::<UsersFetchCompute>()],
        )
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let users = deps
            .compute::<UsersFetchCompute>()
            .and_then(UsersFetchCompute::users)
            .unwrap_or_default();

        let page = match deps.state::<UsersQueryState>() {
            Some(query) => build_page(users, &query.query, query.sort, query.page),
            None => build_page(users, "", Default::default(), 1),
        };

        updater.set(Self { page });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
