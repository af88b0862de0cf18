mod api;
mod fetch_compute;
mod model;
mod pipeline;
mod query;
mod view_compute;

pub use api::{ApiResult, UsersApiError, list_users};
pub use fetch_compute::{FETCH_FAILED_MESSAGE, FetchUsersCommand, UsersFetchCompute, UsersFetchResult};
pub use model::{Address, Company, User};
pub use pipeline::{
    USERS_PER_PAGE, UsersPage, build_page, filter_users, locale_cmp, matches_query, paginate,
    sort_users, total_pages,
};
pub use query::{SortDirection, SortField, SortOrder, UsersQueryState};
pub use view_compute::UsersViewCompute;
