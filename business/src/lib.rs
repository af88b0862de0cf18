//! Business layer of the roster viewer: configuration, the user-list loader and the
//! search/sort/paginate pipeline, all expressed as states, computes and commands.

mod config;
pub mod http;
pub mod users;

pub use config::{BusinessConfig, DEFAULT_USERS_URL};
pub use users::{
    FETCH_FAILED_MESSAGE, FetchUsersCommand, SortDirection, SortField, SortOrder,
    USERS_PER_PAGE, User, UsersFetchCompute, UsersFetchResult, UsersPage, UsersQueryState,
    UsersViewCompute,
};
