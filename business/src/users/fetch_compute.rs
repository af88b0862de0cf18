//! Loader for the user list.
//!
//! `UsersFetchCompute` is a compute-shaped cache: its `compute()` does nothing and
//! values only arrive from `FetchUsersCommand` through `Updater::set`. Network IO never
//! runs inside a compute since computes run implicitly on startup and dirty propagation.
//!
//! Setup:
//! - `ctx.record_compute(UsersFetchCompute::default());`
//! - `ctx.record_command(FetchUsersCommand);`
//! - `ctx.dispatch::<FetchUsersCommand>();` once when the panel mounts.

use std::any::Any;

use chrono::{DateTime, Utc};
use log::{error, info, warn};
use roster_states::{
    CancellationToken, Command, CommandFuture, CommandSnapshot, Compute, ComputeDeps, Dep,
    Updater, assign_impl,
};

use crate::BusinessConfig;
use crate::users::{User, list_users};

/// The only error text the UI ever shows for a failed load.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum UsersFetchResult {
    /// Nothing dispatched yet.
    #[default]
    Idle,
    Loading,
    Loaded {
        users: Vec<User>,
        fetched_at: DateTime<Utc>,
    },
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct UsersFetchCompute {
    pub result: UsersFetchResult,
}

impl UsersFetchCompute {
    pub fn new(result: UsersFetchResult) -> Self {
        Self { result }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.result, UsersFetchResult::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.result, UsersFetchResult::Loading)
    }

    /// The working set. `None` until a load succeeds.
    pub fn users(&self) -> Option<&[User]> {
        match &self.result {
            UsersFetchResult::Loaded { users, .. } => Some(users),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.result {
            UsersFetchResult::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        match &self.result {
            UsersFetchResult::Loaded { fetched_at, .. } => Some(*fetched_at),
            _ => None,
        }
    }
}

impl Compute for UsersFetchCompute {
    fn deps(&self) -> ComputeDeps {
        (vec![], vec![])
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Fetches the user list from [`BusinessConfig::users_url`].
///
/// Posts `Loading` when the spawned request starts, then either `Loaded` or
/// `Error(FETCH_FAILED_MESSAGE)`. A cancelled request posts nothing more.
#[derive(Debug, Default)]
pub struct FetchUsersCommand;

impl Command for FetchUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let url = snap
            .get::<BusinessConfig>()
            .map(|config| config.users_url().to_owned());

        // a command that is never spawned leaves the loader idle
        Box::pin(async move {
            let Some(url) = url else {
                error!("FetchUsersCommand: BusinessConfig is not registered");
                updater.set(UsersFetchCompute::new(UsersFetchResult::Error(
                    FETCH_FAILED_MESSAGE.to_owned(),
                )));
                return;
            };

            updater.set(UsersFetchCompute::new(UsersFetchResult::Loading));
            info!("FetchUsersCommand: GET {url}");

            let Some(result) = cancel.run_until_cancelled(list_users(&url)).await else {
                warn!("FetchUsersCommand: cancelled before the response arrived");
                return;
            };

            let next = match result {
                Ok(users) => {
                    info!("FetchUsersCommand: loaded {} users", users.len());
                    UsersFetchResult::Loaded {
                        users,
                        fetched_at: Utc::now(),
                    }
                }
                Err(err) => {
                    error!("FetchUsersCommand: {err}");
                    UsersFetchResult::Error(FETCH_FAILED_MESSAGE.to_owned())
                }
            };
            updater.set(UsersFetchCompute::new(next));
        })
    }
}
