use roster_states::{State, state_assign_impl};
use serde::Deserialize;
use std::any::Any;

use log::{info, warn};

/// Endpoint used when nothing else is configured.
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Environment overrides, read with `serde-env`.
///
/// `ROSTER_USERS_URL` replaces the user-list endpoint.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    roster_users_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    users_url: String,
}

impl BusinessConfig {
    pub fn new(users_url: impl Into<String>) -> Self {
        Self {
            users_url: users_url.into(),
        }
    }

    /// Reads overrides from the process environment.
    ///
    /// On wasm32 there is no environment, so this is always the default endpoint.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<S: AsRef<str>>(vars: impl IntoIterator<Item = (S, S)>) -> Self {
        let raw: RawConfig = match serde_env::from_iter(vars) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Ignoring malformed environment config: {err}");
                RawConfig::default()
            }
        };

        match raw.roster_users_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                info!("Using ROSTER_USERS_URL: {url}");
                Self::new(url)
            }
            None => Self::new(DEFAULT_USERS_URL),
        }
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl State for BusinessConfig {
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
