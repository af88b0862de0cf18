use roster_business::{
    BusinessConfig, FetchUsersCommand, UsersFetchCompute, UsersQueryState, UsersViewCompute,
};
use roster_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::default())
    }
}

impl State {
    /// State pointed at `users_url`, typically a mock server.
    pub fn test(users_url: impl Into<String>) -> Self {
        Self::with_config(BusinessConfig::new(users_url))
    }

    fn with_config(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(config);
        ctx.add_state(UsersQueryState::default());
        ctx.record_compute(UsersFetchCompute::default());
        ctx.record_compute(UsersViewCompute::default());
        ctx.record_command(FetchUsersCommand);

        Self { ctx }
    }
}
