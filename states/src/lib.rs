//! Reactive state context used by the roster application.
//!
//! - [`State`]: plain values, mutated by the UI.
//! - [`Compute`]: values derived from states/computes, re-evaluated when marked dirty.
//! - [`Command`]: manual-only async side effects that report back through an [`Updater`].
//! - [`StateCtx`]: owns all of the above and drives them once per frame.

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod graph;
mod snapshot;
mod state;
mod state_sync_status;
mod task;
mod updater;

pub use command::{Command, CommandFuture};
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use graph::{DepRoute, Graph, TopologyError};
pub use snapshot::CommandSnapshot;
pub use state::{State, state_assign_impl};
pub use state_sync_status::StateSyncStatus;
pub use task::{TaskHandle, TaskId};
pub use updater::{UpdateMessage, Updater};

pub use tokio_util::sync::CancellationToken;
