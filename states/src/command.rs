use std::{any::Any, future::Future, pin::Pin};

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, Updater};

/// Future returned by [`Command::run`].
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A manual-only side effect.
///
/// Commands never run implicitly: they are queued with `StateCtx::dispatch` and started
/// by `StateCtx::flush_commands`. They read a [`CommandSnapshot`] and report back through
/// the [`Updater`], usually into a compute-shaped cache the UI renders from.
pub trait Command: Any {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}
