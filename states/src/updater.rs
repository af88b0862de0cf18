use std::any::{Any, TypeId, type_name};

use flume::Sender;
use log::warn;

/// A value posted back to the context, keyed by its concrete type.
pub type UpdateMessage = (TypeId, Box<dyn Any + Send>);

/// Posts new state/compute values back to [`StateCtx`](crate::StateCtx).
///
/// Values are queued and applied by `StateCtx::sync_computes`, so an `Updater` can be
/// moved into async commands and used from any thread.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<UpdateMessage>,
}

impl Updater {
    pub(crate) fn new(send: Sender<UpdateMessage>) -> Self {
        Self { send }
    }

    pub fn set<T: Any + Send>(&self, value: T) {
        if self
            .send
            .send((TypeId::of::<T>(), Box::new(value)))
            .is_err()
        {
            warn!(
                "State context is gone, dropping update for {}",
                type_name::<T>()
            );
        }
    }
}
