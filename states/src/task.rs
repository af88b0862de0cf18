//! Handles for commands running in the background.
//!
//! Every flushed command gets a [`TaskHandle`]. Dispatching the same command type again
//! cancels the previous handle, and dropping the [`StateCtx`](crate::StateCtx) cancels all
//! of them. Cancellation is cooperative: the command decides when to check its token.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Command type plus a per-context generation counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher values were spawned later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_equality() {
        let type_id = TypeId::of::<String>();

        assert_eq!(TaskId::new(type_id, 1), TaskId::new(type_id, 1));
        assert_ne!(TaskId::new(type_id, 1), TaskId::new(type_id, 2));
        assert_ne!(TaskId::new(type_id, 1), TaskId::new(TypeId::of::<i32>(), 1));
    }

    #[test]
    fn cancelling_a_clone_cancels_the_shared_token() {
        let handle = TaskHandle::new(
            TaskId::new(TypeId::of::<String>(), 1),
            CancellationToken::new(),
        );
        let token = handle.cancellation_token();
        let other = handle.clone();

        assert!(!token.is_cancelled());
        other.cancel();

        assert!(handle.is_cancelled(), "clones share one token");
        assert!(token.is_cancelled(), "handed-out tokens observe cancel");
    }
}
