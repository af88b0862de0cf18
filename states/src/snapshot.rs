use std::any::{Any, TypeId};
use std::collections::BTreeMap;

/// Cloned states and computes captured when a command is flushed.
///
/// Commands run detached from the UI thread, so they only ever see these copies.
#[derive(Default)]
pub struct CommandSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    pub fn get<T: Any>(&self) -> Option<&T> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl std::fmt::Debug for CommandSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSnapshot")
            .field("entries", &self.inner.len())
            .finish()
    }
}
