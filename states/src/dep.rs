use std::{
    any::TypeId,
    collections::BTreeMap,
};

use crate::{Compute, State};

/// Read-only view over the context handed to [`Compute::compute`].
///
/// The compute being evaluated is not visible through its own `Dep`.
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, Box<dyn State>>,
    computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeId, Box<dyn State>>,
        computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
    ) -> Self {
        Self { states, computes }
    }

    pub fn state<T: State>(&self) -> Option<&'a T> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
    }

    pub fn compute<T: Compute>(&self) -> Option<&'a T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }
}
