use std::any::{Any, TypeId, type_name};

use log::warn;

use crate::{Dep, Updater};

/// Dependencies of a compute: `(states, computes)`.
pub type ComputeDeps = (Vec<TypeId>, Vec<TypeId>);

/// A derived value.
///
/// `compute` reads its dependencies through [`Dep`] and publishes the new value through
/// the [`Updater`]; it never mutates `self`. Computes may run implicitly (startup, dirty
/// propagation), so they must stay free of side effects. Network IO belongs in a
/// [`Command`](crate::Command) that writes into a compute-shaped cache instead.
pub trait Compute: Any {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    /// Cloned copy handed to commands through a [`CommandSnapshot`](crate::CommandSnapshot).
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared body for [`Compute::assign_box`].
pub fn assign_impl<T: Compute>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => warn!("Updater value is not a {}", type_name::<T>()),
    }
}
