use std::any::{Any, type_name};

use log::warn;

/// A plain value owned by [`StateCtx`](crate::StateCtx).
///
/// States are mutated directly by the UI (`ctx.update::<T>(..)`) or replaced wholesale
/// through an [`Updater`](crate::Updater). Any compute that lists the state in its
/// dependencies is marked dirty when that happens.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Cloned copy handed to commands through a [`CommandSnapshot`](crate::CommandSnapshot).
    ///
    /// States that no command reads can keep the default.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    /// Replace `self` with a value posted through an `Updater`.
    fn assign_box(&mut self, _new_self: Box<dyn Any + Send>) {
        warn!("{} does not accept updater values", type_name::<Self>());
    }
}

/// Shared body for [`State::assign_box`].
pub fn state_assign_impl<T: State>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => warn!("Updater value is not a {}", type_name::<T>()),
    }
}
