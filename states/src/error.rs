use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("State not found: {name}")]
    StateNotFound { name: &'static str },
    #[error("Compute not found: {name}")]
    ComputeNotFound { name: &'static str },
    #[error("Command not registered: {name}")]
    CommandNotFound { name: &'static str },
}

impl Error {
    pub fn state_not_found<T>() -> Self {
        Self::StateNotFound {
            name: std::any::type_name::<T>(),
        }
    }

    pub fn compute_not_found<T>() -> Self {
        Self::ComputeNotFound {
            name: std::any::type_name::<T>(),
        }
    }

    pub fn command_not_found<T>() -> Self {
        Self::CommandNotFound {
            name: std::any::type_name::<T>(),
        }
    }
}
