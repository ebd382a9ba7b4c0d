use serde::{de::DeserializeOwned, Serialize};

/// A trait which holds the status of an [`Algorithm`](crate::traits::Algorithm) and has to be
/// implemented for own algorithms that need different status information than the ones implemented
/// in this crate.
pub trait Status: Clone + Default + Serialize + DeserializeOwned {
    /// Resets the status to its default state. This is called at the beginning of every
    /// [`Engine::process`](crate::core::Engine::process) run.
    fn reset(&mut self);
    /// Returns the message of the run.
    fn message(&self) -> &str;
    /// Sets the message of the run.
    fn update_message(&mut self, message: &str);
}
