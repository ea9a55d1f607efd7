//! The base of every backend interface.

use hinge_foundation::{Identity, Policy};

/// Implemented by every backend, whatever features it provides.
///
/// Each feature's implementation trait has this as a supertrait, so the
/// aggregate interface of any feature list can start an engine.
pub trait Implementation<P: Policy>: Send + 'static {
    /// Prepares the backend to serve the engine numbered `engine_id`.
    ///
    /// Returns the identity of the engine. Called exactly once, by
    /// [`Engine::load`](crate::Engine::load), before any proxy exists.
    fn initiate_engine(&mut self, engine_id: usize) -> Identity;
}
