//! Node trait.
//!
//! [`Behavior`] is the one abstraction every node implements. It is generic
//! over a blackboard `C` so the same composites drive any entity whose
//! per-frame facts fit in a plain struct.

use crate::Status;

/// A behavior tree node evaluated against a blackboard `C`.
pub trait Behavior<C>: Send + Sync {
    /// Evaluates the node once for the current frame.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The blackboard. Conditions read the frame's facts from it and
    ///   actions write their decision back into it. Composites decide which
    ///   children get the chance to do so.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the node's check held or its action ran
    /// - `Status::Failure` otherwise
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Boxed nodes are nodes too, so composites can hold mixed children.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
