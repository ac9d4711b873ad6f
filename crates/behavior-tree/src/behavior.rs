//! The node trait.
//!
//! Trees are generic over a blackboard type `C`. Nodes read inputs from it and
//! write their decision back into it; they never reach outside the blackboard,
//! which keeps a tree's choice a pure function of what the caller put there.

use crate::Status;

/// A node that can be ticked against a blackboard.
///
/// `Send + Sync` lets a built tree live inside state shared across tasks.
pub trait Behavior<C>: Send + Sync {
    fn tick(&self, ctx: &mut C) -> Status;
}

impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
