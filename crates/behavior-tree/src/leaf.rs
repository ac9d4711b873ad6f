//! Leaf behavior nodes built from closures.
//!
//! [`Action`] wraps a plain closure over the blackboard so callers don't need
//! a named type per leaf.

use crate::{Behavior, Status};

/// Runs a closure against the context and returns its status.
pub struct Action<F> {
    run: F,
}

impl<F> Action<F> {
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<C, F> Behavior<C> for Action<F>
where
    F: Fn(&mut C) -> Status + Send + Sync,
{
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (self.run)(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_mutates_context() {
        let double = Action::new(|value: &mut i32| {
            *value *= 2;
            Status::from(*value > 0)
        });

        let mut value = 4;
        assert_eq!(double.tick(&mut value), Status::Success);
        assert_eq!(value, 8);

        value = -1;
        assert_eq!(double.tick(&mut value), Status::Failure);
        assert_eq!(value, -2);
    }
}
