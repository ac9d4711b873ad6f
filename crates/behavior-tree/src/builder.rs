//! Shorthand constructors returning boxed nodes, so trees read as nested
//! calls instead of `Box::new(WeightedSelector::new(...))`.

use crate::{Action, Behavior, Status, WeightedSelector};

/// Creates a weighted selector that buckets on the roll returned by `roll`.
#[inline]
pub fn weighted<C: 'static>(
    roll: impl Fn(&C) -> f64 + Send + Sync + 'static,
    options: Vec<(Box<dyn Behavior<C>>, f64)>,
) -> Box<dyn Behavior<C>> {
    Box::new(WeightedSelector::new(Box::new(roll), options))
}

/// Creates an action leaf from a closure.
#[inline]
pub fn action<C: 'static>(
    run: impl Fn(&mut C) -> Status + Send + Sync + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Action::new(run))
}
