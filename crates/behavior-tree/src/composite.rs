//! Composite behavior nodes.
//!
//! [`WeightedSelector`] hands control to exactly one child, picked by a roll
//! the caller stored in the context.

use crate::{Behavior, Status};

/// A child behavior paired with its selection weight.
type WeightedOption<C> = (Box<dyn Behavior<C>>, f64);

/// Reads the uniform roll a [`WeightedSelector`] buckets on.
type RollReader<C> = Box<dyn Fn(&C) -> f64 + Send + Sync>;

/// Executes exactly one child chosen by a roll stored in the context.
///
/// # Semantics
///
/// Weights partition `[0, total)` into consecutive buckets in declaration
/// order. The selector reads the roll from the context, runs the child whose
/// bucket contains it, and returns that child's status. Rolls at or beyond the
/// total land in the last bucket.
///
/// The roll is read, never drawn: callers that need reproducible trees store
/// a pre-drawn value in the blackboard before ticking.
///
/// # Example
///
/// ```rust,ignore
/// use behavior_tree::WeightedSelector;
///
/// // 20% / 30% / 50% split over `ctx.roll`
/// let pick = WeightedSelector::new(
///     Box::new(|ctx: &Blackboard| ctx.roll),
///     vec![(heal(), 0.2), (sweep(), 0.3), (strike(), 0.5)],
/// );
/// ```
pub struct WeightedSelector<C> {
    roll: RollReader<C>,
    options: Vec<WeightedOption<C>>,
}

impl<C> WeightedSelector<C> {
    /// Creates a weighted selector over `options`.
    ///
    /// Negative weights are treated as zero.
    ///
    /// # Panics
    ///
    /// Panics if `options` is empty.
    pub fn new(roll: RollReader<C>, options: Vec<WeightedOption<C>>) -> Self {
        assert!(!options.is_empty(), "WeightedSelector needs at least one option");
        Self { roll, options }
    }

    /// Index of the option whose bucket contains `roll`.
    pub fn bucket(&self, roll: f64) -> usize {
        let mut upper = 0.0;
        for (index, (_, weight)) in self.options.iter().enumerate() {
            upper += weight.max(0.0);
            if roll < upper {
                return index;
            }
        }
        self.options.len() - 1
    }
}

impl<C> Behavior<C> for WeightedSelector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        let index = self.bucket((self.roll)(ctx));
        self.options[index].0.tick(ctx)
    }
}
