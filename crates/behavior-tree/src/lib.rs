//! Behavior trees for decisions that resolve within a single tick.
//!
//! Built for turn-based opponents: the tree is ticked once per decision and
//! every node answers immediately with [`Status::Success`] or
//! [`Status::Failure`]. There is no running state and no frame time. Nodes
//! never draw random numbers themselves. A [`WeightedSelector`] reads a roll
//! the caller stored in the context, so the tree's choice depends only on
//! that context.
//!
//! [`WeightedSelector`] arranges closure leaves ([`Action`]); [`builder`] has
//! shorthand constructors. The crate has no dependencies.

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod leaf;
pub mod status;

pub use behavior::Behavior;
pub use composite::WeightedSelector;
pub use leaf::Action;
pub use status::Status;
