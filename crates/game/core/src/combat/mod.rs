//! Combat math.
//!
//! Pure functions computing damage and healing amounts. They read stats,
//! consume draws from a [`RandomSource`](crate::env::RandomSource) and return a
//! number; callers apply the result through the combatant's clamped deltas.
//!
//! # Draw order
//!
//! Each function consumes draws in a fixed order so a replayed sequence always
//! lines up with the same rolls:
//!
//! - `physical_damage`: variance, then critical
//! - `magic_damage`: variance only (spells never crit)
//! - `heal_amount`: variance, then critical
//!
//! Every intermediate is truncated before the next step is applied.

pub mod damage;
pub mod heal;

pub use damage::{
    BUFF_MULTIPLIER, DamageRoll, PHYSICAL_CRIT_CHANCE, PHYSICAL_CRIT_MULTIPLIER, magic_damage,
    magic_multiplier, physical_damage,
};
pub use heal::{HealProfile, heal_amount};
