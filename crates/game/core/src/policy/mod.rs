//! Enemy behavior policy.
//!
//! Each living hostile acts once per enemy phase. One uniform roll picks the
//! intent through a weighted behavior tree; [`resolve`] then carries the
//! intent out against the encounter state.
//!
//! | roll          | intent                       |
//! |---------------|------------------------------|
//! | `[0.0, 0.2)`  | [`EnemyIntent::SelfHeal`]    |
//! | `[0.2, 0.5)`  | [`EnemyIntent::Sweep`]       |
//! | `[0.5, 1.0)`  | [`EnemyIntent::Strike`]      |

mod resolve;
pub mod split;

pub use resolve::{AREA_BASE, AREA_FLOOR, AREA_SPREAD, GUARD_RATIO, resolve};
pub use split::{complete_split, is_split_due, mark_splits};

use behavior_tree::builder::{action, weighted};
use behavior_tree::{Behavior, Status};

/// What an enemy decided to do this phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyIntent {
    /// Heal itself with the single-target heal profile.
    SelfHeal,
    /// Hit every living party member.
    Sweep,
    /// Hit one living party member chosen at random.
    Strike,
}

/// Blackboard the policy tree reads and writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blackboard {
    /// Pre-drawn uniform roll in `[0, 1)`.
    pub roll: f64,
    pub intent: Option<EnemyIntent>,
}

fn choose(intent: EnemyIntent) -> Box<dyn Behavior<Blackboard>> {
    action(move |bb: &mut Blackboard| {
        bb.intent = Some(intent);
        Status::Success
    })
}

/// Roll-driven intent selection.
///
/// The scheduler only consults the policy while a party member is alive, so
/// every intent has a target.
pub struct EnemyPolicy {
    tree: Box<dyn Behavior<Blackboard>>,
}

impl EnemyPolicy {
    pub const SELF_HEAL_WEIGHT: f64 = 0.20;
    pub const SWEEP_WEIGHT: f64 = 0.30;
    pub const STRIKE_WEIGHT: f64 = 0.50;

    /// The stock hostile policy.
    pub fn standard() -> Self {
        Self {
            tree: weighted(
                |bb: &Blackboard| bb.roll,
                vec![
                    (choose(EnemyIntent::SelfHeal), Self::SELF_HEAL_WEIGHT),
                    (choose(EnemyIntent::Sweep), Self::SWEEP_WEIGHT),
                    (choose(EnemyIntent::Strike), Self::STRIKE_WEIGHT),
                ],
            ),
        }
    }

    /// Maps a uniform roll to an intent.
    pub fn choose(&self, roll: f64) -> EnemyIntent {
        let mut bb = Blackboard { roll, intent: None };
        self.tree.tick(&mut bb);
        bb.intent.unwrap_or(EnemyIntent::Strike)
    }
}

impl Default for EnemyPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for EnemyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnemyPolicy").finish_non_exhaustive()
    }
}
