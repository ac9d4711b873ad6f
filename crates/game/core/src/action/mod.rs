//! Player actions.
//!
//! The catalogue is small and closed: every party action is an
//! [`ActionKind`] variant, dispatched on the actor's [`Role`](crate::state::Role).
//!
//! # Module Structure
//!
//! - `available`: legal-action construction (MP gating, target lists)
//! - `resolve`: applying a chosen action to the encounter state

mod available;
mod resolve;

pub use available::legal_actions;
pub(crate) use resolve::resolve;

use std::fmt;

use crate::state::{ItemKind, SkillId, UnitRef};

/// Every action a party member can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Physical attack on one enemy. Available to every role.
    Attack,
    /// Guardian: party-wide attack buff.
    Encourage,
    /// Guardian: raise guard until the enemy phase ends.
    Cover,
    /// Caster or restorer skill.
    Cast(SkillId),
    /// Caster: restore own MP.
    Meditate,
    /// Restorer: party-wide regeneration.
    Prayer,
    /// Consume one item from the shared stock.
    UseItem(ItemKind),
}

impl ActionKind {
    pub const ENCOURAGE_COST: u32 = 15;
    pub const COVER_COST: u32 = 10;
    pub const MEDITATE_RESTORE: u32 = 30;

    /// Buff duration for recipients other than the actor.
    pub const ENCOURAGE_TURNS: u32 = 2;
    /// Regen duration for recipients other than the actor.
    pub const PRAYER_TURNS: u32 = 3;

    /// Share of max HP restored by spell and item revival.
    pub const REVIVE_RATIO: f64 = 0.5;
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Attack => f.write_str("attack"),
            ActionKind::Encourage => f.write_str("encourage"),
            ActionKind::Cover => f.write_str("cover"),
            ActionKind::Cast(skill) => write!(f, "cast {skill}"),
            ActionKind::Meditate => f.write_str("meditate"),
            ActionKind::Prayer => f.write_str("prayer"),
            ActionKind::UseItem(item) => write!(f, "use {item}"),
        }
    }
}

/// Units an offered action may be aimed at.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetSet {
    /// The actor acts on itself; no target is chosen.
    Myself,
    /// Exactly one of these units must be chosen.
    Choose(Vec<UnitRef>),
    /// Every listed unit is affected; no target is chosen.
    All(Vec<UnitRef>),
}

impl TargetSet {
    /// Whether a decision naming `target` fits this set.
    pub fn accepts(&self, target: Option<UnitRef>) -> bool {
        match (self, target) {
            (TargetSet::Choose(units), Some(unit)) => units.contains(&unit),
            (TargetSet::Myself | TargetSet::All(_), None) => true,
            _ => false,
        }
    }

    /// The first target a decision could name, if one must be named.
    pub fn first(&self) -> Option<UnitRef> {
        match self {
            TargetSet::Choose(units) => units.first().copied(),
            TargetSet::Myself | TargetSet::All(_) => None,
        }
    }
}

/// An action offered to the decision provider together with its targets.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegalAction {
    pub action: ActionKind,
    pub targets: TargetSet,
    /// MP the actor will spend (0 for sacrifice resurrection).
    pub mp_cost: u32,
    /// Resurrection the actor cannot afford: resolving it costs the actor's life.
    pub sacrifice: bool,
}

impl LegalAction {
    pub(crate) fn new(action: ActionKind, targets: TargetSet, mp_cost: u32) -> Self {
        Self {
            action,
            targets,
            mp_cost,
            sacrifice: false,
        }
    }

    /// Decision taking this action at its first target.
    pub fn first_decision(&self) -> Decision {
        Decision {
            action: self.action,
            target: self.targets.first(),
        }
    }
}

/// A decision returned by the decision provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub action: ActionKind,
    /// Chosen unit for [`TargetSet::Choose`] actions, `None` otherwise.
    pub target: Option<UnitRef>,
}

impl Decision {
    pub fn targeted(action: ActionKind, target: UnitRef) -> Self {
        Self {
            action,
            target: Some(target),
        }
    }

    pub fn untargeted(action: ActionKind) -> Self {
        Self {
            action,
            target: None,
        }
    }
}
