pub mod combatant;
pub mod common;
pub mod item;
pub mod party;
pub mod skill;
pub mod turn;

// Re-export combatant types
pub use combatant::{Combatant, CombatantTemplate, HostileTraits, HpChange, Role, Stats};

// Re-export identifiers
pub use common::{EnemyId, UnitRef};

// Re-export item types
pub use item::{Inventory, ItemKind};

// Re-export unit containers
pub use party::{Party, Roster};

// Re-export skill descriptors
pub use skill::{Skill, SkillId, SkillKind, TargetMode};

// Re-export turn state
pub use turn::{Phase, TurnState};
