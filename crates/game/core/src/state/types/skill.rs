//! Skill descriptors.
//!
//! Skills are data, not behavior: the combat math interprets [`SkillId`] and
//! [`SkillKind`] to pick multipliers and resolution paths.

use strum::{Display, EnumIter, IntoStaticStr};

/// Identifier of a skill. The lowercase name doubles as the wire id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SkillId {
    Fire,
    Fira,
    Meteor,
    Heal,
    Medica,
    Raise,
}

/// Whether a skill hits one chosen target or every eligible unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetMode {
    Single,
    All,
}

/// Resolution path of a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillKind {
    Attack,
    Heal,
    Resurrect,
}

/// Immutable skill descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub mp_cost: u32,
    pub target_mode: TargetMode,
    pub kind: SkillKind,
}

impl Skill {
    pub fn new(
        id: SkillId,
        name: impl Into<String>,
        mp_cost: u32,
        target_mode: TargetMode,
        kind: SkillKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            mp_cost,
            target_mode,
            kind,
        }
    }

    /// Stock descriptor for a skill id.
    pub fn stock(id: SkillId) -> Self {
        match id {
            SkillId::Fire => Self::new(id, "Fire", 20, TargetMode::Single, SkillKind::Attack),
            SkillId::Fira => Self::new(id, "Fira", 35, TargetMode::All, SkillKind::Attack),
            SkillId::Meteor => Self::new(id, "Meteor", 50, TargetMode::Single, SkillKind::Attack),
            SkillId::Heal => Self::new(id, "Heal", 15, TargetMode::Single, SkillKind::Heal),
            SkillId::Medica => Self::new(id, "Medica", 30, TargetMode::All, SkillKind::Heal),
            SkillId::Raise => Self::new(id, "Raise", 40, TargetMode::Single, SkillKind::Resurrect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn stock_descriptors_match_their_ids() {
        for id in SkillId::iter() {
            assert_eq!(Skill::stock(id).id, id);
        }
    }

    #[test]
    fn wire_ids_are_lowercase() {
        assert_eq!(SkillId::Meteor.to_string(), "meteor");
        let raw: &'static str = SkillId::Fira.into();
        assert_eq!(raw, "fira");
    }
}
