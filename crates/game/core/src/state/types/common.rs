use std::fmt;

/// Stable handle to an enemy slot in the roster arena.
///
/// Ids are never reused: a boss that splits keeps its id (and its dead,
/// inert record) while its offspring receive fresh ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyId(pub u32);

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enemy#{}", self.0)
    }
}

/// Reference to any combatant in the encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitRef {
    /// Party member by position in the (fixed) party order.
    Ally(usize),
    /// Enemy by arena id.
    Enemy(EnemyId),
}

impl UnitRef {
    #[inline]
    pub const fn is_ally(self) -> bool {
        matches!(self, Self::Ally(_))
    }

    #[inline]
    pub const fn is_enemy(self) -> bool {
        matches!(self, Self::Enemy(_))
    }
}

impl fmt::Display for UnitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ally(index) => write!(f, "ally#{index}"),
            Self::Enemy(id) => write!(f, "{id}"),
        }
    }
}
