/// Presentation pacing, in milliseconds of presentation time.
///
/// The engine hands these to the presentation layer as
/// [`crate::events::BattleEvent::Pause`] directives. No rule reads them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PacingConfig {
    /// Pause after a party member's action resolves.
    pub action: u32,
    /// Pause between a boss trembling and its roster replacement.
    pub split: u32,
    /// Pause after each enemy action.
    pub enemy_action: u32,
    /// Pause before the enemy phase starts.
    pub phase_change: u32,
}

impl PacingConfig {
    pub const DEFAULT_ACTION_MS: u32 = 500;
    pub const DEFAULT_SPLIT_MS: u32 = 800;
    pub const DEFAULT_ENEMY_ACTION_MS: u32 = 1000;
    pub const DEFAULT_PHASE_CHANGE_MS: u32 = 800;

    /// Pacing with every pause set to zero.
    pub fn instant() -> Self {
        Self {
            action: 0,
            split: 0,
            enemy_action: 0,
            phase_change: 0,
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            action: Self::DEFAULT_ACTION_MS,
            split: Self::DEFAULT_SPLIT_MS,
            enemy_action: Self::DEFAULT_ENEMY_ACTION_MS,
            phase_change: Self::DEFAULT_PHASE_CHANGE_MS,
        }
    }
}

/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    pub pacing: PacingConfig,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of party members.
    pub const MAX_PARTY: usize = 4;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pacing(pacing: PacingConfig) -> Self {
        Self { pacing }
    }
}
