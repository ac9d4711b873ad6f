//! Asynchronous abstraction for sourcing party decisions.
//!
//! Runtime users plug in [`DecisionProvider`] implementations so the encounter
//! can run with human input, scripted fixtures, or automated play.

use std::collections::VecDeque;

use async_trait::async_trait;
use battle_core::{Decision, EncounterState, LegalAction};
use tokio::sync::Mutex;

use super::errors::{Result, RuntimeError};

/// Trait for choosing a party member's action.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - Scripted/replayed decisions
/// - Testing fixtures
#[async_trait]
pub trait DecisionProvider: Send + Sync {
    /// Pick one of `legal` for party member `actor`.
    ///
    /// `state` is a snapshot taken when the scheduler started waiting; the
    /// returned decision is validated again by the engine.
    async fn decide(
        &self,
        actor: usize,
        state: &EncounterState,
        legal: &[LegalAction],
    ) -> Result<Decision>;
}

/// Replays a fixed queue of decisions, failing once it runs dry.
#[derive(Default)]
pub struct ScriptedProvider {
    queue: Mutex<VecDeque<Decision>>,
}

impl ScriptedProvider {
    pub fn new(decisions: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            queue: Mutex::new(decisions.into_iter().collect()),
        }
    }

    pub async fn remaining(&self) -> usize {
        self.queue.lock().await.len()
    }
}

#[async_trait]
impl DecisionProvider for ScriptedProvider {
    async fn decide(
        &self,
        actor: usize,
        _state: &EncounterState,
        _legal: &[LegalAction],
    ) -> Result<Decision> {
        self.queue
            .lock()
            .await
            .pop_front()
            .ok_or(RuntimeError::ProviderExhausted { actor })
    }
}

/// Always takes the first offered action against its first target.
///
/// Attack is listed first whenever an enemy stands, so this plays a plain
/// attack-the-front-enemy game.
pub struct FirstLegalProvider;

#[async_trait]
impl DecisionProvider for FirstLegalProvider {
    async fn decide(
        &self,
        actor: usize,
        _state: &EncounterState,
        legal: &[LegalAction],
    ) -> Result<Decision> {
        legal
            .first()
            .map(LegalAction::first_decision)
            .ok_or(RuntimeError::NoLegalAction { actor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{ActionKind, legal_actions};

    #[tokio::test]
    async fn scripted_provider_drains_in_order() {
        let state = battle_content::EncounterSpec::standard().build();
        let provider = ScriptedProvider::new([
            Decision::untargeted(ActionKind::Cover),
            Decision::untargeted(ActionKind::Meditate),
        ]);

        let first = provider.decide(0, &state, &[]).await.expect("first");
        let second = provider.decide(1, &state, &[]).await.expect("second");

        assert_eq!(first.action, ActionKind::Cover);
        assert_eq!(second.action, ActionKind::Meditate);
        assert!(matches!(
            provider.decide(2, &state, &[]).await,
            Err(RuntimeError::ProviderExhausted { actor: 2 })
        ));
    }

    #[tokio::test]
    async fn first_legal_provider_attacks() {
        let state = battle_content::EncounterSpec::standard().build();
        let legal = legal_actions(&state, 0);

        let decision = FirstLegalProvider.decide(0, &state, &legal).await.expect("decision");

        assert_eq!(decision.action, ActionKind::Attack);
        assert!(decision.target.is_some());
    }

    #[tokio::test]
    async fn first_legal_provider_rejects_empty_offer() {
        let state = EncounterState::default();
        assert!(matches!(
            FirstLegalProvider.decide(1, &state, &[]).await,
            Err(RuntimeError::NoLegalAction { actor: 1 })
        ));
    }
}
