mod common;

use battle_core::{
    ActionKind, BattleConfig, BattleEngine, BattleEvent, Combatant, DeclaredAction, Decision, ItemKind,
    ReplayRng, ReviveMode, Role, SkillId, StatusKind, Stats, StepStatus, UnitRef,
};
use common::*;

const ACTION_PAUSE: BattleEvent = BattleEvent::Pause { millis: 500 };

fn declared(actor: usize, action: ActionKind) -> BattleEvent {
    BattleEvent::ActionDeclared {
        actor: UnitRef::Ally(actor),
        action: DeclaredAction::Party(action),
    }
}

fn turn(actor: usize) -> BattleEvent {
    BattleEvent::TurnStarted {
        unit: UnitRef::Ally(actor),
    }
}

#[test]
fn fira_rolls_once_per_living_enemy() {
    let mut state = encounter(vec![wizard(), hero()], vec![slime("Slime A"), slime("Slime B")]);
    let (a, b) = (state.roster.lineup()[0], state.roster.lineup()[1]);
    let config = BattleConfig::default();
    // spread draws: +10 for A, +0 for B
    let mut rng = ReplayRng::new([0.5, 0.0]);
    let mut engine = BattleEngine::new(&mut state, &mut rng, &config);

    engine.advance();
    let fira = ActionKind::Cast(SkillId::Fira);
    let step = engine
        .submit(Decision::untargeted(fira))
        .expect("fira is legal");

    // floor(60 * 1.1 + spread) - floor(20 / 3)
    assert_eq!(
        step.events,
        [
            declared(0, fira),
            BattleEvent::MpSpent {
                unit: UnitRef::Ally(0),
                amount: 35
            },
            BattleEvent::DamageDealt {
                target: UnitRef::Enemy(a),
                amount: 70,
                critical: false
            },
            BattleEvent::DamageDealt {
                target: UnitRef::Enemy(b),
                amount: 60,
                critical: false
            },
            ACTION_PAUSE,
            turn(1),
        ]
    );
    drop(engine);

    assert_eq!(rng.consumed(), 2);
    assert_eq!(state.party.get(0).map(Combatant::mp), Some(115));
    assert_eq!(state.roster.get(a).map(Combatant::hp), Some(230));
    assert_eq!(state.roster.get(b).map(Combatant::hp), Some(240));
}

#[test]
fn prayer_regenerates_the_party_until_expiry() {
    let mut tired = healer();
    tired.apply_hp_delta(-100);
    let mut bruised = hero();
    bruised.apply_hp_delta(-100);
    let mut state = encounter(vec![tired, bruised], vec![slime("Slime")]);
    let slime = UnitRef::Enemy(state.roster.lineup()[0]);
    let config = BattleConfig::default();
    // enemy always self-heals, so only regen moves party HP
    let mut rng = ReplayRng::new([0.1]);
    let mut engine = BattleEngine::new(&mut state, &mut rng, &config);

    engine.advance();
    let prayer = engine
        .submit(Decision::untargeted(ActionKind::Prayer))
        .expect("prayer is legal");
    assert_eq!(
        prayer.events,
        [
            declared(0, ActionKind::Prayer),
            BattleEvent::StatusGranted {
                target: UnitRef::Ally(0),
                kind: StatusKind::Regen,
                turns: 4
            },
            BattleEvent::StatusGranted {
                target: UnitRef::Ally(1),
                kind: StatusKind::Regen,
                turns: 3
            },
            BattleEvent::RegenTicked {
                target: UnitRef::Ally(0),
                amount: 20
            },
            ACTION_PAUSE,
            turn(1),
        ]
    );

    let mut events = prayer.events;
    for _ in 0..7 {
        let step = engine
            .submit(Decision::targeted(ActionKind::Attack, slime))
            .expect("attack is legal");
        events.extend(step.events);
    }

    let ticks = |unit: UnitRef| -> Vec<u32> {
        events
            .iter()
            .filter_map(|event| match event {
                BattleEvent::RegenTicked { target, amount } if *target == unit => Some(*amount),
                _ => None,
            })
            .collect()
    };
    let expiries = |unit: UnitRef| {
        events
            .iter()
            .filter(|event| {
                **event
                    == BattleEvent::StatusExpired {
                        target: unit,
                        kind: StatusKind::Regen,
                    }
            })
            .count()
    };
    assert_eq!(ticks(UnitRef::Ally(0)), [20, 20, 20, 20]);
    assert_eq!(ticks(UnitRef::Ally(1)), [24, 24, 24]);
    assert_eq!(expiries(UnitRef::Ally(0)), 1);
    assert_eq!(expiries(UnitRef::Ally(1)), 1);
    drop(engine);

    assert_eq!(state.party.get(0).map(Combatant::hp), Some(180));
    assert_eq!(state.party.get(1).map(Combatant::hp), Some(212));
    assert!(state.party.iter().all(|member| member.regen_turns() == 0));
}

#[test]
fn items_draw_from_the_shared_stock() {
    let mut scratched = hero();
    scratched.apply_hp_delta(-30);
    let mut drained = wizard();
    drained.apply_mp_delta(-100);
    let mut fallen = healer();
    fallen.apply_hp_delta(-200);
    let mut state = encounter(vec![scratched, drained, fallen], vec![slime("Slime")]);
    let config = BattleConfig::default();
    let mut rng = ReplayRng::new([0.1]);
    let mut engine = BattleEngine::new(&mut state, &mut rng, &config);

    engine.advance();
    let potion = ActionKind::UseItem(ItemKind::Potion);
    let step = engine
        .submit(Decision::targeted(potion, UnitRef::Ally(0)))
        .expect("potion is legal");
    // reported amount is the item's, the write is clamped
    assert_eq!(
        step.events,
        [
            declared(0, potion),
            BattleEvent::HealApplied {
                target: UnitRef::Ally(0),
                amount: 50
            },
            ACTION_PAUSE,
            turn(1),
        ]
    );
    assert_eq!(engine.state().party.get(0).map(Combatant::hp), Some(240));
    assert_eq!(engine.state().inventory.count(ItemKind::Potion), 2);

    let phoenix = ActionKind::UseItem(ItemKind::Phoenix);
    let step = engine
        .submit(Decision::targeted(phoenix, UnitRef::Ally(2)))
        .expect("phoenix is legal");
    assert_eq!(
        step.events,
        [
            declared(1, phoenix),
            BattleEvent::UnitRevived {
                unit: UnitRef::Ally(2),
                mode: ReviveMode::Item,
                hp: 100
            },
            ACTION_PAUSE,
            turn(2),
        ]
    );
    assert_eq!(engine.state().inventory.count(ItemKind::Phoenix), 0);
    let StepStatus::AwaitingDecision { actor: 2, legal } = &step.status else {
        panic!("revived healer should act next");
    };
    assert!(legal.iter().all(|offer| offer.action != phoenix));

    let ether = ActionKind::UseItem(ItemKind::Ether);
    let step = engine
        .submit(Decision::targeted(ether, UnitRef::Ally(1)))
        .expect("ether is legal");
    assert_eq!(
        step.events[..3],
        [
            declared(2, ether),
            BattleEvent::MpRestored {
                target: UnitRef::Ally(1),
                amount: 30
            },
            ACTION_PAUSE,
        ]
    );
    drop(engine);

    assert_eq!(state.party.get(1).map(Combatant::mp), Some(80));
    assert_eq!(state.party.get(2).map(Combatant::hp), Some(100));
    assert_eq!(state.inventory.count(ItemKind::Ether), 1);
}

#[test]
fn phoenix_on_a_one_hp_ally_leaves_it_standing() {
    let mut frail = Combatant::new("Frail", 1, 0, Stats::default(), Role::Guardian);
    frail.apply_hp_delta(-1);
    let mut state = encounter(vec![hero(), frail], vec![slime("Slime")]);
    let config = BattleConfig::default();
    let mut rng = ReplayRng::new([0.1]);
    let mut engine = BattleEngine::new(&mut state, &mut rng, &config);

    engine.advance();
    let phoenix = ActionKind::UseItem(ItemKind::Phoenix);
    let step = engine
        .submit(Decision::targeted(phoenix, UnitRef::Ally(1)))
        .expect("phoenix is legal");

    assert!(step.events.contains(&BattleEvent::UnitRevived {
        unit: UnitRef::Ally(1),
        mode: ReviveMode::Item,
        hp: 1,
    }));
    assert_eq!(awaiting(&step), Some(1));
    assert_eq!(engine.state().party.get(1).map(Combatant::hp), Some(1));
}
