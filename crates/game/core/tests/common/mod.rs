#![allow(dead_code)]

use battle_core::{
    BattleEngine, BattleEvent, Combatant, CombatantTemplate, EncounterState, HostileTraits,
    Inventory, Party, Role, Roster, Skill, SkillId, Stats, Step, StepStatus,
};

pub fn hero() -> Combatant {
    Combatant::new("Hero", 240, 80, Stats::new(50, 45, 20, 30, 30, 25), Role::Guardian)
}

pub fn wizard() -> Combatant {
    Combatant::new(
        "Wizard",
        180,
        150,
        Stats::new(20, 20, 60, 50, 50, 15),
        Role::Caster {
            skills: vec![
                Skill::stock(SkillId::Fire),
                Skill::stock(SkillId::Fira),
                Skill::stock(SkillId::Meteor),
            ],
        },
    )
}

pub fn healer() -> Combatant {
    Combatant::new(
        "Healer",
        200,
        150,
        Stats::new(25, 25, 40, 60, 35, 75),
        Role::Restorer {
            skills: vec![
                Skill::stock(SkillId::Heal),
                Skill::stock(SkillId::Medica),
                Skill::stock(SkillId::Raise),
            ],
        },
    )
}

pub fn slime_template(name: &str) -> CombatantTemplate {
    CombatantTemplate::new(
        name,
        300,
        0,
        Stats::new(45, 25, 30, 20, 40, 20),
        Role::Hostile(HostileTraits::minion()),
    )
}

pub fn slime(name: &str) -> Combatant {
    slime_template(name).spawn()
}

pub fn king_slime() -> Combatant {
    Combatant::new(
        "King Slime",
        1000,
        0,
        Stats::new(70, 40, 40, 35, 20, 40),
        Role::Hostile(HostileTraits::boss(vec![
            slime_template("Slime A"),
            slime_template("Slime B"),
        ])),
    )
}

pub fn encounter(party: Vec<Combatant>, enemies: Vec<Combatant>) -> EncounterState {
    EncounterState::new(Party::new(party), Roster::new(enemies), Inventory::standard())
}

pub fn stock_encounter() -> EncounterState {
    encounter(vec![hero(), wizard(), healer()], vec![king_slime()])
}

/// Actor index of a step awaiting a decision.
pub fn awaiting(step: &Step) -> Option<usize> {
    match step.status {
        StepStatus::AwaitingDecision { actor, .. } => Some(actor),
        StepStatus::Finished(_) => None,
    }
}

/// Plays first-legal decisions until the encounter ends or `limit` decisions
/// have been made, collecting every event.
pub fn play_first_legal(engine: &mut BattleEngine<'_>, limit: usize) -> Vec<BattleEvent> {
    let mut step = engine.advance();
    let mut events = std::mem::take(&mut step.events);
    for _ in 0..limit {
        let StepStatus::AwaitingDecision { legal, .. } = &step.status else {
            break;
        };
        let decision = legal[0].first_decision();
        step = engine.submit(decision).expect("first legal decision is accepted");
        events.append(&mut step.events);
    }
    events
}

/// Asserts the resource bounds for every fielded or retired unit.
pub fn assert_bounds(state: &EncounterState) {
    for member in state.party.iter() {
        assert!(member.hp() <= member.max_hp(), "{} hp out of bounds", member.name);
        assert!(member.mp() <= member.max_mp(), "{} mp out of bounds", member.name);
        if !member.is_alive() {
            assert_eq!(member.buff_turns(), 0);
            assert_eq!(member.regen_turns(), 0);
            assert!(!member.is_covering());
        }
    }
    for (_, enemy) in state.roster.fielded() {
        assert!(enemy.hp() <= enemy.max_hp(), "{} hp out of bounds", enemy.name);
        assert!(enemy.mp() <= enemy.max_mp(), "{} mp out of bounds", enemy.name);
    }
}
