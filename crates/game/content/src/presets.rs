//! Stock combatants.

use battle_core::{CombatantTemplate, HostileTraits, Role, Skill, SkillId, Stats};

pub fn hero() -> CombatantTemplate {
    CombatantTemplate::new("Hero", 240, 80, Stats::new(50, 45, 20, 30, 30, 25), Role::Guardian)
}

pub fn wizard() -> CombatantTemplate {
    CombatantTemplate::new(
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

pub fn healer() -> CombatantTemplate {
    CombatantTemplate::new(
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

/// Split offspring of [`king_slime`].
pub fn slime(name: &str) -> CombatantTemplate {
    CombatantTemplate::new(
        name,
        300,
        0,
        Stats::new(45, 25, 30, 20, 40, 20),
        Role::Hostile(HostileTraits::minion()),
    )
}

/// The boss. Splits into Slime A and Slime B at half HP.
pub fn king_slime() -> CombatantTemplate {
    CombatantTemplate::new(
        "King Slime",
        1000,
        0,
        Stats::new(70, 40, 40, 35, 20, 40),
        Role::Hostile(HostileTraits::boss(vec![slime("Slime A"), slime("Slime B")])),
    )
}

pub fn standard_party() -> Vec<CombatantTemplate> {
    vec![hero(), wizard(), healer()]
}

pub fn standard_enemies() -> Vec<CombatantTemplate> {
    vec![king_slime()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_line_up_with_party_order() {
        let party = standard_party();
        assert!(party[0].role.is_guardian());
        assert!(party[1].role.is_caster());
        assert!(party[2].role.is_restorer());
    }

    #[test]
    fn boss_carries_two_offspring() {
        let boss = king_slime();
        let traits = boss.role.hostile().expect("boss is hostile");
        assert!(traits.is_boss);
        assert_eq!(traits.offspring.len(), 2);
        assert!(traits.offspring.iter().all(|o| o.role.hostile().is_some_and(|t| !t.is_boss)));
    }
}
