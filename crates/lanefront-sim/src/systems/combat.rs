//! Combat system: targeting, attacks, HQ strikes, and lane movement.
//!
//! Units act one at a time in id order against a shared roster, so each unit
//! sees positions and hit points as already changed by units before it.
//! Death is only flagged once everyone has acted: a unit knocked to zero
//! still acts this tick and can still be targeted, which lets two units
//! trade fatal blows.

use hecs::{Entity, World};

use lanefront_core::components::{Dead, Health, LanePosition, Mobility, Unit, Weapon};
use lanefront_core::config::LaneConfig;
use lanefront_core::enums::{AttackStyle, Side, UnitKind};
use lanefront_core::events::SimEvent;

use crate::structures::Structures;

/// Working copy of one unit for the duration of a tick.
#[derive(Debug, Clone)]
struct Combatant {
    entity: Entity,
    unit: Unit,
    x: f64,
    health: Health,
    weapon: Weapon,
    speed: f64,
}

impl Combatant {
    fn ready(&self) -> bool {
        self.weapon.cooldown <= 0.0
    }

    fn rearm(&mut self) {
        self.weapon.cooldown = self.weapon.attack_interval;
    }
}

/// Resolve one tick of combat for every live unit.
pub fn run(
    world: &mut World,
    structures: &mut Structures,
    lane: &LaneConfig,
    dt: f64,
    events: &mut Vec<SimEvent>,
) {
    let mut roster = collect_roster(world);

    for i in 0..roster.len() {
        act(&mut roster, i, structures, lane, dt, events);
    }

    write_back(world, &roster, events);
}

/// Gather live units sorted by id, which is also creation order.
fn collect_roster(world: &World) -> Vec<Combatant> {
    let mut roster: Vec<Combatant> = world
        .query::<(&Unit, &LanePosition, &Health, &Weapon, &Mobility, Option<&Dead>)>()
        .iter()
        .filter(|(_, (.., dead))| dead.is_none())
        .map(|(entity, (unit, pos, health, weapon, mobility, _))| Combatant {
            entity,
            unit: *unit,
            x: pos.0,
            health: *health,
            weapon: *weapon,
            speed: mobility.speed,
        })
        .collect();

    roster.sort_by_key(|c| c.unit.id);
    roster
}

/// One unit's turn: cool down, then either attack a unit, attack the HQ,
/// wait for its weapon, or advance. Never more than one of those.
fn act(
    roster: &mut [Combatant],
    i: usize,
    structures: &mut Structures,
    lane: &LaneConfig,
    dt: f64,
    events: &mut Vec<SimEvent>,
) {
    if roster[i].weapon.cooldown > 0.0 {
        roster[i].weapon.cooldown -= dt;
    }

    if let Some(j) = nearest_enemy_in_range(roster, i) {
        if roster[i].ready() {
            let damage = roster[i].weapon.damage;
            let target = &mut roster[j];
            target.health.hp = (target.health.hp - damage).max(0.0);
            let target_id = target.unit.id;

            let attacker = &mut roster[i];
            attacker.rearm();
            events.push(SimEvent::UnitAttacked {
                attacker_id: attacker.unit.id,
                target_id,
                damage,
                style: attack_style(attacker.unit.kind),
            });
        }
        return;
    }

    let attacker = &mut roster[i];
    let side = attacker.unit.side;
    let hq_side = side.opponent();
    let reach = attacker.weapon.range.max(lane.structure_damage_range);

    if (attacker.x - lane.hq_x(hq_side)).abs() <= reach {
        if attacker.ready() {
            let damage = attacker.weapon.damage;
            structures.damage_hq(hq_side, damage);
            attacker.rearm();
            events.push(SimEvent::HqDamaged {
                side: hq_side,
                attacker_id: attacker.unit.id,
                damage,
            });
        }
    } else {
        attacker.x += side.heading() * attacker.speed * dt;
    }
}

/// Index of the closest opposing unit, if it is within the attacker's range.
/// Ties go to the first unit in roster order.
fn nearest_enemy_in_range(roster: &[Combatant], i: usize) -> Option<usize> {
    let attacker = &roster[i];
    let mut closest: Option<(usize, f64)> = None;

    for (j, other) in roster.iter().enumerate() {
        if other.unit.side == attacker.unit.side {
            continue;
        }
        let distance = (other.x - attacker.x).abs();
        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((j, distance)),
        }
    }

    closest
        .filter(|&(_, distance)| distance <= attacker.weapon.range)
        .map(|(j, _)| j)
}

fn attack_style(kind: UnitKind) -> AttackStyle {
    match kind {
        UnitKind::Melee => AttackStyle::Strike,
        UnitKind::Ranged => AttackStyle::Shot,
    }
}

/// Copy the tick's results back onto the components and flag the fallen.
fn write_back(world: &mut World, roster: &[Combatant], events: &mut Vec<SimEvent>) {
    let mut fallen: Vec<(Entity, u32, Side)> = Vec::new();

    for c in roster {
        if let Ok((pos, health, weapon)) =
            world.query_one_mut::<(&mut LanePosition, &mut Health, &mut Weapon)>(c.entity)
        {
            pos.0 = c.x;
            *health = c.health;
            *weapon = c.weapon;
        }
        if c.health.hp <= 0.0 {
            fallen.push((c.entity, c.unit.id, c.unit.side));
        }
    }

    for (entity, unit_id, side) in fallen {
        let _ = world.insert_one(entity, Dead);
        events.push(SimEvent::UnitKilled { unit_id, side });
    }
}
