//! Entity spawn factories for the unit world.

use hecs::World;

use lanefront_core::components::{Health, LanePosition, Mobility, Unit, Weapon};

use crate::spawner::UnitSpawn;

/// Place a spawned unit in the world with its full component bundle.
/// The unit starts with its weapon ready.
pub fn spawn_unit(world: &mut World, unit: &UnitSpawn) -> hecs::Entity {
    let stats = &unit.stats;
    world.spawn((
        Unit {
            id: unit.id,
            side: unit.side,
            kind: unit.kind,
        },
        LanePosition(unit.position),
        Health {
            hp: stats.hp,
            max_hp: stats.max_hp,
        },
        Weapon {
            damage: stats.damage,
            range: stats.range,
            attack_interval: stats.attack_interval,
            cooldown: 0.0,
        },
        Mobility { speed: stats.speed },
    ))
}
