//! Snapshot system: queries the unit world and builds a complete FrameSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use lanefront_core::components::{Dead, Health, LanePosition, Unit};
use lanefront_core::enums::{GamePhase, Side, UpgradeKind};
use lanefront_core::events::SimEvent;
use lanefront_core::state::*;
use lanefront_core::types::SimTime;

use crate::run::LevelRun;

/// Build a complete FrameSnapshot from the current world and run state.
/// With no run loaded, every run-derived field takes its default.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    run: Option<&LevelRun>,
    events: Vec<SimEvent>,
) -> FrameSnapshot {
    let Some(run) = run else {
        return FrameSnapshot {
            time: *time,
            phase,
            events,
            ..FrameSnapshot::default()
        };
    };

    FrameSnapshot {
        time: *time,
        phase,
        level_id: Some(run.level.id),
        economy: EconomyView {
            resources: run.economy.resources(),
            income_rate: run.economy.income_rate(),
            income_multiplier: run.economy.income_multiplier(),
        },
        player_hq: run.structures.hq(Side::Player).view(),
        enemy_hq: run.structures.hq(Side::Enemy).view(),
        upgrades: build_upgrades(run),
        next_wave_in: run.spawner.time_to_next_wave(),
        units: build_units(world),
        events,
    }
}

fn build_upgrades(run: &LevelRun) -> Vec<UpgradeView> {
    UpgradeKind::ALL
        .iter()
        .map(|&kind| UpgradeView {
            kind,
            level: run.upgrades.level(kind),
            max_level: run.upgrades.max_level(kind),
            next_cost: run.upgrades.next_cost(kind),
        })
        .collect()
}

/// Live units sorted by id. Units flagged dead are left out.
fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(&Unit, &LanePosition, &Health, Option<&Dead>)>()
        .iter()
        .filter(|(_, (.., dead))| dead.is_none())
        .map(|(_entity, (unit, pos, health, _))| UnitView {
            id: unit.id,
            side: unit.side,
            kind: unit.kind,
            position: pos.0,
            hp: health.hp,
            max_hp: health.max_hp,
        })
        .collect();

    units.sort_by_key(|u| u.id);
    units
}
