//! Simulation engine: the frame loop and level lifecycle.
//!
//! `SimulationEngine` owns the hecs unit world and the per-run state,
//! applies player commands, runs all systems, and produces `FrameSnapshot`s.
//! Completely headless, so runs are reproducible from frame deltas and
//! commands alone.

use std::collections::VecDeque;

use hecs::World;
use log::{debug, info};

use lanefront_core::commands::PlayerCommand;
use lanefront_core::config::{Balance, LevelSet};
use lanefront_core::constants::MAX_FRAME_DT;
use lanefront_core::enums::{GamePhase, RunOutcome, Side, UnitKind, UpgradeKind};
use lanefront_core::events::SimEvent;
use lanefront_core::state::FrameSnapshot;
use lanefront_core::types::{SimTime, UnitIdAllocator};

use crate::economy::Economy;
use crate::run::LevelRun;
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the unit world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    balance: Balance,
    levels: LevelSet,
    run: Option<LevelRun>,
    ids: UnitIdAllocator,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(Balance::default(), LevelSet::default())
    }
}

impl SimulationEngine {
    /// Create an engine in `Loading` with no run until the first `load_level`.
    pub fn new(balance: Balance, levels: LevelSet) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            balance,
            levels,
            run: None,
            ids: UnitIdAllocator::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Tear down the current run and start level `id`.
    ///
    /// Works from any phase. An unknown id returns `false` and changes
    /// nothing. Unit ids keep counting up across loads.
    pub fn load_level(&mut self, id: u32) -> bool {
        let Some(level) = self.levels.get(id).copied() else {
            debug!("load rejected: no level {id}");
            return false;
        };

        self.world.clear();
        self.despawn_buffer.clear();
        self.time = SimTime::default();
        self.run = Some(LevelRun::new(level, &self.balance));
        self.phase = GamePhase::Running;
        // Events from the torn-down run refer to units that no longer exist.
        self.events.clear();

        info!(
            "level {id} loaded: hq x{}, enemy x{}, wave of {} every {}s",
            level.structure_hp_multiplier,
            level.enemy_stat_multiplier,
            level.enemy_wave_size,
            level.enemy_spawn_interval
        );
        self.events.push(SimEvent::LevelStarted { level_id: id });
        true
    }

    /// Reload the current level from scratch. `false` before any level loaded.
    pub fn restart_level(&mut self) -> bool {
        match self.level_id() {
            Some(id) => self.load_level(id),
            None => false,
        }
    }

    /// Buy and deploy a player unit. `false` outside `Running` or when the
    /// economy cannot cover the cost.
    pub fn spawn_player_unit(&mut self, kind: UnitKind) -> bool {
        if !self.phase.is_running() {
            debug!("{kind} spawn rejected: phase {:?}", self.phase);
            return false;
        }
        let Some(run) = self.run.as_mut() else {
            return false;
        };
        let Some(spawn) = run.spawner.spawn_unit(
            Side::Player,
            kind,
            &mut run.economy,
            &run.upgrades,
            &mut self.ids,
        ) else {
            return false;
        };

        world_setup::spawn_unit(&mut self.world, &spawn);
        self.events.push(SimEvent::UnitSpawned {
            unit_id: spawn.id,
            side: spawn.side,
            kind: spawn.kind,
        });
        true
    }

    /// Buy the next tier of an upgrade. `false` outside `Running`, when
    /// maxed, or when unaffordable.
    pub fn buy_upgrade(&mut self, kind: UpgradeKind) -> bool {
        if !self.phase.is_running() {
            debug!("{kind} upgrade rejected: phase {:?}", self.phase);
            return false;
        }
        match self.run.as_mut() {
            Some(run) => run.upgrades.buy(kind, &mut run.economy),
            None => false,
        }
    }

    /// `buy_upgrade` keyed by upgrade name. Unknown names return `false`.
    pub fn buy_upgrade_named(&mut self, name: &str) -> bool {
        if !self.phase.is_running() {
            debug!("{name} upgrade rejected: phase {:?}", self.phase);
            return false;
        }
        match self.run.as_mut() {
            Some(run) => run.upgrades.buy_named(name, &mut run.economy),
            None => false,
        }
    }

    /// Apply a command immediately and report whether it took effect.
    pub fn apply_command(&mut self, command: PlayerCommand) -> bool {
        match command {
            PlayerCommand::SpawnUnit { kind } => self.spawn_player_unit(kind),
            PlayerCommand::BuyUpgrade { kind } => self.buy_upgrade(kind),
            PlayerCommand::LoadLevel { id } => self.load_level(id),
            PlayerCommand::RestartLevel => self.restart_level(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    ///
    /// `elapsed_secs` is the wall-clock time since the previous frame; it is
    /// clamped to `[0, max_frame_dt]`. Outside `Running` only queued commands
    /// are processed.
    pub fn tick(&mut self, elapsed_secs: f64) -> FrameSnapshot {
        self.process_commands();

        if self.phase.is_running() {
            let dt = self.clamp_dt(elapsed_secs);
            self.run_systems(dt);
            self.check_outcome();
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.run.as_ref(),
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// How the current run ended, if it has.
    pub fn outcome(&self) -> Option<RunOutcome> {
        match self.phase {
            GamePhase::Ended(outcome) => Some(outcome),
            GamePhase::Loading | GamePhase::Running => None,
        }
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Id of the loaded level, if any.
    pub fn level_id(&self) -> Option<u32> {
        self.run.as_ref().map(|run| run.level.id)
    }

    /// Level following the loaded one in the level list.
    pub fn next_level_id(&self) -> Option<u32> {
        self.level_id().and_then(|id| self.levels.next_after(id))
    }

    pub fn economy(&self) -> Option<&Economy> {
        self.run.as_ref().map(|run| &run.economy)
    }

    /// Get a read-only reference to the unit world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable run state, for tests that need to stage a situation.
    #[cfg(test)]
    pub(crate) fn run_mut(&mut self) -> Option<&mut LevelRun> {
        self.run.as_mut()
    }

    /// Place an enemy unit at the enemy spawn point outside the wave timer.
    #[cfg(test)]
    pub(crate) fn spawn_enemy_unit(&mut self, kind: UnitKind) -> Option<u32> {
        let run = self.run.as_mut()?;
        let spawn = run.spawner.spawn_unit(
            Side::Enemy,
            kind,
            &mut run.economy,
            &run.upgrades,
            &mut self.ids,
        )?;
        world_setup::spawn_unit(&mut self.world, &spawn);
        Some(spawn.id)
    }

    /// Clamp a frame delta to `[0, max_frame_dt]`. A ceiling that is negative
    /// or not finite falls back to `MAX_FRAME_DT`.
    fn clamp_dt(&self, elapsed_secs: f64) -> f64 {
        if !elapsed_secs.is_finite() {
            return 0.0;
        }
        let max = self.balance.max_frame_dt;
        let max = if max.is_finite() && max >= 0.0 {
            max
        } else {
            MAX_FRAME_DT
        };
        elapsed_secs.min(max).max(0.0)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if !self.apply_command(command.clone()) {
                debug!("queued command had no effect: {command:?}");
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let Some(run) = self.run.as_mut() else {
            return;
        };

        // 1. Income
        run.economy.tick(dt);

        // 2. Enemy waves
        let wave = run.spawner.tick_enemy_spawner(dt, &mut self.ids);
        if !wave.is_empty() {
            self.events.push(SimEvent::WaveSpawned {
                count: wave.len() as u32,
            });
            for spawn in &wave {
                world_setup::spawn_unit(&mut self.world, spawn);
                self.events.push(SimEvent::UnitSpawned {
                    unit_id: spawn.id,
                    side: spawn.side,
                    kind: spawn.kind,
                });
            }
        }

        // 3. Combat (targeting, attacks, movement, death flags)
        systems::combat::run(
            &mut self.world,
            &mut run.structures,
            &self.balance.lane,
            dt,
            &mut self.events,
        );

        // 4. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// End the run if an HQ fell. The enemy HQ is checked first, so a
    /// double knockout counts as a victory.
    fn check_outcome(&mut self) {
        let Some(run) = self.run.as_ref() else {
            return;
        };

        let outcome = if run.structures.is_destroyed(Side::Enemy) {
            RunOutcome::Victory
        } else if run.structures.is_destroyed(Side::Player) {
            RunOutcome::Defeat
        } else {
            return;
        };

        let level_id = run.level.id;
        self.phase = GamePhase::Ended(outcome);
        info!("level {level_id} ended: {outcome:?} at {:.2}s", self.time.elapsed_secs);
        self.events.push(SimEvent::RunEnded { outcome, level_id });
    }
}
