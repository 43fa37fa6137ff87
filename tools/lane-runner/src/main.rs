//! lane-runner: headless driver for the lane simulation.
//!
//! Usage:
//!   lane-runner run --level 1 --frames 6000 --seed 7
//!   lane-runner run --levels levels.json --balance balance.json --campaign
//!   lane-runner levels --levels levels.json

use std::path::PathBuf;
use std::process;

use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use lanefront_core::commands::PlayerCommand;
use lanefront_core::config::{Balance, ConfigError, LevelSet};
use lanefront_core::enums::{GamePhase, RunOutcome, UnitKind, UpgradeKind};
use lanefront_core::state::FrameSnapshot;
use lanefront_sim::SimulationEngine;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "levels" => cmd_levels(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "lane-runner: LANEFRONT headless simulation driver\n\
         \n\
         Commands:\n\
         \n\
         run       Play levels with a scripted player and report the outcome\n\
         \n\
           --levels <path>    Levels file ({{\"levels\": [...]}}, default: built-in)\n\
           --balance <path>   Balance table JSON (default: built-in)\n\
           --level <N>        Level id to start on (default: first in list)\n\
           --frames <N>       Frame cap per level (default: 12000)\n\
           --dt <secs>        Frame delta fed to the engine (default: 0.05)\n\
           --seed <N>         Scripted player seed (default: 42)\n\
           --campaign         Advance to the next level after each victory\n\
           --json             Print the final snapshot of each level as JSON\n\
         \n\
         levels    Validate a levels file and list its entries\n\
         \n\
           --levels <path>    Levels file (default: built-in)\n\
         \n\
         Exit status is 1 on bad input and 2 when the last level played was not won.\n\
         Set RUST_LOG=debug to see rejected commands and waves.\n"
    );
}

fn parse_value(args: &[String], flag: &str) -> Option<String> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match parse_value(args, flag) {
        Some(raw) => match raw.parse::<T>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: {flag} expects a number, got {raw:?}");
                process::exit(1);
            }
        },
        None => default,
    }
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Read and validate a JSON file, or fall back to the built-in table.
fn load_or_default<T: Default>(
    args: &[String],
    flag: &str,
    parse: fn(&str) -> Result<T, ConfigError>,
) -> T {
    let Some(path) = parse_value(args, flag).map(PathBuf::from) else {
        return T::default();
    };
    let text = match std::fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    };
    match parse(&text) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error in {}: {e}", path.display());
            process::exit(1);
        }
    }
}

// --- Levels command ---

fn cmd_levels(args: &[String]) {
    let levels = load_or_default(args, "--levels", LevelSet::from_json);

    println!("id  hq-hp  enemy  interval  wave");
    for level in &levels.levels {
        println!(
            "{:<3} x{:<5} x{:<5} {:>6.1}s  {:>4}",
            level.id,
            level.structure_hp_multiplier,
            level.enemy_stat_multiplier,
            level.enemy_spawn_interval,
            level.enemy_wave_size
        );
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let levels = load_or_default(args, "--levels", LevelSet::from_json);
    let balance = load_or_default(args, "--balance", Balance::from_json);

    let frames: u32 = parse_number(args, "--frames", 12_000);
    let dt: f64 = parse_number(args, "--dt", 0.05);
    let seed: u64 = parse_number(args, "--seed", 42);
    let campaign = has_flag(args, "--campaign");
    let json = has_flag(args, "--json");

    let Some(first) = levels.first_id() else {
        eprintln!("Error: {}", ConfigError::NoLevels);
        process::exit(1);
    };
    let start: u32 = parse_number(args, "--level", first);

    let mut engine = SimulationEngine::new(balance, levels);
    let mut player = ScriptedPlayer::new(seed);

    if !engine.load_level(start) {
        eprintln!("Error: no level with id {start}");
        process::exit(1);
    }

    loop {
        let snapshot = play_level(&mut engine, &mut player, frames, dt);
        report(&snapshot, json);

        let next = match engine.outcome() {
            Some(RunOutcome::Victory) if campaign => engine.next_level_id(),
            _ => None,
        };
        match next {
            Some(id) => {
                info!("advancing to level {id}");
                engine.load_level(id);
            }
            None => break,
        }
    }

    if engine.outcome() != Some(RunOutcome::Victory) {
        process::exit(2);
    }
}

/// Step the engine until the run ends or the frame cap is hit.
fn play_level(
    engine: &mut SimulationEngine,
    player: &mut ScriptedPlayer,
    frames: u32,
    dt: f64,
) -> FrameSnapshot {
    let mut snapshot = engine.tick(0.0);
    for _ in 0..frames {
        if let Some(command) = player.decide(&snapshot) {
            engine.queue_command(command);
        }
        snapshot = engine.tick(dt);
        if !snapshot.phase.is_running() {
            break;
        }
    }
    snapshot
}

fn report(snapshot: &FrameSnapshot, json: bool) {
    let level = snapshot.level_id.unwrap_or_default();
    let result = match snapshot.phase {
        GamePhase::Ended(RunOutcome::Victory) => "victory",
        GamePhase::Ended(RunOutcome::Defeat) => "defeat",
        GamePhase::Running | GamePhase::Loading => "unfinished",
    };
    println!(
        "level {level}: {result} after {:.1}s ({} ticks), hq {:.0}/{:.0} vs {:.0}/{:.0}, {} units on lane",
        snapshot.time.elapsed_secs,
        snapshot.time.tick,
        snapshot.player_hq.hp,
        snapshot.player_hq.max_hp,
        snapshot.enemy_hq.hp,
        snapshot.enemy_hq.max_hp,
        snapshot.units.len(),
    );

    if json {
        match serde_json::to_string_pretty(snapshot) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Error serializing snapshot: {e}"),
        }
    }
}

/// Seeded stand-in for a human: saves up, then spends on a random unit or
/// upgrade it can afford.
struct ScriptedPlayer {
    rng: ChaCha8Rng,
    /// Resources to hold back before spending.
    reserve: f64,
}

impl ScriptedPlayer {
    fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let reserve = rng.gen_range(0.0..40.0);
        Self { rng, reserve }
    }

    fn decide(&mut self, snapshot: &FrameSnapshot) -> Option<PlayerCommand> {
        let budget = snapshot.economy.resources - self.reserve;
        if budget <= 0.0 || !self.rng.gen_bool(0.1) {
            return None;
        }

        if self.rng.gen_bool(0.25) {
            let affordable: Vec<UpgradeKind> = snapshot
                .upgrades
                .iter()
                .filter(|u| u.next_cost.is_some_and(|cost| cost <= budget))
                .map(|u| u.kind)
                .collect();
            if !affordable.is_empty() {
                let kind = affordable[self.rng.gen_range(0..affordable.len())];
                self.reserve = self.rng.gen_range(0.0..40.0);
                return Some(PlayerCommand::BuyUpgrade { kind });
            }
        }

        let kind = UnitKind::ALL[self.rng.gen_range(0..UnitKind::ALL.len())];
        Some(PlayerCommand::SpawnUnit { kind })
    }
}
