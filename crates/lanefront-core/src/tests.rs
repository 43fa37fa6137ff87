#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::config::*;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::FrameSnapshot;
    use crate::types::{SimTime, UnitIdAllocator};

    /// Enums serialize as the lowercase names used in level files and the UI.
    #[test]
    fn test_enum_serde_names() {
        assert_eq!(serde_json::to_string(&Side::Player).unwrap(), "\"player\"");
        assert_eq!(serde_json::to_string(&UnitKind::Ranged).unwrap(), "\"ranged\"");
        assert_eq!(serde_json::to_string(&UpgradeKind::Hp).unwrap(), "\"hp\"");
        assert_eq!(serde_json::to_string(&RunOutcome::Victory).unwrap(), "\"victory\"");

        for kind in UpgradeKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            let back: UpgradeKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Loading,
            GamePhase::Running,
            GamePhase::Ended(RunOutcome::Victory),
            GamePhase::Ended(RunOutcome::Defeat),
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("melee".parse::<UnitKind>(), Ok(UnitKind::Melee));
        assert_eq!("Ranged".parse::<UnitKind>(), Ok(UnitKind::Ranged));
        assert_eq!("INCOME".parse::<UpgradeKind>(), Ok(UpgradeKind::Income));
        assert_eq!(
            "armor".parse::<UpgradeKind>(),
            Err(UnknownKind("armor".to_string()))
        );
        assert!("siege".parse::<UnitKind>().is_err());
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Player.opponent(), Side::Enemy);
        assert_eq!(Side::Enemy.opponent(), Side::Player);
        assert_eq!(Side::Player.heading(), 1.0);
        assert_eq!(Side::Enemy.heading(), -1.0);
    }

    #[test]
    fn test_wave_slot_alternates() {
        let kinds: Vec<UnitKind> = (0..5).map(UnitKind::for_wave_slot).collect();
        assert_eq!(
            kinds,
            vec![
                UnitKind::Melee,
                UnitKind::Ranged,
                UnitKind::Melee,
                UnitKind::Ranged,
                UnitKind::Melee
            ]
        );
    }

    /// PlayerCommand uses an internally tagged representation.
    #[test]
    fn test_player_command_serde() {
        let json = r#"{"type":"SpawnUnit","kind":"melee"}"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert_eq!(cmd, PlayerCommand::SpawnUnit { kind: UnitKind::Melee });

        let commands = vec![
            PlayerCommand::SpawnUnit { kind: UnitKind::Ranged },
            PlayerCommand::BuyUpgrade { kind: UpgradeKind::Damage },
            PlayerCommand::LoadLevel { id: 3 },
            PlayerCommand::RestartLevel,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    #[test]
    fn test_unknown_upgrade_command_rejected_by_serde() {
        let json = r#"{"type":"BuyUpgrade","kind":"armor"}"#;
        assert!(serde_json::from_str::<PlayerCommand>(json).is_err());
    }

    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::UnitAttacked {
                attacker_id: 1,
                target_id: 2,
                damage: 14.0,
                style: AttackStyle::Strike,
            },
            SimEvent::HqDamaged {
                side: Side::Enemy,
                attacker_id: 4,
                damage: 10.0,
            },
            SimEvent::RunEnded {
                outcome: RunOutcome::Defeat,
                level_id: 2,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = FrameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..20 {
            time.advance(0.05);
        }
        assert_eq!(time.tick, 20);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unit_id_allocator_is_monotonic() {
        let mut ids = UnitIdAllocator::default();
        let drawn: Vec<u32> = (0..4).map(|_| ids.allocate()).collect();
        assert_eq!(drawn, vec![1, 2, 3, 4]);
        assert_eq!(ids.allocate(), 5);
    }

    // ---- Configuration ----

    #[test]
    fn test_default_balance_is_valid() {
        let balance = Balance::default();
        balance.validate().unwrap();
        assert_eq!(balance.units.melee.cost, 25.0);
        assert_eq!(balance.units.ranged.range, 70.0);
        assert_eq!(balance.upgrades.income.multipliers, vec![1.25, 1.5, 1.9]);
        assert_eq!(balance.base.starting_resources, 100.0);
        assert_eq!(balance.max_frame_dt, 0.05);
    }

    #[test]
    fn test_upgrade_track_lookup() {
        let track = UpgradeBalance::default().damage;
        assert_eq!(track.cost_at(0), Some(60.0));
        assert_eq!(track.cost_at(2), Some(130.0));
        assert_eq!(track.cost_at(3), None);
        assert_eq!(track.multiplier_at(0), 1.0);
        assert_eq!(track.multiplier_at(1), 1.15);
        assert_eq!(track.multiplier_at(3), 1.5);
    }

    #[test]
    fn test_lane_geometry() {
        let lane = LaneConfig::default();
        assert_eq!(lane.spawn_x(Side::Player), 90.0);
        assert_eq!(lane.spawn_x(Side::Enemy), 930.0);
        assert_eq!(lane.hq_x(Side::Player), 60.0);
        assert_eq!(lane.hq_x(Side::Enemy), 960.0);
    }

    #[test]
    fn test_balance_partial_override() {
        let json = r#"{ "maxFrameDt": 0.1, "base": {
            "startingResources": 250, "incomePerSecond": 5,
            "playerHQHp": 900, "enemyHQHp": 800 } }"#;
        let balance = Balance::from_json(json).unwrap();
        assert_eq!(balance.max_frame_dt, 0.1);
        assert_eq!(balance.base.starting_resources, 250.0);
        assert_eq!(balance.base.enemy_hq_hp, 800.0);
        assert_eq!(balance.units, UnitBalance::default());
    }

    #[test]
    fn test_balance_rejects_short_upgrade_table() {
        let mut balance = Balance::default();
        balance.upgrades.hp.costs.pop();
        assert!(matches!(
            balance.validate(),
            Err(ConfigError::InvalidUpgrade {
                kind: UpgradeKind::Hp,
                ..
            })
        ));
    }

    #[test]
    fn test_balance_rejects_inverted_lane() {
        let mut balance = Balance::default();
        balance.lane.start_x = 1000.0;
        assert!(matches!(
            balance.validate(),
            Err(ConfigError::InvertedLane { .. })
        ));
    }

    #[test]
    fn test_balance_rejects_negative_unit_stat() {
        let mut balance = Balance::default();
        balance.units.ranged.damage = -1.0;
        assert!(matches!(
            balance.validate(),
            Err(ConfigError::InvalidUnit {
                kind: UnitKind::Ranged,
                ..
            })
        ));
    }

    #[test]
    fn test_level_set_from_json() {
        let json = r#"{ "levels": [
            { "id": 1, "structureHpMultiplier": 1.0, "enemyStatMultiplier": 1.0,
              "enemySpawnInterval": 8.0, "enemyWaveSize": 2 },
            { "id": 4, "structureHpMultiplier": 2.0, "enemyStatMultiplier": 1.8,
              "enemySpawnInterval": 5.5, "enemyWaveSize": 5 }
        ] }"#;
        let set = LevelSet::from_json(json).unwrap();
        assert_eq!(set.levels.len(), 2);
        assert_eq!(set.get(4).unwrap().enemy_wave_size, 5);
        assert!(set.get(2).is_none());
        assert_eq!(set.first_id(), Some(1));
        assert_eq!(set.next_after(1), Some(4));
        assert_eq!(set.next_after(4), None);
    }

    #[test]
    fn test_level_set_rejects_bad_input() {
        assert!(matches!(
            LevelSet::from_json(r#"{ "levels": [] }"#),
            Err(ConfigError::NoLevels)
        ));
        assert!(matches!(
            LevelSet::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));

        let mut set = LevelSet::default();
        set.levels[2].id = 1;
        assert!(matches!(set.validate(), Err(ConfigError::DuplicateLevel(1))));

        let mut set = LevelSet::default();
        set.levels[0].enemy_spawn_interval = 0.0;
        assert!(matches!(
            set.validate(),
            Err(ConfigError::InvalidLevel { id: 1, .. })
        ));
    }

    #[test]
    fn test_default_levels_escalate() {
        let set = LevelSet::default();
        set.validate().unwrap();
        for pair in set.levels.windows(2) {
            assert!(pair[1].enemy_stat_multiplier > pair[0].enemy_stat_multiplier);
            assert!(pair[1].enemy_wave_size >= pair[0].enemy_wave_size);
            assert!(pair[1].enemy_spawn_interval <= pair[0].enemy_spawn_interval);
        }
    }
}
