#[cfg(test)]
mod tests {
    use crate::commands::{Control, PlayerCommand};
    use crate::config::{ConfigError, GameRules};
    use crate::display::{display_for, POWERUP_DISPLAY};
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime, Velocity};

    #[test]
    fn test_tier_fragments_strictly_shrink() {
        assert_eq!(AsteroidTier::Large.fragment(), Some(AsteroidTier::Medium));
        assert_eq!(AsteroidTier::Medium.fragment(), Some(AsteroidTier::Small));
        assert_eq!(AsteroidTier::Small.fragment(), None);

        for tier in [AsteroidTier::Large, AsteroidTier::Medium] {
            let child = tier.fragment().unwrap();
            assert!(child > tier, "{child:?} should be a smaller tier than {tier:?}");
        }

        assert_eq!(AsteroidTier::Large.fragment_count(), 2);
        assert_eq!(AsteroidTier::Medium.fragment_count(), 2);
        assert_eq!(AsteroidTier::Small.fragment_count(), 0);
    }

    #[test]
    fn test_smaller_tiers_pay_more() {
        let rules = GameRules::default();
        let large = rules.asteroid_points(AsteroidTier::Large);
        let medium = rules.asteroid_points(AsteroidTier::Medium);
        let small = rules.asteroid_points(AsteroidTier::Small);
        assert!(large < medium && medium < small);
        assert_eq!((large, medium, small), (20, 50, 100));
    }

    #[test]
    fn test_fire_cooldown_rapid_fire_rounds_down() {
        let rules = GameRules::default();
        assert_eq!(rules.fire_cooldown(false), 15);
        assert_eq!(rules.fire_cooldown(true), 10);

        let odd = GameRules {
            bullet_cooldown_ticks: 16,
            ..Default::default()
        };
        // 16 / 1.5 = 10.67
        assert_eq!(odd.fire_cooldown(true), 10);
    }

    #[test]
    fn test_default_rules_validate() {
        assert!(GameRules::default().validate().is_ok());
    }

    #[test]
    fn test_negative_field_rejected() {
        let rules = GameRules {
            field_width: -800.0,
            ..Default::default()
        };
        assert!(matches!(
            rules.validate(),
            Err(ConfigError::InvalidField { .. })
        ));

        let rules = GameRules {
            field_height: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            rules.validate(),
            Err(ConfigError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let inverted_drop = GameRules {
            powerup_drop_min: 10,
            powerup_drop_max: 5,
            ..Default::default()
        };
        assert!(matches!(
            inverted_drop.validate(),
            Err(ConfigError::InvalidDropRange { min: 10, max: 5 })
        ));

        let zero_drop = GameRules {
            powerup_drop_min: 0,
            ..Default::default()
        };
        assert!(zero_drop.validate().is_err());

        let empty_speed = GameRules {
            asteroid_min_speed: 2.0,
            asteroid_max_speed: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            empty_speed.validate(),
            Err(ConfigError::InvalidSpeedRange { .. })
        ));

        let bad_drag = GameRules {
            ship_drag: 1.2,
            ..Default::default()
        };
        assert!(matches!(bad_drag.validate(), Err(ConfigError::InvalidDrag(_))));

        let nan_size = GameRules {
            ship_size: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan_size.validate(),
            Err(ConfigError::NonFinite { name: "ship_size", .. })
        ));

        let zero_asteroid = GameRules {
            asteroid_size_small: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            zero_asteroid.validate(),
            Err(ConfigError::NonPositive { .. })
        ));

        // Finite bounds whose span overflows.
        let wide_fragments = GameRules {
            fragment_max_axis_speed: 1e308,
            ..Default::default()
        };
        assert!(matches!(
            wide_fragments.validate(),
            Err(ConfigError::UnsampleableRange {
                name: "fragment_max_axis_speed",
                ..
            })
        ));

        // A non-negative minimum keeps the speed span within f64.
        let wide_speed = GameRules {
            asteroid_min_speed: 0.0,
            asteroid_max_speed: f64::MAX,
            ..Default::default()
        };
        assert!(wide_speed.validate().is_ok());

        let huge_but_sampleable = GameRules {
            fragment_max_axis_speed: 1e307,
            ..Default::default()
        };
        assert!(huge_but_sampleable.validate().is_ok());
    }

    #[test]
    fn test_rules_from_partial_toml() {
        let rules = GameRules::from_toml_str(
            r#"
            field_width = 1024.0
            field_height = 768.0
            asteroid_initial_count = 3
            "#,
        )
        .unwrap();

        assert_eq!(rules.field_width, 1024.0);
        assert_eq!(rules.field_height, 768.0);
        assert_eq!(rules.asteroid_initial_count, 3);
        // Everything else keeps its default.
        assert_eq!(rules.ship_drag, GameRules::default().ship_drag);
        assert_eq!(rules.powerup_duration_ticks, 1200);
    }

    #[test]
    fn test_rules_from_toml_validates() {
        let err = GameRules::from_toml_str("field_width = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField { .. }));

        let err = GameRules::from_toml_str("field_width = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_rules_file_is_io_error() {
        let err = GameRules::load("/nonexistent/destroyer-rules.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_display_table_covers_every_kind() {
        for (entry, kind) in POWERUP_DISPLAY.iter().zip(PowerUpKind::ALL) {
            assert_eq!(entry.kind, kind);
            assert_eq!(display_for(kind).kind, kind);
        }
        assert_eq!(display_for(PowerUpKind::RapidFire).label, 'R');
        assert_eq!(display_for(PowerUpKind::DoubleShot).name, "DOUBLE SHOT");
    }

    #[test]
    fn test_position_geometry() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);

        let end = a.project(0.0, 10.0);
        assert!((end.x - 10.0).abs() < 1e-12);
        assert!(end.y.abs() < 1e-12);

        let mut p = Position::new(1.0, 1.0);
        p.advance(&Velocity::new(2.0, -3.0));
        assert_eq!(p, Position::new(3.0, -2.0));
    }

    #[test]
    fn test_velocity_from_polar() {
        let v = Velocity::from_polar(std::f64::consts::FRAC_PI_2, 7.0);
        assert!(v.x.abs() < 1e-9);
        assert!((v.y - 7.0).abs() < 1e-9);
        assert!((v.speed() - 7.0).abs() < 1e-9);
        assert!((v.heading() - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Press {
                control: Control::Thrust,
            },
            PlayerCommand::Release {
                control: Control::RotateLeft,
            },
            PlayerCommand::Fire,
            PlayerCommand::Restart,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }

        let json = serde_json::to_string(&PlayerCommand::Fire).unwrap();
        assert_eq!(json, r#"{"type":"Fire"}"#);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = GameStateSnapshot {
            score: 170,
            phase: RunPhase::GameOver,
            events: vec![SimEvent::ShipDestroyed { final_score: 170 }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"GameOver\""));
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
