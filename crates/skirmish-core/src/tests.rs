#[cfg(test)]
mod tests {
    use crate::config::CombatConfig;
    use crate::enums::*;
    use crate::types::{Path, Position, UnitId};
    use crate::world::{Hostile, Obstacle, WalkGrid, Weapon, WorldSnapshot};

    // ---- Distance metric ----

    #[test]
    fn test_distance_symmetric() {
        let a = Position::new(3, -7);
        let b = Position::new(-12, 20);
        assert_eq!(a.distance_to(b), b.distance_to(a));
    }

    #[test]
    fn test_distance_zero_only_at_self() {
        let a = Position::new(5, 5);
        assert_eq!(a.distance_to(a), 0);
        // Adjacent diagonal truncates to 1, never 0.
        assert_eq!(a.distance_to(Position::new(6, 6)), 1);
    }

    #[test]
    fn test_distance_floor_truncated() {
        let origin = Position::ZERO;
        // 3-4-5 triangle is exact.
        assert_eq!(origin.distance_to(Position::new(3, 4)), 5);
        // sqrt(2) ~ 1.41 truncates to 1.
        assert_eq!(origin.distance_to(Position::new(1, 1)), 1);
        // sqrt(8) ~ 2.83 truncates to 2.
        assert_eq!(origin.distance_to(Position::new(2, 2)), 2);
    }

    // ---- Tier ranking ----

    #[test]
    fn test_tier_rank_order() {
        let tiers = [
            HostileTier::SuperUnique,
            HostileTier::Unique,
            HostileTier::Minion,
            HostileTier::Champion,
            HostileTier::Generic,
            HostileTier::Unknown,
        ];
        for pair in tiers.windows(2) {
            assert!(
                pair[0].rank() < pair[1].rank(),
                "{:?} should outrank {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    // ---- Walkability grid ----

    #[test]
    fn test_grid_respects_origin_offset() {
        let mut grid = WalkGrid::open(Position::new(100, 200), 10, 10);
        assert!(grid.is_walkable(Position::new(100, 200)));
        assert!(grid.is_walkable(Position::new(109, 209)));

        grid.set_blocked(Position::new(105, 205), true);
        assert!(!grid.is_walkable(Position::new(105, 205)));
    }

    #[test]
    fn test_grid_out_of_bounds_not_walkable() {
        let grid = WalkGrid::open(Position::new(0, 0), 5, 5);
        assert!(!grid.is_walkable(Position::new(-1, 0)));
        assert!(!grid.is_walkable(Position::new(5, 0)));
        assert!(!grid.is_walkable(Position::new(2, 17)));
        assert!(!grid.contains(Position::new(5, 5)));
    }

    // ---- Path ----

    #[test]
    fn test_path_endpoints() {
        let path = Path::new(vec![
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(3, 0),
        ]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.start(), Some(Position::new(1, 0)));
        assert_eq!(path.end(), Some(Position::new(3, 0)));
        assert!(Path::default().is_empty());
    }

    // ---- Snapshot views ----

    #[test]
    fn test_hostile_lookup_and_liveness() {
        let snapshot = WorldSnapshot {
            hostiles: vec![
                Hostile {
                    id: UnitId(1),
                    life: 40,
                    ..Default::default()
                },
                Hostile {
                    id: UnitId(2),
                    life: 0,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert!(snapshot.hostile_by_id(UnitId(2)).is_some());
        assert!(snapshot.hostile_by_id(UnitId(3)).is_none());
        let living: Vec<_> = snapshot.living_hostiles().map(|h| h.id).collect();
        assert_eq!(living, vec![UnitId(1)]);
    }

    #[test]
    fn test_weapon_offensive_stats() {
        let wand = Weapon::default();
        assert!(!wand.is_offensive());
        let sword = Weapon {
            min_damage: 3,
            max_damage: 9,
            ..Default::default()
        };
        assert!(sword.is_offensive());
    }

    #[test]
    fn test_door_blocks_like_any_collidable() {
        let door = Obstacle {
            door: true,
            selectable: true,
            ..Default::default()
        };
        let rubble = Obstacle {
            has_collision: true,
            ..Default::default()
        };
        let decoration = Obstacle::default();
        assert!(door.blocks_path());
        assert!(rubble.blocks_path());
        assert!(!decoration.blocks_path());
    }

    // ---- Serde ----

    #[test]
    fn test_tier_serde() {
        let variants = vec![
            HostileTier::SuperUnique,
            HostileTier::Unique,
            HostileTier::Minion,
            HostileTier::Champion,
            HostileTier::Generic,
            HostileTier::Unknown,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: HostileTier = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_binding_serde() {
        let variants = vec![
            Binding::ForceMove,
            Binding::StandStill,
            Binding::SelectSkill(SkillId::Rush),
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: Binding = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    // ---- Config ----

    #[test]
    fn test_config_defaults() {
        let config = CombatConfig::default();
        assert_eq!(config.rotation, RotationKind::Bolt);
        assert!(!config.use_teleport);
        assert!(config.skip_on_immunities.is_empty());
    }

    #[test]
    fn test_config_partial_json() {
        let config =
            CombatConfig::from_json(r#"{"rotation":"Strike","use_teleport":true}"#).unwrap();
        assert_eq!(config.rotation, RotationKind::Strike);
        assert!(config.use_teleport);
        // Unspecified fields fall back to defaults.
        assert!(!config.use_rush_movement);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        assert!(CombatConfig::from_json("{rotation}").is_err());
    }
}
