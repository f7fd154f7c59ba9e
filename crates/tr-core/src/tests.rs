//! Unit tests for tr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{TileId, TrainId};

    #[test]
    fn index_roundtrip() {
        let id = TileId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TileId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(TrainId(7).to_string(), "TrainId(7)");
    }
}

#[cfg(test)]
mod direction {
    use crate::{CoreError, Direction, TilePos};

    #[test]
    fn opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn opposite_pairs() {
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
    }

    #[test]
    fn between_horizontal_and_vertical() {
        let a = TilePos::new(2, 2);
        assert_eq!(
            Direction::between(a, TilePos::new(3, 2)).unwrap(),
            (Direction::Right, Direction::Left)
        );
        assert_eq!(
            Direction::between(a, TilePos::new(1, 2)).unwrap(),
            (Direction::Left, Direction::Right)
        );
        assert_eq!(
            Direction::between(a, TilePos::new(2, 3)).unwrap(),
            (Direction::Down, Direction::Up)
        );
        assert_eq!(
            Direction::between(a, TilePos::new(2, 1)).unwrap(),
            (Direction::Up, Direction::Down)
        );
    }

    #[test]
    fn between_rejects_diagonal_and_same_tile() {
        let a = TilePos::new(2, 2);
        let b = TilePos::new(3, 3);
        assert_eq!(
            Direction::between(a, b),
            Err(CoreError::NotAdjacent { from: a, to: b })
        );
        assert!(Direction::between(a, a).is_err());
        assert!(Direction::between(a, TilePos::new(4, 2)).is_err());
    }

    #[test]
    fn step_stops_at_zero() {
        let origin = TilePos::new(0, 0);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Right), Some(TilePos::new(1, 0)));
        assert_eq!(origin.step(Direction::Down), Some(TilePos::new(0, 1)));
    }
}

#[cfg(test)]
mod geometry {
    use crate::{Point, Vector};

    #[test]
    fn normalized_unit_length() {
        let v = Vector::new(3.0, 4.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!((v.dx - 0.6).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_normalizes_to_zero() {
        assert_eq!(Vector::ZERO.normalized(), Vector::ZERO);
        assert!(Vector::between(Point::new(5.0, 5.0), Point::new(5.0, 5.0)).normalized().is_zero());
    }

    #[test]
    fn truncate_drops_fraction() {
        assert_eq!(Point::new(10.99, 3.2).truncate(), (10, 3));
    }

    #[test]
    fn repeated_small_steps_do_not_drift() {
        let mut p = Point::new(0.0, 0.0);
        let step = Vector::new(1.0, 0.0);
        for _ in 0..10_000 {
            p = p.translate(step);
        }
        assert_eq!(p.truncate(), (10_000, 0));
    }
}

#[cfg(test)]
mod frame {
    use crate::Frame;

    #[test]
    fn frame_arithmetic() {
        let f = Frame(10);
        assert_eq!(f + 5, Frame(15));
        assert_eq!(f.offset(3), Frame(13));
        assert_eq!(f.next(), Frame(11));
        assert_eq!(Frame(15) - Frame(10), 5u64);
        assert_eq!(Frame(15).since(Frame(10)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Frame(3).to_string(), "F3");
    }
}

#[cfg(test)]
mod config {
    use crate::{GameConfig, TilePos};

    #[test]
    fn default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let mut cfg = GameConfig::default();
        cfg.map_width = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = GameConfig::default();
        cfg.train_step = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = GameConfig::default();
        cfg.spawn_min_frames = 10;
        cfg.spawn_max_frames = 5;
        assert!(cfg.validate().is_err());

        let mut cfg = GameConfig::default();
        cfg.max_active_trains = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn tile_center() {
        let cfg = GameConfig::default();
        let c = cfg.tile_center(TilePos::new(2, 3));
        assert_eq!((c.x, c.y), (125.0, 175.0));
    }

    #[test]
    fn tile_at_pixel() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.tile_at_pixel(1, 1).unwrap(), TilePos::new(0, 0));
        assert_eq!(cfg.tile_at_pixel(50, 50).unwrap(), TilePos::new(0, 0));
        assert_eq!(cfg.tile_at_pixel(51, 101).unwrap(), TilePos::new(1, 2));
        assert!(cfg.tile_at_pixel(0, 10).is_err());
        assert!(cfg.tile_at_pixel(501, 10).is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{Color, GameRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = GameRng::new(12345);
        let mut r2 = GameRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1000);
            let b: u32 = r2.gen_range(0..1000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn choose_from_empty_is_none() {
        let mut rng = GameRng::new(0);
        let empty: [Color; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert!(rng.choose(&Color::ALL).is_some());
    }

    #[test]
    fn resumed_streams_differ_by_offset() {
        let mut a = GameRng::resumed(7, 1);
        let mut b = GameRng::resumed(7, 2);
        let x: u64 = a.gen_range(0..u64::MAX);
        let y: u64 = b.gen_range(0..u64::MAX);
        assert_ne!(x, y);
    }
}

#[cfg(test)]
mod color {
    use crate::Color;

    #[test]
    fn palette_is_distinct() {
        for (i, a) in Color::ALL.iter().enumerate() {
            for b in &Color::ALL[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.rgb(), b.rgb());
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(Color::Red.to_string(), "red");
    }
}
