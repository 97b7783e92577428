//! Toroidal field geometry.

use destroyer_core::config::GameRules;
use destroyer_core::types::Position;

/// Fold `coord` back into `[0, extent)`.
///
/// Anything that left through one edge re-enters through the opposite one.
pub fn wrap(coord: f64, extent: f64) -> f64 {
    let wrapped = coord.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs.
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Wrap both axes of `pos` into the field.
pub fn wrap_position(pos: &mut Position, rules: &GameRules) {
    pos.x = wrap(pos.x, rules.field_width);
    pos.y = wrap(pos.y, rules.field_height);
}

/// Whether `pos` lies inside the closed field rectangle `[0, W] x [0, H]`.
pub fn contains(pos: &Position, rules: &GameRules) -> bool {
    (0.0..=rules.field_width).contains(&pos.x) && (0.0..=rules.field_height).contains(&pos.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_inside_is_identity() {
        assert_eq!(wrap(0.0, 800.0), 0.0);
        assert_eq!(wrap(399.5, 800.0), 399.5);
    }

    #[test]
    fn test_wrap_crosses_edges() {
        assert_eq!(wrap(800.0, 800.0), 0.0);
        assert_eq!(wrap(803.0, 800.0), 3.0);
        assert_eq!(wrap(-2.0, 800.0), 798.0);
        assert_eq!(wrap(-30.0, 600.0), 570.0);
    }

    #[test]
    fn test_wrap_tiny_negative_stays_in_range() {
        let w = wrap(-1e-18, 800.0);
        assert!((0.0..800.0).contains(&w), "wrapped to {w}");
    }

    #[test]
    fn test_contains_is_closed() {
        let rules = GameRules::default();
        assert!(contains(&Position::new(0.0, 0.0), &rules));
        assert!(contains(&Position::new(800.0, 600.0), &rules));
        assert!(!contains(&Position::new(800.1, 10.0), &rules));
        assert!(!contains(&Position::new(10.0, -0.1), &rules));
    }
}
