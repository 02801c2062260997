//! Grid geometry: positions, stepping and the two boundary policies.

use serde::{Deserialize, Serialize};

use super::config::{BoundaryPolicy, GameConfig};
use super::direction::Direction;

/// A grid-aligned position on the playing field, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction, without any boundary handling
    pub fn moved_in_direction(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * cell_size, dy * cell_size)
    }

    /// Column and row of the cell this position starts
    pub fn cell_index(&self, cell_size: i32) -> (i32, i32) {
        (self.x.div_euclid(cell_size), self.y.div_euclid(cell_size))
    }
}

/// Fold a position back onto a toroidal field
pub fn wrap(pos: Position, width: i32, height: i32) -> Position {
    Position::new(pos.x.rem_euclid(width), pos.y.rem_euclid(height))
}

/// Check if a position lies within `[0, width) x [0, height)`
pub fn in_bounds(pos: Position, width: i32, height: i32) -> bool {
    pos.x >= 0 && pos.x < width && pos.y >= 0 && pos.y < height
}

/// Next head position under the configured boundary policy.
///
/// Returns `None` when the walls policy is active and the step would leave the
/// field; the caller treats that as a wall collision.
pub fn advance(pos: Position, direction: Direction, config: &GameConfig) -> Option<Position> {
    let next = pos.moved_in_direction(direction, config.cell_size);
    match config.boundary {
        BoundaryPolicy::Wrap => Some(wrap(next, config.field_width, config.field_height)),
        BoundaryPolicy::Walls => {
            in_bounds(next, config.field_width, config.field_height).then_some(next)
        }
    }
}

/// Position of the cell at `(column, row)`
pub fn cell_position(column: i32, row: i32, cell_size: i32) -> Position {
    Position::new(column * cell_size, row * cell_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walls() -> GameConfig {
        GameConfig {
            boundary: BoundaryPolicy::Walls,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(100, 100);
        assert_eq!(
            pos.moved_in_direction(Direction::Right, 20),
            Position::new(120, 100)
        );
        assert_eq!(
            pos.moved_in_direction(Direction::Left, 20),
            Position::new(80, 100)
        );
        assert_eq!(
            pos.moved_in_direction(Direction::Up, 20),
            Position::new(100, 80)
        );
        assert_eq!(
            pos.moved_in_direction(Direction::Down, 20),
            Position::new(100, 120)
        );
    }

    #[test]
    fn test_wrap_right_edge() {
        let config = GameConfig::default();
        let head = Position::new(config.field_width - config.cell_size, 100);
        assert_eq!(
            advance(head, Direction::Right, &config),
            Some(Position::new(0, 100))
        );
    }

    #[test]
    fn test_wrap_all_edges() {
        let config = GameConfig::default();
        let (w, h, c) = (config.field_width, config.field_height, config.cell_size);

        assert_eq!(
            advance(Position::new(0, 40), Direction::Left, &config),
            Some(Position::new(w - c, 40))
        );
        assert_eq!(
            advance(Position::new(40, 0), Direction::Up, &config),
            Some(Position::new(40, h - c))
        );
        assert_eq!(
            advance(Position::new(40, h - c), Direction::Down, &config),
            Some(Position::new(40, 0))
        );
    }

    #[test]
    fn test_walls_reject_every_edge() {
        let config = walls();
        let (w, h, c) = (config.field_width, config.field_height, config.cell_size);

        assert_eq!(advance(Position::new(0, 40), Direction::Left, &config), None);
        assert_eq!(advance(Position::new(40, 0), Direction::Up, &config), None);
        assert_eq!(
            advance(Position::new(w - c, 40), Direction::Right, &config),
            None
        );
        assert_eq!(
            advance(Position::new(40, h - c), Direction::Down, &config),
            None
        );
    }

    #[test]
    fn test_walls_allow_interior_moves() {
        let config = walls();
        assert_eq!(
            advance(Position::new(0, 40), Direction::Right, &config),
            Some(Position::new(20, 40))
        );
    }

    #[test]
    fn test_bounds_checking() {
        assert!(in_bounds(Position::new(0, 0), 640, 480));
        assert!(in_bounds(Position::new(620, 460), 640, 480));
        assert!(!in_bounds(Position::new(-20, 0), 640, 480));
        assert!(!in_bounds(Position::new(640, 0), 640, 480));
        assert!(!in_bounds(Position::new(0, 480), 640, 480));
        assert!(!in_bounds(Position::new(0, -20), 640, 480));
    }

    #[test]
    fn test_cell_index_round_trips() {
        let pos = cell_position(7, 3, 20);
        assert_eq!(pos, Position::new(140, 60));
        assert_eq!(pos.cell_index(20), (7, 3));
    }
}
