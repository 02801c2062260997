use rand::Rng;

use super::config::GameConfig;
use super::draw::{APPLE_COLOR, Canvas, Renderable};
use super::grid::{Position, cell_position};

/// The food the snake is chasing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub position: Position,
}

impl Apple {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Place a fresh apple on a random cell not listed in `occupied`.
    ///
    /// Returns `None` when every cell is taken.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        occupied: &[Position],
        config: &GameConfig,
    ) -> Option<Self> {
        let mut apple = Self::new(Position::new(0, 0));
        apple.randomize_position(rng, occupied, config).then_some(apple)
    }

    /// Re-roll the apple onto a random free cell.
    ///
    /// Draws cells until one is not occupied, which terminates as long as a
    /// free cell exists. If the field is full the apple is left untouched and
    /// `false` is returned.
    pub fn randomize_position<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        occupied: &[Position],
        config: &GameConfig,
    ) -> bool {
        if occupied.len() >= config.cell_count() {
            return false;
        }

        loop {
            let pos = cell_position(
                rng.gen_range(0..config.columns()),
                rng.gen_range(0..config.rows()),
                config.cell_size,
            );

            if !occupied.contains(&pos) {
                self.position = pos;
                return true;
            }
        }
    }
}

impl Renderable for Apple {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_cell(self.position, APPLE_COLOR, APPLE_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::draw::testing::{CanvasCall, RecordingCanvas};
    use crate::game::grid::in_bounds;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_spawn_is_grid_aligned_and_in_bounds() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..500 {
            let apple = Apple::spawn(&mut rng, &[], &config).unwrap();
            assert!(in_bounds(apple.position, config.field_width, config.field_height));
            assert_eq!(apple.position.x % config.cell_size, 0);
            assert_eq!(apple.position.y % config.cell_size, 0);
        }
    }

    #[test]
    fn test_avoids_occupied_cells() {
        let config = GameConfig::small();
        let mut rng = StdRng::seed_from_u64(3);

        // Everything but one cell is taken
        let free = Position::new(180, 180);
        let occupied: Vec<Position> = (0..config.rows())
            .flat_map(|row| (0..config.columns()).map(move |col| (col, row)))
            .map(|(col, row)| cell_position(col, row, config.cell_size))
            .filter(|&pos| pos != free)
            .collect();

        let mut apple = Apple::new(Position::new(0, 0));
        assert!(apple.randomize_position(&mut rng, &occupied, &config));
        assert_eq!(apple.position, free);
    }

    #[test]
    fn test_full_field_leaves_apple_in_place() {
        let config = GameConfig::small();
        let mut rng = StdRng::seed_from_u64(5);
        let occupied: Vec<Position> = (0..config.rows())
            .flat_map(|row| (0..config.columns()).map(move |col| (col, row)))
            .map(|(col, row)| cell_position(col, row, config.cell_size))
            .collect();

        let mut apple = Apple::new(Position::new(40, 40));
        assert!(!apple.randomize_position(&mut rng, &occupied, &config));
        assert_eq!(apple.position, Position::new(40, 40));
        assert!(Apple::spawn(&mut rng, &occupied, &config).is_none());
    }

    #[test]
    fn test_draw() {
        let apple = Apple::new(Position::new(60, 80));
        let mut canvas = RecordingCanvas::default();
        apple.draw(&mut canvas);
        assert_eq!(
            canvas.calls,
            vec![CanvasCall::Draw(Position::new(60, 80), APPLE_COLOR, APPLE_COLOR)]
        );
    }
}
