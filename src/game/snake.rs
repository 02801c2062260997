use super::direction::Direction;
use super::draw::{BORDER_COLOR, Canvas, Renderable, SNAKE_COLOR};
use super::grid::Position;

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub positions: Vec<Position>,
    /// Number of segments the body should have after the current tick
    pub length: usize,
    /// Current direction of movement
    pub direction: Direction,
    /// Turn requested since the last tick, applied on the next one
    pub pending_direction: Option<Direction>,
    /// Cell vacated by the last move, still to be erased from the screen
    pub last: Option<Position>,
}

impl Snake {
    /// Create a single-segment snake
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            positions: vec![head],
            length: 1,
            direction,
            pending_direction: None,
            last: None,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.positions[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.positions[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Check if any segment, head included, covers the position
    pub fn occupies(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Queue a turn for the next tick. Reversing onto the body is refused.
    ///
    /// Returns whether the turn was accepted.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Apply the queued turn, if any
    pub fn commit_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Lengthen the snake by one segment; the tail stays put on the next move
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Push a new head and drop the tail unless the snake is growing
    pub fn advance_to(&mut self, new_head: Position) {
        self.positions.insert(0, new_head);

        self.last = if self.positions.len() > self.length {
            self.positions.pop()
        } else {
            None
        };
    }

    /// Put the snake back to a single segment at `spawn`
    pub fn reset(&mut self, spawn: Position, direction: Direction) {
        self.positions.clear();
        self.positions.push(spawn);
        self.length = 1;
        self.direction = direction;
        self.pending_direction = None;
        self.last = None;
    }

    /// Get the number of segments
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Renderable for Snake {
    fn draw(&self, canvas: &mut dyn Canvas) {
        // Erase first: the head may have moved into the cell the tail just left
        if let Some(last) = self.last {
            canvas.clear_cell(last);
        }

        for &position in &self.positions {
            canvas.draw_cell(position, SNAKE_COLOR, BORDER_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::draw::testing::{CanvasCall, RecordingCanvas};

    fn snake_along_row(cells: &[(i32, i32)], direction: Direction) -> Snake {
        let positions: Vec<Position> = cells.iter().map(|&(x, y)| Position::new(x, y)).collect();
        Snake {
            length: positions.len(),
            positions,
            direction,
            pending_direction: None,
            last: None,
        }
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(320, 240), Direction::Right);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.length, 1);
        assert_eq!(snake.head(), Position::new(320, 240));
        assert!(snake.pending_direction.is_none());
        assert!(snake.last.is_none());
    }

    #[test]
    fn test_reverse_turn_rejected_for_every_direction() {
        for dir in Direction::ALL {
            let mut snake = Snake::new(Position::new(100, 100), dir);
            assert!(!snake.queue_direction(dir.opposite()));
            snake.commit_direction();
            assert_eq!(snake.direction, dir);
        }
    }

    #[test]
    fn test_turn_applied_on_commit() {
        let mut snake = Snake::new(Position::new(100, 100), Direction::Right);
        assert!(snake.queue_direction(Direction::Up));
        assert_eq!(snake.direction, Direction::Right);

        snake.commit_direction();
        assert_eq!(snake.direction, Direction::Up);
        assert!(snake.pending_direction.is_none());
    }

    #[test]
    fn test_last_accepted_turn_wins() {
        let mut snake = Snake::new(Position::new(100, 100), Direction::Right);
        snake.queue_direction(Direction::Up);
        // Checked against the current heading, not the queued one
        snake.queue_direction(Direction::Left);
        snake.queue_direction(Direction::Down);
        snake.commit_direction();
        assert_eq!(snake.direction, Direction::Down);
    }

    #[test]
    fn test_move_drops_tail() {
        let mut snake = Snake::new(Position::new(100, 100), Direction::Right);
        snake.advance_to(Position::new(120, 100));

        assert_eq!(snake.positions, vec![Position::new(120, 100)]);
        assert_eq!(snake.last, Some(Position::new(100, 100)));
    }

    #[test]
    fn test_growth_keeps_tail() {
        let mut snake = Snake::new(Position::new(100, 100), Direction::Right);
        snake.grow();
        snake.advance_to(Position::new(120, 100));

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.len(), snake.length);
        assert_eq!(snake.last, None);
        assert_eq!(snake.body_segments(), &[Position::new(100, 100)]);
    }

    #[test]
    fn test_collision_detection() {
        let snake = snake_along_row(&[(60, 20), (40, 20), (20, 20)], Direction::Right);
        assert!(!snake.collides_with_body(Position::new(60, 20))); // head
        assert!(snake.collides_with_body(Position::new(40, 20))); // body
        assert!(!snake.collides_with_body(Position::new(200, 200))); // empty
        assert!(snake.occupies(Position::new(60, 20)));
    }

    #[test]
    fn test_reset() {
        let mut snake = snake_along_row(&[(60, 20), (40, 20), (20, 20)], Direction::Right);
        snake.pending_direction = Some(Direction::Up);
        snake.last = Some(Position::new(0, 20));

        snake.reset(Position::new(320, 240), Direction::Left);

        assert_eq!(snake.positions, vec![Position::new(320, 240)]);
        assert_eq!(snake.length, 1);
        assert_eq!(snake.direction, Direction::Left);
        assert!(snake.pending_direction.is_none());
        assert!(snake.last.is_none());
    }

    #[test]
    fn test_draw_erases_before_painting() {
        let mut snake = snake_along_row(&[(40, 20), (20, 20)], Direction::Right);
        snake.last = Some(Position::new(0, 20));

        let mut canvas = RecordingCanvas::default();
        snake.draw(&mut canvas);

        assert_eq!(
            canvas.calls,
            vec![
                CanvasCall::Clear(Position::new(0, 20)),
                CanvasCall::Draw(Position::new(40, 20), SNAKE_COLOR, BORDER_COLOR),
                CanvasCall::Draw(Position::new(20, 20), SNAKE_COLOR, BORDER_COLOR),
            ]
        );
    }
}
