use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{
    apple::Apple,
    config::{GameConfig, ResetDirection},
    direction::Direction,
    grid,
    snake::Snake,
};

/// Why a round ended and the snake respawned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    /// Snake hit the edge of a walled field
    Wall,
    /// Snake ran into its own body
    SelfCollision,
    /// Snake covers every cell, there is nowhere left for the apple
    BoardFull,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the snake ate the apple this step
    pub ate_apple: bool,
    /// Set when the step ended the round
    pub reset: Option<ResetCause>,
    /// Length reached before a reset, or the current length otherwise
    pub length: usize,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    /// Ticks simulated since the session started
    pub ticks: u64,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine seeded from the OS
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine with reproducible apple placement and respawns
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the initial state: single-segment snake at the spawn cell.
    ///
    /// The config must have passed [`GameConfig::validate`], which guarantees
    /// a free cell for the apple; [`crate::game::Session`] checks this.
    pub fn new_game(&mut self) -> GameState {
        let spawn = self.config.spawn_position();
        let snake = Snake::new(spawn, self.respawn_direction());

        let apple = Apple::spawn(&mut self.rng, &snake.positions, &self.config)
            .unwrap_or_else(|| Apple::new(spawn));

        GameState {
            snake,
            apple,
            ticks: 0,
        }
    }

    /// Execute one tick of the game
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        state.ticks += 1;
        state.snake.commit_direction();

        // Calculate new head position; None means the snake left a walled field
        let Some(new_head) = grid::advance(state.snake.head(), state.snake.direction, &self.config)
        else {
            return self.reset(state, ResetCause::Wall);
        };

        let ate_apple = new_head == state.apple.position;
        if ate_apple {
            state.snake.grow();
        }

        state.snake.advance_to(new_head);

        if ate_apple {
            if !state
                .apple
                .randomize_position(&mut self.rng, &state.snake.positions, &self.config)
            {
                return self.reset(state, ResetCause::BoardFull);
            }
        } else if state.snake.collides_with_body(new_head) {
            return self.reset(state, ResetCause::SelfCollision);
        }

        StepResult {
            ate_apple,
            reset: None,
            length: state.snake.length,
        }
    }

    /// Respawn the snake and re-roll the apple
    pub fn reset(&mut self, state: &mut GameState, cause: ResetCause) -> StepResult {
        let length = state.snake.length;
        let direction = self.respawn_direction();

        state.snake.reset(self.config.spawn_position(), direction);
        state
            .apple
            .randomize_position(&mut self.rng, &state.snake.positions, &self.config);

        StepResult {
            ate_apple: false,
            reset: Some(cause),
            length,
        }
    }

    fn respawn_direction(&mut self) -> Direction {
        match self.config.reset_direction {
            ResetDirection::Fixed(direction) => direction,
            ResetDirection::Random => Direction::random(&mut self.rng),
        }
    }
}
