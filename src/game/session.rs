//! One game session: the state, the engine and the per-tick pipeline.

use anyhow::{Result, anyhow};
use log::{debug, info};

use super::config::GameConfig;
use super::direction::Direction;
use super::draw::{Canvas, Renderable};
use super::engine::{GameEngine, GameState, StepResult};

/// Discrete input the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Player asked to turn
    Direction(Direction),
    /// Player asked to leave
    Quit,
}

/// What the loop should do after a tick
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// The simulation advanced
    Stepped(StepResult),
    /// A quit event arrived; the tick was not simulated
    Quit,
}

/// Owns everything a running game needs
pub struct Session {
    engine: GameEngine,
    state: GameState,
}

impl Session {
    /// Start a session; the config is validated first
    pub fn new(config: GameConfig) -> Result<Self> {
        validated(&config)?;
        Ok(Self::from_engine(GameEngine::new(config)))
    }

    /// Session with reproducible randomness
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        validated(&config)?;
        Ok(Self::from_engine(GameEngine::with_seed(config, seed)))
    }

    fn from_engine(mut engine: GameEngine) -> Self {
        let state = engine.new_game();
        info!(
            "new session: spawn {:?} heading {:?}, apple at {:?}",
            state.snake.head(),
            state.snake.direction,
            state.apple.position
        );
        Self { engine, state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    /// Feed one input event; only the queued direction can change
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Direction(direction) => {
                if !self.state.snake.queue_direction(direction) {
                    debug!("ignored reverse turn to {:?}", direction);
                }
                true
            }
            InputEvent::Quit => false,
        }
    }

    /// Run one full tick: input, movement, collision, then drawing.
    pub fn run_tick<I>(&mut self, events: I, canvas: &mut dyn Canvas) -> TickOutcome
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if !self.handle_input(event) {
                info!("quit after {} ticks", self.state.ticks);
                return TickOutcome::Quit;
            }
        }

        let result = self.engine.step(&mut self.state);

        if let Some(cause) = result.reset {
            info!(
                "reset after {:?} at length {}, respawn heading {:?}",
                cause, result.length, self.state.snake.direction
            );
            canvas.clear();
        } else if result.ate_apple {
            debug!(
                "apple eaten, length {}, next apple at {:?}",
                result.length, self.state.apple.position
            );
        }

        self.draw(canvas);
        TickOutcome::Stepped(result)
    }

    /// Draw both entities
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.state.snake.draw(canvas);
        self.state.apple.draw(canvas);
    }

    /// Wipe the canvas and paint the current state from scratch
    pub fn redraw(&self, canvas: &mut dyn Canvas) {
        canvas.clear();
        self.draw(canvas);
    }
}

fn validated(config: &GameConfig) -> Result<()> {
    config
        .validate()
        .map_err(|err| anyhow!("Invalid game configuration: {}", err))
}
